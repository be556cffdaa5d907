//! About screen rendering

use super::components::theme;
use super::widgets::{centered_column, render_scrollable_list};
use crate::app::App;
use crate::state::about::{AboutRow, APP_NAME, APP_VERSION, FOOTER, SECTIONS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

const CONTENT_MAX_WIDTH: u16 = 56;

/// Draw the About screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let column = centered_column(area, CONTENT_MAX_WIDTH, theme::HORIZONTAL_PADDING);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // App header
            Constraint::Min(0),    // Sections
            Constraint::Length(1), // Footer
        ])
        .split(column);

    let header = vec![
        Line::from(""),
        Line::from(Span::styled("▣", Style::default().fg(theme::ACCENT_GRADIENT[1]))),
        Line::from(Span::styled(
            APP_NAME,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(APP_VERSION, Style::default().fg(theme::SECONDARY))),
    ];
    frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), chunks[0]);

    let list = List::new(section_items())
        .highlight_style(
            Style::default()
                .bg(theme::CARD_BACKGROUND)
                .fg(theme::FOCUS)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");
    render_scrollable_list(
        frame,
        chunks[1],
        list,
        list_index(app.state.about.selected_index),
    );

    let footer = Paragraph::new(Span::styled(FOOTER, Style::default().fg(theme::SECONDARY)))
        .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[2]);
}

/// List items for every section: a header line followed by its rows
fn section_items() -> Vec<ListItem<'static>> {
    let mut items = Vec::new();
    for (i, section) in SECTIONS.iter().enumerate() {
        let mut lines = Vec::new();
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            section.title.to_uppercase(),
            Style::default().fg(theme::SECONDARY),
        )));
        items.push(ListItem::new(lines));
        items.extend(section.rows.iter().map(row_item));
    }
    items
}

fn row_item(row: &AboutRow) -> ListItem<'static> {
    let line = match row {
        AboutRow::Link { icon, label } => Line::from(vec![
            Span::styled(format!("{icon:>3} "), Style::default().fg(Color::Blue)),
            Span::raw(*label),
        ]),
        AboutRow::Member { name, role } => Line::from(vec![
            Span::styled("  ● ", Style::default().fg(Color::Blue)),
            Span::raw(*name),
            Span::styled(format!("  {role}"), Style::default().fg(theme::SECONDARY)),
        ]),
    };
    ListItem::new(line)
}

/// Map a selectable row index to its position in the list, skipping section headers
pub fn list_index(row_index: usize) -> usize {
    let mut remaining = row_index;
    let mut offset = 0;
    for section in SECTIONS {
        offset += 1;
        if remaining < section.rows.len() {
            return offset + remaining;
        }
        remaining -= section.rows.len();
        offset += section.rows.len();
    }
    offset.saturating_sub(1)
}
