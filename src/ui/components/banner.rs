//! Error banner component

use super::theme::{self, BORDER_TYPE, ERROR_GRADIENT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Banner height in rows (top border + message + bottom border)
pub const BANNER_HEIGHT: u16 = 3;

/// Warning glyph shown before the message
const WARNING_ICON: &str = "⚠";

/// Render a full-width banner with a warning glyph and the message
pub fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let [start, end] = ERROR_GRADIENT;
    let mid = theme::lerp_color(start, end, 0.5);

    let line = Line::from(vec![
        Span::styled(
            format!("{WARNING_ICON} "),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message.to_string(), Style::default().fg(Color::White)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BORDER_TYPE)
        .border_style(Style::default().fg(end))
        .style(Style::default().bg(mid));

    frame.render_widget(
        Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}
