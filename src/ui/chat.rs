//! Support chat screen rendering

use super::components::theme::{self, BORDER_TYPE, CARD_BACKGROUND};
use super::widgets::wrap_text;
use crate::app::App;
use crate::state::ChatMessage;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Columns kept free on the far side of each bubble
const BUBBLE_MARGIN: u16 = 12;

/// Draw the support chat screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = split(area);

    draw_header(frame, chunks[0], app);
    draw_messages(frame, messages_area(chunks[1]), app);
    draw_input_bar(frame, chunks[2], app);
}

fn split(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Messages
            Constraint::Length(3), // Input bar
        ])
        .split(area)
}

/// Message column inset one cell on each side
fn messages_area(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    }
}

/// Furthest the transcript can scroll up when the chat screen fills `area`
pub fn max_scroll(app: &App, area: Rect) -> usize {
    let inner = messages_area(split(area)[1]);
    transcript_lines(app, inner.width)
        .len()
        .saturating_sub(inner.height as usize)
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let online = app.desk.is_online();
    let (dot_color, status) = if online {
        (Color::Green, "Online")
    } else {
        (theme::SECONDARY, "Offline")
    };

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(10)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(" ● ", Style::default().fg(dot_color)),
        Span::styled(
            app.state.support_agent_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    let style = Style::default().bg(CARD_BACKGROUND);
    frame.render_widget(Paragraph::new(title).style(style), halves[0]);
    frame.render_widget(
        Paragraph::new(format!("{status} "))
            .style(style.fg(theme::SECONDARY))
            .alignment(Alignment::Right),
        halves[1],
    );
}

/// Lines for one bubble: the wrapped text followed by its timestamp
pub fn bubble_lines(
    message: &ChatMessage,
    width: u16,
    timestamp_format: &str,
) -> Vec<Line<'static>> {
    let max_text = width.saturating_sub(BUBBLE_MARGIN + 2).max(8) as usize;
    let (alignment, bubble_style) = if message.is_from_support {
        (Alignment::Left, Style::default().bg(CARD_BACKGROUND))
    } else {
        (
            Alignment::Right,
            Style::default()
                .bg(theme::ACCENT_GRADIENT[1])
                .fg(Color::White),
        )
    };

    let mut lines: Vec<Line<'static>> = wrap_text(&message.text, max_text)
        .into_iter()
        .map(|text| {
            Line::from(Span::styled(format!(" {text} "), bubble_style)).alignment(alignment)
        })
        .collect();

    lines.push(
        Line::from(Span::styled(
            message.timestamp_label(timestamp_format),
            Style::default().fg(theme::SECONDARY),
        ))
        .alignment(alignment),
    );
    lines
}

/// First visible line given total content height, view height and how far the
/// user scrolled up from the bottom
pub fn visible_top(total: usize, height: usize, scroll_offset: usize) -> usize {
    let max_scroll = total.saturating_sub(height);
    max_scroll - scroll_offset.min(max_scroll)
}

/// Every bubble line, with a blank line between messages
fn transcript_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in &app.state.transcript.messages {
        lines.extend(bubble_lines(message, width, &app.state.timestamp_format));
        lines.push(Line::from(""));
    }
    lines.pop();
    lines
}

fn draw_messages(frame: &mut Frame, inner: Rect, app: &App) {
    if app.state.transcript.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No messages yet",
            Style::default().fg(theme::SECONDARY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let lines = transcript_lines(app, inner.width);
    let top = visible_top(
        lines.len(),
        inner.height as usize,
        app.state.transcript.scroll_offset,
    );
    let top = u16::try_from(top).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((top, 0)), inner);
}

fn draw_input_bar(frame: &mut Frame, area: Rect, app: &App) {
    let draft = &app.state.composer.draft;
    let content = if draft.is_empty() {
        Line::from(vec![
            Span::styled("▌", Style::default().fg(theme::FOCUS)),
            Span::styled("Type a message...", Style::default().fg(theme::SECONDARY)),
        ])
    } else {
        Line::from(vec![
            Span::raw(draft.clone()),
            Span::styled("▌", Style::default().fg(theme::FOCUS)),
        ])
    };

    let send_style = if draft.trim().is_empty() {
        Style::default().fg(theme::SECONDARY)
    } else {
        Style::default()
            .fg(theme::ACCENT_GRADIENT[1])
            .add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BORDER_TYPE)
        .border_style(theme::border_style(true))
        .title_bottom(Line::from(Span::styled(" ⬆ ", send_style)).right_aligned());

    frame.render_widget(Paragraph::new(content).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkshopConfig;
    use crate::state::View;
    use crate::support::ScriptedSupportDesk;
    use crate::ui::widgets::buffer_text;
    use chrono::{Local, TimeZone};
    use ratatui::{backend::TestBackend, Terminal};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_support_bubble_is_left_aligned() {
        let mut message = ChatMessage::from_support("Hello there");
        message.sent_at = Local.with_ymd_and_hms(2026, 2, 9, 9, 5, 0).unwrap();

        let lines = bubble_lines(&message, 60, "%-I:%M %p");
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[0]), " Hello there ");
        assert_eq!(lines[0].alignment, Some(Alignment::Left));
        assert_eq!(line_text(&lines[1]), "9:05 AM");
    }

    #[test]
    fn test_user_bubble_is_right_aligned_and_wrapped() {
        let message = ChatMessage::from_user("one two three four five six seven");
        let lines = bubble_lines(&message, 24, "%H:%M");
        // 24 - 12 - 2 = 10 chars per line
        assert_eq!(line_text(&lines[0]), " one two ");
        assert!(lines.len() > 3);
        assert!(lines.iter().all(|l| l.alignment == Some(Alignment::Right)));
    }

    #[test]
    fn test_visible_top() {
        assert_eq!(visible_top(5, 10, 0), 0);
        assert_eq!(visible_top(30, 10, 0), 20);
        assert_eq!(visible_top(30, 10, 5), 15);
        assert_eq!(visible_top(30, 10, 500), 0);
    }

    #[test]
    fn test_scrolling_back_down_after_overscroll_moves_view() {
        let mut app = App::new(
            &WorkshopConfig::default(),
            Box::new(ScriptedSupportDesk::new()),
        );
        let area = Rect::new(0, 0, 40, 14);
        let max = max_scroll(&app, area);
        assert!(max > 1);
        app.state.transcript.set_max_scroll(max);

        for _ in 0..50 {
            app.state.transcript.scroll_up();
        }
        let lines = transcript_lines(&app, messages_area(split(area)[1]).width).len();
        let height = messages_area(split(area)[1]).height as usize;
        let top_before = visible_top(lines, height, app.state.transcript.scroll_offset);
        assert_eq!(top_before, 0);

        app.state.transcript.scroll_down();
        let top_after = visible_top(lines, height, app.state.transcript.scroll_offset);
        assert_eq!(top_after, 1);
    }

    #[test]
    fn test_chat_screen_renders() {
        let mut app = App::new(
            &WorkshopConfig::default(),
            Box::new(ScriptedSupportDesk::new()),
        );
        app.state.current_view = View::SupportChat;

        let mut terminal = Terminal::new(TestBackend::new(80, 60)).unwrap();
        terminal.draw(|f| draw(f, f.area(), &app)).unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("Support"));
        assert!(text.contains("Online"));
        assert!(text.contains("Sure, it's john@example.com"));
        assert!(text.contains("Type a message..."));
    }

    #[test]
    fn test_empty_transcript_placeholder() {
        let mut app = App::new(
            &WorkshopConfig::default(),
            Box::new(ScriptedSupportDesk::new()),
        );
        app.state.transcript.messages.clear();

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| draw(f, f.area(), &app)).unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("No messages yet"));
    }
}
