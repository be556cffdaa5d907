//! Layout components (title bar, status bar)

use super::components::theme;
use crate::app::App;
use crate::platform::{COPY_REPLY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into title bar, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the title bar with the current screen name
pub fn draw_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    let can_go_back = app.state.view_history.iter().any(|v| !v.is_form_view());
    if can_go_back {
        spans.push(Span::styled(" ‹ ", Style::default().fg(theme::SECONDARY)));
    } else {
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        app.state.current_view.title(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Login => format!("Tab:next  Enter:select  {SUBMIT_SHORTCUT}:sign in"),
        View::SupportChat => format!(
            "Enter:send  ↑/↓:scroll  ^A:about  {COPY_REPLY_SHORTCUT}:copy reply  ^O:sign out"
        ),
        View::About => "j/k:nav  Enter:open  Esc:back".to_string(),
    }
}
