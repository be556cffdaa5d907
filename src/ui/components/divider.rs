//! Branded divider component

use super::theme::SECONDARY;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Horizontal rule with a short label in the middle, e.g. `──── or ────`
pub fn divider_line(text: &str, width: u16) -> Line<'static> {
    let label = format!(" {text} ");
    let label_width = label.chars().count() as u16;
    let rule = width.saturating_sub(label_width);
    let left = rule / 2;
    let right = rule - left;

    Line::from(vec![
        Span::styled("─".repeat(left as usize), Style::default().fg(SECONDARY)),
        Span::styled(label, Style::default().fg(SECONDARY)),
        Span::styled("─".repeat(right as usize), Style::default().fg(SECONDARY)),
    ])
}

pub fn render_branded_divider(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(Paragraph::new(divider_line(text, area.width)), area);
}
