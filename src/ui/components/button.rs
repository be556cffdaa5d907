//! Button components

use super::theme::{self, ACCENT_GRADIENT, BORDER_TYPE, CARD_BACKGROUND};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Full-width call to action with the accent gradient label
pub fn render_primary_button(frame: &mut Frame, area: Rect, title: &str, is_focused: bool) {
    let modifier = if is_focused {
        Modifier::BOLD | Modifier::REVERSED
    } else {
        Modifier::BOLD
    };
    let label = theme::gradient_line(title, ACCENT_GRADIENT, modifier);

    let border_style = if is_focused {
        theme::border_style(true)
    } else {
        Style::default().fg(ACCENT_GRADIENT[0])
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BORDER_TYPE)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

/// Secondary button with an icon and a label on the card background
pub fn render_social_button(
    frame: &mut Frame,
    area: Rect,
    icon: &str,
    label: &str,
    is_focused: bool,
) {
    let text_style = if is_focused {
        Style::default()
            .fg(theme::FOCUS)
            .bg(CARD_BACKGROUND)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(CARD_BACKGROUND)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BORDER_TYPE)
        .border_style(theme::border_style(is_focused))
        .style(Style::default().bg(CARD_BACKGROUND));

    frame.render_widget(
        Paragraph::new(Line::from(format!("{icon} {label}")))
            .style(text_style)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_primary_button_renders_title() {
        let mut terminal = Terminal::new(TestBackend::new(20, BUTTON_HEIGHT)).unwrap();
        terminal
            .draw(|f| render_primary_button(f, f.area(), "Sign In", false))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Sign In"));
        assert!(text.contains('╭'));
    }

    #[test]
    fn test_social_button_renders_icon_and_label() {
        let mut terminal = Terminal::new(TestBackend::new(20, BUTTON_HEIGHT)).unwrap();
        terminal
            .draw(|f| render_social_button(f, f.area(), "G", "Google", true))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("G Google"));
    }
}
