//! Styled text field component

use super::theme::{self, BORDER_TYPE, CARD_BACKGROUND, ERROR_GRADIENT, SECONDARY};
use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Input box height in rows
pub const FIELD_HEIGHT: u16 = 3;

/// What to draw for one field
pub struct TextFieldConfig<'a> {
    pub field: &'a FormField,
    pub value: &'a str,
    pub is_focused: bool,
    /// Caption under the box; presence also turns the border red
    pub error_message: Option<&'a str>,
}

impl TextFieldConfig<'_> {
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// Rows needed: the box plus one caption row when flagged
    pub fn height(&self) -> u16 {
        if self.has_error() {
            FIELD_HEIGHT + 1
        } else {
            FIELD_HEIGHT
        }
    }
}

/// Render a text field, masking secure values and showing the placeholder when empty
pub fn render_text_field(frame: &mut Frame, area: Rect, config: TextFieldConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FIELD_HEIGHT), Constraint::Min(0)])
        .split(area);

    let border_style = if config.has_error() {
        Style::default().fg(ERROR_GRADIENT[0])
    } else {
        theme::border_style(config.is_focused)
    };

    let cursor = if config.is_focused { "▌" } else { "" };
    let content = if config.value.is_empty() {
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(theme::FOCUS)),
            Span::styled(config.field.label.clone(), Style::default().fg(SECONDARY)),
        ])
    } else {
        Line::from(vec![
            Span::raw(config.field.display_value(config.value)),
            Span::styled(cursor, Style::default().fg(theme::FOCUS)),
        ])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BORDER_TYPE)
        .border_style(border_style)
        .style(Style::default().bg(CARD_BACKGROUND));

    frame.render_widget(Paragraph::new(content).block(block), chunks[0]);

    if let Some(message) = config.error_message {
        let caption = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(ERROR_GRADIENT[0]),
        )));
        frame.render_widget(caption, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(config: TextFieldConfig) -> String {
        let height = config.height();
        let mut terminal = Terminal::new(TestBackend::new(30, height)).unwrap();
        terminal
            .draw(|f| render_text_field(f, f.area(), config))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_empty_field_shows_placeholder() {
        let field = FormField::text("Email");
        let text = render(TextFieldConfig {
            field: &field,
            value: "",
            is_focused: false,
            error_message: None,
        });
        assert!(text.contains("Email"));
    }

    #[test]
    fn test_secure_field_is_masked() {
        let field = FormField::secure("Password");
        let text = render(TextFieldConfig {
            field: &field,
            value: "hunter2",
            is_focused: true,
            error_message: None,
        });
        assert!(!text.contains("hunter2"));
        assert!(text.contains("•••••••"));
    }

    #[test]
    fn test_error_caption_adds_a_row() {
        let field = FormField::text("Email");
        let config = TextFieldConfig {
            field: &field,
            value: "bad",
            is_focused: false,
            error_message: Some("Please enter a valid email"),
        };
        assert_eq!(config.height(), FIELD_HEIGHT + 1);
        let text = render(config);
        assert!(text.contains("Please enter a valid email"));
    }
}
