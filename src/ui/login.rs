//! Sign-in screen rendering

use super::components::{
    render_branded_divider, render_error_banner, render_primary_button, render_social_button,
    render_text_field, theme, TextFieldConfig, BANNER_HEIGHT, BUTTON_HEIGHT,
};
use super::widgets::centered_column;
use crate::app::App;
use crate::state::auth::AuthField;
use crate::state::LoginFocus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form column gets
const FORM_MAX_WIDTH: u16 = 48;

/// Draw the sign-in screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let login = &app.state.login;
    let controller = &login.controller;
    let focus = login.focus();
    let column = centered_column(area, FORM_MAX_WIDTH, theme::HORIZONTAL_PADDING);

    let banner = controller.banner_message();
    let email = TextFieldConfig {
        field: &login.email,
        value: controller.email(),
        is_focused: focus == LoginFocus::Email,
        error_message: controller.field_error_message(AuthField::Email),
    };
    let password = TextFieldConfig {
        field: &login.password,
        value: controller.password(),
        is_focused: focus == LoginFocus::Password,
        error_message: controller.field_error_message(AuthField::Password),
    };

    let banner_height = if banner.is_some() { BANNER_HEIGHT } else { 0 };
    let (divider_height, social_height) = if login.show_social {
        (3, BUTTON_HEIGHT)
    } else {
        (0, 0)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                    // Top padding (flex)
            Constraint::Length(4),                 // Logo and title
            Constraint::Length(banner_height),     // Banner
            Constraint::Length(email.height()),    // Email
            Constraint::Length(password.height()), // Password
            Constraint::Length(1),                 // Forgot password
            Constraint::Length(BUTTON_HEIGHT),     // Sign in
            Constraint::Length(divider_height),    // Divider
            Constraint::Length(social_height),     // Social buttons
            Constraint::Min(0),                    // Bottom padding (flex)
            Constraint::Length(1),                 // Sign up prompt
        ])
        .split(column);

    draw_header(frame, chunks[1]);

    if let Some(message) = banner {
        render_error_banner(frame, chunks[2], message);
    }

    render_text_field(frame, chunks[3], email);
    render_text_field(frame, chunks[4], password);

    let forgot = Paragraph::new(Line::from(Span::styled(
        "Forgot Password?",
        Style::default().fg(theme::ACCENT_GRADIENT[1]),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(forgot, chunks[5]);

    render_primary_button(frame, chunks[6], "Sign In", focus == LoginFocus::SignIn);

    if login.show_social {
        let divider_area = Rect {
            y: chunks[7].y + 1,
            height: 1,
            ..chunks[7]
        };
        render_branded_divider(frame, divider_area, "or");

        let social = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(50),
                Constraint::Length(1),
                Constraint::Percentage(50),
            ])
            .split(chunks[8]);
        render_social_button(frame, social[0], "◆", "Apple", focus == LoginFocus::Apple);
        render_social_button(frame, social[2], "G", "Google", focus == LoginFocus::Google);
    }

    let sign_up = Paragraph::new(Line::from(vec![
        Span::styled("Don't have an account? ", Style::default().fg(theme::SECONDARY)),
        Span::styled(
            "Sign Up",
            Style::default()
                .fg(theme::ACCENT_GRADIENT[1])
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(sign_up, chunks[10]);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("◉", Style::default().fg(Color::Blue))),
        Line::from(Span::styled(
            "Welcome Back",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Sign in to continue",
            Style::default().fg(theme::SECONDARY),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkshopConfig;
    use crate::support::ScriptedSupportDesk;
    use crate::ui::widgets::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
        terminal.draw(|f| draw(f, f.area(), app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn test_app() -> App {
        App::new(
            &WorkshopConfig::default(),
            Box::new(ScriptedSupportDesk::new()),
        )
    }

    #[test]
    fn test_initial_screen_has_no_banner() {
        let app = test_app();
        let text = render(&app);
        assert!(text.contains("Welcome Back"));
        assert!(text.contains("Sign in to continue"));
        assert!(text.contains("Sign In"));
        assert!(text.contains("Google"));
        assert!(text.contains("Sign Up"));
        assert!(!text.contains("Please fill in all fields"));
    }

    #[test]
    fn test_failed_submit_shows_banner_and_captions() {
        let mut app = test_app();
        app.state.login.submit();
        let text = render(&app);
        assert!(text.contains("Please fill in all fields"));
        assert_eq!(text.matches("Required").count(), 2);
    }

    #[test]
    fn test_password_is_masked_on_screen() {
        let mut app = test_app();
        app.state.login.controller.set_password("hunter2");
        let text = render(&app);
        assert!(!text.contains("hunter2"));
    }

    #[test]
    fn test_social_buttons_hidden_by_config() {
        let config = WorkshopConfig {
            show_social_sign_in: Some(false),
            ..Default::default()
        };
        let app = App::new(&config, Box::new(ScriptedSupportDesk::new()));
        let text = render(&app);
        assert!(!text.contains("Google"));
    }
}
