//! UI module for rendering the TUI

mod about;
mod chat;
mod components;
mod layout;
mod login;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::{layout::Rect, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (title_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_title_bar(frame, title_area, app);

    // Draw main content based on current view
    match &app.state.current_view {
        View::Login => login::draw(frame, main_area, app),
        View::SupportChat => chat::draw(frame, main_area, app),
        View::About => about::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}

/// Furthest the chat transcript can scroll up on a screen of `area`
pub fn chat_max_scroll(app: &App, area: Rect) -> usize {
    let (_, main_area, _) = layout::create_layout(area);
    chat::max_scroll(app, main_area)
}
