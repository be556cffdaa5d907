//! Application state and core logic

use crate::config::WorkshopConfig;
use crate::state::{AppState, ChatMessage, Form, LoginFocus, View};
use crate::support::SupportDeskTrait;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Support desk answering chat messages
    pub desk: Box<dyn SupportDeskTrait>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &WorkshopConfig, desk: Box<dyn SupportDeskTrait>) -> Self {
        Self {
            state: AppState::from_config(config),
            desk,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Ask the main loop to exit
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.current_view {
            View::Login => self.handle_login_key(key),
            View::SupportChat => self.handle_chat_key(key).await?,
            View::About => self.handle_about_key(key),
        }

        self.route();
        Ok(())
    }

    /// Handle a mouse event (scroll wheel only)
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        match (self.state.current_view, mouse.kind) {
            (View::SupportChat, MouseEventKind::ScrollUp) => self.state.transcript.scroll_up(),
            (View::SupportChat, MouseEventKind::ScrollDown) => {
                self.state.transcript.scroll_down()
            }
            (View::About, MouseEventKind::ScrollUp) => self.state.about.move_up(),
            (View::About, MouseEventKind::ScrollDown) => self.state.about.move_down(),
            _ => {}
        }
        Ok(())
    }

    /// Leave the sign-in screen once the form controller reports success
    fn route(&mut self) {
        if self.state.current_view == View::Login && self.state.login.controller.is_authenticated()
        {
            tracing::info!("signed in, opening support chat");
            self.navigate(View::SupportChat);
        }
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        tracing::debug!(from = ?self.state.current_view, to = ?view, "navigate");
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        // Skip form views in history to go back to the last non-form view
        while let Some(view) = self.state.view_history.pop() {
            if view.is_form_view() {
                continue;
            }
            self.state.current_view = view;
            return;
        }
    }

    /// Reset the sign-in form and return to it
    pub fn sign_out(&mut self) {
        tracing::info!("signed out");
        self.state.login.reset();
        self.state.composer.draft.clear();
        self.state.view_history.clear();
        self.state.current_view = View::Login;
    }

    /// Handle keys in the sign-in view
    fn handle_login_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.login.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.login.prev_field(),
            KeyCode::Char('s') if ctrl => self.submit_login(),
            KeyCode::Char('f') if ctrl => {
                self.state
                    .set_status("Password reset is handled by support after sign-in");
            }
            KeyCode::Char('n') if ctrl => {
                self.state.set_status("Sign up is not available in this demo");
            }
            KeyCode::Enter => self.activate_login_focus(),
            KeyCode::Char(' ') if !self.state.login.is_text_field_active() => {
                self.activate_login_focus()
            }
            KeyCode::Char(c) if !ctrl => self.state.login.input_char(c),
            KeyCode::Backspace => self.state.login.backspace(),
            KeyCode::Esc => self.request_quit(),
            _ => {}
        }
    }

    /// Enter on a text field or Sign In submits; social buttons only leave a hint
    fn activate_login_focus(&mut self) {
        match self.state.login.focus() {
            LoginFocus::Email | LoginFocus::Password | LoginFocus::SignIn => self.submit_login(),
            LoginFocus::Apple => {
                self.state
                    .set_status("Sign in with Apple is not available in this demo");
            }
            LoginFocus::Google => {
                self.state
                    .set_status("Sign in with Google is not available in this demo");
            }
        }
    }

    fn submit_login(&mut self) {
        self.state.login.submit();
    }

    /// Handle keys in the support chat view
    async fn handle_chat_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let copy = key.modifiers.contains(crate::platform::COPY_MODIFIER);

        match key.code {
            KeyCode::Char('a') if ctrl => self.navigate(View::About),
            KeyCode::Char('o') if ctrl => self.sign_out(),
            KeyCode::Char('y') if ctrl || copy => self.copy_last_reply(),
            KeyCode::Enter => self.send_chat_message().await?,
            KeyCode::Up => self.state.transcript.scroll_up(),
            KeyCode::Down => self.state.transcript.scroll_down(),
            KeyCode::PageUp => self.state.transcript.scroll_up_page(),
            KeyCode::PageDown => self.state.transcript.scroll_down_page(),
            KeyCode::Char(c) if !ctrl => self.state.composer.push_char(c),
            KeyCode::Backspace => self.state.composer.pop_char(),
            _ => {}
        }
        Ok(())
    }

    /// Send the composed message and append the support reply
    async fn send_chat_message(&mut self) -> Result<()> {
        let Some(text) = self.state.composer.take_message() else {
            return Ok(());
        };
        let message = ChatMessage::from_user(text.clone());
        tracing::debug!(id = %message.id, "sending chat message");
        self.state.transcript.push(message);

        if !self.desk.is_online() {
            self.state
                .set_status("Support is offline. We'll reply when an agent is available.");
            return Ok(());
        }

        match self.desk.reply(&text).await {
            Ok(reply) => {
                self.state.transcript.push(ChatMessage::from_support(reply));
                tracing::debug!(messages = self.state.transcript.len(), "support replied");
            }
            Err(err) => {
                tracing::warn!("support reply failed: {err:#}");
                self.state.set_status(format!("Support is unavailable: {err}"));
            }
        }
        Ok(())
    }

    /// Handle keys in the about view
    fn handle_about_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.about.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.about.move_down(),
            KeyCode::Enter => {
                if let Some(row) = self.state.about.selected_row() {
                    self.state.set_status(format!("{} is not available offline", row.title()));
                }
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => self.go_back(),
            _ => {}
        }
    }

    fn copy_last_reply(&mut self) {
        let Some(text) = self
            .state
            .transcript
            .last_support_message()
            .map(|m| m.text.clone())
        else {
            self.state.set_status("No support reply to copy");
            return;
        };
        match copy_to_clipboard(&text) {
            Ok(()) => self
                .state
                .set_status(format!("Copied {} chars", text.chars().count())),
            Err(err) => {
                tracing::warn!("clipboard copy failed: {err:#}");
                self.state.set_status(format!("Copy failed: {err}"));
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
