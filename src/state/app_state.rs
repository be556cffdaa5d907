//! Application state definitions

use super::about::AboutState;
use super::chat::ChatTranscript;
use super::forms::{ChatComposer, LoginForm};
use crate::config::WorkshopConfig;
use crate::state::auth::FormController;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    SupportChat,
    About,
}

impl View {
    /// Views whose history entries are skipped when going back
    pub fn is_form_view(&self) -> bool {
        matches!(self, View::Login)
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Login => "Sign In",
            View::SupportChat => "Support",
            View::About => "About",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Screens
    pub login: LoginForm,
    pub composer: ChatComposer,
    pub transcript: ChatTranscript,
    pub about: AboutState,

    // Presentation settings
    pub support_agent_name: String,
    pub timestamp_format: String,

    // UI state
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial state from user configuration
    pub fn from_config(config: &WorkshopConfig) -> Self {
        let controller = match &config.prefill_email {
            Some(email) => FormController::with_email(email.clone()),
            None => FormController::new(),
        };

        Self {
            current_view: View::Login,
            view_history: Vec::new(),
            login: LoginForm::with_controller(controller, config.show_social_sign_in()),
            composer: ChatComposer::default(),
            transcript: ChatTranscript::with_sample_messages(),
            about: AboutState::default(),
            support_agent_name: config.support_agent_name().to_string(),
            timestamp_format: config.timestamp_format().to_string(),
            status_message: None,
        }
    }

    /// Set a one-line message for the status bar
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
