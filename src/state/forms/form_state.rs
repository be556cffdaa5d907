//! Sign-in form and chat composer state

use super::field::FormField;
use crate::state::auth::{AuthField, FormController, ValidationResult};

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Focus targets on the sign-in screen, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Email,
    Password,
    SignIn,
    Apple,
    Google,
}

impl LoginFocus {
    const ORDER: [LoginFocus; 5] = [
        LoginFocus::Email,
        LoginFocus::Password,
        LoginFocus::SignIn,
        LoginFocus::Apple,
        LoginFocus::Google,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ORDER
            .get(index)
            .copied()
            .unwrap_or(LoginFocus::Google)
    }

    pub fn as_auth_field(self) -> Option<AuthField> {
        match self {
            LoginFocus::Email => Some(AuthField::Email),
            LoginFocus::Password => Some(AuthField::Password),
            _ => None,
        }
    }
}

// Login Form
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub controller: FormController,
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
    /// Whether the Apple/Google buttons take part in focus
    pub show_social: bool,
}

impl LoginForm {
    pub fn new(show_social: bool) -> Self {
        Self::with_controller(FormController::new(), show_social)
    }

    pub fn with_controller(controller: FormController, show_social: bool) -> Self {
        Self {
            controller,
            email: FormField::text("Email"),
            password: FormField::secure("Password"),
            active_field_index: 0,
            show_social,
        }
    }

    pub fn focus(&self) -> LoginFocus {
        LoginFocus::from_index(self.active_field_index)
    }

    /// Returns true if a text input has focus
    pub fn is_text_field_active(&self) -> bool {
        self.focus().as_auth_field().is_some()
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        match self.focus() {
            LoginFocus::Email => {
                let mut value = self.controller.email().to_string();
                value.push(c);
                self.controller.set_email(value);
            }
            LoginFocus::Password => {
                let mut value = self.controller.password().to_string();
                value.push(c);
                self.controller.set_password(value);
            }
            _ => {}
        }
    }

    /// Remove the last character from the focused text field
    pub fn backspace(&mut self) {
        match self.focus() {
            LoginFocus::Email => {
                let mut value = self.controller.email().to_string();
                value.pop();
                self.controller.set_email(value);
            }
            LoginFocus::Password => {
                let mut value = self.controller.password().to_string();
                value.pop();
                self.controller.set_password(value);
            }
            _ => {}
        }
    }

    /// Submit and move focus to the first flagged field
    pub fn submit(&mut self) -> ValidationResult {
        let result = self.controller.submit();
        if result.email_error.is_error() {
            self.active_field_index = 0;
        } else if result.password_error.is_error() {
            self.active_field_index = 1;
        }
        result
    }

    /// Back to a blank form with focus on the email field
    pub fn reset(&mut self) {
        self.controller.reset();
        self.active_field_index = 0;
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        if self.show_social {
            5 // email, password, sign in, apple, google
        } else {
            3
        }
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}

/// Draft message in the support chat input bar
#[derive(Debug, Clone, Default)]
pub struct ChatComposer {
    pub draft: String,
}

impl ChatComposer {
    pub fn push_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn pop_char(&mut self) {
        self.draft.pop();
    }

    /// Take the draft for sending. Blank drafts stay put and yield `None`.
    pub fn take_message(&mut self) -> Option<String> {
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();
        self.draft.clear();
        Some(text)
    }

    pub fn is_empty(&self) -> bool {
        self.draft.is_empty()
    }
}
