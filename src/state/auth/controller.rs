//! Sign-in form controller

use super::validator::{evaluate, FieldError, FormInput, ValidationResult};

/// Where a form instance is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    /// No submit yet (or reset since the last one)
    #[default]
    Editing,
    /// Last submit failed validation
    Invalid,
    /// A submit succeeded. Terminal until `reset`.
    Authenticated,
}

/// Which input a caption or focus refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Email,
    Password,
}

/// Owns the sign-in form state.
///
/// Field setters only replace input; stored error state changes on
/// `submit` and `reset` and nowhere else. The router reads
/// [`FormController::is_authenticated`] to decide when to leave the login screen.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    input: FormInput,
    last_result: Option<ValidationResult>,
    is_authenticated: bool,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-filled email (still unevaluated)
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            input: FormInput::new(email, ""),
            ..Self::default()
        }
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.input.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.input.password = value.into();
    }

    pub fn email(&self) -> &str {
        &self.input.email
    }

    pub fn password(&self) -> &str {
        &self.input.password
    }

    /// Validate the current input and store the outcome.
    ///
    /// Never fails; an invalid form is reported through the returned result.
    pub fn submit(&mut self) -> ValidationResult {
        let result = evaluate(&self.input);
        if result.is_valid {
            self.is_authenticated = true;
            tracing::info!("sign-in form accepted");
        } else {
            tracing::debug!(
                email_error = ?result.email_error,
                password_error = ?result.password_error,
                "sign-in form rejected"
            );
        }
        self.last_result = Some(result.clone());
        result
    }

    /// Clear input and error state and drop authentication
    pub fn reset(&mut self) {
        self.input = FormInput::default();
        self.last_result = None;
        self.is_authenticated = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Result of the last submit, `None` while unevaluated
    pub fn last_result(&self) -> Option<&ValidationResult> {
        self.last_result.as_ref()
    }

    pub fn status(&self) -> FormStatus {
        if self.is_authenticated {
            FormStatus::Authenticated
        } else if self.last_result.as_ref().is_some_and(|r| !r.is_valid) {
            FormStatus::Invalid
        } else {
            FormStatus::Editing
        }
    }

    /// Banner from the last failed submit
    pub fn banner_message(&self) -> Option<&str> {
        self.last_result.as_ref().and_then(|r| r.banner())
    }

    pub fn field_error(&self, field: AuthField) -> FieldError {
        match (&self.last_result, field) {
            (None, _) => FieldError::None,
            (Some(r), AuthField::Email) => r.email_error,
            (Some(r), AuthField::Password) => r.password_error,
        }
    }

    /// Inline caption rendered under a flagged field
    pub fn field_error_message(&self, field: AuthField) -> Option<&'static str> {
        match self.field_error(field) {
            FieldError::None => None,
            FieldError::Required => Some("Required"),
            FieldError::InvalidFormat => Some("Please enter a valid email"),
        }
    }
}
