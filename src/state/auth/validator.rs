//! Pure sign-in form validation

/// Banner shown when both fields are empty
pub const MSG_FILL_ALL_FIELDS: &str = "Please fill in all fields";
/// Banner shown when the email is empty or has no `@`
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
/// Banner shown when only the password is missing
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required";

/// Raw values typed into the sign-in form. Never trimmed or case-folded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub email: String,
    pub password: String,
}

impl FormInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Error attached to a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldError {
    #[default]
    None,
    Required,
    InvalidFormat,
}

impl FieldError {
    pub fn is_error(self) -> bool {
        !matches!(self, FieldError::None)
    }
}

/// Outcome of validating a [`FormInput`]
///
/// `is_valid` holds exactly when both field errors are [`FieldError::None`],
/// and `banner_message` is present exactly when `is_valid` is false. The
/// `evaluate` only builds results through `valid`/`invalid`, which keep both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub email_error: FieldError,
    pub password_error: FieldError,
    pub banner_message: Option<String>,
    pub is_valid: bool,
}

impl ValidationResult {
    fn valid() -> Self {
        Self {
            email_error: FieldError::None,
            password_error: FieldError::None,
            banner_message: None,
            is_valid: true,
        }
    }

    fn invalid(email_error: FieldError, password_error: FieldError, banner: &str) -> Self {
        Self {
            email_error,
            password_error,
            banner_message: Some(banner.to_string()),
            is_valid: false,
        }
    }

    /// Banner text, if any
    pub fn banner(&self) -> Option<&str> {
        self.banner_message.as_deref()
    }
}

/// Validate the sign-in form.
///
/// Rules apply in order and the first match decides the banner:
/// 1. both fields empty
/// 2. email empty or missing `@` (an empty password is not flagged here)
/// 3. password empty
/// 4. otherwise valid
pub fn evaluate(input: &FormInput) -> ValidationResult {
    let email_empty = input.email.is_empty();
    let password_empty = input.password.is_empty();

    if email_empty && password_empty {
        return ValidationResult::invalid(
            FieldError::Required,
            FieldError::Required,
            MSG_FILL_ALL_FIELDS,
        );
    }

    if email_empty || !input.email.contains('@') {
        return ValidationResult::invalid(
            FieldError::InvalidFormat,
            FieldError::None,
            MSG_INVALID_EMAIL,
        );
    }

    if password_empty {
        return ValidationResult::invalid(
            FieldError::None,
            FieldError::Required,
            MSG_PASSWORD_REQUIRED,
        );
    }

    ValidationResult::valid()
}
