//! Sign-in validation domain
//!
//! `validator` is the pure rule set that turns the two raw inputs into a
//! [`ValidationResult`]; `controller` owns the form state and is the only
//! thing allowed to mutate it.

mod controller;
mod validator;

pub use controller::{AuthField, FormController, FormStatus};
pub use validator::{
    evaluate, FieldError, FormInput, ValidationResult, MSG_FILL_ALL_FIELDS, MSG_INVALID_EMAIL,
    MSG_PASSWORD_REQUIRED,
};
