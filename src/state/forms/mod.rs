//! Form layer for the sign-in and chat input views
//!
//! Field values for the sign-in form live in the
//! [`FormController`](crate::state::auth::FormController); this layer only
//! tracks focus and how each field is presented.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{ChatComposer, Form, LoginFocus, LoginForm};
