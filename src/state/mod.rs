//! Application state module

pub mod about;
pub mod auth;
mod app_state;
mod chat;
mod forms;

pub use about::AboutState;
pub use app_state::*;
pub use chat::*;
pub use forms::*;
