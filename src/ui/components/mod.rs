//! Reusable UI components (the design system)

mod banner;
mod button;
mod divider;
mod text_field;
pub mod theme;

pub use banner::{render_error_banner, BANNER_HEIGHT};
pub use button::{render_primary_button, render_social_button, BUTTON_HEIGHT};
pub use divider::render_branded_divider;
pub use text_field::{render_text_field, TextFieldConfig};
