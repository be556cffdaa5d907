//! Shared colors and spacing for the component library

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::BorderType,
};

/// Brand gradient, indigo to blue
pub const ACCENT_GRADIENT: [Color; 2] = [Color::Rgb(88, 86, 214), Color::Rgb(0, 122, 255)];
/// Error gradient, red to pink
pub const ERROR_GRADIENT: [Color; 2] = [Color::Rgb(255, 59, 48), Color::Rgb(255, 45, 85)];
/// Background for cards, inputs and support bubbles
pub const CARD_BACKGROUND: Color = Color::Rgb(44, 44, 46);
/// Secondary (muted) text
pub const SECONDARY: Color = Color::DarkGray;
/// Focus highlight
pub const FOCUS: Color = Color::Cyan;
/// Columns of padding on each side of a screen's content column
pub const HORIZONTAL_PADDING: u16 = 2;
/// Rounded borders stand in for the corner radius
pub const BORDER_TYPE: BorderType = BorderType::Rounded;

/// Linear interpolation between two RGB colors. Non-RGB colors snap to `from`.
pub fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let t = t.clamp(0.0, 1.0);
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => from,
    }
}

/// Color each character of `text` along a two-stop gradient
pub fn gradient_line(text: &str, gradient: [Color; 2], modifier: Modifier) -> Line<'static> {
    let count = text.chars().count();
    let spans: Vec<Span<'static>> = text
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let t = if count > 1 {
                i as f32 / (count - 1) as f32
            } else {
                0.0
            };
            Span::styled(
                c.to_string(),
                Style::default()
                    .fg(lerp_color(gradient[0], gradient[1], t))
                    .add_modifier(modifier),
            )
        })
        .collect();
    Line::from(spans)
}

/// Style for a border depending on focus
pub fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(FOCUS)
    } else {
        Style::default().fg(SECONDARY)
    }
}
