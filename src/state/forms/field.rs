//! Form field descriptors

/// Bullet used to mask secure input
pub const SECURE_MASK: char = '•';

/// Describes one text input: its placeholder and whether the value is secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
    pub is_secure: bool,
}

impl FormField {
    /// Create a plain text field
    pub fn text(label: &str) -> Self {
        Self {
            label: label.to_string(),
            is_secure: false,
        }
    }

    /// Create a field whose value is masked on screen
    pub fn secure(label: &str) -> Self {
        Self {
            label: label.to_string(),
            is_secure: true,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self, value: &str) -> String {
        if self.is_secure {
            value.chars().map(|_| SECURE_MASK).collect()
        } else {
            value.to_string()
        }
    }
}
