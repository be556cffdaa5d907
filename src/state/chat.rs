//! Support chat transcript

use chrono::{DateTime, Local};
use uuid::Uuid;

/// Conversation shown when the chat screen first opens
pub const SAMPLE_MESSAGES: &[(&str, bool)] = &[
    ("Hi! I'm having trouble resetting my password.", false),
    (
        "Hello! I'd be happy to help you with that. Can you tell me the email address associated with your account?",
        true,
    ),
    ("Sure, it's john@example.com", false),
    (
        "Thanks! I've sent a password reset link to that email. It should arrive within a few minutes.",
        true,
    ),
    ("Got it, thank you so much!", false),
    (
        "You're welcome! Let me know if you need anything else. 😊",
        true,
    ),
];

/// A single chat bubble
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub is_from_support: bool,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, is_from_support: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            is_from_support,
            sent_at: Local::now(),
        }
    }

    pub fn from_user(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    pub fn from_support(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    /// Time label under the bubble, e.g. `3:07 PM`
    pub fn timestamp_label(&self, format: &str) -> String {
        self.sent_at.format(format).to_string()
    }
}

/// Ordered list of messages plus the scroll position of the view
#[derive(Debug, Clone, Default)]
pub struct ChatTranscript {
    pub messages: Vec<ChatMessage>,
    /// Lines scrolled up from the bottom
    pub scroll_offset: usize,
    /// Furthest the view can scroll up; `None` until the view has been laid out
    pub max_scroll: Option<usize>,
}

impl ChatTranscript {
    pub fn with_sample_messages() -> Self {
        Self {
            messages: SAMPLE_MESSAGES
                .iter()
                .map(|(text, from_support)| ChatMessage::new(*text, *from_support))
                .collect(),
            scroll_offset: 0,
            max_scroll: None,
        }
    }

    /// Append a message and jump back to the newest line
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.scroll_offset = 0;
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last_support_message(&self) -> Option<&ChatMessage> {
        self.messages.iter().rev().find(|m| m.is_from_support)
    }

    /// Record how far the laid-out view can scroll and pull the offset back inside it
    pub fn set_max_scroll(&mut self, max: usize) {
        self.max_scroll = Some(max);
        self.scroll_offset = self.scroll_offset.min(max);
    }

    fn clamp_offset(&self, offset: usize) -> usize {
        self.max_scroll.map_or(offset, |max| offset.min(max))
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.clamp_offset(self.scroll_offset.saturating_add(1));
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll up a page (10 lines)
    pub fn scroll_up_page(&mut self) {
        self.scroll_offset = self.clamp_offset(self.scroll_offset.saturating_add(10));
    }

    /// Scroll down a page (10 lines)
    pub fn scroll_down_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }
}
