//! Offline support desk with canned replies

use super::traits::SupportDeskTrait;
use anyhow::Result;
use async_trait::async_trait;

/// Replies for messages that don't match a topic, used in rotation
const GENERAL_REPLIES: &[&str] = &[
    "Thanks for reaching out! Let me look into that for you.",
    "Got it. Could you share a bit more detail?",
    "I've passed this on to the team. We'll follow up shortly.",
];

/// Topic keywords and their replies. First match wins.
const TOPIC_REPLIES: &[(&str, &str)] = &[
    (
        "password",
        "I can help with that. I've sent a password reset link to the email on your account.",
    ),
    (
        "thank",
        "You're welcome! Let me know if you need anything else. 😊",
    ),
];

/// Support desk that answers from a fixed script without any network access
#[derive(Debug, Default)]
pub struct ScriptedSupportDesk {
    next_general: usize,
}

impl ScriptedSupportDesk {
    pub fn new() -> Self {
        Self::default()
    }

    fn pick_reply(&mut self, message: &str) -> &'static str {
        let lowered = message.to_lowercase();
        if let Some((_, reply)) = TOPIC_REPLIES
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
        {
            return *reply;
        }
        let reply = GENERAL_REPLIES[self.next_general % GENERAL_REPLIES.len()];
        self.next_general += 1;
        reply
    }
}

#[async_trait]
impl SupportDeskTrait for ScriptedSupportDesk {
    fn is_online(&self) -> bool {
        true
    }

    async fn reply(&mut self, message: &str) -> Result<String> {
        let reply = self.pick_reply(message);
        tracing::debug!(reply, "scripted support reply");
        Ok(reply.to_string())
    }
}
