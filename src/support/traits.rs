//! Trait abstraction for the support desk to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;

/// Trait for support desk operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SupportDeskTrait: Send + Sync {
    /// Whether an agent is available (drives the header's Online label)
    fn is_online(&self) -> bool;

    /// Produce the support reply to a user message
    async fn reply(&mut self, message: &str) -> Result<String>;
}
