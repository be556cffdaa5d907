//! Support desk that answers chat messages

mod desk;
mod traits;

pub use desk::ScriptedSupportDesk;
pub use traits::SupportDeskTrait;

#[cfg(test)]
pub use traits::MockSupportDeskTrait;
