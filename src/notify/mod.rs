//! Notification delivery capability.
//!
//! The scheduler treats delivery as an opaque capability behind
//! [`NotificationSink`]: a permission state it can query, and a `deliver`
//! call. [`gotify::GotifySink`] pushes to a Gotify server;
//! [`terminal::TerminalSink`] prints locally and is always permitted.

pub mod gotify;
pub mod terminal;

pub use gotify::GotifySink;
pub use terminal::TerminalSink;

use async_trait::async_trait;

use crate::error::NotifyError;

/// Permission state of a notification backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
    Undetermined,
}

/// A backend capable of showing notifications to the user.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Ask for permission to deliver notifications. Returns whether it was
    /// granted.
    async fn request_permission(&self) -> Result<bool, NotifyError>;

    /// Current permission state. Fails with
    /// [`NotifyError::CapabilityUnavailable`] when no backend exists at all.
    fn current_permission(&self) -> Result<Permission, NotifyError>;

    /// Show a notification.
    async fn deliver(&self, title: &str, body: &str) -> Result<(), NotifyError>;
}
