//! Terminal notification sink.
//!
//! Prints notifications to stdout. Used by `alianza remind test` when no
//! push backend is configured, and handy when running the scheduler in the
//! foreground.

use async_trait::async_trait;

use crate::error::NotifyError;
use crate::notify::{NotificationSink, Permission};

/// Sink that writes notifications to the terminal. Always permitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSink;

#[async_trait]
impl NotificationSink for TerminalSink {
    async fn request_permission(&self) -> Result<bool, NotifyError> {
        Ok(true)
    }

    fn current_permission(&self) -> Result<Permission, NotifyError> {
        Ok(Permission::Granted)
    }

    async fn deliver(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        println!("🔔 {title}\n   {body}");
        tracing::info!(title, "notification delivered to terminal");
        Ok(())
    }
}
