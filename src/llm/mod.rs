//! Content generation for daily reminders.
//!
//! The scheduler only knows the [`MessageGenerator`] seam; the Gemini-backed
//! implementation lives in [`gemini`]. Generation failures are always
//! recoverable: callers substitute a deterministic fallback instead of
//! dropping the notification.

pub mod gemini;

pub use gemini::GeminiGenerator;

use async_trait::async_trait;

use crate::assessment::Category;
use crate::error::LlmError;

/// The profile fields content generation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    pub partner_name: String,
    pub partner_love_language: Category,
}

/// Produces the short (ten words or fewer) daily-mission text.
#[async_trait]
pub trait MessageGenerator: Send + Sync {
    async fn generate_short_message(&self, context: &ProfileSummary) -> Result<String, LlmError>;
}
