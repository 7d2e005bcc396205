//! Error types for Alianza.

use std::path::PathBuf;
use std::time::Duration;

use crate::assessment::Category;

/// Top-level error type for the application.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("Assessment error: {0}")]
    Assessment(#[from] AssessmentError),

    #[error("Reminder error: {0}")]
    Reminder(#[from] ReminderError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}. {hint}")]
    MissingRequired { key: String, hint: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Profile store errors.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("No profile found at {path}. Run `alianza profile init` first")]
    NotFound { path: PathBuf },

    #[error("Invalid profile field {field}: {message}")]
    InvalidField { field: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Assessment engine errors. These are programming errors in the caller and
/// are surfaced immediately rather than silently recovered.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("Question {question} does not offer {category}")]
    InvalidOption { question: usize, category: Category },

    #[error("Assessment already completed; construct a new one to retake it")]
    AlreadyCompleted,
}

/// Reminder scheduler errors.
#[derive(Debug, thiserror::Error)]
pub enum ReminderError {
    #[error("Invalid reminder time {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),
}

/// Content-generation (LLM) errors. The scheduler recovers from these locally
/// with a fallback message; they never cancel a pending notification.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Provider {provider} rate limited, retry after {retry_after:?}")]
    RateLimited {
        provider: String,
        retry_after: Option<Duration>,
    },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("Authentication failed for provider {provider}")]
    AuthFailed { provider: String },

    #[error("Provider {provider} timed out after {timeout:?}")]
    Timeout { provider: String, timeout: Duration },

    #[error("LLM returned empty content")]
    EmptyResponse,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Notification delivery errors.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("No notification backend is configured")]
    CapabilityUnavailable,

    #[error("Delivery via {sink} failed: {reason}")]
    DeliveryFailed { sink: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for the application.
pub type Result<T> = std::result::Result<T, Error>;
