//! Configuration for Alianza.
//!
//! Everything comes from environment variables (a `.env` file is honored),
//! with defaults matching the reference behavior: reminders at 06:00, the
//! Gemini flash model, no push backend unless a Gotify server is configured.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Main configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub notify: NotifyConfig,
    pub reminder: ReminderConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            llm: LlmConfig::from_env()?,
            notify: NotifyConfig::from_env()?,
            reminder: ReminderConfig::from_env()?,
        })
    }
}

/// Gemini content-generation configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API key; generation is unavailable without it.
    pub api_key: Option<SecretString>,
    pub model: String,
    pub base_url: String,
}

impl LlmConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: optional_env("GEMINI_API_KEY")?.map(SecretString::from),
            model: optional_env("GEMINI_MODEL")?
                .unwrap_or_else(|| "gemini-3-flash-preview".to_string()),
            base_url: optional_env("GEMINI_BASE_URL")?
                .unwrap_or_else(|| "https://generativelanguage.googleapis.com".to_string()),
        })
    }

    /// Fail with a pointed hint when the API key is required but absent.
    pub fn require_api_key(&self) -> Result<&SecretString, ConfigError> {
        self.api_key.as_ref().ok_or_else(|| ConfigError::MissingRequired {
            key: "GEMINI_API_KEY".to_string(),
            hint: "Set it in the environment or in .env".to_string(),
        })
    }
}

/// Notification backend configuration.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// Gotify server base URL; the push capability is unavailable without it.
    pub gotify_url: Option<String>,
    /// Gotify application token; delivery permission is granted by setting it.
    pub gotify_token: Option<SecretString>,
}

impl NotifyConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let gotify_url = optional_env("GOTIFY_URL")?;
        if let Some(ref url) = gotify_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    key: "GOTIFY_URL".to_string(),
                    message: "must start with http:// or https://".to_string(),
                });
            }
        }

        Ok(Self {
            gotify_url,
            gotify_token: optional_env("GOTIFY_TOKEN")?.map(SecretString::from),
        })
    }
}

/// Daily reminder configuration.
#[derive(Debug, Clone)]
pub struct ReminderConfig {
    /// Local hour of the daily reminder (0-23).
    pub hour: u32,
    /// Local minute of the daily reminder (0-59).
    pub minute: u32,
    /// Upper bound on the content-generation call before falling back.
    pub generation_timeout: Duration,
}

impl ReminderConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let hour = parse_optional_env("REMINDER_HOUR", 6u32)?;
        if hour > 23 {
            return Err(ConfigError::InvalidValue {
                key: "REMINDER_HOUR".to_string(),
                message: format!("{hour} is not a valid hour (0-23)"),
            });
        }
        let minute = parse_optional_env("REMINDER_MINUTE", 0u32)?;
        if minute > 59 {
            return Err(ConfigError::InvalidValue {
                key: "REMINDER_MINUTE".to_string(),
                message: format!("{minute} is not a valid minute (0-59)"),
            });
        }
        let timeout_secs = parse_optional_env("REMINDER_GENERATION_TIMEOUT_SECS", 30u64)?;

        Ok(Self {
            hour,
            minute,
            generation_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

pub(crate) fn optional_env(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(val) if val.is_empty() => Ok(None),
        Ok(val) => Ok(Some(val)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::ParseError(format!(
            "failed to read {key}: {e}"
        ))),
    }
}

pub(crate) fn parse_optional_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    optional_env(key)?
        .map(|s| {
            s.parse().map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{e}"),
            })
        })
        .transpose()
        .map(|opt| opt.unwrap_or(default))
}
