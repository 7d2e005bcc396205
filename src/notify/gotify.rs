//! Gotify push notification sink.
//!
//! The phone/desktop analog of browser notifications for a headless host: a
//! self-hosted Gotify server fans the message out to the user's devices.
//! Configuring a server URL is what makes the capability available;
//! configuring an application token is the "permission grant".

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::config::NotifyConfig;
use crate::error::NotifyError;
use crate::notify::{NotificationSink, Permission};

const SINK_NAME: &str = "gotify";

/// Gotify message priority for daily missions. High enough to pop up on
/// mobile clients, below alarm-level priorities.
const MESSAGE_PRIORITY: u8 = 5;

/// Sink that POSTs messages to a Gotify server.
#[derive(Debug)]
pub struct GotifySink {
    client: Client,
    base_url: String,
    token: Option<SecretString>,
}

impl GotifySink {
    /// Build a sink from configuration.
    ///
    /// Fails with [`NotifyError::CapabilityUnavailable`] when no server URL
    /// is configured; callers that want a degraded-but-working setup fall
    /// back to [`super::TerminalSink`].
    pub fn from_config(config: &NotifyConfig) -> Result<Self, NotifyError> {
        let base_url = config
            .gotify_url
            .clone()
            .ok_or(NotifyError::CapabilityUnavailable)?;
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .map_err(|e| NotifyError::DeliveryFailed {
                sink: SINK_NAME.to_string(),
                reason: format!("Failed to build reqwest client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url,
            token: config.gotify_token.clone(),
        })
    }

    fn message_url(&self) -> String {
        format!("{}/message", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct GotifyMessage<'a> {
    title: &'a str,
    message: &'a str,
    priority: u8,
}

#[async_trait]
impl NotificationSink for GotifySink {
    async fn request_permission(&self) -> Result<bool, NotifyError> {
        // A server cannot prompt the user; permission is the presence of an
        // application token in the configuration.
        Ok(self.token.is_some())
    }

    fn current_permission(&self) -> Result<Permission, NotifyError> {
        match self.token {
            Some(_) => Ok(Permission::Granted),
            None => Ok(Permission::Undetermined),
        }
    }

    async fn deliver(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        let token = self.token.as_ref().ok_or_else(|| NotifyError::DeliveryFailed {
            sink: SINK_NAME.to_string(),
            reason: "no application token configured".to_string(),
        })?;

        let response = self
            .client
            .post(self.message_url())
            .header("X-Gotify-Key", token.expose_secret())
            .json(&GotifyMessage {
                title,
                message: body,
                priority: MESSAGE_PRIORITY,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(NotifyError::DeliveryFailed {
                sink: SINK_NAME.to_string(),
                reason: format!("HTTP {}: {}", status, text.chars().take(200).collect::<String>()),
            });
        }

        tracing::info!(title, "notification delivered via gotify");
        Ok(())
    }
}
