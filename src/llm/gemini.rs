//! Gemini-backed message generator.
//!
//! Calls the Gemini `generateContent` REST endpoint. Only the small slice of
//! the API this app needs is modeled: one user turn in, the first candidate's
//! text out.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;
use crate::error::LlmError;
use crate::llm::{MessageGenerator, ProfileSummary};

/// Provider name constant to avoid magic strings.
const PROVIDER_NAME: &str = "gemini";

/// Gemini `generateContent` API client.
pub struct GeminiGenerator {
    client: Client,
    config: LlmConfig,
}

impl GeminiGenerator {
    /// Create a new Gemini generator.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| LlmError::RequestFailed {
                provider: PROVIDER_NAME.to_string(),
                reason: format!("Failed to build reqwest client: {e}"),
            })?;

        Ok(Self { client, config })
    }

    /// Construct the generateContent URL for the configured model.
    fn api_url(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        format!("{}/v1beta/models/{}:generateContent", base, self.config.model)
    }

    /// The daily-mission prompt for a given profile summary.
    fn mission_prompt(context: &ProfileSummary) -> String {
        format!(
            "Generate a notification message of at most 10 words for a spouse. \
             The goal is to fill the emotional tank of their partner {partner} \
             whose love language is {language}. It must be a small, practical \
             action for today.",
            partner = context.partner_name,
            language = context.partner_love_language,
        )
    }

    async fn send_request(&self, prompt: String) -> Result<GenerateContentResponse, LlmError> {
        let url = self.api_url();
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        tracing::debug!(model = %self.config.model, "sending Gemini generateContent request");

        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| LlmError::AuthFailed {
                provider: PROVIDER_NAME.to_string(),
            })?;

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Gemini request failed");
                LlmError::RequestFailed {
                    provider: PROVIDER_NAME.to_string(),
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| LlmError::RequestFailed {
            provider: PROVIDER_NAME.to_string(),
            reason: format!("Failed to read response body: {e}"),
        })?;

        if !status.is_success() {
            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(LlmError::AuthFailed {
                    provider: PROVIDER_NAME.to_string(),
                });
            }
            if status.as_u16() == 429 {
                return Err(LlmError::RateLimited {
                    provider: PROVIDER_NAME.to_string(),
                    retry_after: None,
                });
            }
            return Err(LlmError::RequestFailed {
                provider: PROVIDER_NAME.to_string(),
                reason: format!(
                    "HTTP {}: {}",
                    status,
                    response_text.chars().take(200).collect::<String>()
                ),
            });
        }

        serde_json::from_str(&response_text).map_err(|e| LlmError::InvalidResponse {
            provider: PROVIDER_NAME.to_string(),
            reason: format!("Failed to parse response: {e}"),
        })
    }
}

#[async_trait]
impl MessageGenerator for GeminiGenerator {
    async fn generate_short_message(&self, context: &ProfileSummary) -> Result<String, LlmError> {
        let response = self.send_request(Self::mission_prompt(context)).await?;
        let text = extract_text(&response).ok_or(LlmError::EmptyResponse)?;
        Ok(text)
    }
}

/// First candidate's concatenated text, trimmed; `None` when empty.
fn extract_text(response: &GenerateContentResponse) -> Option<String> {
    let candidate = response.candidates.first()?;
    let text: String = candidate
        .content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

// --- wire types ---

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    #[serde(default)]
    content: ResponseContent,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;
    use crate::assessment::Category;

    fn generator_with_base(base_url: &str) -> GeminiGenerator {
        GeminiGenerator::new(LlmConfig {
            api_key: Some(SecretString::from("test-key")),
            model: "gemini-3-flash-preview".to_string(),
            base_url: base_url.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn api_url_joins_base_and_model() {
        let generator = generator_with_base("https://generativelanguage.googleapis.com");
        assert_eq!(
            generator.api_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );

        // Trailing slash must not double up.
        let generator = generator_with_base("https://example.test/");
        assert_eq!(
            generator.api_url(),
            "https://example.test/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn mission_prompt_mentions_partner_and_language() {
        let prompt = GeminiGenerator::mission_prompt(&ProfileSummary {
            partner_name: "Maria".to_string(),
            partner_love_language: Category::Acts,
        });
        assert!(prompt.contains("Maria"));
        assert!(prompt.contains("Acts of Service"));
        assert!(prompt.contains("10 words"));
    }

    #[test]
    fn extract_text_takes_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "Bring her "}, {"text": "coffee in bed."}]}},
                    {"content": {"parts": [{"text": "ignored"}]}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            extract_text(&response).as_deref(),
            Some("Bring her coffee in bed.")
        );
    }

    #[test]
    fn extract_text_handles_empty_and_missing_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(extract_text(&response).is_none());

        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "   "}]}}]}"#,
        )
        .unwrap();
        assert!(extract_text(&response).is_none());
    }
}
