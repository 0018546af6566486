//! Provider client — the single point of entry for all external AI calls.
//!
//! ARCHITECTURAL RULE: no other module may call a provider API directly.
//! All LLM interactions MUST go through this module.
//!
//! Every call is attempted exactly once; callers recover from failure by
//! falling back to their deterministic path, so there is no retry loop here.

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::{Config, Provider};

pub mod prompts;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub const OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const ANTHROPIC_MODEL: &str = "claude-3-opus-20240229";

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Which path produced a piece of content. Generation and extraction both
/// tag their output so tests (and logs) can assert provider vs. fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Provider,
    Fallback,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no provider configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("provider returned empty content")]
    EmptyContent,
}

// ── OpenAI wire types ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoiceMessage {
    content: Option<String>,
}

// ── Anthropic wire types ────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContentBlock>,
}

#[derive(Debug, Deserialize)]
struct AnthropicContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

// ── Client ──────────────────────────────────────────────────────────────────

/// The single provider client shared by all handlers.
///
/// Constructed from `Config` at startup — the provider kind and credentials
/// are immutable for the process lifetime. With no API key configured the
/// client reports unavailable and every call returns `NotConfigured`.
#[derive(Clone)]
pub struct ProviderClient {
    kind: Provider,
    http: Client,
    api_key: Option<String>,
}

impl ProviderClient {
    pub fn from_config(config: &Config) -> Self {
        let api_key = match config.provider {
            Provider::OpenAi => config.openai_api_key.clone(),
            Provider::Anthropic => config.anthropic_api_key.clone(),
            Provider::Mock => None,
        };

        Self {
            kind: config.provider,
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// True when a key is configured for a real provider.
    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    /// Makes a single call to the configured provider and returns the raw
    /// text of the first response block.
    pub async fn call(
        &self,
        prompt: &str,
        system: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::NotConfigured)?;

        let text = match self.kind {
            Provider::OpenAi => {
                self.call_openai(api_key, prompt, system, max_tokens, temperature)
                    .await?
            }
            Provider::Anthropic => {
                self.call_anthropic(api_key, prompt, system, max_tokens, temperature)
                    .await?
            }
            Provider::Mock => return Err(ProviderError::NotConfigured),
        };

        debug!("provider call succeeded ({} chars)", text.len());
        Ok(text)
    }

    /// Convenience method that calls the provider and deserializes the text
    /// response as JSON. The prompt must instruct the model to return JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<T, ProviderError> {
        let text = self.call(prompt, system, max_tokens, temperature).await?;

        // Strip markdown code fences if the model wraps JSON in them
        let text = strip_json_fences(&text);

        serde_json::from_str(text).map_err(ProviderError::Parse)
    }

    async fn call_openai(
        &self,
        api_key: &str,
        prompt: &str,
        system: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, ProviderError> {
        let request_body = OpenAiRequest {
            model: OPENAI_MODEL,
            messages: vec![
                OpenAiMessage {
                    role: "system",
                    content: system,
                },
                OpenAiMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature,
            max_tokens,
        };

        let response = self
            .http
            .post(OPENAI_API_URL)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: OpenAiResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(ProviderError::EmptyContent)
    }

    async fn call_anthropic(
        &self,
        api_key: &str,
        prompt: &str,
        system: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, ProviderError> {
        let request_body = AnthropicRequest {
            model: ANTHROPIC_MODEL,
            max_tokens,
            temperature,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: AnthropicResponse = response.json().await?;
        body.content
            .into_iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text)
            .ok_or(ProviderError::EmptyContent)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_client() -> ProviderClient {
        let config = Config {
            provider: Provider::Mock,
            openai_api_key: None,
            anthropic_api_key: None,
            port: 5000,
            rust_log: "info".to_string(),
        };
        ProviderClient::from_config(&config)
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_mock_client_is_unavailable() {
        let client = mock_client();
        assert!(!client.is_available());
        assert_eq!(client.provider_name(), "mock");
    }

    #[tokio::test]
    async fn test_mock_client_call_returns_not_configured() {
        let client = mock_client();
        let result = client.call("prompt", "system", 100, 0.7).await;
        assert!(matches!(result, Err(ProviderError::NotConfigured)));
    }

    #[test]
    fn test_openai_key_ignored_when_anthropic_selected() {
        let config = Config {
            provider: Provider::Anthropic,
            openai_api_key: Some("sk-test".to_string()),
            anthropic_api_key: None,
            port: 5000,
            rust_log: "info".to_string(),
        };
        let client = ProviderClient::from_config(&config);
        assert!(!client.is_available());
    }
}
