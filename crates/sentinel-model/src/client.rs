//! Chat-completions HTTP client
//!
//! Thin client for an OpenAI-compatible chat-completions endpoint. One
//! attempt per call, bounded by a request timeout; recovery is the caller's
//! fallback to the rule engine, not retries.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Configuration for the model client
#[derive(Debug, Clone)]
pub struct ModelClientConfig {
    /// Chat-completions endpoint URL
    pub endpoint: String,

    /// Model name sent with each request
    pub model: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ModelClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            timeout_ms: 15_000,
        }
    }
}

impl ModelClientConfig {
    /// Create config from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint: std::env::var("SENTINEL_MODEL_ENDPOINT")
                .unwrap_or(defaults.endpoint),
            model: std::env::var("SENTINEL_MODEL").unwrap_or(defaults.model),
            timeout_ms: std::env::var("SENTINEL_MODEL_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_ms),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

/// HTTP client for an OpenAI-compatible chat-completions API
pub struct ModelClient {
    client: Client,
    config: ModelClientConfig,
    api_key: String,
}

impl ModelClient {
    /// Create a new client with the given credential and configuration
    pub fn new(api_key: impl Into<String>, config: ModelClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ModelError::Http(e.to_string()))?;

        Ok(Self {
            client,
            config,
            api_key: api_key.into(),
        })
    }

    /// Model name sent with each request
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Request a single completion and return the assistant message text
    pub async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: 0.1,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ModelError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ModelError::Http(format!("unexpected status: {}", status)));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| ModelError::MalformedResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ModelError::MalformedResponse("completion has no content".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ModelClientConfig::default();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout_ms, 15_000);
        assert!(config.endpoint.contains("chat/completions"));
    }

    #[test]
    fn test_client_construction() {
        let client = ModelClient::new("sk-test", ModelClientConfig::default()).unwrap();
        assert_eq!(client.model(), "gpt-4o-mini");
    }

    #[test]
    fn test_chat_response_parsing() {
        let payload = r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}]}"#;
        let response: ChatResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("hello")
        );

        let empty: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(empty.choices.is_empty());
    }
}
