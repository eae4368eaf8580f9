//! Chat-completion client.
//!
//! One `LlmClient` is constructed at startup and shared by both pipeline
//! steps; there is no global handle and no per-request re-initialization.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// User-Agent string identifying this client
const USER_AGENT: &str = concat!("prospecta/", env!("CARGO_PKG_VERSION"));

/// Default timeout for HTTP requests
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("malformed response: {0}")]
    Shape(String),
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// "system", "user" or "assistant"
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseRaw {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: String,
}

/// Client for an OpenAI-style chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct LlmClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: Option<f32>,
}

impl LlmClient {
    /// Create a client for the given model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
            temperature: None,
        })
    }

    /// Point the client at a different endpoint (proxies, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one chat completion and return the first choice's content.
    ///
    /// No streaming, no multi-turn state; each call is independent.
    pub async fn chat(&self, messages: &[Message]) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "chat completion request rejected");
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let raw: ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| LlmError::Shape(e.to_string()))?;

        raw.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::Shape("response contained no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_constructors_set_roles() {
        assert_eq!(Message::system("s").role, "system");
        assert_eq!(Message::user("u").role, "user");
    }

    #[test]
    fn client_reports_its_configured_model() {
        let client = LlmClient::new("key", "gpt-4o-mini").unwrap();
        assert_eq!(client.model(), "gpt-4o-mini");
    }

    #[test]
    fn request_serializes_without_temperature_when_unset() {
        let messages = [Message::user("hi")];
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: &messages,
            temperature: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("temperature"));
        assert!(json.contains("\"model\":\"gpt-4o-mini\""));
    }

    #[test]
    fn response_parses_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}]}"#;
        let raw: ChatResponseRaw = serde_json::from_str(body).unwrap();
        assert_eq!(raw.choices[0].message.content, "hello");
    }
}
