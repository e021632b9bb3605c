//! Ollama Chat API Implementation
//!
//! Calls the Ollama chat endpoint (`{base_url}/api/chat`) with the full
//! message history as a single non-streaming request.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{LlmConfig, LlmError, LlmMessage, LlmService};

/// Ollama chat request body
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [LlmMessage],
    stream: bool,
}

/// Ollama chat response body
#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Ollama LLM service implementation
pub struct OllamaService {
    client: Client,
    chat_url: String,
    model: String,
}

impl OllamaService {
    /// Create a new Ollama service
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                LlmError::Configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        let chat_url = format!("{}/api/chat", config.base_url.trim_end_matches('/'));

        Ok(Self {
            client,
            chat_url,
            model: config.model.clone(),
        })
    }

    fn classify_send_error(&self, e: reqwest::Error) -> LlmError {
        if e.is_connect() || e.is_timeout() {
            LlmError::Unavailable {
                message: format!(
                    "Cannot connect to Ollama at {}. Make sure Ollama is running",
                    self.chat_url
                ),
                upstream_status: None,
            }
        } else {
            LlmError::Request(format!("HTTP request failed: {}", e))
        }
    }
}

#[async_trait::async_trait]
impl LlmService for OllamaService {
    async fn get_reply(&self, history: &[LlmMessage]) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: &self.model,
            messages: history,
            stream: false,
        };

        tracing::debug!(
            model = %self.model,
            messages = history.len(),
            "Sending Ollama chat request"
        );

        let response = self
            .client
            .post(&self.chat_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Unavailable {
                message: format!(
                    "Ollama API error: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
                upstream_status: Some(status.as_u16()),
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            LlmError::InvalidResponse(format!("Failed to parse Ollama response: {}", e))
        })?;

        match parsed.message.and_then(|m| m.content) {
            Some(content) if !content.is_empty() => Ok(content),
            _ => Err(LlmError::InvalidResponse(
                "Ollama response is missing message content".to_string(),
            )),
        }
    }
}
