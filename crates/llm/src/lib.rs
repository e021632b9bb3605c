//! Banter LLM Service
//!
//! Provides chat-completion inference with support for:
//! - Ollama chat API integration for production
//! - Mock LLM service for testing and development
//! - Configurable base URL, model, and request timeout

pub mod mock;
pub mod ollama;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("LLM configuration error: {0}")]
    Configuration(String),

    #[error("LLM request error: {0}")]
    Request(String),

    #[error("LLM service unavailable: {message}")]
    Unavailable {
        message: String,
        /// HTTP status from the inference server, when it responded at all
        upstream_status: Option<u16>,
    },

    #[error("Invalid LLM response: {0}")]
    InvalidResponse(String),
}

impl From<LlmError> for banter_common::Error {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Unavailable {
                message,
                upstream_status,
            } => banter_common::Error::ServiceUnavailable {
                message,
                upstream_status,
            },
            other => banter_common::Error::Internal(other.to_string()),
        }
    }
}

/// Role of a chat message sent to the inference server.
///
/// The wire protocol also accepts `system`; nothing here ever sends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmRole {
    User,
    Assistant,
}

/// One `{role, content}` pair of the outbound chat request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmMessage {
    pub role: LlmRole,
    pub content: String,
}

/// Default Ollama endpoint for local development
const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default model when OLLAMA_MODEL is unset
const DEFAULT_MODEL: &str = "llama3";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// LLM service configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// LLM provider (ollama, mock)
    pub provider: String,
    /// Base URL of the Ollama server
    pub base_url: String,
    /// Model name passed on every chat request
    pub model: String,
    /// Upper bound on a single inference call
    pub timeout_secs: u64,
}

impl LlmConfig {
    /// Create LLM config from environment variables.
    pub fn from_env() -> Result<Self, LlmError> {
        let provider = std::env::var("LLM_PROVIDER").unwrap_or_else(|_| "ollama".to_string());

        let base_url =
            std::env::var("OLLAMA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let model = std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        if model.trim().is_empty() {
            return Err(LlmError::Configuration(
                "OLLAMA_MODEL must not be empty".to_string(),
            ));
        }

        let timeout_secs = std::env::var("OLLAMA_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            provider,
            base_url,
            model,
            timeout_secs,
        })
    }
}

/// LLM service trait for different implementations.
#[async_trait::async_trait]
pub trait LlmService: Send + Sync {
    /// Produce an assistant reply for the full ordered message history.
    ///
    /// The history carries every prior turn of the conversation; no
    /// windowing or truncation happens on the way out.
    async fn get_reply(&self, history: &[LlmMessage]) -> Result<String, LlmError>;
}

/// Factory for creating LlmService implementations.
pub struct LlmServiceFactory;

impl LlmServiceFactory {
    /// Create an LlmService based on configuration.
    pub fn create(config: LlmConfig) -> Result<Box<dyn LlmService>, LlmError> {
        match config.provider.as_str() {
            "ollama" => {
                tracing::info!(
                    base_url = %config.base_url,
                    model = %config.model,
                    "Creating Ollama LLM service"
                );
                Ok(Box::new(ollama::OllamaService::new(&config)?))
            }
            "mock" => {
                tracing::info!("Creating mock LLM service");
                Ok(Box::new(mock::MockLlmService::new()))
            }
            provider => Err(LlmError::Configuration(format!(
                "Unknown LLM provider: {}. Supported providers: ollama, mock",
                provider
            ))),
        }
    }
}
