//! Mock LLM Service Implementation
//!
//! Used by `LlmServiceFactory` when provider is `"mock"` and by tests that
//! need a scripted inference server. Records every call for assertions.
//! Thread-safe via `Arc<Mutex<>>`.

use crate::{LlmError, LlmMessage, LlmService};
use std::sync::{Arc, Mutex};

/// Mock LLM service with deterministic replies.
#[derive(Debug, Clone)]
pub struct MockLlmService {
    reply: Option<String>,
    fail_unavailable: bool,
    calls: Arc<Mutex<Vec<Vec<LlmMessage>>>>,
}

impl MockLlmService {
    /// Create a mock that echoes the last message of the history.
    pub fn new() -> Self {
        Self {
            reply: None,
            fail_unavailable: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that always answers with a fixed reply.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            ..Self::new()
        }
    }

    /// Create a mock that fails every call as if the server were down.
    pub fn unavailable() -> Self {
        Self {
            fail_unavailable: true,
            ..Self::new()
        }
    }

    /// Return the history passed to each recorded call.
    pub fn recorded_calls(&self) -> Vec<Vec<LlmMessage>> {
        self.calls
            .lock()
            .expect("calls lock poisoned — prior test panicked")
            .clone()
    }

    /// Clear all recorded calls.
    pub fn reset(&self) {
        self.calls
            .lock()
            .expect("calls lock poisoned — prior test panicked")
            .clear();
    }
}

impl Default for MockLlmService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmService for MockLlmService {
    async fn get_reply(&self, history: &[LlmMessage]) -> Result<String, LlmError> {
        tracing::debug!(messages = history.len(), "Mock LLM: recording call");
        self.calls
            .lock()
            .map_err(|e| LlmError::Request(format!("calls lock poisoned: {e}")))?
            .push(history.to_vec());

        if self.fail_unavailable {
            return Err(LlmError::Unavailable {
                message: "Cannot connect to Ollama at http://localhost:11434/api/chat. \
                          Make sure Ollama is running"
                    .to_string(),
                upstream_status: None,
            });
        }

        if let Some(reply) = &self.reply {
            return Ok(reply.clone());
        }

        let last = history
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or("empty");
        Ok(format!("Mock reply to: {}", last))
    }
}
