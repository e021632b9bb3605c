//! Domain entities for the Conversations domain
//!
//! A conversation is one persisted document: its identifier, optional title,
//! and the ordered message list, plus store-managed timestamps. Messages are
//! embedded, never stored on their own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use banter_common::{Error, Result};

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// Longest derived title before truncation kicks in
const DERIVED_TITLE_MAX_CHARS: usize = 50;

/// Marker appended to truncated derived titles
const TITLE_ELLIPSIS: &str = "...";

/// Title used when a conversation has no user message to derive from
const FALLBACK_TITLE: &str = "New Conversation";

/// Message entity: one role-tagged turn with its append timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a new user message
    pub fn user(content: String) -> Result<Self> {
        Self::validate_content(&content)?;

        Ok(Message {
            role: MessageRole::User,
            content,
            timestamp: Utc::now(),
        })
    }

    /// Create a new assistant message
    pub fn assistant(content: String) -> Result<Self> {
        Self::validate_content(&content)?;

        Ok(Message {
            role: MessageRole::Assistant,
            content,
            timestamp: Utc::now(),
        })
    }

    fn validate_content(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(Error::Validation(
                "Message content cannot be empty or whitespace-only".to_string(),
            ));
        }
        Ok(())
    }
}

/// Conversation entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub title: Option<String>,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Create a new empty conversation. Nothing is persisted until the
    /// store's `save` is called.
    pub fn new(id: Uuid) -> Self {
        let now = Utc::now();
        Conversation {
            id,
            title: None,
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a message, keeping insertion order and bumping the
    /// last-modified timestamp.
    pub fn push(&mut self, message: Message) {
        self.updated_at = message.timestamp;
        self.messages.push(message);
    }

    /// Title to show for this conversation: the stored title, or the
    /// derived fallback when none has been set.
    pub fn display_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| derive_title(&self.messages))
    }
}

/// Derive a conversation title from its message list.
///
/// Takes the first user message, trims surrounding whitespace, and truncates
/// past 50 characters with an ellipsis marker. Falls back to a fixed
/// placeholder when no user message exists. Write-time derivation and
/// read-time fallback both go through here so they can never disagree.
pub fn derive_title(messages: &[Message]) -> String {
    let first_user_text = messages
        .iter()
        .find(|m| m.role == MessageRole::User)
        .map(|m| m.content.trim());

    match first_user_text {
        Some(text) if !text.is_empty() => {
            if text.chars().count() > DERIVED_TITLE_MAX_CHARS {
                let truncated: String = text.chars().take(DERIVED_TITLE_MAX_CHARS).collect();
                format!("{}{}", truncated, TITLE_ELLIPSIS)
            } else {
                text.to_string()
            }
        }
        _ => FALLBACK_TITLE.to_string(),
    }
}

/// Conversation list entry: identifier plus display title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: Uuid,
    pub title: String,
}
