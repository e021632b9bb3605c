//! In-memory conversation store
//!
//! Keeps conversations in a shared map for tests. Mirrors the Postgres
//! store's behavior, including read-time title fallback and the
//! last-modified bump on rename. Thread-safe via `Arc<Mutex<>>`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use banter_common::{Error, Result};

use crate::domain::entities::{derive_title, Conversation, ConversationSummary};
use crate::repository::ConversationStore;

#[derive(Debug, Clone)]
pub struct InMemoryConversationStore {
    conversations: Arc<Mutex<HashMap<Uuid, Conversation>>>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self {
            conversations: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn find(&self, id: Uuid) -> Result<Option<Conversation>> {
        let stored = self
            .conversations
            .lock()
            .map_err(|e| Error::Internal(format!("conversations lock poisoned: {e}")))?;

        Ok(stored.get(&id).cloned())
    }

    async fn save(&self, conversation: &Conversation) -> Result<()> {
        let mut stored = self
            .conversations
            .lock()
            .map_err(|e| Error::Internal(format!("conversations lock poisoned: {e}")))?;

        stored.insert(conversation.id, conversation.clone());
        Ok(())
    }

    async fn list_summaries(&self) -> Result<Vec<ConversationSummary>> {
        let stored = self
            .conversations
            .lock()
            .map_err(|e| Error::Internal(format!("conversations lock poisoned: {e}")))?;

        let mut entries: Vec<&Conversation> = stored.values().collect();
        entries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        Ok(entries
            .into_iter()
            .map(|conv| ConversationSummary {
                id: conv.id,
                title: conv
                    .title
                    .clone()
                    .unwrap_or_else(|| derive_title(&conv.messages)),
            })
            .collect())
    }

    async fn set_title(&self, id: Uuid, title: &str) -> Result<Option<ConversationSummary>> {
        let mut stored = self
            .conversations
            .lock()
            .map_err(|e| Error::Internal(format!("conversations lock poisoned: {e}")))?;

        match stored.get_mut(&id) {
            Some(conv) => {
                conv.title = Some(title.to_string());
                conv.updated_at = Utc::now();
                Ok(Some(ConversationSummary {
                    id,
                    title: title.to_string(),
                }))
            }
            None => Ok(None),
        }
    }
}
