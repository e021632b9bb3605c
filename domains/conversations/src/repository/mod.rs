//! Storage for the Conversations domain
//!
//! A conversation is stored as one document: the whole record, messages
//! included, is written back in a single statement. Implementations exist
//! for Postgres and for an in-memory map used by tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use banter_common::Result;

use crate::domain::entities::{Conversation, ConversationSummary};

pub use memory::InMemoryConversationStore;
pub use postgres::PgConversationStore;

/// Document-style conversation persistence
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Load a conversation with its full message list
    async fn find(&self, id: Uuid) -> Result<Option<Conversation>>;

    /// Write the whole conversation, creating it or replacing the stored copy
    async fn save(&self, conversation: &Conversation) -> Result<()>;

    /// List every conversation, most recently updated first
    async fn list_summaries(&self) -> Result<Vec<ConversationSummary>>;

    /// Rename a conversation. Returns `None` when no such conversation
    /// exists.
    async fn set_title(&self, id: Uuid, title: &str) -> Result<Option<ConversationSummary>>;
}
