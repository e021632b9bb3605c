//! Conversations domain: chat turns, history, titles

pub mod api;
pub mod domain;
pub mod repository;
pub mod service;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
pub use domain::validation::{
    validate_conversation_id, validate_message_content, validate_title, MESSAGE_MAX_CHARS,
    TITLE_MAX_CHARS,
};

// Re-export repository types
pub use repository::{ConversationStore, InMemoryConversationStore, PgConversationStore};

// Re-export service types
pub use service::{ChatOutcome, ChatService};

// Re-export API types
pub use api::routes;
pub use api::ConversationsState;
