//! Route definitions for the Conversations domain API

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{chat, conversations};
use super::middleware::ConversationsState;

/// Create all Conversations domain API routes
pub fn routes() -> Router<ConversationsState> {
    Router::new()
        .route("/api/chat", post(chat::send_message))
        .route("/api/chat/{conversation_id}", get(chat::get_chat_history))
        .route(
            "/api/conversations",
            get(conversations::list_conversations),
        )
        .route(
            "/api/conversations/{id}",
            patch(conversations::rename_conversation),
        )
        .route(
            "/api/conversations/{id}/messages",
            get(conversations::get_conversation_messages),
        )
}
