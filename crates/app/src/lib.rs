//! Banter application composition root
//!
//! Wires the conversation store and LLM service into the domain router.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use banter_conversations::{ChatService, ConversationsState, PgConversationStore};
use banter_llm::{LlmConfig, LlmServiceFactory};

/// Create the main application router backed by Postgres and the configured
/// LLM provider
pub async fn create_app(pool: PgPool) -> Result<Router, anyhow::Error> {
    let store = PgConversationStore::new(pool);

    let llm_config = LlmConfig::from_env()?;
    let llm = LlmServiceFactory::create(llm_config)?;

    let chat = ChatService::new(Arc::new(store), Arc::from(llm));

    Ok(build_router(chat))
}

/// Build the application router around an already-assembled chat service.
/// Tests use this to substitute in-memory and mock implementations.
pub fn build_router(chat: ChatService) -> Router {
    let state = ConversationsState::new(chat);

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Banter API v0.1.0" }))
        .merge(banter_conversations::routes().with_state(state))
        .fallback(not_found)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// JSON 404 for unknown routes
async fn not_found() -> banter_common::Error {
    banter_common::Error::NotFound("Route not found".to_string())
}
