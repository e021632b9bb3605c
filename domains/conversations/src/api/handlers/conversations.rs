//! Conversation management API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use banter_common::{Result, ValidatedJson};

use crate::api::handlers::chat::ChatHistoryResponse;
use crate::api::middleware::ConversationsState;
use crate::domain::entities::ConversationSummary;
use crate::domain::validation;

/// Conversation summary DTO for list responses
#[derive(Debug, Serialize)]
pub struct ConversationSummaryResponse {
    pub id: Uuid,
    pub title: String,
}

impl From<ConversationSummary> for ConversationSummaryResponse {
    fn from(s: ConversationSummary) -> Self {
        Self {
            id: s.id,
            title: s.title,
        }
    }
}

/// Request for renaming a conversation
#[derive(Debug, Deserialize, Validate)]
pub struct RenameConversationRequest {
    /// New conversation title
    #[validate(custom(
        function = "validate_title_field",
        message = "Title must be a non-empty string of at most 200 characters"
    ))]
    pub title: String,
}

/// Custom validation function for the title
fn validate_title_field(title: &str) -> std::result::Result<(), validator::ValidationError> {
    if validation::validate_title(title) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_title"))
    }
}

/// List all conversations, most recently updated first
pub async fn list_conversations(
    State(state): State<ConversationsState>,
) -> Result<Json<Vec<ConversationSummaryResponse>>> {
    let summaries = state.chat.list_conversations().await?;

    Ok(Json(summaries.into_iter().map(Into::into).collect()))
}

/// Rename a conversation
pub async fn rename_conversation(
    State(state): State<ConversationsState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<RenameConversationRequest>,
) -> Result<Json<ConversationSummaryResponse>> {
    let summary = state
        .chat
        .rename_conversation(id, req.title.trim())
        .await?;

    Ok(Json(summary.into()))
}

/// Get the messages for a conversation
pub async fn get_conversation_messages(
    State(state): State<ConversationsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChatHistoryResponse>> {
    let conversation = state.chat.chat_history(id).await?;

    Ok(Json(ChatHistoryResponse {
        conversation_id: conversation.id,
        messages: conversation.messages.into_iter().map(Into::into).collect(),
    }))
}
