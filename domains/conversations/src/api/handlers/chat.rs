//! Chat API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use banter_common::{Error, Result, ValidatedJson};

use crate::api::middleware::ConversationsState;
use crate::domain::entities::{Message, MessageRole};
use crate::domain::validation;

/// Request for sending a chat message
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    /// Message text
    #[validate(custom(
        function = "validate_message_field",
        message = "Message must be a non-empty string of at most 10000 characters"
    ))]
    pub message: String,

    /// Conversation to continue; omit to start a new one
    #[validate(custom(
        function = "validate_conversation_id_field",
        message = "Invalid conversation ID format"
    ))]
    pub conversation_id: Option<String>,
}

/// Custom validation function for the message body
fn validate_message_field(message: &str) -> std::result::Result<(), validator::ValidationError> {
    if validation::validate_message_content(message) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_message"))
    }
}

/// Custom validation function for the conversation identifier
fn validate_conversation_id_field(id: &str) -> std::result::Result<(), validator::ValidationError> {
    if validation::validate_conversation_id(id) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_format"))
    }
}

/// Message response DTO
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self {
            role: m.role,
            content: m.content,
            timestamp: m.timestamp,
        }
    }
}

/// Response for a processed chat turn: the assistant reply plus the full
/// updated message list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub conversation_id: Uuid,
    pub message: String,
    pub messages: Vec<MessageResponse>,
}

/// Response for a conversation's message history
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistoryResponse {
    pub conversation_id: Uuid,
    pub messages: Vec<MessageResponse>,
}

/// Send a message and receive the assistant reply
pub async fn send_message(
    State(state): State<ConversationsState>,
    ValidatedJson(req): ValidatedJson<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>> {
    let conversation_id = req
        .conversation_id
        .as_deref()
        .map(Uuid::parse_str)
        .transpose()
        .map_err(|_| Error::Validation("Invalid conversation ID format".to_string()))?;

    let outcome = state
        .chat
        .process_message(req.message.trim().to_string(), conversation_id)
        .await?;

    Ok(Json(SendMessageResponse {
        conversation_id: outcome.conversation_id,
        message: outcome.reply,
        messages: outcome.messages.into_iter().map(Into::into).collect(),
    }))
}

/// Get the message history for a conversation
pub async fn get_chat_history(
    State(state): State<ConversationsState>,
    Path(conversation_id): Path<Uuid>,
) -> Result<Json<ChatHistoryResponse>> {
    let conversation = state.chat.chat_history(conversation_id).await?;

    Ok(Json(ChatHistoryResponse {
        conversation_id: conversation.id,
        messages: conversation.messages.into_iter().map(Into::into).collect(),
    }))
}
