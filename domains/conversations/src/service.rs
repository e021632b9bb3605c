//! Chat service: conversation persistence plus LLM turn-taking
//!
//! One entry point per API operation. `process_message` owns the write path:
//! it appends the user message, collects the assistant reply for the full
//! history, and persists the updated document.

use std::sync::Arc;

use uuid::Uuid;

use banter_common::{Error, Result};
use banter_llm::{LlmMessage, LlmRole, LlmService};

use crate::domain::entities::{
    derive_title, Conversation, ConversationSummary, Message, MessageRole,
};
use crate::repository::ConversationStore;

/// Result of one processed chat turn
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    pub conversation_id: Uuid,
    pub reply: String,
    pub messages: Vec<Message>,
}

#[derive(Clone)]
pub struct ChatService {
    store: Arc<dyn ConversationStore>,
    llm: Arc<dyn LlmService>,
}

impl ChatService {
    pub fn new(store: Arc<dyn ConversationStore>, llm: Arc<dyn LlmService>) -> Self {
        Self { store, llm }
    }

    /// Process one chat turn.
    ///
    /// The user message is persisted before the LLM is called, so a failed
    /// turn still leaves it in the conversation; the client retries by
    /// sending the next message with the same conversation id. There is no
    /// rollback and no retry here.
    pub async fn process_message(
        &self,
        content: String,
        conversation_id: Option<Uuid>,
    ) -> Result<ChatOutcome> {
        let id = conversation_id.unwrap_or_else(Uuid::new_v4);

        let mut conversation = match self.store.find(id).await? {
            Some(existing) => existing,
            None => Conversation::new(id),
        };

        conversation.push(Message::user(content)?);
        self.store.save(&conversation).await?;

        let history = llm_history(&conversation.messages);
        let reply = self.llm.get_reply(&history).await?;

        conversation.push(Message::assistant(reply.clone())?);

        if conversation.title.is_none() {
            conversation.title = Some(derive_title(&conversation.messages));
        }

        self.store.save(&conversation).await?;

        Ok(ChatOutcome {
            conversation_id: conversation.id,
            reply,
            messages: conversation.messages,
        })
    }

    /// Fetch a conversation with its full message list
    pub async fn chat_history(&self, id: Uuid) -> Result<Conversation> {
        self.store
            .find(id)
            .await?
            .ok_or_else(|| Error::NotFound("Conversation not found".to_string()))
    }

    /// List every conversation, most recently updated first
    pub async fn list_conversations(&self) -> Result<Vec<ConversationSummary>> {
        self.store.list_summaries().await
    }

    /// Rename a conversation
    pub async fn rename_conversation(&self, id: Uuid, title: &str) -> Result<ConversationSummary> {
        self.store
            .set_title(id, title)
            .await?
            .ok_or_else(|| Error::NotFound("Conversation not found".to_string()))
    }
}

/// Translate the stored message list into the LLM wire shape
fn llm_history(messages: &[Message]) -> Vec<LlmMessage> {
    messages
        .iter()
        .map(|m| LlmMessage {
            role: match m.role {
                MessageRole::User => LlmRole::User,
                MessageRole::Assistant => LlmRole::Assistant,
            },
            content: m.content.clone(),
        })
        .collect()
}
