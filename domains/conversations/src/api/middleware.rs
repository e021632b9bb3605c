//! Conversations domain state

use crate::service::ChatService;

/// Application state for the Conversations domain
#[derive(Clone)]
pub struct ConversationsState {
    pub chat: ChatService,
}

impl ConversationsState {
    pub fn new(chat: ChatService) -> Self {
        Self { chat }
    }
}
