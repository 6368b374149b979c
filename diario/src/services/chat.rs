use std::sync::Arc;

use crate::db::ConversationStore;
use crate::error::{DiarioError, Result};
use crate::llm::prompts::THERAPIST_SYSTEM_PROMPT;
use crate::llm::LlmProvider;
use crate::models::{conversation_key, ChatMessage, ConversationTurn};

/// Therapist-style chat over a per-user conversation list.
#[derive(Clone)]
pub struct ChatService {
    conversations: Arc<dyn ConversationStore>,
    llm: LlmProvider,
}

impl ChatService {
    pub fn new(conversations: Arc<dyn ConversationStore>, llm: LlmProvider) -> Self {
        Self { conversations, llm }
    }

    /// Record the user's message, ask the model for a reply and record that too.
    ///
    /// When the model gives nothing back only the user's turn is kept.
    pub async fn process_message(&self, user_id: &str, text: &str) -> Result<ChatMessage> {
        let key = conversation_key(user_id);

        let len = self
            .conversations
            .push_turn(&key, &ConversationTurn::user(text))
            .await?;
        tracing::debug!(user_id, turns = len, "User turn stored");

        let history = self.conversations.list_turns(&key).await?;

        let reply = self
            .llm
            .respond(THERAPIST_SYSTEM_PROMPT, &history)
            .await
            .ok_or_else(|| {
                DiarioError::Internal("The language model returned no reply".to_string())
            })?;

        self.conversations
            .push_turn(&key, &ConversationTurn::assistant(reply.clone()))
            .await?;

        Ok(ChatMessage {
            user_id: user_id.to_string(),
            text: reply,
        })
    }

    pub async fn history(&self, user_id: &str) -> Result<Vec<ConversationTurn>> {
        self.conversations
            .list_turns(&conversation_key(user_id))
            .await
    }

    pub async fn clear(&self, user_id: &str) -> Result<u64> {
        let removed = self
            .conversations
            .clear_turns(&conversation_key(user_id))
            .await?;
        tracing::info!(user_id, removed, "Conversation cleared");
        Ok(removed)
    }
}
