//! Chat request/response DTOs for the v1 API.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{ChatMessage, ConversationTurn};

/// Request body for `POST /v1/messages`.
#[derive(Debug, Clone, Deserialize, Validate, utoipa::ToSchema)]
pub struct ChatMessageRequest {
    #[validate(length(min = 1, message = "user_id cannot be empty"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "text cannot be empty"))]
    pub text: String,
}

/// Query parameters for `GET` and `DELETE /v1/messages`.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MessagesQuery {
    /// Owner of the conversation. Required.
    pub user_id: Option<String>,
}

/// The assistant's reply, shaped like the incoming message.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ChatMessageResponse {
    pub user_id: String,
    pub text: String,
}

impl From<ChatMessage> for ChatMessageResponse {
    fn from(message: ChatMessage) -> Self {
        Self {
            user_id: message.user_id,
            text: message.text,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ConversationTurnResponse {
    /// `user` or `assistant`.
    pub role: String,
    pub content: String,
}

impl From<ConversationTurn> for ConversationTurnResponse {
    fn from(turn: ConversationTurn) -> Self {
        Self {
            role: turn.role.to_string(),
            content: turn.content,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ConversationHistoryResponse {
    pub user_id: String,
    pub messages: Vec<ConversationTurnResponse>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ClearConversationResponse {
    pub user_id: String,
    pub removed: u64,
}
