//! v1 Chat handlers.

use axum::extract::State;
use axum_extra::extract::Query;
use validator::Validate;

use crate::api::v1::dto::{
    ChatMessageRequest, ChatMessageResponse, ClearConversationResponse,
    ConversationHistoryResponse, ConversationTurnResponse, MessagesQuery,
};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::{AppJson, AppState};

/// `POST /api/v1/messages`
#[utoipa::path(
    post,
    path = "/api/v1/messages",
    tag = "messages",
    operation_id = "messages.send",
    request_body = ChatMessageRequest,
    responses(
        (status = 201, description = "Assistant reply", body = ChatMessageResponse),
        (status = 400, description = "Invalid body", body = ApiError),
        (status = 500, description = "The model returned no reply", body = ApiError),
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    AppJson(req): AppJson<ChatMessageRequest>,
) -> ApiResponse<ChatMessageResponse> {
    if let Err(e) = req.validate() {
        return ApiResponse::error(ErrorCode::InvalidRequest, e.to_string());
    }

    match state.chat.process_message(&req.user_id, &req.text).await {
        Ok(reply) => ApiResponse::created(ChatMessageResponse::from(reply)),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/messages`
#[utoipa::path(
    get,
    path = "/api/v1/messages",
    tag = "messages",
    operation_id = "messages.history",
    params(MessagesQuery),
    responses(
        (status = 200, description = "Conversation history, oldest first", body = ConversationHistoryResponse),
        (status = 400, description = "Missing user_id", body = ApiError),
    )
)]
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<MessagesQuery>,
) -> ApiResponse<ConversationHistoryResponse> {
    let Some(user_id) = query.user_id.filter(|id| !id.trim().is_empty()) else {
        return ApiResponse::error(ErrorCode::InvalidRequest, "user_id is required");
    };

    match state.chat.history(&user_id).await {
        Ok(turns) => ApiResponse::success(ConversationHistoryResponse {
            user_id,
            messages: turns
                .into_iter()
                .map(ConversationTurnResponse::from)
                .collect(),
        }),
        Err(e) => e.into(),
    }
}

/// `DELETE /api/v1/messages`
#[utoipa::path(
    delete,
    path = "/api/v1/messages",
    tag = "messages",
    operation_id = "messages.clear",
    params(MessagesQuery),
    responses(
        (status = 200, description = "Conversation cleared", body = ClearConversationResponse),
        (status = 400, description = "Missing user_id", body = ApiError),
    )
)]
pub async fn clear_history(
    State(state): State<AppState>,
    Query(query): Query<MessagesQuery>,
) -> ApiResponse<ClearConversationResponse> {
    let Some(user_id) = query.user_id.filter(|id| !id.trim().is_empty()) else {
        return ApiResponse::error(ErrorCode::InvalidRequest, "user_id is required");
    };

    match state.chat.clear(&user_id).await {
        Ok(removed) => ApiResponse::success(ClearConversationResponse { user_id, removed }),
        Err(e) => e.into(),
    }
}
