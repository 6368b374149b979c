use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Diario API",
        version = "1.0.0",
        description = "Diary and therapist-chat backend with LLM-derived Big-Five personality scores.",
    ),
    paths(
        handlers::health::health_check,
        handlers::diary::create_entry,
        handlers::diary::list_entries,
        handlers::diary::get_entry,
        handlers::diary::delete_entry,
        handlers::messages::send_message,
        handlers::messages::get_history,
        handlers::messages::clear_history,
        handlers::users::get_personality,
        handlers::users::get_advice,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        // Diary
        dto::diary::CreateDiaryEntryRequest,
        dto::diary::CreateDiaryEntryResponse,
        dto::diary::DiaryEntryResponse,
        dto::diary::ListDiaryEntriesResponse,
        dto::diary::DeleteDiaryEntryResponse,
        // Messages
        dto::messages::ChatMessageRequest,
        dto::messages::ChatMessageResponse,
        dto::messages::ConversationTurnResponse,
        dto::messages::ConversationHistoryResponse,
        dto::messages::ClearConversationResponse,
        // Users
        dto::users::PersonalityResponse,
        dto::users::AdviceResponse,
        crate::models::PersonalityScores,
        crate::intelligence::AdviceItem,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::DatabaseStatus,
        handlers::health::LlmStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "diary", description = "Diary entries and personality analysis"),
        (name = "messages", description = "Therapist chat and conversation history"),
        (name = "users", description = "Per-user personality scores and advice"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
