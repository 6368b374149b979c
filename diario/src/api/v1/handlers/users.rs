//! v1 User analysis handlers.

use axum::extract::{Path, State};

use crate::api::v1::dto::{AdviceResponse, PersonalityResponse};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;

/// `GET /api/v1/users/{user_id}/personality`
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/personality",
    tag = "users",
    operation_id = "users.personality",
    params(("user_id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "Latest Big-Five scores", body = PersonalityResponse),
        (status = 404, description = "No scores recorded for the user", body = ApiError),
    )
)]
pub async fn get_personality(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResponse<PersonalityResponse> {
    match state.diary.personality(&user_id).await {
        Ok(personality) => ApiResponse::success(PersonalityResponse {
            user_id,
            personality,
        }),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/users/{user_id}/advice`
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/advice",
    tag = "users",
    operation_id = "users.advice",
    params(("user_id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "Emotional advice based on the diary", body = AdviceResponse),
        (status = 404, description = "The user has no diary entries", body = ApiError),
        (status = 500, description = "The model returned no advice", body = ApiError),
    )
)]
pub async fn get_advice(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResponse<AdviceResponse> {
    match state.diary.advice(&user_id).await {
        Ok(advice) => ApiResponse::success(AdviceResponse { user_id, advice }),
        Err(e) => e.into(),
    }
}
