//! v1 Diary handlers.

use axum::extract::{Path, State};
use axum_extra::extract::Query;
use validator::Validate;

use crate::api::v1::dto::{
    CreateDiaryEntryRequest, CreateDiaryEntryResponse, DeleteDiaryEntryResponse,
    DiaryEntryQuery, DiaryEntryResponse, ListDiaryEntriesQuery, ListDiaryEntriesResponse,
};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::{AppJson, AppState};

/// `POST /api/v1/diary`
#[utoipa::path(
    post,
    path = "/api/v1/diary",
    tag = "diary",
    operation_id = "diary.create",
    request_body = CreateDiaryEntryRequest,
    responses(
        (status = 201, description = "Entry stored and personality updated", body = CreateDiaryEntryResponse),
        (status = 400, description = "Duplicate title, invalid body or unusable analysis", body = ApiError),
    )
)]
pub async fn create_entry(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateDiaryEntryRequest>,
) -> ApiResponse<CreateDiaryEntryResponse> {
    if let Err(e) = req.validate() {
        return ApiResponse::error(ErrorCode::InvalidRequest, e.to_string());
    }

    match state
        .diary
        .create_entry(&req.user_id, &req.titulo, &req.entrada)
        .await
    {
        Ok((entry, scores)) => ApiResponse::created(CreateDiaryEntryResponse::new(entry, scores)),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/diary`
#[utoipa::path(
    get,
    path = "/api/v1/diary",
    tag = "diary",
    operation_id = "diary.list",
    params(ListDiaryEntriesQuery),
    responses(
        (status = 200, description = "Entries for the user, oldest first", body = ListDiaryEntriesResponse),
        (status = 400, description = "Missing user_id", body = ApiError),
    )
)]
pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<ListDiaryEntriesQuery>,
) -> ApiResponse<ListDiaryEntriesResponse> {
    let Some(user_id) = query.user_id.filter(|id| !id.trim().is_empty()) else {
        return ApiResponse::error(ErrorCode::InvalidRequest, "user_id is required");
    };

    match state.diary.list_entries(&user_id).await {
        Ok(entries) => ApiResponse::success(ListDiaryEntriesResponse {
            entries: entries.into_iter().map(DiaryEntryResponse::from).collect(),
        }),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/diary/{titulo}`
#[utoipa::path(
    get,
    path = "/api/v1/diary/{titulo}",
    tag = "diary",
    operation_id = "diary.get",
    params(
        ("titulo" = String, Path, description = "Entry title"),
        DiaryEntryQuery,
    ),
    responses(
        (status = 200, description = "Entry found", body = DiaryEntryResponse),
        (status = 404, description = "Entry not found", body = ApiError),
    )
)]
pub async fn get_entry(
    State(state): State<AppState>,
    Path(titulo): Path<String>,
    Query(query): Query<DiaryEntryQuery>,
) -> ApiResponse<DiaryEntryResponse> {
    match state
        .diary
        .get_entry(query.user_id.as_deref(), &titulo)
        .await
    {
        Ok(entry) => ApiResponse::success(DiaryEntryResponse::from(entry)),
        Err(e) => e.into(),
    }
}

/// `DELETE /api/v1/diary/{titulo}`
#[utoipa::path(
    delete,
    path = "/api/v1/diary/{titulo}",
    tag = "diary",
    operation_id = "diary.delete",
    params(
        ("titulo" = String, Path, description = "Entry title"),
        DiaryEntryQuery,
    ),
    responses(
        (status = 200, description = "Entry deleted", body = DeleteDiaryEntryResponse),
        (status = 404, description = "Entry not found", body = ApiError),
    )
)]
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(titulo): Path<String>,
    Query(query): Query<DiaryEntryQuery>,
) -> ApiResponse<DeleteDiaryEntryResponse> {
    match state
        .diary
        .delete_entry(query.user_id.as_deref(), &titulo)
        .await
    {
        Ok(()) => ApiResponse::success(DeleteDiaryEntryResponse {
            detail: format!("Diary entry '{titulo}' deleted"),
        }),
        Err(e) => e.into(),
    }
}
