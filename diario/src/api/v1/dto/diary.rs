//! Diary request/response DTOs for the v1 API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{DiaryEntry, PersonalityScores};

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Request body for `POST /v1/diary`.
#[derive(Debug, Clone, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateDiaryEntryRequest {
    #[validate(length(min = 1, message = "user_id cannot be empty"))]
    pub user_id: String,
    /// Entry title, unique per user.
    #[validate(length(min = 1, message = "titulo cannot be empty"))]
    pub titulo: String,
    /// Free-text body of the entry.
    #[validate(length(min = 1, message = "entrada cannot be empty"))]
    pub entrada: String,
}

/// Query parameters for `GET /v1/diary`.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListDiaryEntriesQuery {
    /// Owner of the entries. Required.
    pub user_id: Option<String>,
}

/// Query parameters for `GET` and `DELETE /v1/diary/{titulo}`.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DiaryEntryQuery {
    /// Restrict the title lookup to this user.
    pub user_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Response DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct DiaryEntryResponse {
    pub id: String,
    pub user_id: String,
    pub titulo: String,
    pub entrada: String,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
}

impl From<DiaryEntry> for DiaryEntryResponse {
    fn from(entry: DiaryEntry) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            titulo: entry.titulo,
            entrada: entry.entrada,
            created_at: entry.created_at,
        }
    }
}

/// Response for `POST /v1/diary`: the stored entry plus the refreshed scores.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct CreateDiaryEntryResponse {
    pub id: String,
    pub user_id: String,
    pub titulo: String,
    pub entrada: String,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    pub personality: PersonalityScores,
}

impl CreateDiaryEntryResponse {
    pub fn new(entry: DiaryEntry, personality: PersonalityScores) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            titulo: entry.titulo,
            entrada: entry.entrada,
            created_at: entry.created_at,
            personality,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ListDiaryEntriesResponse {
    pub entries: Vec<DiaryEntryResponse>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct DeleteDiaryEntryResponse {
    pub detail: String,
}
