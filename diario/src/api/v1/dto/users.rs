//! User-facing analysis DTOs for the v1 API.

use serde::Serialize;

use crate::intelligence::AdviceItem;
use crate::models::PersonalityScores;

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct PersonalityResponse {
    pub user_id: String,
    pub personality: PersonalityScores,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct AdviceResponse {
    pub user_id: String,
    pub advice: Vec<AdviceItem>,
}
