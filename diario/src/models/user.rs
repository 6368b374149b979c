use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PersonalityScores;

/// A user record carrying the latest derived personality scores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub user_id: String,
    pub personality: Option<PersonalityScores>,
    pub updated_at: DateTime<Utc>,
}
