use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ConversationTurn, DiaryEntry, PersonalityScores, User};

// ---------------------------------------------------------------------------
// Document store
// ---------------------------------------------------------------------------

/// CRUD operations for diary entries.
///
/// Lookups by title take an optional `user_id`. Without it the oldest entry
/// carrying that title, for any user, is used.
#[async_trait]
pub trait DiaryStore: Send + Sync {
    async fn create_entry(&self, entry: &DiaryEntry) -> Result<()>;
    async fn find_entry(&self, user_id: Option<&str>, titulo: &str) -> Result<Option<DiaryEntry>>;
    async fn list_entries(&self, user_id: &str) -> Result<Vec<DiaryEntry>>;
    async fn delete_entry(&self, user_id: Option<&str>, titulo: &str) -> Result<bool>;
}

/// User records and their personality scores.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user(&self, user_id: &str) -> Result<Option<User>>;
    /// Overwrite the user's scores, creating the record if needed.
    async fn update_personality(&self, user_id: &str, scores: &PersonalityScores)
        -> Result<User>;
}

/// Document store backend plus lifecycle operations.
#[async_trait]
pub trait DatabaseBackend: DiaryStore + UserStore {
    /// Sync with remote (e.g. Turso replication). No-op for local-only backends.
    async fn sync(&self) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Key-value store
// ---------------------------------------------------------------------------

/// Ordered per-key lists of conversation turns.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Append to the tail of the list and return its new length.
    async fn push_turn(&self, key: &str, turn: &ConversationTurn) -> Result<u64>;
    /// The whole list, oldest first.
    async fn list_turns(&self, key: &str) -> Result<Vec<ConversationTurn>>;
    /// Remove the list and return how many turns it held.
    async fn clear_turns(&self, key: &str) -> Result<u64>;
}
