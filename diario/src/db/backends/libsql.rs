use crate::db::connection::Database;
use crate::db::repository::{ConversationRepository, DiaryRepository, UserRepository};
use crate::db::traits::{ConversationStore, DatabaseBackend, DiaryStore, UserStore};
use crate::error::Result;
use crate::models::{ConversationTurn, DiaryEntry, PersonalityScores, User};
use async_trait::async_trait;

/// libSQL-backed store. The same type serves the document store and the
/// conversation store; point two instances at different databases to split them.
pub struct LibSqlBackend {
    db: Database,
}

impl LibSqlBackend {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DiaryStore for LibSqlBackend {
    async fn create_entry(&self, entry: &DiaryEntry) -> Result<()> {
        let conn = self.db.connect()?;
        DiaryRepository::create(&conn, entry).await
    }
    async fn find_entry(&self, user_id: Option<&str>, titulo: &str) -> Result<Option<DiaryEntry>> {
        let conn = self.db.connect()?;
        DiaryRepository::find(&conn, user_id, titulo).await
    }
    async fn list_entries(&self, user_id: &str) -> Result<Vec<DiaryEntry>> {
        let conn = self.db.connect()?;
        DiaryRepository::list_by_user(&conn, user_id).await
    }
    async fn delete_entry(&self, user_id: Option<&str>, titulo: &str) -> Result<bool> {
        let conn = self.db.connect()?;
        DiaryRepository::delete(&conn, user_id, titulo).await
    }
}

#[async_trait]
impl UserStore for LibSqlBackend {
    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        let conn = self.db.connect()?;
        UserRepository::get(&conn, user_id).await
    }
    async fn update_personality(
        &self,
        user_id: &str,
        scores: &PersonalityScores,
    ) -> Result<User> {
        let conn = self.db.connect()?;
        UserRepository::upsert_personality(&conn, user_id, scores).await
    }
}

#[async_trait]
impl DatabaseBackend for LibSqlBackend {
    async fn sync(&self) -> Result<()> {
        self.db.sync().await
    }
}

#[async_trait]
impl ConversationStore for LibSqlBackend {
    async fn push_turn(&self, key: &str, turn: &ConversationTurn) -> Result<u64> {
        let conn = self.db.connect()?;
        ConversationRepository::push(&conn, key, turn).await
    }
    async fn list_turns(&self, key: &str) -> Result<Vec<ConversationTurn>> {
        let conn = self.db.connect()?;
        ConversationRepository::range(&conn, key).await
    }
    async fn clear_turns(&self, key: &str) -> Result<u64> {
        let conn = self.db.connect()?;
        ConversationRepository::delete(&conn, key).await
    }
}
