use chrono::Utc;
use libsql::{params, Connection};

use crate::error::{DiarioError, Result};
use crate::models::ConversationTurn;

/// List-per-key storage with RPUSH / LRANGE / DEL semantics.
pub struct ConversationRepository;

impl ConversationRepository {
    pub async fn push(conn: &Connection, key: &str, turn: &ConversationTurn) -> Result<u64> {
        conn.execute(
            r#"
            INSERT INTO conversation_turns (key, role, content, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                key,
                turn.role.to_string(),
                turn.content.clone(),
                Utc::now().to_rfc3339(),
            ],
        )
        .await?;

        Self::len(conn, key).await
    }

    pub async fn len(conn: &Connection, key: &str) -> Result<u64> {
        let mut rows = conn
            .query(
                "SELECT COUNT(*) FROM conversation_turns WHERE key = ?1",
                params![key],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Ok(row.get::<i64>(0)?.max(0) as u64),
            None => Ok(0),
        }
    }

    pub async fn range(conn: &Connection, key: &str) -> Result<Vec<ConversationTurn>> {
        let mut rows = conn
            .query(
                r#"
                SELECT role, content FROM conversation_turns
                WHERE key = ?1
                ORDER BY position ASC
                "#,
                params![key],
            )
            .await?;

        let mut turns = Vec::new();
        while let Some(row) = rows.next().await? {
            turns.push(ConversationTurn {
                role: row.get::<String>(0)?.parse().map_err(DiarioError::Internal)?,
                content: row.get(1)?,
            });
        }
        Ok(turns)
    }

    pub async fn delete(conn: &Connection, key: &str) -> Result<u64> {
        let affected = conn
            .execute(
                "DELETE FROM conversation_turns WHERE key = ?1",
                params![key],
            )
            .await?;
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::init_conversation_schema;
    use crate::models::Role;

    async fn setup_test_db() -> Connection {
        let conn = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .unwrap()
            .connect()
            .unwrap();
        init_conversation_schema(&conn).await.unwrap();
        conn
    }

    #[tokio::test]
    async fn test_push_returns_list_length() {
        let conn = setup_test_db().await;
        let first = ConversationRepository::push(&conn, "chat:u1", &ConversationTurn::user("hola"))
            .await
            .unwrap();
        let second = ConversationRepository::push(
            &conn,
            "chat:u1",
            &ConversationTurn::assistant("hola, ¿cómo estás?"),
        )
        .await
        .unwrap();
        assert_eq!((first, second), (1, 2));
    }

    #[tokio::test]
    async fn test_range_preserves_order_and_roles() {
        let conn = setup_test_db().await;
        ConversationRepository::push(&conn, "chat:u1", &ConversationTurn::user("uno"))
            .await
            .unwrap();
        ConversationRepository::push(&conn, "chat:u2", &ConversationTurn::user("otro"))
            .await
            .unwrap();
        ConversationRepository::push(&conn, "chat:u1", &ConversationTurn::assistant("dos"))
            .await
            .unwrap();

        let turns = ConversationRepository::range(&conn, "chat:u1").await.unwrap();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[0].content, "uno");
        assert_eq!(turns[1].role, Role::Assistant);
        assert_eq!(turns[1].content, "dos");
    }

    #[tokio::test]
    async fn test_delete_clears_only_that_key() {
        let conn = setup_test_db().await;
        ConversationRepository::push(&conn, "chat:u1", &ConversationTurn::user("a"))
            .await
            .unwrap();
        ConversationRepository::push(&conn, "chat:u1", &ConversationTurn::user("b"))
            .await
            .unwrap();
        ConversationRepository::push(&conn, "chat:u2", &ConversationTurn::user("c"))
            .await
            .unwrap();

        assert_eq!(ConversationRepository::delete(&conn, "chat:u1").await.unwrap(), 2);
        assert_eq!(ConversationRepository::len(&conn, "chat:u1").await.unwrap(), 0);
        assert_eq!(ConversationRepository::len(&conn, "chat:u2").await.unwrap(), 1);
    }
}
