use libsql::Connection;

use crate::error::Result;

/// Tables of the document store.
pub async fn init_document_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Diary entries; titulo is meant to be unique per user but is checked
        -- by the submission flow rather than by a constraint
        CREATE TABLE IF NOT EXISTS diary_entries (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            titulo TEXT NOT NULL,
            entrada TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_diary_entries_user_titulo
            ON diary_entries(user_id, titulo);
        CREATE INDEX IF NOT EXISTS idx_diary_entries_titulo ON diary_entries(titulo);

        -- Users with their latest Big-Five scores
        CREATE TABLE IF NOT EXISTS users (
            user_id TEXT PRIMARY KEY,
            openness REAL,
            conscientiousness REAL,
            extraversion REAL,
            agreeableness REAL,
            neuroticism REAL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .await?;

    Ok(())
}

/// Tables of the key-value conversation store.
pub async fn init_conversation_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- One row per list element; position preserves append order per key
        CREATE TABLE IF NOT EXISTS conversation_turns (
            position INTEGER PRIMARY KEY AUTOINCREMENT,
            key TEXT NOT NULL,
            role TEXT NOT NULL,
            content TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_conversation_turns_key
            ON conversation_turns(key, position);
        "#,
    )
    .await?;

    Ok(())
}

pub async fn init_schema(conn: &Connection) -> Result<()> {
    init_document_schema(conn).await?;
    init_conversation_schema(conn).await?;
    Ok(())
}
