use chrono::{DateTime, Utc};
use libsql::{params, Connection};

use crate::error::Result;
use crate::models::DiaryEntry;

pub struct DiaryRepository;

const ENTRY_COLUMNS: &str = "id, user_id, titulo, entrada, created_at";

impl DiaryRepository {
    pub async fn create(conn: &Connection, entry: &DiaryEntry) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO diary_entries (id, user_id, titulo, entrada, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                entry.id.clone(),
                entry.user_id.clone(),
                entry.titulo.clone(),
                entry.entrada.clone(),
                entry.created_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn find(
        conn: &Connection,
        user_id: Option<&str>,
        titulo: &str,
    ) -> Result<Option<DiaryEntry>> {
        let mut rows = match user_id {
            Some(user_id) => {
                conn.query(
                    &format!(
                        "SELECT {ENTRY_COLUMNS} FROM diary_entries
                         WHERE user_id = ?1 AND titulo = ?2 ORDER BY rowid ASC LIMIT 1"
                    ),
                    params![user_id, titulo],
                )
                .await?
            }
            None => {
                conn.query(
                    &format!(
                        "SELECT {ENTRY_COLUMNS} FROM diary_entries
                         WHERE titulo = ?1 ORDER BY rowid ASC LIMIT 1"
                    ),
                    params![titulo],
                )
                .await?
            }
        };

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_entry(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn list_by_user(conn: &Connection, user_id: &str) -> Result<Vec<DiaryEntry>> {
        let mut rows = conn
            .query(
                &format!(
                    "SELECT {ENTRY_COLUMNS} FROM diary_entries WHERE user_id = ?1 ORDER BY rowid ASC"
                ),
                params![user_id],
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(Self::row_to_entry(&row)?);
        }
        Ok(results)
    }

    /// Delete a single entry with this title. Returns whether one was removed.
    pub async fn delete(conn: &Connection, user_id: Option<&str>, titulo: &str) -> Result<bool> {
        let affected = match user_id {
            Some(user_id) => {
                conn.execute(
                    r#"
                    DELETE FROM diary_entries WHERE id = (
                        SELECT id FROM diary_entries
                        WHERE user_id = ?1 AND titulo = ?2 ORDER BY rowid ASC LIMIT 1
                    )
                    "#,
                    params![user_id, titulo],
                )
                .await?
            }
            None => {
                conn.execute(
                    r#"
                    DELETE FROM diary_entries WHERE id = (
                        SELECT id FROM diary_entries
                        WHERE titulo = ?1 ORDER BY rowid ASC LIMIT 1
                    )
                    "#,
                    params![titulo],
                )
                .await?
            }
        };

        Ok(affected > 0)
    }

    fn row_to_entry(row: &libsql::Row) -> Result<DiaryEntry> {
        Ok(DiaryEntry {
            id: row.get(0)?,
            user_id: row.get(1)?,
            titulo: row.get(2)?,
            entrada: row.get(3)?,
            created_at: DateTime::parse_from_rfc3339(&row.get::<String>(4)?)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}
