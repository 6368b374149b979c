use chrono::{DateTime, Utc};
use libsql::{params, Connection};

use crate::error::Result;
use crate::models::{PersonalityScores, User};

pub struct UserRepository;

impl UserRepository {
    pub async fn get(conn: &Connection, user_id: &str) -> Result<Option<User>> {
        let mut rows = conn
            .query(
                r#"
                SELECT user_id, openness, conscientiousness, extraversion,
                       agreeableness, neuroticism, updated_at
                FROM users
                WHERE user_id = ?1
                "#,
                params![user_id],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_user(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn upsert_personality(
        conn: &Connection,
        user_id: &str,
        scores: &PersonalityScores,
    ) -> Result<User> {
        let updated_at = Utc::now();

        conn.execute(
            r#"
            INSERT INTO users (
                user_id, openness, conscientiousness, extraversion,
                agreeableness, neuroticism, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(user_id) DO UPDATE SET
                openness = excluded.openness,
                conscientiousness = excluded.conscientiousness,
                extraversion = excluded.extraversion,
                agreeableness = excluded.agreeableness,
                neuroticism = excluded.neuroticism,
                updated_at = excluded.updated_at
            "#,
            params![
                user_id,
                scores.openness,
                scores.conscientiousness,
                scores.extraversion,
                scores.agreeableness,
                scores.neuroticism,
                updated_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(User {
            user_id: user_id.to_string(),
            personality: Some(*scores),
            updated_at,
        })
    }

    fn row_to_user(row: &libsql::Row) -> Result<User> {
        let openness: Option<f64> = row.get(1)?;
        let conscientiousness: Option<f64> = row.get(2)?;
        let extraversion: Option<f64> = row.get(3)?;
        let agreeableness: Option<f64> = row.get(4)?;
        let neuroticism: Option<f64> = row.get(5)?;

        let personality = match (
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            neuroticism,
        ) {
            (Some(o), Some(c), Some(e), Some(a), Some(n)) => Some(PersonalityScores {
                openness: o,
                conscientiousness: c,
                extraversion: e,
                agreeableness: a,
                neuroticism: n,
            }),
            _ => None,
        };

        Ok(User {
            user_id: row.get(0)?,
            personality,
            updated_at: DateTime::parse_from_rfc3339(&row.get::<String>(6)?)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}
