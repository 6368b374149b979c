use std::sync::Arc;

use serde_json::Value;

use crate::db::DatabaseBackend;
use crate::error::{DiarioError, Result};
use crate::intelligence::{interpret_scores, parse_advice, AdviceItem};
use crate::llm::prompts::{ADVICE_SYSTEM_PROMPT, PERSONALITY_SYSTEM_PROMPT};
use crate::llm::LlmProvider;
use crate::models::{joined_entry_text, ConversationTurn, DiaryEntry, PersonalityScores};

/// Diary entries and the personality analysis derived from them.
#[derive(Clone)]
pub struct DiaryService {
    db: Arc<dyn DatabaseBackend>,
    llm: LlmProvider,
}

impl DiaryService {
    pub fn new(db: Arc<dyn DatabaseBackend>, llm: LlmProvider) -> Self {
        Self { db, llm }
    }

    /// Persist a new entry and refresh the user's personality scores.
    ///
    /// The entry stays saved when the analysis fails afterwards.
    pub async fn create_entry(
        &self,
        user_id: &str,
        titulo: &str,
        entrada: &str,
    ) -> Result<(DiaryEntry, PersonalityScores)> {
        if self.db.find_entry(Some(user_id), titulo).await?.is_some() {
            return Err(DiarioError::Validation(format!(
                "A diary entry titled '{titulo}' already exists"
            )));
        }

        let entry = DiaryEntry::new(user_id, titulo, entrada);
        self.db.create_entry(&entry).await?;
        tracing::info!(user_id, titulo, entry_id = %entry.id, "Diary entry created");

        let scores = self.analyze_personality(user_id).await?;
        self.db.update_personality(user_id, &scores).await?;

        Ok((entry, scores))
    }

    async fn analyze_personality(&self, user_id: &str) -> Result<PersonalityScores> {
        let entries = self.db.list_entries(user_id).await?;
        let text = joined_entry_text(&entries);

        let raw = self
            .llm
            .respond(PERSONALITY_SYSTEM_PROMPT, &[ConversationTurn::user(text)])
            .await
            .ok_or_else(|| {
                DiarioError::Validation(
                    "The language model returned no personality analysis".to_string(),
                )
            })?;

        let scores = interpret_scores(&score_payload(raw))?;

        let out_of_range = scores.out_of_range();
        if !out_of_range.is_empty() {
            tracing::warn!(user_id, traits = ?out_of_range, "Personality scores outside 1-5");
        }

        Ok(scores)
    }

    pub async fn list_entries(&self, user_id: &str) -> Result<Vec<DiaryEntry>> {
        self.db.list_entries(user_id).await
    }

    pub async fn get_entry(&self, user_id: Option<&str>, titulo: &str) -> Result<DiaryEntry> {
        self.db
            .find_entry(user_id, titulo)
            .await?
            .ok_or_else(|| DiarioError::NotFound(format!("Diary entry '{titulo}' not found")))
    }

    pub async fn delete_entry(&self, user_id: Option<&str>, titulo: &str) -> Result<()> {
        if self.db.delete_entry(user_id, titulo).await? {
            tracing::info!(user_id = ?user_id, titulo, "Diary entry deleted");
            Ok(())
        } else {
            Err(DiarioError::NotFound(format!(
                "Diary entry '{titulo}' not found"
            )))
        }
    }

    pub async fn personality(&self, user_id: &str) -> Result<PersonalityScores> {
        self.db
            .get_user(user_id)
            .await?
            .and_then(|user| user.personality)
            .ok_or_else(|| {
                DiarioError::NotFound(format!("No personality scores for user {user_id}"))
            })
    }

    /// Emotional advice drawn from everything the user has written.
    pub async fn advice(&self, user_id: &str) -> Result<Vec<AdviceItem>> {
        let entries = self.db.list_entries(user_id).await?;
        if entries.is_empty() {
            return Err(DiarioError::NotFound(format!(
                "No diary entries for user {user_id}"
            )));
        }

        let raw = self
            .llm
            .respond(
                ADVICE_SYSTEM_PROMPT,
                &[ConversationTurn::user(joined_entry_text(&entries))],
            )
            .await
            .ok_or_else(|| {
                DiarioError::Internal("The language model returned no advice".to_string())
            })?;

        Ok(parse_advice(&raw))
    }
}

/// A response that is itself a JSON object is used as-is; anything else is
/// scanned as text.
fn score_payload(raw: String) -> Value {
    match serde_json::from_str::<Value>(&raw) {
        Ok(value @ Value::Object(_)) => value,
        _ => Value::String(raw),
    }
}
