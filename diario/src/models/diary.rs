use chrono::{DateTime, Utc};
use nanoid::nanoid;
use serde::{Deserialize, Serialize};

/// A persisted diary entry. `titulo` is unique per `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiaryEntry {
    pub id: String,
    pub user_id: String,
    pub titulo: String,
    pub entrada: String,
    pub created_at: DateTime<Utc>,
}

impl DiaryEntry {
    pub fn new(
        user_id: impl Into<String>,
        titulo: impl Into<String>,
        entrada: impl Into<String>,
    ) -> Self {
        Self {
            id: nanoid!(),
            user_id: user_id.into(),
            titulo: titulo.into(),
            entrada: entrada.into(),
            created_at: Utc::now(),
        }
    }
}

/// Concatenate every entry body into the single text block sent for analysis.
pub fn joined_entry_text(entries: &[DiaryEntry]) -> String {
    entries
        .iter()
        .map(|entry| entry.entrada.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_gets_id_and_timestamp() {
        let entry = DiaryEntry::new("user_1", "Lunes", "Hoy fue un buen día");
        assert_eq!(entry.id.len(), 21);
        assert_eq!(entry.user_id, "user_1");
        assert_eq!(entry.titulo, "Lunes");
        assert!(entry.created_at <= Utc::now());
    }

    #[test]
    fn joined_entry_text_uses_single_spaces() {
        let entries = vec![
            DiaryEntry::new("u", "a", "primero"),
            DiaryEntry::new("u", "b", "segundo"),
            DiaryEntry::new("u", "c", "tercero"),
        ];
        assert_eq!(joined_entry_text(&entries), "primero segundo tercero");
        assert_eq!(joined_entry_text(&[]), "");
    }
}
