//! Extraction of Big-Five scores from LLM output.
//!
//! The analysis prompt asks the model to answer with a bare JSON object, but
//! reasoning models routinely wrap it in prose or code fences. Raw text is
//! therefore scanned for the first brace-delimited span that mentions all five
//! traits, in prompt order, each followed by a non-negative number. The span
//! must sit on a single line; a response that is nothing but a pretty-printed
//! object is decoded whole before it ever reaches the scan.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::error::DiarioError;
use crate::models::PersonalityScores;

#[derive(Error, Debug)]
pub enum InterpretError {
    #[error("No valid JSON with personality scores found in the LLM response")]
    NotFound,

    #[error("Failed to parse personality scores JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Unsupported LLM response type: {0}")]
    UnsupportedType(&'static str),
}

impl From<InterpretError> for DiarioError {
    fn from(err: InterpretError) -> Self {
        DiarioError::Validation(err.to_string())
    }
}

fn scores_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r#"\{.*?"openness":\s*\d+(\.\d+)?.*?"conscientiousness":\s*\d+(\.\d+)?.*?"extraversion":\s*\d+(\.\d+)?.*?"agreeableness":\s*\d+(\.\d+)?.*?"neuroticism":\s*\d+(\.\d+)?.*?\}"#,
        )
        .expect("personality scores pattern is valid")
    })
}

/// Interpret an LLM payload that should carry personality scores.
///
/// Objects are decoded directly, strings go through [`extract_scores`], and
/// every other JSON shape is rejected.
pub fn interpret_scores(payload: &Value) -> Result<PersonalityScores, InterpretError> {
    match payload {
        Value::Object(_) => {
            serde_json::from_value(payload.clone()).map_err(InterpretError::Malformed)
        }
        Value::String(text) => extract_scores(text),
        Value::Null => Err(InterpretError::UnsupportedType("null")),
        Value::Bool(_) => Err(InterpretError::UnsupportedType("boolean")),
        Value::Number(_) => Err(InterpretError::UnsupportedType("number")),
        Value::Array(_) => Err(InterpretError::UnsupportedType("array")),
    }
}

/// Locate and decode the first score object embedded in free-form text.
pub fn extract_scores(text: &str) -> Result<PersonalityScores, InterpretError> {
    let found = scores_pattern()
        .find(text)
        .ok_or(InterpretError::NotFound)?;

    serde_json::from_str(found.as_str()).map_err(InterpretError::Malformed)
}
