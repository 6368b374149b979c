use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One piece of emotional advice, `Consejo: descripción` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct AdviceItem {
    pub title: String,
    pub description: String,
}

fn list_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
        Regex::new(r"^(?:[-*•]\s*|\d+[.)]\s*)+").expect("list marker pattern is valid")
    })
}

/// Split an advice response into items, one per non-empty line.
///
/// Leading bullets, numbering and markdown bold are dropped. A line with no
/// colon becomes an item with an empty title.
pub fn parse_advice(text: &str) -> Vec<AdviceItem> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let line = list_marker().replace(line, "");
            let line = line.replace("**", "");
            match line.split_once(':') {
                Some((title, description)) => AdviceItem {
                    title: title.trim().to_string(),
                    description: description.trim().to_string(),
                },
                None => AdviceItem {
                    title: String::new(),
                    description: line.trim().to_string(),
                },
            }
        })
        .filter(|item| !(item.title.is_empty() && item.description.is_empty()))
        .collect()
}
