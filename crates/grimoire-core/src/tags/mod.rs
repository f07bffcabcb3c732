//! Tag vocabulary and per-idea tag suggestions

mod suggestion;

pub use suggestion::{suggest_tags, TagSuggestion, HIGH_VALUE_LABEL, REPERTOIRE_LABEL};

use std::collections::HashSet;

use crate::idea::Idea;

/// Words never proposed as tags
pub const STOP_WORDS: &[&str] = &["with", "from", "this", "that", "your"];

/// Ordered union of every tag in the library; the first casing seen wins
pub fn tag_vocabulary(ideas: &[Idea]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut vocabulary = Vec::new();

    for tag in ideas.iter().flat_map(|i| i.tags.iter()) {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        if seen.insert(tag.to_lowercase()) {
            vocabulary.push(tag.to_string());
        }
    }

    vocabulary
}
