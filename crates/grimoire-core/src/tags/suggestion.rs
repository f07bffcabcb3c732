//! Tag suggestion generation

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::STOP_WORDS;
use crate::config::TagConfig;
use crate::idea::{usage_for, Idea, UsageMap};
use crate::priority;
use crate::text::{tokenize, top_keywords};

/// Label for ideas whose priority score is high
pub const HIGH_VALUE_LABEL: &str = "high-value";

/// Label for ideas used in several shows
pub const REPERTOIRE_LABEL: &str = "repertoire";

/// Suggested tags for one idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagSuggestion {
    pub idea_id: String,
    pub suggested: Vec<String>,
}

/// Suggest tags for the first `config.max_ideas` ideas.
///
/// Heuristic labels (`repertoire`, `high-value`) come before keyword
/// candidates. Keywords already tagged on the idea and stop words are never
/// proposed; a keyword matching the vocabulary takes the vocabulary's casing.
/// Ideas with nothing to suggest are omitted.
pub fn suggest_tags(
    ideas: &[Idea],
    vocabulary: &[String],
    usage: &UsageMap,
    now: DateTime<Utc>,
    config: &TagConfig,
) -> Vec<TagSuggestion> {
    let _span = tracing::debug_span!("suggest_tags", ideas = ideas.len()).entered();

    let canonical: HashMap<String, &str> = vocabulary
        .iter()
        .rev()
        .map(|tag| (tag.to_lowercase(), tag.as_str()))
        .collect();
    let stop_words: HashSet<String> = STOP_WORDS
        .iter()
        .map(|w| w.to_string())
        .chain(config.extra_stop_words.iter().map(|w| w.trim().to_lowercase()))
        .collect();

    let suggestions: Vec<TagSuggestion> = ideas
        .iter()
        .take(config.max_ideas)
        .filter_map(|idea| {
            let suggested = suggest_for_idea(idea, &canonical, &stop_words, usage, now, config);
            (!suggested.is_empty()).then(|| TagSuggestion {
                idea_id: idea.id.clone(),
                suggested,
            })
        })
        .collect();

    tracing::debug!(suggested = suggestions.len(), "suggest_tags");
    suggestions
}

fn suggest_for_idea(
    idea: &Idea,
    canonical: &HashMap<String, &str>,
    stop_words: &HashSet<String>,
    usage: &UsageMap,
    now: DateTime<Utc>,
    config: &TagConfig,
) -> Vec<String> {
    let context = usage_for(usage, &idea.id);

    let mut candidates: Vec<String> = Vec::new();
    if context.used_in_count >= config.repertoire_min_uses {
        candidates.push(REPERTOIRE_LABEL.to_string());
    }
    if priority::score(idea, context, now) >= config.high_value_score {
        candidates.push(HIGH_VALUE_LABEL.to_string());
    }

    let keywords = top_keywords(&tokenize(&idea.text()), config.top_keywords);
    candidates.extend(
        keywords
            .into_iter()
            .filter(|token| !stop_words.contains(token))
            .map(|token| match canonical.get(&token) {
                Some(tag) => tag.to_string(),
                None => token,
            }),
    );

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|tag| !idea.has_tag(tag))
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .take(config.max_suggestions)
        .collect()
}
