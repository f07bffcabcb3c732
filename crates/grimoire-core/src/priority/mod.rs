//! Priority scoring for ideas
//!
//! A transparent linear heuristic: every term has a fixed ceiling and the
//! breakdown can be shown to the user to explain a ranking.
//! - novelty: distinct tokens / 2, max 25
//! - length: sqrt(content chars) / 2, max 20
//! - usage: used-in count * 8, max 25
//! - recency: 15 / (1 + days since last opened), max 15
//! - starred +10, pinned +6
//! - type bias: visual +6, rehearsal transcript +4

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::idea::{usage_for, Idea, IdeaType, UsageContext, UsageMap};
use crate::text::tokenize;

const NOVELTY_MAX: f64 = 25.0;
const LENGTH_MAX: f64 = 20.0;
const USAGE_MAX: f64 = 25.0;
const USAGE_PER_USE: f64 = 8.0;
const RECENCY_MAX: f64 = 15.0;
const STARRED_BONUS: f64 = 10.0;
const PINNED_BONUS: f64 = 6.0;
const VISUAL_BIAS: f64 = 6.0;
const REHEARSAL_BIAS: f64 = 4.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Per-term contributions to an idea's priority score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityBreakdown {
    pub novelty: f64,
    pub length: f64,
    pub usage: f64,
    pub recency: f64,
    pub starred: f64,
    pub pinned: f64,
    pub type_bias: f64,
    /// Rounded sum of all terms
    pub total: u32,
}

impl PriorityBreakdown {
    /// Named terms in display order
    pub fn terms(&self) -> [(&'static str, f64); 7] {
        [
            ("novelty", self.novelty),
            ("length", self.length),
            ("usage", self.usage),
            ("recency", self.recency),
            ("starred", self.starred),
            ("pinned", self.pinned),
            ("type_bias", self.type_bias),
        ]
    }
}

/// An idea id with its priority score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedIdea {
    pub idea_id: String,
    pub score: u32,
}

/// Compute every term of the priority score
pub fn breakdown(idea: &Idea, usage: &UsageContext, now: DateTime<Utc>) -> PriorityBreakdown {
    let distinct: HashSet<String> = tokenize(&idea.text()).into_iter().collect();
    let content_len = idea.content().chars().count() as f64;

    let novelty = clamp(distinct.len() as f64 / 2.0, NOVELTY_MAX);
    let length = clamp(content_len.sqrt() / 2.0, LENGTH_MAX);
    let usage_term = clamp(usage.used_in_count as f64 * USAGE_PER_USE, USAGE_MAX);
    let recency = usage
        .last_opened_at
        .map(|opened| clamp(RECENCY_MAX / (1.0 + days_since(opened, now)), RECENCY_MAX))
        .unwrap_or(0.0);
    let starred = if usage.is_starred { STARRED_BONUS } else { 0.0 };
    let pinned = if usage.is_pinned { PINNED_BONUS } else { 0.0 };
    let type_bias = match idea.idea_type {
        Some(IdeaType::Visual) => VISUAL_BIAS,
        Some(IdeaType::RehearsalTranscript) => REHEARSAL_BIAS,
        _ => 0.0,
    };

    let sum = novelty + length + usage_term + recency + starred + pinned + type_bias;

    PriorityBreakdown {
        novelty,
        length,
        usage: usage_term,
        recency,
        starred,
        pinned,
        type_bias,
        total: sum.round() as u32,
    }
}

/// Priority score for one idea, roughly in `[0, 100]`
pub fn score(idea: &Idea, usage: &UsageContext, now: DateTime<Utc>) -> u32 {
    breakdown(idea, usage, now).total
}

/// Ideas sorted by descending priority; equal scores keep input order
pub fn rank(ideas: &[Idea], usage: &UsageMap, now: DateTime<Utc>) -> Vec<RankedIdea> {
    let _span = tracing::debug_span!("rank", ideas = ideas.len()).entered();

    let mut ranked: Vec<RankedIdea> = ideas
        .iter()
        .map(|idea| RankedIdea {
            idea_id: idea.id.clone(),
            score: score(idea, usage_for(usage, &idea.id), now),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Fractional days between `then` and `now`; future timestamps count as zero
fn days_since(then: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let seconds = (now - then).num_milliseconds() as f64 / 1000.0;
    (seconds / SECONDS_PER_DAY).max(0.0)
}

fn clamp(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}
