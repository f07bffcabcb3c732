//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Tuning knobs for the organization engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizeConfig {
    /// Duplicate detection parameters
    #[serde(default)]
    pub duplicates: DuplicateConfig,

    /// Tag suggestion parameters
    #[serde(default)]
    pub tags: TagConfig,
}

/// Configuration for the duplicate scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateConfig {
    /// Minimum Jaccard similarity for a pair to be reported (default 0.82)
    #[serde(default = "default_duplicate_threshold")]
    pub threshold: f64,

    /// Scan stops once this many pairs are recorded (default 12)
    #[serde(default = "default_max_pairs")]
    pub max_pairs: usize,

    /// Pairs whose shorter content is below this fraction of the longer are skipped (default 0.5)
    #[serde(default = "default_min_length_ratio")]
    pub min_length_ratio: f64,
}

impl Default for DuplicateConfig {
    fn default() -> Self {
        Self {
            threshold: default_duplicate_threshold(),
            max_pairs: default_max_pairs(),
            min_length_ratio: default_min_length_ratio(),
        }
    }
}

/// Configuration for tag suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagConfig {
    /// Only the first N ideas in input order get suggestions (default 40)
    #[serde(default = "default_max_ideas")]
    pub max_ideas: usize,

    /// Maximum suggestions per idea (default 4)
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// Keyword candidates taken per idea before filtering (default 6)
    #[serde(default = "default_top_keywords")]
    pub top_keywords: usize,

    /// Words never suggested, in addition to the built-in stop-list
    #[serde(default)]
    pub extra_stop_words: Vec<String>,

    /// Priority score at or above which `high-value` is suggested (default 70)
    #[serde(default = "default_high_value_score")]
    pub high_value_score: u32,

    /// Usage count at or above which `repertoire` is suggested (default 2)
    #[serde(default = "default_repertoire_min_uses")]
    pub repertoire_min_uses: u32,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            max_ideas: default_max_ideas(),
            max_suggestions: default_max_suggestions(),
            top_keywords: default_top_keywords(),
            extra_stop_words: Vec::new(),
            high_value_score: default_high_value_score(),
            repertoire_min_uses: default_repertoire_min_uses(),
        }
    }
}

fn default_duplicate_threshold() -> f64 {
    0.82
}

fn default_max_pairs() -> usize {
    12
}

fn default_min_length_ratio() -> f64 {
    0.5
}

fn default_max_ideas() -> usize {
    40
}

fn default_max_suggestions() -> usize {
    4
}

fn default_top_keywords() -> usize {
    6
}

fn default_high_value_score() -> u32 {
    70
}

fn default_repertoire_min_uses() -> u32 {
    2
}
