//! Thematic clustering of ideas
//!
//! Every idea lands in exactly one cluster. The key comes from the idea's
//! first tag, else its declared type, else its dominant keyword.

use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::idea::{Idea, IdeaType};
use crate::text::{dominant_keyword, tokenize};
use crate::trace_time;

/// Keyword used when an idea has no tokens at all
pub const FALLBACK_KEYWORD: &str = "misc";

/// Grouping identifier for one idea
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClusterKey {
    Tag(String),
    Type(IdeaType),
    Keyword(String),
}

impl ClusterKey {
    /// Derive the key for an idea: tag, then type, then dominant keyword
    pub fn for_idea(idea: &Idea) -> Self {
        if let Some(tag) = idea.primary_tag() {
            return ClusterKey::Tag(tag.to_string());
        }
        if let Some(idea_type) = idea.idea_type {
            return ClusterKey::Type(idea_type);
        }
        let keyword = dominant_keyword(&tokenize(&idea.text()))
            .unwrap_or_else(|| FALLBACK_KEYWORD.to_string());
        ClusterKey::Keyword(keyword)
    }

    /// Human label: `Theme: X` for tags and keywords, `Type: X` for types
    pub fn label(&self) -> String {
        match self {
            ClusterKey::Tag(tag) => format!("Theme: {}", tag),
            ClusterKey::Type(idea_type) => format!("Type: {}", idea_type),
            ClusterKey::Keyword(keyword) => format!("Theme: {}", keyword),
        }
    }
}

impl fmt::Display for ClusterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterKey::Tag(tag) => write!(f, "tag:{}", tag),
            ClusterKey::Type(idea_type) => write!(f, "type:{}", idea_type),
            ClusterKey::Keyword(keyword) => write!(f, "kw:{}", keyword),
        }
    }
}

/// A named group of ideas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub key: String,
    pub label: String,
    pub idea_ids: Vec<String>,
}

/// Assign each idea to one cluster, largest clusters first.
///
/// Clusters of equal size keep the order in which their keys were first seen.
pub fn clusterize(ideas: &[Idea]) -> Vec<Cluster> {
    let start = Instant::now();
    let mut positions: HashMap<ClusterKey, usize> = HashMap::new();
    let mut clusters: Vec<Cluster> = Vec::new();

    for idea in ideas {
        let key = ClusterKey::for_idea(idea);
        match positions.get(&key) {
            Some(&pos) => clusters[pos].idea_ids.push(idea.id.clone()),
            None => {
                clusters.push(Cluster {
                    key: key.to_string(),
                    label: key.label(),
                    idea_ids: vec![idea.id.clone()],
                });
                positions.insert(key, clusters.len() - 1);
            }
        }
    }

    clusters.sort_by(|a, b| b.idea_ids.len().cmp(&a.idea_ids.len()));

    trace_time!(start, "clusterize", clusters = clusters.len());
    clusters
}
