//! Organization orchestrator
//!
//! Runs clustering, duplicate detection and tag suggestion once each over the
//! full library and bundles the results. Pure for a fixed reference time.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cluster::{clusterize, Cluster};
use crate::config::OrganizeConfig;
use crate::idea::{Idea, UsageMap};
use crate::similarity::{find_duplicates, DuplicatePair};
use crate::tags::{suggest_tags, tag_vocabulary, TagSuggestion};
use crate::trace_time;

/// Aggregate output of one organization pass; never persisted by the engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationResult {
    pub clusters: Vec<Cluster>,
    pub duplicates: Vec<DuplicatePair>,
    pub tag_suggestions: Vec<TagSuggestion>,
}

/// Organization engine bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct Organizer {
    config: OrganizeConfig,
}

impl Organizer {
    pub fn new(config: OrganizeConfig) -> Self {
        Organizer { config }
    }

    pub fn config(&self) -> &OrganizeConfig {
        &self.config
    }

    /// Organize the library as of `now`
    pub fn organize_at(
        &self,
        ideas: &[Idea],
        usage: &UsageMap,
        now: DateTime<Utc>,
    ) -> OrganizationResult {
        let _span = tracing::debug_span!("organize", ideas = ideas.len()).entered();
        let start = Instant::now();

        let clusters = clusterize(ideas);
        let duplicates = find_duplicates(ideas, &self.config.duplicates);
        let vocabulary = tag_vocabulary(ideas);
        let tag_suggestions = suggest_tags(ideas, &vocabulary, usage, now, &self.config.tags);

        debug!(
            clusters = clusters.len(),
            duplicates = duplicates.len(),
            tag_suggestions = tag_suggestions.len(),
            "organize"
        );
        trace_time!(start, "organize");

        OrganizationResult {
            clusters,
            duplicates,
            tag_suggestions,
        }
    }

    /// Organize the library as of the current time
    pub fn organize(&self, ideas: &[Idea], usage: &UsageMap) -> OrganizationResult {
        self.organize_at(ideas, usage, Utc::now())
    }
}

/// Organize with the default configuration as of the current time
pub fn organize(ideas: &[Idea], usage: &UsageMap) -> OrganizationResult {
    Organizer::default().organize(ideas, usage)
}
