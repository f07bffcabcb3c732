//! Similarity engine for finding duplicate ideas
//!
//! Bag-of-words Jaccard over normalized tokens: cheap, explainable and
//! tolerant of reordering or small edits. Not a semantic matcher.

mod duplicates;

pub use duplicates::{find_duplicates, DuplicatePair};

use std::collections::HashSet;

use crate::idea::Idea;
use crate::logging::ResourceMetrics;
use crate::text::token_set;

/// Jaccard similarity `|A ∩ B| / |A ∪ B|`; 0.0 when either set is empty
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|t| large.contains(*t)).count();
    let union = a.len() + b.len() - intersection;

    intersection as f64 / union as f64
}

/// Per-call memo of each idea's token set, indexed by input position
pub(crate) struct TokenSetCache<'a> {
    ideas: &'a [Idea],
    sets: Vec<Option<HashSet<String>>>,
    metrics: ResourceMetrics,
}

impl<'a> TokenSetCache<'a> {
    pub(crate) fn new(ideas: &'a [Idea]) -> Self {
        TokenSetCache {
            ideas,
            sets: vec![None; ideas.len()],
            metrics: ResourceMetrics::new(),
        }
    }

    /// Similarity of the ideas at positions `i` and `j`, tokenizing each at most once
    pub(crate) fn similarity(&mut self, i: usize, j: usize) -> f64 {
        self.ensure(i);
        self.ensure(j);
        match (&self.sets[i], &self.sets[j]) {
            (Some(a), Some(b)) => jaccard(a, b),
            _ => 0.0,
        }
    }

    pub(crate) fn metrics(&self) -> &ResourceMetrics {
        &self.metrics
    }

    fn ensure(&mut self, index: usize) {
        if self.sets[index].is_some() {
            self.metrics.record_cache_hit();
            return;
        }
        self.metrics.record_cache_miss();
        self.sets[index] = Some(token_set(&self.ideas[index].text()));
    }
}
