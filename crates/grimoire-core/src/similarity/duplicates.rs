use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DuplicateConfig;
use crate::idea::Idea;
use crate::log_resource_metrics;
use crate::similarity::TokenSetCache;

/// A candidate duplicate pair; `a` precedes `b` in the input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicatePair {
    pub a: String,
    pub b: String,
    /// Similarity in `[0, 1]`, rounded to two decimals
    pub score: f64,
}

/// Find likely duplicate ideas.
///
/// Pairs are visited in input order. Equal non-empty titles (trimmed,
/// case-insensitive) short-circuit to a score of 1.0. Otherwise both contents
/// must be non-empty and of comparable length before the token-set Jaccard
/// similarity is compared against the threshold. The scan stops as soon as
/// `max_pairs` pairs are recorded, so large libraries are under-reported in an
/// order-dependent way.
pub fn find_duplicates(ideas: &[Idea], config: &DuplicateConfig) -> Vec<DuplicatePair> {
    let _span = tracing::debug_span!("find_duplicates", ideas = ideas.len()).entered();

    let mut pairs = Vec::new();
    if config.max_pairs == 0 {
        return pairs;
    }

    let titles: Vec<String> = ideas.iter().map(|i| i.title().trim().to_lowercase()).collect();
    let lengths: Vec<usize> = ideas.iter().map(|i| i.content().chars().count()).collect();
    let mut cache = TokenSetCache::new(ideas);
    let mut compared = 0usize;

    'outer: for i in 0..ideas.len() {
        for j in i + 1..ideas.len() {
            if !titles[i].is_empty() && titles[i] == titles[j] {
                pairs.push(pair(&ideas[i], &ideas[j], 1.0));
            } else if comparable_lengths(lengths[i], lengths[j], config.min_length_ratio) {
                compared += 1;
                let score = cache.similarity(i, j);
                if score >= config.threshold {
                    pairs.push(pair(&ideas[i], &ideas[j], round2(score)));
                }
            }

            if pairs.len() >= config.max_pairs {
                break 'outer;
            }
        }
    }

    debug!(pairs = pairs.len(), compared, "find_duplicates");
    log_resource_metrics!(cache.metrics(), "find_duplicates");

    pairs
}

/// Both contents non-empty, and the shorter at least `ratio` of the longer
fn comparable_lengths(a: usize, b: usize, ratio: f64) -> bool {
    if a == 0 || b == 0 {
        return false;
    }
    let (short, long) = if a <= b { (a, b) } else { (b, a) };
    short as f64 >= long as f64 * ratio
}

fn pair(a: &Idea, b: &Idea, score: f64) -> DuplicatePair {
    DuplicatePair {
        a: a.id.clone(),
        b: b.id.clone(),
        score,
    }
}

fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
