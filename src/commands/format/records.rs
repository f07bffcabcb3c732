//! Records output formatting
//!
//! Line-oriented: a header line, then one record per line.
//! - `C` cluster, `D` duplicate pair, `T` tag suggestion
//! - `R` ranked idea, `S` score term

use grimoire_core::cluster::Cluster;
use grimoire_core::priority::{PriorityBreakdown, RankedIdea};
use grimoire_core::records::{csv_or_dash, escape_quotes};
use grimoire_core::similarity::DuplicatePair;
use grimoire_core::tags::TagSuggestion;

pub fn header(mode: &str, ideas: usize) -> String {
    format!("H grimoire=1 records=1 mode={} ideas={}", mode, ideas)
}

pub fn cluster_line(cluster: &Cluster) -> String {
    format!(
        "C {} size={} \"{}\" ids={}",
        cluster.key,
        cluster.idea_ids.len(),
        escape_quotes(&cluster.label),
        csv_or_dash(&cluster.idea_ids)
    )
}

pub fn duplicate_line(pair: &DuplicatePair) -> String {
    format!("D {} {} score={:.2}", pair.a, pair.b, pair.score)
}

pub fn tag_line(suggestion: &TagSuggestion) -> String {
    format!(
        "T {} suggested={}",
        suggestion.idea_id,
        csv_or_dash(&suggestion.suggested)
    )
}

pub fn rank_line(position: usize, entry: &RankedIdea, title: &str) -> String {
    format!(
        "R {} {} score={} \"{}\"",
        position,
        entry.idea_id,
        entry.score,
        escape_quotes(title)
    )
}

pub fn score_lines(id: &str, breakdown: &PriorityBreakdown) -> Vec<String> {
    breakdown
        .terms()
        .iter()
        .map(|(term, value)| format!("S {} {}={:.2}", id, term, value))
        .chain(std::iter::once(format!("S {} total={}", id, breakdown.total)))
        .collect()
}
