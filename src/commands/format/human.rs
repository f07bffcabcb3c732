//! Human-readable output formatting

use std::collections::HashMap;

use grimoire_core::cluster::Cluster;
use grimoire_core::priority::{PriorityBreakdown, RankedIdea};
use grimoire_core::similarity::DuplicatePair;
use grimoire_core::tags::TagSuggestion;

use crate::cli::Cli;

/// Display name for an idea: its title, or the id when untitled
fn display<'a>(titles: &HashMap<&str, &'a str>, id: &'a str) -> &'a str {
    match titles.get(id) {
        Some(title) if !title.is_empty() => *title,
        _ => id,
    }
}

pub fn output_clusters(cli: &Cli, clusters: &[Cluster], titles: &HashMap<&str, &str>) {
    if clusters.is_empty() {
        if !cli.quiet {
            println!("No clusters");
        }
        return;
    }

    for cluster in clusters {
        println!("{} ({})", cluster.label, cluster.idea_ids.len());
        for id in &cluster.idea_ids {
            println!("  {} {}", id, display(titles, id));
        }
    }
}

pub fn output_duplicates(cli: &Cli, pairs: &[DuplicatePair], titles: &HashMap<&str, &str>) {
    if pairs.is_empty() {
        if !cli.quiet {
            println!("No likely duplicates");
        }
        return;
    }

    for pair in pairs {
        println!(
            "{:.2}  {} ({}) <-> {} ({})",
            pair.score,
            display(titles, &pair.a),
            pair.a,
            display(titles, &pair.b),
            pair.b
        );
    }
}

pub fn output_tag_suggestions(
    cli: &Cli,
    suggestions: &[TagSuggestion],
    titles: &HashMap<&str, &str>,
) {
    if suggestions.is_empty() {
        if !cli.quiet {
            println!("No tag suggestions");
        }
        return;
    }

    for suggestion in suggestions {
        println!(
            "{} {}: {}",
            suggestion.idea_id,
            display(titles, &suggestion.idea_id),
            suggestion.suggested.join(", ")
        );
    }
}

pub fn output_ranked(cli: &Cli, ranked: &[RankedIdea], titles: &HashMap<&str, &str>) {
    if ranked.is_empty() {
        if !cli.quiet {
            println!("No ideas");
        }
        return;
    }

    for (pos, entry) in ranked.iter().enumerate() {
        println!(
            "{:>3}. [{:>3}] {} {}",
            pos + 1,
            entry.score,
            entry.idea_id,
            display(titles, &entry.idea_id)
        );
    }
}

pub fn output_breakdown(id: &str, title: &str, breakdown: &PriorityBreakdown) {
    let name = if title.is_empty() { id } else { title };
    println!("{} ({})", name, id);
    for (term, value) in breakdown.terms() {
        println!("  {:<10} {:>6.2}", term, value);
    }
    println!("  {:<10} {:>6}", "total", breakdown.total);
}
