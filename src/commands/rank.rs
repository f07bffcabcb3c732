//! `grimoire rank` command - ideas sorted by priority

use grimoire_core::bail_usage;
use grimoire_core::error::Result;
use grimoire_core::format::OutputFormat;
use grimoire_core::priority::rank;

use super::dispatch::Session;
use super::format::{human, output_json, records, title_map};
use crate::cli::Cli;

/// Execute the rank command
pub fn execute(cli: &Cli, session: &Session, limit: Option<usize>) -> Result<()> {
    if limit == Some(0) {
        bail_usage!("--limit must be at least 1");
    }

    let ideas = &session.library.ideas;
    let mut ranked = rank(ideas, &session.usage, session.now);
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    let titles = title_map(ideas);

    match cli.format {
        OutputFormat::Json => output_json(&ranked)?,
        OutputFormat::Human => human::output_ranked(cli, &ranked, &titles),
        OutputFormat::Records => {
            println!("{}", records::header("rank", ideas.len()));
            for (pos, entry) in ranked.iter().enumerate() {
                let title = titles.get(entry.idea_id.as_str()).copied().unwrap_or("");
                println!("{}", records::rank_line(pos + 1, entry, title));
            }
        }
    }

    Ok(())
}
