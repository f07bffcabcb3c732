//! `grimoire score` command - explain one idea's priority

use grimoire_core::error::Result;
use grimoire_core::format::OutputFormat;
use grimoire_core::idea::usage_for;
use grimoire_core::priority::breakdown;

use super::dispatch::Session;
use super::format::{human, output_json, records};
use crate::cli::Cli;

/// Execute the score command
pub fn execute(cli: &Cli, session: &Session, id: &str) -> Result<()> {
    let idea = session.library.find(id)?;
    let terms = breakdown(idea, usage_for(&session.usage, id), session.now);

    match cli.format {
        OutputFormat::Json => output_json(&serde_json::json!({
            "ideaId": idea.id,
            "breakdown": terms,
        }))?,
        OutputFormat::Human => human::output_breakdown(&idea.id, idea.title().trim(), &terms),
        OutputFormat::Records => {
            println!("{}", records::header("score", session.library.ideas.len()));
            for line in records::score_lines(&idea.id, &terms) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
