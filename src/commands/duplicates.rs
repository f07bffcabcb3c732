//! `grimoire duplicates` command - likely duplicate ideas

use grimoire_core::error::Result;
use grimoire_core::format::OutputFormat;
use grimoire_core::similarity::find_duplicates;

use super::dispatch::Session;
use super::format::{human, output_json, records, title_map};
use crate::cli::Cli;

/// Execute the duplicates command
pub fn execute(cli: &Cli, session: &Session) -> Result<()> {
    let ideas = &session.library.ideas;
    let pairs = find_duplicates(ideas, &session.organizer.config().duplicates);

    match cli.format {
        OutputFormat::Json => output_json(&pairs)?,
        OutputFormat::Human => human::output_duplicates(cli, &pairs, &title_map(ideas)),
        OutputFormat::Records => {
            println!("{}", records::header("duplicates", ideas.len()));
            for pair in &pairs {
                println!("{}", records::duplicate_line(pair));
            }
        }
    }

    Ok(())
}
