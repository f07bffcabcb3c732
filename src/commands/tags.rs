//! `grimoire tags` command - tag suggestions

use grimoire_core::error::Result;
use grimoire_core::format::OutputFormat;
use grimoire_core::tags::{suggest_tags, tag_vocabulary};

use super::dispatch::Session;
use super::format::{human, output_json, records, title_map};
use crate::cli::Cli;

/// Execute the tags command
pub fn execute(cli: &Cli, session: &Session) -> Result<()> {
    let ideas = &session.library.ideas;
    let suggestions = suggest_tags(
        ideas,
        &tag_vocabulary(ideas),
        &session.usage,
        session.now,
        &session.organizer.config().tags,
    );

    match cli.format {
        OutputFormat::Json => output_json(&suggestions)?,
        OutputFormat::Human => {
            human::output_tag_suggestions(cli, &suggestions, &title_map(ideas))
        }
        OutputFormat::Records => {
            println!("{}", records::header("tags", ideas.len()));
            for suggestion in &suggestions {
                println!("{}", records::tag_line(suggestion));
            }
        }
    }

    Ok(())
}
