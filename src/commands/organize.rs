//! `grimoire organize` command - full organization pass

use grimoire_core::error::Result;
use grimoire_core::format::OutputFormat;

use super::dispatch::Session;
use super::format::{human, output_json, records, title_map};
use crate::cli::Cli;

/// Execute the organize command
pub fn execute(cli: &Cli, session: &Session) -> Result<()> {
    let ideas = &session.library.ideas;
    let result = session
        .organizer
        .organize_at(ideas, &session.usage, session.now);
    let titles = title_map(ideas);

    match cli.format {
        OutputFormat::Json => output_json(&result)?,
        OutputFormat::Human => {
            println!("== Clusters");
            human::output_clusters(cli, &result.clusters, &titles);
            println!();
            println!("== Duplicates");
            human::output_duplicates(cli, &result.duplicates, &titles);
            println!();
            println!("== Tag suggestions");
            human::output_tag_suggestions(cli, &result.tag_suggestions, &titles);
        }
        OutputFormat::Records => {
            println!("{}", records::header("organize", ideas.len()));
            for cluster in &result.clusters {
                println!("{}", records::cluster_line(cluster));
            }
            for pair in &result.duplicates {
                println!("{}", records::duplicate_line(pair));
            }
            for suggestion in &result.tag_suggestions {
                println!("{}", records::tag_line(suggestion));
            }
        }
    }

    Ok(())
}
