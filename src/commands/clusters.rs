//! `grimoire clusters` command - thematic clusters

use grimoire_core::cluster::clusterize;
use grimoire_core::error::Result;
use grimoire_core::format::OutputFormat;

use super::dispatch::Session;
use super::format::{human, output_json, records, title_map};
use crate::cli::Cli;

/// Execute the clusters command
pub fn execute(cli: &Cli, session: &Session) -> Result<()> {
    let ideas = &session.library.ideas;
    let clusters = clusterize(ideas);

    match cli.format {
        OutputFormat::Json => output_json(&clusters)?,
        OutputFormat::Human => human::output_clusters(cli, &clusters, &title_map(ideas)),
        OutputFormat::Records => {
            println!("{}", records::header("clusters", ideas.len()));
            for cluster in &clusters {
                println!("{}", records::cluster_line(cluster));
            }
        }
    }

    Ok(())
}
