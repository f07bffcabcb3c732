//! Command dispatch logic for grimoire
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use grimoire_core::config::OrganizeConfig;
use grimoire_core::error::Result;
use grimoire_core::idea::UsageMap;
use grimoire_core::library::Library;
use grimoire_core::trace_time;
use grimoire_core::Organizer;

use crate::cli::{Cli, Commands};
use crate::commands;

/// Everything a command needs: the loaded library and a configured engine
pub struct Session {
    pub library: Library,
    pub usage: UsageMap,
    pub organizer: Organizer,
    pub now: DateTime<Utc>,
}

impl Session {
    /// Load configuration and the library snapshot named on the command line
    pub fn open(cli: &Cli, library_path: &Path) -> Result<Self> {
        let start = Instant::now();

        let config = match &cli.config {
            Some(path) => OrganizeConfig::load(path)?,
            None => OrganizeConfig::load_default()?,
        };
        let library = Library::load(library_path)?;
        let usage = library.usage_map();

        trace_time!(start, "open_session", ideas = library.ideas.len());

        Ok(Session {
            library,
            usage,
            organizer: Organizer::new(config),
            now: cli.now.unwrap_or_else(Utc::now),
        })
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let result = match &cli.command {
        Commands::Organize { library } => {
            commands::organize::execute(cli, &Session::open(cli, library)?)
        }
        Commands::Duplicates { library } => {
            commands::duplicates::execute(cli, &Session::open(cli, library)?)
        }
        Commands::Clusters { library } => {
            commands::clusters::execute(cli, &Session::open(cli, library)?)
        }
        Commands::Tags { library } => commands::tags::execute(cli, &Session::open(cli, library)?),
        Commands::Rank { library, limit } => {
            commands::rank::execute(cli, &Session::open(cli, library)?, *limit)
        }
        Commands::Score { library, id } => {
            commands::score::execute(cli, &Session::open(cli, library)?, id)
        }
    };

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "command_complete");
    }

    result
}
