//! CLI argument parsing for grimoire
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config, --now

pub mod parse;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use grimoire_core::format::OutputFormat;

use parse::{parse_format, parse_timestamp};

/// Grimoire - organize a magic performer's idea library
#[derive(Parser, Debug)]
#[command(name = "grimoire")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, grimoire_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Engine configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reference time for recency scoring (RFC 3339); defaults to now
    #[arg(long, global = true, value_parser = parse_timestamp)]
    pub now: Option<DateTime<Utc>>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cluster, deduplicate and suggest tags for the whole library
    Organize {
        /// Library snapshot (JSON, or YAML with .yaml/.yml extension)
        library: PathBuf,
    },

    /// List likely duplicate ideas
    Duplicates {
        /// Library snapshot
        library: PathBuf,
    },

    /// Group ideas into thematic clusters
    Clusters {
        /// Library snapshot
        library: PathBuf,
    },

    /// Suggest tags for ideas
    Tags {
        /// Library snapshot
        library: PathBuf,
    },

    /// Rank ideas by priority score
    Rank {
        /// Library snapshot
        library: PathBuf,

        /// Show at most this many ideas
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Explain the priority score of one idea
    Score {
        /// Library snapshot
        library: PathBuf,

        /// Idea ID
        id: String,
    },
}
