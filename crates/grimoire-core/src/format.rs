//! Output format handling for grimoire
//!
//! Supports three output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented format for scripts and LLM context injection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GrimoireError;

/// Output format for grimoire commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Records output for line-oriented consumers
    Records,
}

impl FromStr for OutputFormat {
    type Err = GrimoireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(GrimoireError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats_case_insensitive() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "records".parse::<OutputFormat>().unwrap(),
            OutputFormat::Records
        );
        assert_eq!(OutputFormat::default(), OutputFormat::Human);
    }

    #[test]
    fn test_unknown_format() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, GrimoireError::UnknownFormat(ref f) if f == "xml"));
    }
}
