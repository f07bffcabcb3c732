//! Error types and exit codes for grimoire
//!
//! The organization engine itself never fails; these errors only arise at the
//! boundary (loading a library snapshot, reading configuration, CLI usage).
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing or malformed library, unknown idea)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the grimoire CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing library, invalid snapshot, unknown idea (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur at the grimoire boundary
#[derive(Error, Debug)]
pub enum GrimoireError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("library not found: {path:?}")]
    LibraryNotFound { path: PathBuf },

    #[error("invalid library {path:?}: {reason}")]
    InvalidLibrary { path: PathBuf, reason: String },

    #[error("idea not found: {id}")]
    IdeaNotFound { id: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GrimoireError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GrimoireError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a library file that could not be parsed
    pub fn invalid_library(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        GrimoireError::InvalidLibrary {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GrimoireError::UnknownFormat(_)
            | GrimoireError::UsageError(_)
            | GrimoireError::InvalidValue { .. } => ExitCode::Usage,

            GrimoireError::LibraryNotFound { .. }
            | GrimoireError::InvalidLibrary { .. }
            | GrimoireError::IdeaNotFound { .. } => ExitCode::Data,

            GrimoireError::Io(_)
            | GrimoireError::Json(_)
            | GrimoireError::Toml(_)
            | GrimoireError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GrimoireError::UnknownFormat(_) => "unknown_format",
            GrimoireError::UsageError(_) => "usage_error",
            GrimoireError::InvalidValue { .. } => "invalid_value",
            GrimoireError::LibraryNotFound { .. } => "library_not_found",
            GrimoireError::InvalidLibrary { .. } => "invalid_library",
            GrimoireError::IdeaNotFound { .. } => "idea_not_found",
            GrimoireError::Io(_) => "io_error",
            GrimoireError::Json(_) => "json_error",
            GrimoireError::Toml(_) => "toml_error",
            GrimoireError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for grimoire operations
pub type Result<T> = std::result::Result<T, GrimoireError>;
