//! Error types for the collector.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the collector.
#[derive(Error, Debug)]
pub enum Error {
    // Name classification errors
    #[error("Name syntax error, too few tokens: {0}")]
    NameSyntax(String),

    #[error("Parsed title is empty: {0}")]
    EmptyTitle(String),

    #[error("Season or episode not found: {0}")]
    UnmatchedEpisode(String),

    // Override file errors
    #[error("Override file {path} unusable: {reason}")]
    OverrideRead { path: PathBuf, reason: String },

    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    // Config errors
    #[error("Invalid config: {0}")]
    Config(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // TOML errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Whether this error only skips the entry that caused it.
    ///
    /// Anything else ends the scan pass for the current root.
    pub fn is_entry_skip(&self) -> bool {
        matches!(
            self,
            Error::NameSyntax(_)
                | Error::EmptyTitle(_)
                | Error::UnmatchedEpisode(_)
                | Error::OverrideRead { .. }
        )
    }
}
