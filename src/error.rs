//! Error taxonomy for the export pipeline.
//!
//! Every failure class carries a distinct user-facing message identifying the
//! stage that failed. None of them are retried within a run; the next
//! scheduled pass is the only retry mechanism.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The history database could not be found or read.
    #[error(
        "the history file could not be read at {}: {source}\nPlease specify the input file manually.",
        .path.display()
    )]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not a valid SQLite database.
    #[error("the snapshot at {} could not be opened as a history database: {source}", .path.display())]
    CorruptSnapshot {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The snapshot opened fine but the expected table/columns are missing,
    /// or reading rows failed.
    #[error("there was an error reading history data from the snapshot: {source}")]
    QueryFailed {
        #[source]
        source: rusqlite::Error,
    },

    /// The upload collaborator rejected the artifact (auth, network, remote).
    #[error("uploading the history sheet failed: {source}")]
    PublishFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// I/O outside the classes above (temp dir allocation, artifact write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client construction failed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Missing or unusable process configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ExportError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
