//! Error types for sample data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading sample data from disk.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read a file or directory.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV.
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Malformed or structurally invalid JSON.
    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Sample folder path is missing or not a directory.
    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
