//! Error types for exports.

use thiserror::Error;

/// Errors that can occur while serializing or bundling exports.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Building or writing a CSV frame failed.
    #[error("CSV export failed: {0}")]
    Csv(#[from] polars::prelude::PolarsError),

    #[error("ZIP archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A requested table is not present in the sample rows.
    #[error("table '{table}' not found in sample rows")]
    UnknownTable { table: String },
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
