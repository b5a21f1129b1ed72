//! Error types for dataset suppliers.

use dataide_ingest::IngestError;
use thiserror::Error;

/// Why a supplier could not produce a payload.
///
/// Every variant is recoverable: callers substitute the synthetic payload.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The supplier is not configured or cannot be reached.
    #[error("{supplier} supplier unavailable: {reason}")]
    Unavailable { supplier: String, reason: String },

    /// Reading the supplier's source failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The supplied payload is structurally inconsistent.
    #[error("invalid payload: {message}")]
    InvalidPayload { message: String },
}

/// Result type for supplier operations.
pub type Result<T> = std::result::Result<T, GenerationError>;
