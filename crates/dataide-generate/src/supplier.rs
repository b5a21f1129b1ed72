//! Dataset suppliers.

use std::path::{Path, PathBuf};

use dataide_ingest::read_payload;
use dataide_model::DatasetPayload;
use tracing::debug;

use crate::error::{GenerationError, Result};

/// Turns a free-text prompt into a dataset payload.
pub trait DatasetSupplier {
    /// Short name used in logs and caveats.
    fn name(&self) -> &str;

    fn supply(&self, prompt: &str) -> Result<DatasetPayload>;
}

/// Supplier backed by a payload JSON file produced elsewhere, for example
/// by an external generative model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSupplier {
    path: PathBuf,
}

impl FileSupplier {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSupplier for FileSupplier {
    fn name(&self) -> &str {
        "file"
    }

    fn supply(&self, prompt: &str) -> Result<DatasetPayload> {
        if !self.path.is_file() {
            return Err(GenerationError::Unavailable {
                supplier: self.name().to_string(),
                reason: format!("no payload file at {}", self.path.display()),
            });
        }
        let payload = read_payload(&self.path)?;
        validate_payload(&payload)?;
        debug!(path = %self.path.display(), prompt, "payload read from file");
        Ok(payload)
    }
}

/// Rejects payloads whose structure cannot be profiled consistently.
///
/// A payload must describe at least one table, and every foreign key must
/// point at a declared table.
pub fn validate_payload(payload: &DatasetPayload) -> Result<()> {
    if payload.tables.is_empty() && payload.sample_rows.is_empty() {
        return Err(GenerationError::InvalidPayload {
            message: "payload declares no tables and no sample rows".to_string(),
        });
    }

    for table in &payload.tables {
        for fk in table.foreign_keys.iter().flatten() {
            let Some((target, _)) = fk.target() else {
                return Err(GenerationError::InvalidPayload {
                    message: format!(
                        "foreign key {}.{} has malformed reference '{}'",
                        table.name, fk.column, fk.reference
                    ),
                });
            };
            if payload.table_schema(target).is_none() {
                return Err(GenerationError::InvalidPayload {
                    message: format!(
                        "foreign key {}.{} references unknown table '{target}'",
                        table.name, fk.column
                    ),
                });
            }
        }
    }
    Ok(())
}
