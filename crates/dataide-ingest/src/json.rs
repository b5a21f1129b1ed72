//! Payload, schema and sample-row JSON files.

use std::path::Path;

use dataide_model::{DatasetPayload, SampleTables, TableSchema};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{IngestError, Result};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a full dataset payload.
pub fn read_payload(path: &Path) -> Result<DatasetPayload> {
    let payload: DatasetPayload = read_json(path)?;
    debug!(
        path = %path.display(),
        tables = payload.tables.len(),
        samples = payload.sample_rows.len(),
        "loaded payload"
    );
    Ok(payload)
}

/// Reads table schemas: either a JSON array of tables or an object with a
/// `tables` array (such as a payload file).
pub fn read_schemas(path: &Path) -> Result<Vec<TableSchema>> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum SchemaFile {
        List(Vec<TableSchema>),
        Wrapped { tables: Vec<TableSchema> },
    }

    let schemas = match read_json::<SchemaFile>(path)? {
        SchemaFile::List(tables) | SchemaFile::Wrapped { tables } => tables,
    };
    debug!(path = %path.display(), tables = schemas.len(), "loaded schemas");
    Ok(schemas)
}

/// Reads a JSON object mapping table names to row arrays.
pub fn read_sample_rows(path: &Path) -> Result<SampleTables> {
    read_json(path)
}
