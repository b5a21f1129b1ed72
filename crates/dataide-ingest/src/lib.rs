//! Sample data ingestion.
//!
//! Loads sample tables from CSV folders and dataset payloads, schemas and
//! sample rows from JSON files. Structural problems in the input are
//! rejected here, before anything reaches the profiler.

pub mod csv_table;
pub mod discovery;
pub mod error;
pub mod json;

pub use csv_table::{load_samples_dir, read_sample_table, table_name};
pub use discovery::list_csv_files;
pub use error::{IngestError, Result};
pub use json::{read_payload, read_sample_rows, read_schemas};
