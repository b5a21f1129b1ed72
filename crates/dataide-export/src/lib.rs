//! dataIDE export layer.
//!
//! - **profiling**: profiling summary as pretty JSON and as the flattened
//!   `level,table,column,metric,value` CSV
//! - **samples**: per-table sample CSVs and the samples archive
//! - **bundle**: the full export archive with payload, ERD and README
//!
//! CSV text is produced through polars string frames.

pub mod bundle;
pub mod error;
pub mod frame;
pub mod profiling;
pub mod samples;

pub use bundle::{BUNDLE_FILES, build_export_zip, build_export_zip_at, write_archive};
pub use error::{ExportError, Result};
pub use profiling::{PROFILING_CSV_HEADER, profiling_csv, profiling_json, records_frame};
pub use samples::{rows_csv, samples_zip, table_csv};
