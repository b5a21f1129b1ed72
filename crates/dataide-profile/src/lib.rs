//! dataIDE profiling engine.
//!
//! Computes descriptive statistics and chart suggestions over small,
//! loosely-typed sample tables:
//!
//! - **coerce**: best-effort numeric and date conversion of cell values
//! - **columns**: column extraction from row-oriented sample tables
//! - **hints**: advisory dtype lookup built from table schemas
//! - **column** / **table** / **dataset**: the profilers
//! - **charts**: chart suggestions
//! - **flatten**: flat records for CSV export
//!
//! Nothing in this crate performs I/O or returns an error. Malformed or
//! sparse input degrades to omitted blocks.

pub mod charts;
pub mod coerce;
pub mod column;
pub mod columns;
pub mod dataset;
pub mod flatten;
pub mod hints;
pub mod options;
pub mod table;

pub use charts::{suggest_charts, suggest_charts_with_options};
pub use coerce::{coerce_datetime, coerce_numeric, date_value, numeric_value};
pub use column::profile_column;
pub use columns::{ColumnKind, ColumnView, table_columns};
pub use dataset::{compute_profile, compute_profile_with_options};
pub use flatten::profile_to_rows;
pub use hints::{ColumnHints, SchemaHints, is_date_dtype, is_numeric_dtype};
pub use options::{ChartOptions, ProfileOptions};
pub use table::{profile_table, profile_table_with_hints};
