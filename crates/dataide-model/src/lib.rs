//! dataIDE data model.
//!
//! Shared types for the profiling workspace:
//!
//! - **value**: loosely-typed sample cells, rows and table collections
//! - **schema**: declared table/column metadata used as profiling hints
//! - **profile**: column/table profiles, the profiling summary and flat records
//! - **chart**: suggested chart specifications
//! - **payload**: the full dataset payload exchanged with suppliers and exporters

pub mod chart;
pub mod error;
pub mod payload;
pub mod profile;
pub mod schema;
pub mod value;

pub use chart::{ChartKind, SuggestedChart};
pub use error::{ModelError, Result};
pub use payload::DatasetPayload;
pub use profile::{
    ColumnProfile, CorrelationMatrix, DateRange, MetricValue, NumericSummary, ProfileLevel,
    ProfileRecord, ProfilingSummary, TableProfile,
};
pub use schema::{ColumnMeta, ForeignKey, TableSchema};
pub use value::{CellValue, Row, SampleTables, rows_from_json};
