//! Profiling summary exports.

use dataide_model::{MetricValue, ProfileRecord, ProfilingSummary};
use dataide_profile::profile_to_rows;
use polars::prelude::DataFrame;

use crate::error::Result;
use crate::frame::{frame_to_csv, string_frame};

/// Column order of the flattened profiling CSV.
pub const PROFILING_CSV_HEADER: [&str; 5] = ["level", "table", "column", "metric", "value"];

/// Pretty-printed JSON of a profiling summary.
pub fn profiling_json(summary: &ProfilingSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Flattened records as a frame with the [`PROFILING_CSV_HEADER`] columns.
///
/// Empty column names and undefined coefficients are stored as nulls so
/// they write as empty fields.
/// Composite values such as `top_values` are written as compact JSON.
pub fn records_frame(records: &[ProfileRecord]) -> Result<DataFrame> {
    let mut levels = Vec::with_capacity(records.len());
    let mut tables = Vec::with_capacity(records.len());
    let mut columns = Vec::with_capacity(records.len());
    let mut metrics = Vec::with_capacity(records.len());
    let mut values = Vec::with_capacity(records.len());
    for record in records {
        levels.push(Some(record.level.to_string()));
        tables.push(Some(record.table.clone()));
        columns.push((!record.column.is_empty()).then(|| record.column.clone()));
        metrics.push(Some(record.metric.clone()));
        values.push(match &record.value {
            MetricValue::Missing => None,
            value => Some(value.to_string()),
        });
    }

    let [level, table, column, metric, value] = PROFILING_CSV_HEADER;
    string_frame(vec![
        (level, levels),
        (table, tables),
        (column, columns),
        (metric, metrics),
        (value, values),
    ])
}

/// Flattened profiling CSV with header `level,table,column,metric,value`.
pub fn profiling_csv(summary: &ProfilingSummary) -> Result<String> {
    let records = profile_to_rows(summary);
    let mut df = records_frame(&records)?;
    frame_to_csv(&mut df)
}
