//! Dataset profiler.

use dataide_model::{ProfilingSummary, SampleTables, TableSchema};
use tracing::{debug, info_span};

use crate::hints::{ColumnHints, SchemaHints};
use crate::options::ProfileOptions;
use crate::table::profile_table_with_hints;

/// Profiles every table in `samples` with default options.
pub fn compute_profile(samples: &SampleTables, schemas: &[TableSchema]) -> ProfilingSummary {
    compute_profile_with_options(samples, schemas, &ProfileOptions::default())
}

/// Profiles every table in `samples`, in input order.
///
/// Profiling is driven by sample data: schemas naming tables without
/// sample rows are ignored.
pub fn compute_profile_with_options(
    samples: &SampleTables,
    schemas: &[TableSchema],
    options: &ProfileOptions,
) -> ProfilingSummary {
    let span = info_span!("compute_profile", tables = samples.len());
    let _guard = span.enter();

    let hints = SchemaHints::from_schemas(schemas);
    let no_hints = ColumnHints::default();
    let summary: ProfilingSummary = samples
        .iter()
        .map(|(table, rows)| {
            let columns = hints.table(table).unwrap_or(&no_hints);
            (table.clone(), profile_table_with_hints(table, rows, columns, options))
        })
        .collect();

    let unprofiled = hints
        .tables()
        .filter(|name| !samples.contains_key(*name))
        .count();
    debug!(profiled = summary.len(), unprofiled, "dataset profiled");
    summary
}
