//! Full export bundle.

use std::io::{Cursor, Write};
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use dataide_model::DatasetPayload;
use dataide_profile::compute_profile;
use tracing::{debug, info};
use zip::ZipWriter;

use crate::error::Result;
use crate::profiling::{profiling_csv, profiling_json};
use crate::samples::{entry_options, write_table_entries};

/// Entries written after the sample CSVs, in archive order.
pub const BUNDLE_FILES: [&str; 5] = [
    "payload.json",
    "erd.mmd",
    "profiling.json",
    "profiling.csv",
    "README.txt",
];

fn readme(prompt: &str, generated_at: DateTime<Utc>) -> String {
    format!(
        "dataIDE export\n\
         Generated: {}\n\
         Prompt: {prompt}\n\
         \n\
         Files:\n\
         - samples/*.csv: sample rows per table\n\
         - payload.json: full structured payload\n\
         - erd.mmd: Mermaid ERD\n\
         - profiling.json: computed profiling summary\n\
         - profiling.csv: flattened profiling table\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

/// Builds the export archive, stamped with the current time.
pub fn build_export_zip(prompt: &str, payload: &DatasetPayload) -> Result<Vec<u8>> {
    build_export_zip_at(prompt, payload, Utc::now())
}

/// Builds the export archive.
///
/// Contains `samples/<table>.csv` for each non-empty sample table followed by
/// [`BUNDLE_FILES`]. A payload without a profiling summary is profiled here.
pub fn build_export_zip_at(
    prompt: &str,
    payload: &DatasetPayload,
    generated_at: DateTime<Utc>,
) -> Result<Vec<u8>> {
    let computed;
    let summary = if payload.profiling_summary.is_empty() {
        debug!("payload has no profiling summary, computing one");
        computed = compute_profile(&payload.sample_rows, &payload.tables);
        &computed
    } else {
        &payload.profiling_summary
    };

    let entries = [
        serde_json::to_string_pretty(payload)?,
        payload.mermaid_erd.clone(),
        profiling_json(summary)?,
        profiling_csv(summary)?,
        readme(prompt, generated_at),
    ];

    let mut buffer = Vec::new();
    {
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        let tables = write_table_entries(&mut zip, &payload.sample_rows, "samples/")?;
        for (name, contents) in BUNDLE_FILES.iter().zip(entries) {
            zip.start_file(*name, entry_options())?;
            zip.write_all(contents.as_bytes())?;
        }
        zip.finish()?;
        debug!(tables, "built export archive");
    }
    Ok(buffer)
}

/// Writes an archive to disk.
pub fn write_archive(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote archive");
    Ok(())
}
