//! Sample table CSVs and the samples archive.

use std::io::{Cursor, Write};

use dataide_model::{Row, SampleTables};
use indexmap::IndexSet;
use tracing::debug;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{ExportError, Result};
use crate::frame::{frame_to_csv, string_frame};

/// Deflate options shared by every archive entry.
pub(crate) fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated)
}

/// Writes rows as CSV.
///
/// Columns are the union of row keys in first-seen order. Nulls and
/// missing keys are empty fields.
pub fn rows_csv(rows: &[Row]) -> Result<String> {
    let names: IndexSet<&str> = rows
        .iter()
        .flat_map(|row| row.keys().map(String::as_str))
        .collect();
    let columns = names
        .into_iter()
        .map(|name| {
            let values = rows
                .iter()
                .map(|row| row.get(name).and_then(|value| value.display_string()))
                .collect();
            (name, values)
        })
        .collect();
    let mut df = string_frame(columns)?;
    frame_to_csv(&mut df)
}

/// CSV of one named sample table.
pub fn table_csv(samples: &SampleTables, table: &str) -> Result<String> {
    let rows = samples.get(table).ok_or_else(|| ExportError::UnknownTable {
        table: table.to_string(),
    })?;
    rows_csv(rows)
}

/// Writes one `<prefix><table>.csv` entry per non-empty table.
pub(crate) fn write_table_entries<W>(
    zip: &mut ZipWriter<W>,
    samples: &SampleTables,
    prefix: &str,
) -> Result<usize>
where
    W: Write + std::io::Seek,
{
    let mut written = 0;
    for (table, rows) in samples {
        if rows.is_empty() {
            continue;
        }
        zip.start_file(format!("{prefix}{table}.csv"), entry_options())?;
        zip.write_all(rows_csv(rows)?.as_bytes())?;
        written += 1;
    }
    Ok(written)
}

/// ZIP archive with one `<table>.csv` per non-empty sample table.
pub fn samples_zip(samples: &SampleTables) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        let written = write_table_entries(&mut zip, samples, "")?;
        zip.finish()?;
        debug!(tables = written, "built samples archive");
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataide_model::rows_from_json;

    #[test]
    fn union_of_columns_and_empty_nulls() {
        let rows = rows_from_json(r#"[{"a": 1, "b": true}, {"c": "x", "a": null}]"#).unwrap();
        assert_eq!(rows_csv(&rows).unwrap(), "a,b,c\n1,true,\n,,x\n");
    }

    #[test]
    fn unknown_table_is_an_error() {
        let samples = SampleTables::new();
        assert!(matches!(
            table_csv(&samples, "orders"),
            Err(ExportError::UnknownTable { .. })
        ));
    }
}
