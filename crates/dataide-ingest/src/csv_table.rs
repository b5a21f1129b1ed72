//! CSV sample table loading.
//!
//! Every cell starts as text. A column whose non-empty cells all parse as
//! finite numbers is loaded as numbers, one made only of `true`/`false` as
//! booleans. Empty cells are nulls.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use dataide_model::{CellValue, Row, SampleTables};
use tracing::debug;

use crate::discovery::list_csv_files;
use crate::error::{IngestError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellType {
    Number,
    Bool,
    Text,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn is_number(value: &str) -> bool {
    value.parse::<f64>().is_ok_and(f64::is_finite)
}

fn column_type(records: &[Vec<String>], idx: usize) -> CellType {
    let mut cells = records
        .iter()
        .filter_map(|record| record.get(idx))
        .map(String::as_str)
        .filter(|cell| !cell.is_empty())
        .peekable();
    if cells.peek().is_none() {
        return CellType::Text;
    }
    let cells: Vec<&str> = cells.collect();
    if cells.iter().all(|cell| is_number(cell)) {
        CellType::Number
    } else if cells.iter().all(|cell| parse_bool(cell).is_some()) {
        CellType::Bool
    } else {
        CellType::Text
    }
}

fn to_cell(raw: &str, cell_type: CellType) -> CellValue {
    if raw.is_empty() {
        return CellValue::Null;
    }
    match cell_type {
        CellType::Number => raw
            .parse::<f64>()
            .map_or_else(|_| CellValue::Text(raw.to_string()), CellValue::Number),
        CellType::Bool => parse_bool(raw).map_or_else(|| CellValue::Text(raw.to_string()), CellValue::Bool),
        CellType::Text => CellValue::Text(raw.to_string()),
    }
}

/// Reads one CSV file with a header row into sample rows.
///
/// Blank lines are skipped and short records padded with nulls.
pub fn read_sample_table(path: &Path) -> Result<Vec<Row>> {
    let csv_error = |source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();

    let mut records: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let cells: Vec<String> = record.iter().map(|cell| normalize_cell(cell).to_string()).collect();
        if cells.iter().all(String::is_empty) {
            continue;
        }
        records.push(cells);
    }

    let types: Vec<CellType> = (0..headers.len()).map(|idx| column_type(&records, idx)).collect();
    let rows: Vec<Row> = records
        .iter()
        .map(|record| {
            headers
                .iter()
                .zip(&types)
                .enumerate()
                .map(|(idx, (header, cell_type))| {
                    let raw = record.get(idx).map(String::as_str).unwrap_or("");
                    (header.clone(), to_cell(raw, *cell_type))
                })
                .collect()
        })
        .collect();

    debug!(path = %path.display(), rows = rows.len(), columns = headers.len(), "loaded CSV sample");
    Ok(rows)
}

/// Table name for a CSV file: its file stem.
pub fn table_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}

/// Loads every `*.csv` file in `dir` as a sample table named after the file
/// stem, in filename order.
pub fn load_samples_dir(dir: &Path) -> Result<SampleTables> {
    let files: Vec<PathBuf> = list_csv_files(dir)?;
    let mut samples = SampleTables::new();
    for path in files {
        let Some(name) = table_name(&path) else {
            continue;
        };
        let rows = read_sample_table(&path)?;
        samples.insert(name, rows);
    }
    debug!(dir = %dir.display(), tables = samples.len(), "loaded sample folder");
    Ok(samples)
}
