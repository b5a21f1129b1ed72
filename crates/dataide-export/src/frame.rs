//! String-column frames written as CSV.
//!
//! Every export table is built as a polars [`DataFrame`] of nullable string
//! columns. Nulls are written as empty fields.

use polars::prelude::{Column, CsvWriter, DataFrame, IntoColumn, NamedFrom, SerWriter, Series};

use crate::error::Result;

/// Builds a frame from `(name, values)` columns of equal length.
pub fn string_frame(columns: Vec<(&str, Vec<Option<String>>)>) -> Result<DataFrame> {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    Ok(DataFrame::new(cols)?)
}

/// Writes a frame as CSV text with a header row.
pub fn frame_to_csv(df: &mut DataFrame) -> Result<String> {
    if df.width() == 0 {
        return Ok(String::new());
    }
    let mut buf = Vec::new();
    CsvWriter::new(&mut buf).include_header(true).finish(df)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
