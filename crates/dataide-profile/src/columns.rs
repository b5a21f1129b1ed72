//! Column extraction from row-oriented sample tables.

use dataide_model::{CellValue, Row};
use indexmap::IndexSet;

static MISSING: CellValue = CellValue::Null;

/// Borrowed view of one column: one value per table row.
#[derive(Debug, Clone)]
pub struct ColumnView<'a> {
    pub name: &'a str,
    pub values: Vec<&'a CellValue>,
}

impl ColumnView<'_> {
    pub fn kind(&self) -> ColumnKind {
        ColumnKind::of(self.values.iter().copied())
    }
}

/// Underlying representation of a column's non-null values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// No non-null values.
    Empty,
    /// Every non-null value is a number.
    Numeric,
    /// Every non-null value is a boolean.
    Boolean,
    /// Free-form text, or a mix of representations.
    Text,
}

impl ColumnKind {
    pub fn of<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a CellValue>,
    {
        let mut kind = ColumnKind::Empty;
        for value in values {
            let current = match value {
                CellValue::Null => continue,
                CellValue::Number(_) => ColumnKind::Numeric,
                CellValue::Bool(_) => ColumnKind::Boolean,
                CellValue::Text(_) => return ColumnKind::Text,
            };
            kind = match kind {
                ColumnKind::Empty => current,
                seen if seen == current => seen,
                _ => return ColumnKind::Text,
            };
        }
        kind
    }

    /// Whether frequency counts and bar charts apply.
    pub fn is_free_form(self) -> bool {
        self == ColumnKind::Text
    }
}

/// Splits rows into columns.
///
/// Columns are the union of row keys in first-seen order; a row without a
/// key contributes a null for that column.
pub fn table_columns(rows: &[Row]) -> Vec<ColumnView<'_>> {
    let names: IndexSet<&str> = rows
        .iter()
        .flat_map(|row| row.keys().map(String::as_str))
        .collect();

    names
        .into_iter()
        .map(|name| ColumnView {
            name,
            values: rows
                .iter()
                .map(|row| row.get(name).unwrap_or(&MISSING))
                .collect(),
        })
        .collect()
}
