//! Advisory dtype hints.
//!
//! Hints only widen what the profilers look for. They never suppress a
//! block the data supports, and never create one the data does not.

use dataide_model::TableSchema;
use indexmap::IndexMap;

const NUMERIC_DTYPES: &[&str] = &["int", "integer", "bigint", "float", "double", "decimal", "number"];

/// Whether a declared dtype names a numeric type.
pub fn is_numeric_dtype(dtype: &str) -> bool {
    let dtype = dtype.trim().to_ascii_lowercase();
    NUMERIC_DTYPES.contains(&dtype.as_str())
}

/// Whether a declared dtype names a date or date-time type.
pub fn is_date_dtype(dtype: &str) -> bool {
    dtype.to_ascii_lowercase().contains("date")
}

/// Column name to declared dtype for one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnHints {
    dtypes: IndexMap<String, String>,
}

impl ColumnHints {
    /// Builds hints from a schema. The first declaration of a column wins.
    pub fn from_schema(schema: &TableSchema) -> Self {
        let mut dtypes = IndexMap::new();
        for column in &schema.columns {
            dtypes
                .entry(column.name.clone())
                .or_insert_with(|| column.dtype.clone());
        }
        Self { dtypes }
    }

    pub fn dtype(&self, column: &str) -> Option<&str> {
        self.dtypes.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dtypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dtypes.is_empty()
    }
}

impl From<&TableSchema> for ColumnHints {
    fn from(schema: &TableSchema) -> Self {
        Self::from_schema(schema)
    }
}

/// Declared dtypes for a whole dataset: table, then column, then dtype.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaHints {
    tables: IndexMap<String, ColumnHints>,
}

impl SchemaHints {
    /// A later schema with the same table name replaces an earlier one.
    pub fn from_schemas(schemas: &[TableSchema]) -> Self {
        let tables = schemas
            .iter()
            .map(|schema| (schema.name.clone(), ColumnHints::from_schema(schema)))
            .collect();
        Self { tables }
    }

    pub fn table(&self, table: &str) -> Option<&ColumnHints> {
        self.tables.get(table)
    }

    pub fn dtype(&self, table: &str, column: &str) -> Option<&str> {
        self.table(table)?.dtype(column)
    }

    /// Table names with declared schemas, in first-declared order.
    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
