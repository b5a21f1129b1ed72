//! Profiling results.
//!
//! A [`ProfilingSummary`] maps table names to [`TableProfile`]s. Each column
//! profile always carries null/distinct accounting; numeric, date and
//! top-value blocks are present only when the data supports them.

use std::fmt;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::format_number;

/// Quantile summary over the numeric-coercible values of a column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
    pub mean: f64,
    /// Population standard deviation (divisor N).
    pub std: f64,
}

/// Calendar date range over the date-coercible values of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

/// Descriptive statistics for one column of one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub non_null: usize,
    pub nulls: usize,
    pub null_pct: f64,
    pub distinct: usize,
    #[serde(flatten)]
    pub numeric: Option<NumericSummary>,
    #[serde(flatten)]
    pub dates: Option<DateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_values: Option<IndexMap<String, usize>>,
}

impl ColumnProfile {
    /// Stat keys present in this profile, in serialized order.
    pub fn metrics(&self) -> Vec<(&'static str, MetricValue)> {
        let mut metrics = vec![
            ("non_null", MetricValue::Count(self.non_null)),
            ("nulls", MetricValue::Count(self.nulls)),
            ("null_pct", MetricValue::Float(self.null_pct)),
            ("distinct", MetricValue::Count(self.distinct)),
        ];
        if let Some(numeric) = &self.numeric {
            metrics.extend([
                ("min", MetricValue::Float(numeric.min)),
                ("p25", MetricValue::Float(numeric.p25)),
                ("p50", MetricValue::Float(numeric.p50)),
                ("p75", MetricValue::Float(numeric.p75)),
                ("max", MetricValue::Float(numeric.max)),
                ("mean", MetricValue::Float(numeric.mean)),
                ("std", MetricValue::Float(numeric.std)),
            ]);
        }
        if let Some(dates) = &self.dates {
            metrics.push(("min_date", MetricValue::Date(dates.min_date)));
            metrics.push(("max_date", MetricValue::Date(dates.max_date)));
        }
        if let Some(top_values) = &self.top_values {
            metrics.push(("top_values", MetricValue::Counts(top_values.clone())));
        }
        metrics
    }
}

/// Pearson coefficients keyed by column, then column.
///
/// `None` marks a pair without a defined coefficient (constant column or
/// fewer than two complete observations).
pub type CorrelationMatrix = IndexMap<String, IndexMap<String, Option<f64>>>;

/// Profile of one sample table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableProfile {
    pub row_count: usize,
    #[serde(default)]
    pub columns: IndexMap<String, ColumnProfile>,
    #[serde(
        rename = "correlation_pearson",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub correlation: Option<CorrelationMatrix>,
}

impl TableProfile {
    /// Profile of a table without rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Coefficient for the `(left, right)` pair, if defined.
    pub fn correlation_between(&self, left: &str, right: &str) -> Option<f64> {
        self.correlation
            .as_ref()?
            .get(left)?
            .get(right)
            .copied()
            .flatten()
    }
}

/// Profiles keyed by table name, in input order.
pub type ProfilingSummary = IndexMap<String, TableProfile>;

/// Granularity of a flattened profiling record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileLevel {
    Table,
    Column,
    Correlation,
}

impl ProfileLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileLevel::Table => "table",
            ProfileLevel::Column => "column",
            ProfileLevel::Correlation => "correlation",
        }
    }
}

impl fmt::Display for ProfileLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value carried by a flattened profiling record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(usize),
    Float(f64),
    Date(NaiveDate),
    /// Composite top-value counts, passed through unflattened.
    Counts(IndexMap<String, usize>),
    /// Undefined coefficient. Serializes as `null`, displays as empty.
    Missing,
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(value) => write!(f, "{value}"),
            MetricValue::Float(value) => f.write_str(&format_number(*value)),
            MetricValue::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            MetricValue::Counts(values) => {
                let json = serde_json::to_string(values).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
            MetricValue::Missing => Ok(()),
        }
    }
}

/// One row of the flattened profiling export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRecord {
    pub level: ProfileLevel,
    pub table: String,
    /// Empty for table and correlation records.
    pub column: String,
    pub metric: String,
    pub value: MetricValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_profile() -> ColumnProfile {
        ColumnProfile {
            non_null: 2,
            nulls: 1,
            null_pct: 1.0 / 3.0,
            distinct: 2,
            numeric: None,
            dates: None,
            top_values: None,
        }
    }

    #[test]
    fn absent_blocks_are_not_serialized() {
        let json = serde_json::to_value(base_profile()).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["distinct", "non_null", "null_pct", "nulls"]);
    }

    #[test]
    fn numeric_block_is_flattened() {
        let mut profile = base_profile();
        profile.numeric = Some(NumericSummary {
            min: 1.0,
            p25: 1.25,
            p50: 1.5,
            p75: 1.75,
            max: 2.0,
            mean: 1.5,
            std: 0.5,
        });
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["p50"], 1.5);
        assert_eq!(json["std"], 0.5);
        assert!(json.get("min_date").is_none());

        let round: ColumnProfile = serde_json::from_value(json).unwrap();
        assert_eq!(round, profile);
    }

    #[test]
    fn metrics_follow_key_order() {
        let mut profile = base_profile();
        profile.top_values = Some(IndexMap::from([("x".to_string(), 2)]));
        let keys: Vec<&str> = profile.metrics().iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec!["non_null", "nulls", "null_pct", "distinct", "top_values"]);
    }

    #[test]
    fn metric_value_display() {
        assert_eq!(MetricValue::Count(3).to_string(), "3");
        assert_eq!(MetricValue::Float(0.5).to_string(), "0.5");
        assert_eq!(MetricValue::Float(2.0).to_string(), "2");
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(MetricValue::Date(date).to_string(), "2025-01-01");
        let counts = IndexMap::from([("x".to_string(), 2), ("y".to_string(), 1)]);
        assert_eq!(MetricValue::Counts(counts).to_string(), r#"{"x":2,"y":1}"#);
        assert_eq!(MetricValue::Missing.to_string(), "");
        assert_eq!(serde_json::to_value(MetricValue::Missing).unwrap(), serde_json::Value::Null);
    }

    #[test]
    fn empty_table_profile_shape() {
        let json = serde_json::to_value(TableProfile::empty()).unwrap();
        assert_eq!(json, serde_json::json!({"row_count": 0, "columns": {}}));
    }
}
