//! Column profiler.

use std::collections::HashSet;

use dataide_model::{CellValue, ColumnProfile, DateRange, NumericSummary};
use indexmap::IndexMap;
use tracing::trace;

use crate::coerce::{date_value, numeric_value};
use crate::columns::ColumnKind;
use crate::hints::{is_date_dtype, is_numeric_dtype};
use crate::options::ProfileOptions;

/// Profiles one column.
///
/// `values` holds one entry per table row, so `non_null + nulls` always
/// equals the row count. `hint` is the declared dtype, if any.
pub fn profile_column(
    name: &str,
    values: &[&CellValue],
    hint: Option<&str>,
    options: &ProfileOptions,
) -> ColumnProfile {
    let row_count = values.len();
    let nulls = values.iter().filter(|value| value.is_null()).count();
    let null_pct = if row_count == 0 {
        0.0
    } else {
        nulls as f64 / row_count as f64
    };

    let numbers: Vec<f64> = values.iter().filter_map(|value| numeric_value(value)).collect();
    let numeric = summarize(&numbers);
    if numeric.is_none() && hint.is_some_and(is_numeric_dtype) {
        trace!(column = name, "numeric hint without coercible values");
    }

    let date_candidate =
        hint.is_some_and(is_date_dtype) || name.to_ascii_lowercase().contains("date");
    let dates = if date_candidate {
        date_range(values.iter().filter_map(|value| date_value(value)))
    } else {
        None
    };

    let kind = ColumnKind::of(values.iter().copied());
    let top_values = kind
        .is_free_form()
        .then(|| top_values(values, options.top_values_limit));

    trace!(
        column = name,
        non_null = row_count - nulls,
        numeric = numeric.is_some(),
        dates = dates.is_some(),
        ?kind,
        "profiled column"
    );

    ColumnProfile {
        non_null: row_count - nulls,
        nulls,
        null_pct,
        distinct: distinct_count(values),
        numeric,
        dates,
        top_values,
    }
}

/// Equality key over raw representations. `1` and `1.0` share a key,
/// `1` and `"1"` do not.
#[derive(Debug, PartialEq, Eq, Hash)]
enum DistinctKey<'a> {
    Bool(bool),
    Number(u64),
    Text(&'a str),
}

fn distinct_count(values: &[&CellValue]) -> usize {
    values
        .iter()
        .filter_map(|value| match value {
            CellValue::Null => None,
            CellValue::Bool(flag) => Some(DistinctKey::Bool(*flag)),
            // -0.0 + 0.0 == 0.0, folding both zeros onto one key.
            CellValue::Number(number) => Some(DistinctKey::Number((number + 0.0).to_bits())),
            CellValue::Text(text) => Some(DistinctKey::Text(text)),
        })
        .collect::<HashSet<_>>()
        .len()
}

fn top_values(values: &[&CellValue], limit: usize) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for text in values.iter().filter_map(|value| value.display_string()) {
        *counts.entry(text).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    // Stable sort: equal counts stay in first-seen order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked.into_iter().collect()
}

fn summarize(numbers: &[f64]) -> Option<NumericSummary> {
    if numbers.is_empty() {
        return None;
    }
    let mut sorted = numbers.to_vec();
    sorted.sort_by(f64::total_cmp);

    let (min, max) = (sorted[0], sorted[sorted.len() - 1]);
    let n = sorted.len() as f64;
    let scale = magnitude_scale(&sorted);
    let scaled_mean = sorted.iter().map(|x| x / scale).sum::<f64>() / n;
    let scaled_variance = sorted
        .iter()
        .map(|x| (x / scale - scaled_mean).powi(2))
        .sum::<f64>()
        / n;

    Some(NumericSummary {
        min,
        p25: percentile(&sorted, 0.25),
        p50: percentile(&sorted, 0.5),
        p75: percentile(&sorted, 0.75),
        max,
        mean: (scaled_mean * scale).clamp(min, max),
        std: scaled_variance.sqrt() * scale,
    })
}

/// Normal power of two near the largest magnitude in `values`, or 1 when
/// that is zero or subnormal.
///
/// Dividing by it is exact and keeps every term within a small constant, so
/// sums of values and squared deviations stay finite for any finite input.
pub(crate) fn magnitude_scale(values: &[f64]) -> f64 {
    let largest = values.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    if !largest.is_normal() {
        return 1.0;
    }
    // log2 of values just below 2^1024 rounds up to 1024.
    let exponent = (largest.log2().floor() as i32).clamp(f64::MIN_EXP - 1, f64::MAX_EXP - 1);
    2f64.powi(exponent)
}

/// Linear-interpolation quantile over sorted, non-empty input.
pub(crate) fn percentile(sorted: &[f64], q: f64) -> f64 {
    let pos = (sorted.len() - 1) as f64 * q;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let (low, high) = (sorted[lower], sorted[upper]);
    (low + (high - low) * (pos - lower as f64)).clamp(low, high)
}

fn date_range<I>(dates: I) -> Option<DateRange>
where
    I: IntoIterator<Item = chrono::NaiveDate>,
{
    dates.into_iter().fold(None, |range, date| {
        Some(match range {
            None => DateRange {
                min_date: date,
                max_date: date,
            },
            Some(DateRange { min_date, max_date }) => DateRange {
                min_date: min_date.min(date),
                max_date: max_date.max(date),
            },
        })
    })
}
