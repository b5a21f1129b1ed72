//! Table profiler and Pearson correlation.

use dataide_model::{CorrelationMatrix, Row, TableProfile, TableSchema};
use indexmap::IndexMap;
use tracing::debug;

use crate::coerce::coerce_numeric;
use crate::column::{magnitude_scale, profile_column};
use crate::columns::table_columns;
use crate::hints::ColumnHints;
use crate::options::ProfileOptions;

/// Profiles one table.
///
/// A table without rows profiles to `{row_count: 0, columns: {}}` with no
/// correlation block. Schema hints are matched by exact column name.
pub fn profile_table(
    table: &str,
    rows: &[Row],
    schema: Option<&TableSchema>,
    options: &ProfileOptions,
) -> TableProfile {
    let hints = schema.map(ColumnHints::from_schema).unwrap_or_default();
    profile_table_with_hints(table, rows, &hints, options)
}

/// Profiles one table against prepared column hints.
pub fn profile_table_with_hints(
    table: &str,
    rows: &[Row],
    hints: &ColumnHints,
    options: &ProfileOptions,
) -> TableProfile {
    if rows.is_empty() {
        debug!(table, "empty table");
        return TableProfile::empty();
    }

    let columns = table_columns(rows);

    let profiles = columns
        .iter()
        .map(|column| {
            let profile = profile_column(
                column.name,
                &column.values,
                hints.dtype(column.name),
                options,
            );
            (column.name.to_string(), profile)
        })
        .collect();

    let numeric: Vec<(&str, Vec<Option<f64>>)> = columns
        .iter()
        .map(|column| (column.name, coerce_numeric(column.values.iter().copied())))
        .filter(|(_, values)| values.iter().any(Option::is_some))
        .collect();
    let correlation =
        (numeric.len() >= 2).then(|| correlation_matrix(&numeric, options.correlation_decimals));

    debug!(
        table,
        rows = rows.len(),
        columns = columns.len(),
        numeric_columns = numeric.len(),
        hinted = !hints.is_empty(),
        "profiled table"
    );

    TableProfile {
        row_count: rows.len(),
        columns: profiles,
        correlation,
    }
}

fn correlation_matrix(columns: &[(&str, Vec<Option<f64>>)], decimals: u8) -> CorrelationMatrix {
    let n = columns.len();
    let mut coefficients = vec![vec![None; n]; n];
    for i in 0..n {
        coefficients[i][i] = Some(1.0);
        for j in (i + 1)..n {
            let r = pearson(&columns[i].1, &columns[j].1).map(|r| round_to(r, decimals));
            coefficients[i][j] = r;
            coefficients[j][i] = r;
        }
    }

    columns
        .iter()
        .zip(coefficients)
        .map(|((name, _), row)| {
            let row: IndexMap<String, Option<f64>> = columns
                .iter()
                .map(|(other, _)| other.to_string())
                .zip(row)
                .collect();
            (name.to_string(), row)
        })
        .collect()
}

/// Pearson coefficient over pairwise-complete observations.
///
/// `None` with fewer than two complete pairs or zero variance on either side.
pub(crate) fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let scale_x = magnitude_scale(&pairs.iter().map(|(x, _)| *x).collect::<Vec<_>>());
    let scale_y = magnitude_scale(&pairs.iter().map(|(_, y)| *y).collect::<Vec<_>>());
    let pairs: Vec<(f64, f64)> = pairs
        .into_iter()
        .map(|(x, y)| (x / scale_x, y / scale_y))
        .collect();

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return None;
    }

    let r = sxy / (sxx * syy).sqrt();
    r.is_finite().then(|| r.clamp(-1.0, 1.0))
}

/// Rounds half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: u8) -> f64 {
    let factor = 10f64.powi(i32::from(decimals));
    (value * factor).round() / factor
}
