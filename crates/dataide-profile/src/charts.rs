//! Chart suggestions from raw sample rows.

use std::collections::HashSet;

use dataide_model::{ChartKind, SampleTables, SuggestedChart};
use tracing::debug;

use crate::coerce::{date_value, numeric_value};
use crate::columns::{ColumnView, table_columns};
use crate::options::ChartOptions;

/// Suggests charts with default options (at most 6).
pub fn suggest_charts(samples: &SampleTables) -> Vec<SuggestedChart> {
    suggest_charts_with_options(samples, &ChartOptions::default())
}

/// Suggests charts per table, in table order.
///
/// Each table with rows contributes, in this order: a histogram of its
/// first numeric-coercible column, a bar chart of its first free-form
/// column with few enough categories, and a line chart of the first
/// numeric-coercible column over the first date-named column. The result is
/// truncated to `options.max_charts`, never re-ranked.
pub fn suggest_charts_with_options(
    samples: &SampleTables,
    options: &ChartOptions,
) -> Vec<SuggestedChart> {
    let mut charts = Vec::new();
    for (table, rows) in samples {
        if rows.is_empty() {
            continue;
        }
        let columns = table_columns(rows);
        let numeric = columns.iter().find(|column| has_numeric(column));

        if let Some(column) = numeric {
            charts.push(SuggestedChart::new(
                format!("{table}.{} distribution", column.name),
                ChartKind::Histogram,
                table,
                column.name,
            ));
        }

        if let Some(column) = columns.iter().find(|column| {
            column.kind().is_free_form() && category_count(column) <= options.max_bar_categories
        }) {
            charts.push(SuggestedChart::new(
                format!("{table}.{} top categories", column.name),
                ChartKind::Bar,
                table,
                column.name,
            ));
        }

        // The y search may land on the date column itself.
        let date = columns.iter().find(|column| {
            column.name.to_ascii_lowercase().contains("date") && has_date(column)
        });
        if let (Some(x), Some(y)) = (date, numeric) {
            charts.push(
                SuggestedChart::new(
                    format!("{table}: {} over {}", y.name, x.name),
                    ChartKind::Line,
                    table,
                    x.name,
                )
                .with_y(y.name),
            );
        }
    }

    if charts.len() > options.max_charts {
        debug!(suggested = charts.len(), kept = options.max_charts, "truncating chart suggestions");
        charts.truncate(options.max_charts);
    }
    charts
}

fn has_numeric(column: &ColumnView<'_>) -> bool {
    column.values.iter().any(|value| numeric_value(value).is_some())
}

fn has_date(column: &ColumnView<'_>) -> bool {
    column.values.iter().any(|value| date_value(value).is_some())
}

fn category_count(column: &ColumnView<'_>) -> usize {
    column
        .values
        .iter()
        .filter_map(|value| value.display_string())
        .collect::<HashSet<_>>()
        .len()
}
