use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dataide_model::{ColumnProfile, DatasetPayload, ProfilingSummary, SuggestedChart};

use crate::commands::{ExportOutcome, GenerateOutcome};

/// One row per profiled column, grouped by table.
pub fn profile_table(summary: &ProfilingSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Column"),
        header_cell("Rows"),
        header_cell("Non-null"),
        header_cell("Null %"),
        header_cell("Distinct"),
        header_cell("Min"),
        header_cell("Median"),
        header_cell("Max"),
        header_cell("Top / Dates"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..=8 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    for (name, profile) in summary {
        if profile.columns.is_empty() {
            table.add_row(vec![
                table_cell(name),
                dim_cell("-"),
                Cell::new(profile.row_count),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
            ]);
            continue;
        }
        for (column, stats) in &profile.columns {
            let (min, median, max) = match &stats.numeric {
                Some(numeric) => (
                    Cell::new(number(numeric.min)),
                    Cell::new(number(numeric.p50)),
                    Cell::new(number(numeric.max)),
                ),
                None => (dim_cell("-"), dim_cell("-"), dim_cell("-")),
            };
            table.add_row(vec![
                table_cell(name),
                Cell::new(column),
                Cell::new(profile.row_count),
                Cell::new(stats.non_null),
                null_pct_cell(stats.null_pct),
                Cell::new(stats.distinct),
                min,
                median,
                max,
                detail_cell(stats),
            ]);
        }
    }
    table
}

/// Chart suggestions in output order.
pub fn chart_table(charts: &[SuggestedChart]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Kind"),
        header_cell("Table"),
        header_cell("X"),
        header_cell("Y"),
        header_cell("Title"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, chart) in charts.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(chart.kind.as_str()).fg(Color::Green),
            table_cell(&chart.table),
            Cell::new(&chart.x),
            chart.y.as_deref().map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(&chart.title),
        ]);
    }
    table
}

pub fn print_charts(charts: &[SuggestedChart]) {
    if charts.is_empty() {
        println!("No chart suggestions.");
        return;
    }
    println!("{}", chart_table(charts));
}

pub fn print_generate_summary(outcome: &GenerateOutcome) {
    let Some(path) = &outcome.written else {
        println!("{}", outcome.json);
        return;
    };
    println!("Payload: {}", path.display());
    print_payload_overview(&outcome.payload);
}

pub fn print_export_summary(outcome: &ExportOutcome) {
    println!("Archive: {}", outcome.path.display());
    println!("Size: {} bytes", outcome.bytes);
    println!("Sample tables: {}", outcome.tables);
    print_caveats(&outcome.caveats);
}

fn print_payload_overview(payload: &DatasetPayload) {
    println!("Description: {}", payload.dataset_description);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("Columns"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (name, rows) in &payload.sample_rows {
        let columns = payload
            .profiling_summary
            .get(name)
            .map_or(0, |profile| profile.columns.len());
        table.add_row(vec![table_cell(name), Cell::new(rows.len()), Cell::new(columns)]);
    }
    println!("{table}");
    println!("Charts: {}", payload.suggested_charts.len());
    if let Some(caveats) = &payload.caveats {
        print_caveats(caveats);
    }
}

fn print_caveats(caveats: &[String]) {
    if caveats.is_empty() {
        return;
    }
    eprintln!("Caveats:");
    for caveat in caveats {
        eprintln!("- {caveat}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn null_pct_cell(null_pct: f64) -> Cell {
    let text = format!("{:.1}%", null_pct * 100.0);
    if null_pct > 0.0 {
        Cell::new(text).fg(Color::Yellow)
    } else {
        dim_cell(text)
    }
}

fn detail_cell(stats: &ColumnProfile) -> Cell {
    if let Some(dates) = &stats.dates {
        return Cell::new(format!("{} .. {}", dates.min_date, dates.max_date));
    }
    match &stats.top_values {
        Some(top) => {
            let parts: Vec<String> = top
                .iter()
                .map(|(value, count)| format!("{value} ({count})"))
                .collect();
            Cell::new(parts.join(", "))
        }
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn table_cell(name: &str) -> Cell {
    Cell::new(name).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataide_model::{ChartKind, rows_from_json};
    use dataide_profile::compute_profile;

    #[test]
    fn profile_table_has_a_row_per_column() {
        let mut samples = dataide_model::SampleTables::new();
        samples.insert(
            "orders".to_string(),
            rows_from_json(r#"[{"qty": 1, "status": "paid"}, {"qty": 3, "status": null}]"#)
                .unwrap(),
        );
        samples.insert("empty".to_string(), Vec::new());
        let table = profile_table(&compute_profile(&samples, &[]));
        assert_eq!(table.row_iter().count(), 3);
        let text = table.to_string();
        assert!(text.contains("orders"));
        assert!(text.contains("status"));
        assert!(text.contains("50.0%"));
        assert!(text.contains("paid (1)"));
    }

    #[test]
    fn chart_table_lists_suggestions() {
        let charts = vec![
            SuggestedChart::new("t.a distribution", ChartKind::Histogram, "t", "a"),
            SuggestedChart::new("t: a over d", ChartKind::Line, "t", "d").with_y("a"),
        ];
        let table = chart_table(&charts);
        assert_eq!(table.row_iter().count(), 2);
        let text = table.to_string();
        assert!(text.contains("hist"));
        assert!(text.contains("line"));
    }

    #[test]
    fn numbers_drop_trailing_zero_fraction() {
        assert_eq!(number(3.0), "3");
        assert_eq!(number(2.5), "2.50");
    }
}
