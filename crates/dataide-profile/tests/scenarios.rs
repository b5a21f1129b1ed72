//! End-to-end profiling scenarios over small sample tables.

use dataide_model::{
    ChartKind, ColumnMeta, MetricValue, ProfileLevel, SampleTables, TableProfile, TableSchema, rows_from_json,
};
use dataide_profile::{compute_profile, profile_to_rows, suggest_charts};

fn samples(name: &str, json: &str) -> SampleTables {
    SampleTables::from([(name.to_string(), rows_from_json(json).unwrap())])
}

#[test]
fn scenario_a_mixed_text_numbers_and_nulls() {
    let summary = compute_profile(
        &samples(
            "t",
            r#"[{"a": "1", "b": "x"}, {"a": "2", "b": "y"}, {"a": null, "b": "x"}]"#,
        ),
        &[],
    );
    let table = &summary["t"];
    assert_eq!(table.row_count, 3);

    let a = &table.columns["a"];
    assert_eq!(a.non_null, 2);
    assert_eq!(a.nulls, 1);
    assert!((a.null_pct - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(a.distinct, 2);
    let numeric = a.numeric.unwrap();
    assert_eq!(numeric.min, 1.0);
    assert_eq!(numeric.max, 2.0);
    assert_eq!(numeric.mean, 1.5);

    let b = &table.columns["b"];
    assert_eq!(b.distinct, 2);
    assert!(b.numeric.is_none());
    let top = b.top_values.as_ref().unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top["x"], 2);
    assert_eq!(top["y"], 1);
}

#[test]
fn scenario_b_constant_single_numeric_column() {
    let summary = compute_profile(&samples("t", r#"[{"v": 5}, {"v": 5}, {"v": 5}, {"v": 5}]"#), &[]);
    let table = &summary["t"];
    let numeric = table.columns["v"].numeric.unwrap();
    assert_eq!(numeric.std, 0.0);
    assert_eq!(numeric.min, 5.0);
    assert_eq!(numeric.max, 5.0);
    assert_eq!(numeric.mean, 5.0);
    assert_eq!(numeric.p50, 5.0);
    assert!(table.correlation.is_none());
}

#[test]
fn scenario_c_perfect_correlation() {
    let summary = compute_profile(
        &samples(
            "t",
            r#"[{"a": 1, "b": 2}, {"a": 2, "b": 4}, {"a": 3, "b": 6}, {"a": 4, "b": 8}]"#,
        ),
        &[],
    );
    let table = &summary["t"];
    assert_eq!(table.correlation_between("a", "b"), Some(1.0));
    assert_eq!(table.correlation_between("b", "a"), Some(1.0));
    assert_eq!(table.correlation_between("a", "a"), Some(1.0));
}

#[test]
fn scenario_d_order_date_range_skips_bad_values() {
    let summary = compute_profile(
        &samples(
            "orders",
            r#"[{"order_date": "2025-01-01"}, {"order_date": "2025-03-15"}, {"order_date": "bad-date"}]"#,
        ),
        &[],
    );
    let dates = summary["orders"].columns["order_date"].dates.unwrap();
    assert_eq!(dates.min_date.to_string(), "2025-01-01");
    assert_eq!(dates.max_date.to_string(), "2025-03-15");
}

#[test]
fn scenario_e_histogram_bar_line() {
    let charts = suggest_charts(&samples(
        "sales",
        r#"[
            {"amount": 10.5, "region": "north", "sale_date": "2025-01-01"},
            {"amount": 12.0, "region": "south", "sale_date": "2025-01-02"},
            {"amount": 9.25, "region": "east", "sale_date": "2025-01-03"},
            {"amount": 11.0, "region": "west", "sale_date": "2025-01-04"},
            {"amount": 8.0, "region": "central", "sale_date": "2025-01-05"}
        ]"#,
    ));
    let kinds: Vec<ChartKind> = charts.iter().map(|chart| chart.kind.clone()).collect();
    assert_eq!(kinds, vec![ChartKind::Histogram, ChartKind::Bar, ChartKind::Line]);
    assert_eq!(charts[0].x, "amount");
    assert_eq!(charts[1].x, "region");
    assert_eq!(charts[2].x, "sale_date");
    assert_eq!(charts[2].y.as_deref(), Some("amount"));
    assert_eq!(charts[2].title, "sales: amount over sale_date");
}

#[test]
fn empty_table_profile_is_exact() {
    let summary = compute_profile(&samples("t", "[]"), &[]);
    assert_eq!(summary["t"], TableProfile::empty());
    let json = serde_json::to_value(&summary["t"]).unwrap();
    assert_eq!(json, serde_json::json!({"row_count": 0, "columns": {}}));
}

#[test]
fn numeric_hint_alone_never_creates_a_block() {
    let schema = TableSchema::new("t", vec![ColumnMeta::new("code", "integer")]);
    let summary = compute_profile(
        &samples("t", r#"[{"code": "A1"}, {"code": "B2"}, {"code": null}]"#),
        &[schema],
    );
    assert!(summary["t"].columns["code"].numeric.is_none());
}

#[test]
fn constant_column_keeps_its_correlation_pairs() {
    let summary = compute_profile(
        &samples("t", r#"[{"a": 1, "b": 5}, {"a": 2, "b": 5}, {"a": 3, "b": 5}]"#),
        &[],
    );
    assert_eq!(summary["t"].correlation_between("a", "b"), None);

    let correlations: Vec<(String, MetricValue)> = profile_to_rows(&summary)
        .into_iter()
        .filter(|record| record.level == ProfileLevel::Correlation)
        .map(|record| (record.metric, record.value))
        .collect();
    assert_eq!(correlations, vec![("a~b".to_string(), MetricValue::Missing)]);
}

#[test]
fn flattened_records_cover_every_stat() {
    let summary = compute_profile(
        &samples(
            "t",
            r#"[{"a": 1, "b": 2, "c": "x"}, {"a": 2, "b": 1, "c": "y"}, {"a": 3, "b": null, "c": "x"}]"#,
        ),
        &[],
    );
    let records = profile_to_rows(&summary);

    let table_rows: Vec<_> = records
        .iter()
        .filter(|record| record.level == ProfileLevel::Table)
        .collect();
    assert_eq!(table_rows.len(), 1);

    for (column, profile) in &summary["t"].columns {
        let metrics: Vec<&str> = records
            .iter()
            .filter(|record| record.level == ProfileLevel::Column && &record.column == column)
            .map(|record| record.metric.as_str())
            .collect();
        let expected: Vec<&str> = profile.metrics().iter().map(|(key, _)| *key).collect();
        assert_eq!(metrics, expected, "column {column}");
    }

    let correlations: Vec<&str> = records
        .iter()
        .filter(|record| record.level == ProfileLevel::Correlation)
        .map(|record| record.metric.as_str())
        .collect();
    assert_eq!(correlations, vec!["a~b"]);
}

#[test]
fn scenario_a_profile_json() {
    let summary = compute_profile(
        &samples(
            "t",
            r#"[{"a": "1", "b": "x"}, {"a": "2", "b": "y"}, {"a": null, "b": "x"}]"#,
        ),
        &[],
    );
    let json = serde_json::to_string_pretty(&summary).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "t": {
        "row_count": 3,
        "columns": {
          "a": {
            "non_null": 2,
            "nulls": 1,
            "null_pct": 0.3333333333333333,
            "distinct": 2,
            "min": 1.0,
            "p25": 1.25,
            "p50": 1.5,
            "p75": 1.75,
            "max": 2.0,
            "mean": 1.5,
            "std": 0.5,
            "top_values": {
              "1": 1,
              "2": 1
            }
          },
          "b": {
            "non_null": 3,
            "nulls": 0,
            "null_pct": 0.0,
            "distinct": 2,
            "top_values": {
              "x": 2,
              "y": 1
            }
          }
        }
      }
    }
    "#);
}
