//! Integration tests for profiling and archive exports.

use std::io::{Cursor, Read};

use chrono::{TimeZone, Utc};
use dataide_export::{
    BUNDLE_FILES, build_export_zip_at, profiling_csv, profiling_json, samples_zip, write_archive,
};
use dataide_model::{DatasetPayload, SampleTables, rows_from_json};
use dataide_profile::compute_profile;
use tempfile::TempDir;
use zip::ZipArchive;

fn samples(tables: &[(&str, &str)]) -> SampleTables {
    tables
        .iter()
        .map(|(name, json)| (name.to_string(), rows_from_json(json).unwrap()))
        .collect()
}

fn entry_names(bytes: &[u8]) -> Vec<String> {
    let archive = ZipArchive::new(Cursor::new(bytes)).expect("open archive");
    archive.file_names().map(str::to_string).collect()
}

fn read_entry(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("open archive");
    let mut file = archive.by_name(name).expect("entry exists");
    let mut text = String::new();
    file.read_to_string(&mut text).expect("read entry");
    text
}

#[test]
fn flattened_profiling_csv() {
    let summary = compute_profile(&samples(&[("t", r#"[{"a": 1, "b": 2}, {"a": 2, "b": 4}]"#)]), &[]);
    let csv = profiling_csv(&summary).unwrap();
    insta::assert_snapshot!(csv.trim_end(), @r"
    level,table,column,metric,value
    table,t,,row_count,2
    column,t,a,non_null,2
    column,t,a,nulls,0
    column,t,a,null_pct,0
    column,t,a,distinct,2
    column,t,a,min,1
    column,t,a,p25,1.25
    column,t,a,p50,1.5
    column,t,a,p75,1.75
    column,t,a,max,2
    column,t,a,mean,1.5
    column,t,a,std,0.5
    column,t,b,non_null,2
    column,t,b,nulls,0
    column,t,b,null_pct,0
    column,t,b,distinct,2
    column,t,b,min,2
    column,t,b,p25,2.5
    column,t,b,p50,3
    column,t,b,p75,3.5
    column,t,b,max,4
    column,t,b,mean,3
    column,t,b,std,1
    correlation,t,,a~b,1
    ");
}

#[test]
fn undefined_correlation_is_an_empty_field() {
    let summary = compute_profile(
        &samples(&[("t", r#"[{"a": 1, "b": 5}, {"a": 2, "b": 5}, {"a": 3, "b": 5}]"#)]),
        &[],
    );
    let csv = profiling_csv(&summary).unwrap();
    assert_eq!(csv.lines().last(), Some("correlation,t,,a~b,"));
}

#[test]
fn top_values_are_written_as_json() {
    let summary = compute_profile(&samples(&[("t", r#"[{"c": "x"}, {"c": "x"}]"#)]), &[]);
    let csv = profiling_csv(&summary).unwrap();
    let last = csv.lines().last().unwrap();
    assert_eq!(last, r#"column,t,c,top_values,"{""x"":2}""#);
}

#[test]
fn profiling_json_keeps_table_order() {
    let summary = compute_profile(&samples(&[("z", "[]"), ("a", r#"[{"n": 1}]"#)]), &[]);
    let json = profiling_json(&summary).unwrap();
    let z = json.find("\"z\"").unwrap();
    let a = json.find("\"a\"").unwrap();
    assert!(z < a);
    assert!(json.contains("\"row_count\": 0"));
}

#[test]
fn samples_archive_skips_empty_tables() {
    let bytes = samples_zip(&samples(&[
        ("orders", r#"[{"id": "O1", "qty": 2}]"#),
        ("empty", "[]"),
    ]))
    .unwrap();
    assert_eq!(entry_names(&bytes), vec!["orders.csv"]);
    assert_eq!(read_entry(&bytes, "orders.csv"), "id,qty\nO1,2\n");
}

#[test]
fn export_bundle_contents() {
    let payload = DatasetPayload {
        dataset_description: "shop".to_string(),
        mermaid_erd: "erDiagram".to_string(),
        sample_rows: samples(&[("orders", r#"[{"id": "O1", "qty": 2}, {"id": "O2", "qty": 3}]"#)]),
        ..DatasetPayload::default()
    };
    let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let bytes = build_export_zip_at("a shop", &payload, at).unwrap();

    let mut expected = vec!["samples/orders.csv".to_string()];
    expected.extend(BUNDLE_FILES.iter().map(|name| name.to_string()));
    expected.sort();
    let mut names = entry_names(&bytes);
    names.sort();
    assert_eq!(names, expected);

    assert_eq!(read_entry(&bytes, "erd.mmd"), "erDiagram");
    assert!(read_entry(&bytes, "profiling.csv").starts_with("level,table,column,metric,value\n"));
    assert!(read_entry(&bytes, "profiling.json").contains("\"orders\""));
    assert!(read_entry(&bytes, "README.txt").contains("Prompt: a shop"));

    let round: DatasetPayload =
        serde_json::from_str(&read_entry(&bytes, "payload.json")).expect("payload json");
    assert_eq!(round.dataset_description, "shop");

    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("export.zip");
    write_archive(&path, &bytes).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
}
