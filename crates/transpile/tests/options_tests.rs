// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Options loaded from files drive the whole pipeline

use pretty_assertions::assert_eq;
use std::io::Write;
use unified_sql_transpile::{ErrorKind, TranspileOptions, transpile};

fn write_options(name: &str, json: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("unified-sql-{}-{name}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(json.as_bytes()).unwrap();
    path
}

#[test]
fn test_options_file_controls_output() {
    let path = write_options(
        "quoted",
        r#"{"identifier_quoting": "always", "table_option_style": "inline"}"#,
    );
    let options = TranspileOptions::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let out = transpile(
        "CREATE TABLE t (a INT) WITH (FORMAT = 'ORC')",
        "presto",
        "presto",
        &options,
    )
    .unwrap();
    assert_eq!(out, vec![r#"CREATE TABLE "t" ("a" INTEGER) STORED AS ORC"#]);
}

#[test]
fn test_full_table_properties_from_options() {
    let sql = "CREATE TABLE x USING ICEBERG PARTITIONED BY (MONTHS(y)) LOCATION 's3://z'";
    let out = transpile(sql, "spark", "presto", &TranspileOptions::default()).unwrap();
    assert_eq!(
        out,
        vec!["CREATE TABLE x WITH (TABLE_FORMAT = 'ICEBERG', PARTITIONED_BY = ARRAY['MONTHS'])"]
    );

    let options = TranspileOptions::from_json(r#"{"full_table_properties": true}"#).unwrap();
    let out = transpile(sql, "spark", "presto", &options).unwrap();
    assert_eq!(
        out,
        vec![
            "CREATE TABLE x WITH (TABLE_FORMAT = 'ICEBERG', PARTITIONED_BY = ARRAY['MONTHS(y)'], EXTERNAL_LOCATION = 's3://z')"
        ]
    );
}

#[test]
fn test_missing_options_file() {
    let err = TranspileOptions::from_file("/nonexistent/unified-sql.json").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_depth_limit_from_options() {
    let options = TranspileOptions::default().with_max_depth(4);
    let sql = format!("SELECT {}1{}", "(".repeat(10), ")".repeat(10));
    let err = transpile(&sql, "ansi", "ansi", &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RecursionLimit);
}

#[test]
fn test_long_operator_chain_hits_depth_limit() {
    let predicate = (0..600)
        .map(|i| format!("a = {i}"))
        .collect::<Vec<_>>()
        .join(" OR ");
    let sql = format!("SELECT * FROM t WHERE {predicate}");
    let err = transpile(&sql, "spark", "presto", &TranspileOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RecursionLimit);

    let sum = vec!["1"; 1000].join(" + ");
    let err = transpile(&format!("SELECT {sum}"), "ansi", "ansi", &TranspileOptions::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RecursionLimit);
}

#[test]
fn test_short_operator_chain_within_limit() {
    let sum = vec!["x"; 20].join(" + ");
    let out = transpile(
        &format!("SELECT {sum} FROM t"),
        "spark",
        "presto",
        &TranspileOptions::default(),
    )
    .unwrap();
    assert_eq!(out, vec![format!("SELECT {sum} FROM t")]);
}

#[test]
fn test_statement_per_output() {
    let out = transpile(
        "SELECT a FROM t; INSERT INTO u SELECT a FROM t",
        "ansi",
        "duckdb",
        &TranspileOptions::default(),
    )
    .unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[1], "INSERT INTO u SELECT a FROM t");
}
