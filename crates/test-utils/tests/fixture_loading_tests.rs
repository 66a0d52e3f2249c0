// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests for fixture loading and checking

use std::path::Path;
use unified_sql_ir::Dialect;
use unified_sql_test_utils::{FixtureError, check_fixtures, load_fixtures};

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.yaml");

#[test]
fn test_load_sample_file() {
    let cases = load_fixtures(SAMPLE).expect("Failed to load sample.yaml");
    assert_eq!(cases.len(), 2);

    let first = &cases[0];
    assert_eq!(first.description, "plain select");
    assert_eq!(first.read, Dialect::Ansi);
    assert!(first.errors.is_empty());

    let second = &cases[1];
    assert!(second.pretty);
    assert_eq!(second.write[&Dialect::Spark], "SELECT\n  a,\n  b\nFROM t");
    assert_eq!(second.errors[&Dialect::BigQuery], "not available");
}

#[test]
fn test_missing_file() {
    let err = load_fixtures(Path::new("tests/fixtures/missing.yaml")).unwrap_err();
    assert!(matches!(err, FixtureError::Io(_)));
}

#[test]
fn test_check_reports_only_failures() {
    let cases = load_fixtures(SAMPLE).unwrap();
    let mismatches = check_fixtures(&cases, |case, target| match (target, case.pretty) {
        (Dialect::BigQuery, _) => Err(format!("{target} is not available")),
        (Dialect::Spark, true) => Ok("SELECT\n  a,\n  b\nFROM t".to_string()),
        _ => Ok(case.sql.clone()),
    });
    assert!(mismatches.is_empty(), "{mismatches:?}");

    let mismatches = check_fixtures(&cases, |case, _| Ok::<_, String>(case.sql.clone()));
    let failed: Vec<_> = mismatches
        .iter()
        .map(|m| (m.description.as_str(), m.target))
        .collect();
    assert_eq!(
        failed,
        vec![("pretty select", Dialect::Spark), ("pretty select", Dialect::BigQuery)]
    );
}
