// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests for the generator: statements read from Spark are
//! written for each target dialect

use pretty_assertions::assert_eq;
use unified_sql_generator::{GenerateError, GenerateOptions, IdentifierQuoting, generate};
use unified_sql_ir::{Dialect, Statement};
use unified_sql_parser::{ParseOptions, parse};

fn read(sql: &str, dialect: Dialect) -> Statement {
    let mut statements = parse(sql, dialect, &ParseOptions::default())
        .unwrap_or_else(|e| panic!("failed to parse {sql:?}: {e}"));
    assert_eq!(statements.len(), 1);
    statements.remove(0)
}

fn write(statement: &Statement, dialect: Dialect) -> String {
    generate(statement, dialect, &GenerateOptions::default())
        .unwrap_or_else(|e| panic!("failed to generate for {dialect}: {e}"))
}

#[test]
fn test_struct_columns_per_dialect() {
    let statement = read(
        "CREATE TABLE db.example_table (col_a struct<struct_col_a:int, struct_col_b:string>)",
        Dialect::Spark,
    );
    assert_eq!(
        write(&statement, Dialect::Presto),
        "CREATE TABLE db.example_table (col_a ROW(struct_col_a INTEGER, struct_col_b VARCHAR))"
    );
    assert_eq!(
        write(&statement, Dialect::Hive),
        "CREATE TABLE db.example_table (col_a STRUCT<struct_col_a INT, struct_col_b STRING>)"
    );
    assert_eq!(
        write(&statement, Dialect::Spark),
        "CREATE TABLE db.example_table (col_a STRUCT<struct_col_a: INT, struct_col_b: STRING>)"
    );
}

#[test]
fn test_pretty_table_options() {
    let statement = read(
        "CREATE TABLE blah (col_a INT) COMMENT 'Test comment: blah' PARTITIONED BY (date STRING) \
         STORED AS ICEBERG TBLPROPERTIES ('x' = '1')",
        Dialect::Spark,
    );
    let pretty = GenerateOptions::default().with_pretty(true);
    assert_eq!(
        generate(&statement, Dialect::Presto, &pretty).unwrap(),
        "CREATE TABLE blah (\n  col_a INTEGER,\n  date VARCHAR\n)\nCOMMENT='Test comment: blah'\nWITH (\n  PARTITIONED_BY = ARRAY['date'],\n  FORMAT = 'ICEBERG',\n  x = '1'\n)"
    );
    assert_eq!(
        generate(&statement, Dialect::Hive, &pretty).unwrap(),
        "CREATE TABLE blah (\n  col_a INT\n)\nCOMMENT 'Test comment: blah'\nPARTITIONED BY (\n  date STRING\n)\nSTORED AS ICEBERG\nTBLPROPERTIES (\n  'x' = '1'\n)"
    );
}

#[test]
fn test_property_layout_reads_back() {
    let statement = read(
        "CREATE TABLE test USING ICEBERG STORED AS PARQUET AS SELECT 1",
        Dialect::Spark,
    );
    let presto = write(&statement, Dialect::Presto);
    assert_eq!(
        presto,
        "CREATE TABLE test WITH (TABLE_FORMAT = 'ICEBERG', FORMAT = 'PARQUET') AS SELECT 1"
    );
    assert_eq!(read(&presto, Dialect::Presto), statement);
}

#[test]
fn test_date_part_of_string() {
    let statement = read("MONTH('2021-03-01')", Dialect::Spark);
    assert_eq!(
        write(&statement, Dialect::DuckDB),
        "MONTH(CAST('2021-03-01' AS DATE))"
    );
    assert_eq!(
        write(&statement, Dialect::Presto),
        "MONTH(CAST(SUBSTR(CAST('2021-03-01' AS VARCHAR), 1, 10) AS DATE))"
    );
    assert_eq!(write(&statement, Dialect::Hive), "MONTH(TO_DATE('2021-03-01'))");
}

#[test]
fn test_map_from_arrays() {
    let statement = read("MAP_FROM_ARRAYS(ARRAY(1), c)", Dialect::Spark);
    assert_eq!(write(&statement, Dialect::DuckDB), "MAP(LIST_VALUE(1), c)");
    assert_eq!(write(&statement, Dialect::Presto), "MAP(ARRAY[1], c)");
    assert_eq!(write(&statement, Dialect::Hive), "MAP(ARRAY(1), c)");
    assert_eq!(write(&statement, Dialect::Spark), "MAP_FROM_ARRAYS(ARRAY(1), c)");
}

#[test]
fn test_comparator_lambda() {
    let statement = read("ARRAY_SORT(x, (left, right) -> -1)", Dialect::Spark);
    assert_eq!(
        write(&statement, Dialect::Presto),
        "ARRAY_SORT(x, (left, right) -> -1)"
    );
    assert_eq!(write(&statement, Dialect::Hive), "SORT_ARRAY(x)");
    assert_eq!(write(&statement, Dialect::DuckDB), "ARRAY_SORT(x)");
}

#[test]
fn test_unsupported_constructs_fail_whole_statement() {
    let statement = read("SELECT TRANSFORM(x, y -> y + 1) FROM t", Dialect::Spark);
    assert_eq!(
        generate(&statement, Dialect::BigQuery, &GenerateOptions::default()),
        Err(GenerateError::UnsupportedConstruct {
            dialect: Dialect::BigQuery,
            construct: "lambda".to_string(),
        })
    );

    let statement = read("CREATE TABLE t (m MAP<STRING, INT>)", Dialect::Spark);
    assert!(matches!(
        generate(&statement, Dialect::Postgres, &GenerateOptions::default()),
        Err(GenerateError::UnsupportedConstruct { .. })
    ));
}

#[test]
fn test_always_quote_identifiers() {
    let statement = read("SELECT a FROM t", Dialect::Spark);
    let options = GenerateOptions::default().with_identifier_quoting(IdentifierQuoting::Always);
    assert_eq!(
        generate(&statement, Dialect::Presto, &options).unwrap(),
        r#"SELECT "a" FROM "t""#
    );
    assert_eq!(
        generate(&statement, Dialect::Hive, &options).unwrap(),
        "SELECT `a` FROM `t`"
    );
}

#[test]
fn test_pretty_subquery() {
    let statement = read(
        "SELECT a FROM (SELECT a FROM t WHERE a > 1) AS s ORDER BY a",
        Dialect::Ansi,
    );
    let pretty = GenerateOptions::default().with_pretty(true);
    assert_eq!(
        generate(&statement, Dialect::Ansi, &pretty).unwrap(),
        "SELECT\n  a\nFROM (\n  SELECT\n    a\n  FROM t\n  WHERE\n    a > 1\n) AS s\nORDER BY\n  a"
    );
}
