// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Type spelling per dialect

use pretty_assertions::assert_eq;
use unified_sql_dialect::{Dialect, DialectError, TableOptionStyle, get};
use unified_sql_ir::{DataType, NullsOrder, SortDirection, StructField, TypeKind};

fn nested_struct() -> DataType {
    DataType::Struct(vec![
        StructField::new("struct_col_a", DataType::Int),
        StructField::new(
            "struct_col_b",
            DataType::Struct(vec![
                StructField::new("nested_col_a", DataType::Text),
                StructField::new("nested_col_b", DataType::Text),
            ]),
        ),
    ])
}

fn render(dialect: Dialect, data_type: &DataType) -> String {
    get(dialect).types.render(data_type).unwrap()
}

// =============================================================================
// Composite Types
// =============================================================================

#[test]
fn test_struct_styles() {
    let ty = nested_struct();
    assert_eq!(
        render(Dialect::Spark, &ty),
        "STRUCT<struct_col_a: INT, struct_col_b: STRUCT<nested_col_a: STRING, nested_col_b: STRING>>"
    );
    assert_eq!(
        render(Dialect::Hive, &ty),
        "STRUCT<struct_col_a INT, struct_col_b STRUCT<nested_col_a STRING, nested_col_b STRING>>"
    );
    assert_eq!(
        render(Dialect::Presto, &ty),
        "ROW(struct_col_a INTEGER, struct_col_b ROW(nested_col_a VARCHAR, nested_col_b VARCHAR))"
    );
    assert_eq!(
        render(Dialect::BigQuery, &ty),
        "STRUCT<struct_col_a INT64, struct_col_b STRUCT<nested_col_a STRING, nested_col_b STRING>>"
    );
    assert_eq!(
        render(Dialect::DuckDB, &ty),
        "STRUCT(struct_col_a INT, struct_col_b STRUCT(nested_col_a TEXT, nested_col_b TEXT))"
    );
}

#[test]
fn test_nested_arrays() {
    let ty = DataType::array(DataType::array(DataType::Int));
    assert_eq!(render(Dialect::Spark, &ty), "ARRAY<ARRAY<INT>>");
    assert_eq!(render(Dialect::BigQuery, &ty), "ARRAY<ARRAY<INT64>>");
    assert_eq!(render(Dialect::Presto, &ty), "ARRAY(ARRAY(INTEGER))");
    assert_eq!(render(Dialect::Postgres, &ty), "INT[][]");
    assert_eq!(render(Dialect::DuckDB, &ty), "INT[][]");
}

#[test]
fn test_maps() {
    let ty = DataType::map(DataType::Text, DataType::Double);
    assert_eq!(render(Dialect::Hive, &ty), "MAP<STRING, DOUBLE>");
    assert_eq!(render(Dialect::Trino, &ty), "MAP(VARCHAR, DOUBLE)");
    assert_eq!(render(Dialect::DuckDB, &ty), "MAP(TEXT, DOUBLE)");
    assert!(matches!(
        get(Dialect::BigQuery).types.render(&ty),
        Err(DialectError::UnsupportedType { .. })
    ));
    assert!(get(Dialect::Postgres).types.render(&ty).is_err());
}

#[test]
fn test_postgres_has_no_struct() {
    assert!(get(Dialect::Postgres).types.render(&nested_struct()).is_err());
}

// =============================================================================
// Scalar Types
// =============================================================================

#[test]
fn test_scalar_spellings() {
    assert_eq!(render(Dialect::Postgres, &DataType::Double), "DOUBLE PRECISION");
    assert_eq!(render(Dialect::Postgres, &DataType::TinyInt), "SMALLINT");
    assert_eq!(render(Dialect::Postgres, &DataType::Binary), "BYTEA");
    assert_eq!(render(Dialect::BigQuery, &DataType::Timestamp), "DATETIME");
    assert_eq!(render(Dialect::BigQuery, &DataType::Varchar(Some(10))), "STRING");
    assert_eq!(render(Dialect::Presto, &DataType::Float), "REAL");
    assert_eq!(render(Dialect::DuckDB, &DataType::Binary), "BLOB");
    assert!(get(Dialect::Hive).types.render(&DataType::Json).is_err());
}

#[test]
fn test_render_parse_render_is_stable() {
    for settings in unified_sql_dialect::all() {
        for kind in TypeKind::ALL {
            let Ok(rendered) = settings.types.render(&kind.to_data_type()) else {
                continue;
            };
            let parsed = settings
                .types
                .scalar(&rendered)
                .unwrap_or_else(|| panic!("{} cannot read back {rendered}", settings.dialect));
            assert_eq!(
                settings.types.render(&parsed.to_data_type()).unwrap(),
                rendered,
                "{} {kind:?}",
                settings.dialect
            );
        }
    }
}

#[test]
fn test_injective_spellings_round_trip() {
    let types = &get(Dialect::Spark).types;
    for kind in [TypeKind::Int, TypeKind::BigInt, TypeKind::Text, TypeKind::Double] {
        let rendered = types.render(&kind.to_data_type()).unwrap();
        assert_eq!(types.scalar(&rendered), Some(kind));
    }
    // INT64 is every BigQuery integer
    assert_eq!(
        get(Dialect::BigQuery).types.scalar("INT64"),
        Some(TypeKind::BigInt)
    );
}

// =============================================================================
// Records
// =============================================================================

#[test]
fn test_null_ordering_defaults() {
    let postgres = get(Dialect::Postgres).null_ordering;
    assert_eq!(postgres.default_for(SortDirection::Asc), NullsOrder::Last);
    assert_eq!(postgres.default_for(SortDirection::Desc), NullsOrder::First);

    let presto = get(Dialect::Presto).null_ordering;
    assert_eq!(presto.default_for(SortDirection::Desc), NullsOrder::Last);

    let spark = get(Dialect::Spark).null_ordering;
    assert_eq!(spark.default_for(SortDirection::Asc), NullsOrder::First);
}

#[test]
fn test_trino_is_presto() {
    let trino = get(Dialect::Trino);
    let presto = get(Dialect::Presto);
    assert_eq!(trino.types, presto.types);
    assert_eq!(trino.table_options, TableOptionStyle::WithProperties);
    assert_eq!(trino.identifier_quote, presto.identifier_quote);
}

#[test]
fn test_hive_family_keywords() {
    assert!(get(Dialect::Hive).is_keyword("tblproperties"));
    assert!(get(Dialect::Spark).is_keyword("STORED"));
    assert!(!get(Dialect::Presto).is_keyword("LOCATION"));
    assert!(get(Dialect::Spark).is_keyword("ILIKE"));
    assert!(!get(Dialect::Hive).is_keyword("ILIKE"));
}
