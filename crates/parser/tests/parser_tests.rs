// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests for the parser: the same statement written in
//! different dialects reads into the same canonical tree

use pretty_assertions::assert_eq;
use unified_sql_ir::{
    BuiltinFunction, Dialect, Expr, Function, Ident, NullsOrder, Query, SelectItem, SetOp,
    Statement,
};
use unified_sql_parser::{ParseError, ParseOptions, parse};

fn parse_one(sql: &str, dialect: Dialect) -> Statement {
    let mut statements = parse(sql, dialect, &ParseOptions::default())
        .unwrap_or_else(|e| panic!("failed to parse {sql:?} as {dialect}: {e}"));
    assert_eq!(statements.len(), 1, "expected one statement in {sql:?}");
    statements.remove(0)
}

fn query_of(statement: Statement) -> Query {
    match statement {
        Statement::Query(query) => *query,
        other => panic!("expected a query, got {other:?}"),
    }
}

fn first_projection(statement: Statement) -> Expr {
    let query = query_of(statement);
    let SetOp::Select(select) = query.body else {
        panic!("expected SELECT");
    };
    match select.projection.into_iter().next() {
        Some(SelectItem::UnnamedExpr(expr)) | Some(SelectItem::AliasedExpr { expr, .. }) => expr,
        other => panic!("expected an expression, got {other:?}"),
    }
}

#[test]
fn test_array_size_is_dialect_independent() {
    let spellings = [
        ("SELECT SIZE(x) FROM t", Dialect::Spark),
        ("SELECT SIZE(x) FROM t", Dialect::Hive),
        ("SELECT CARDINALITY(x) FROM t", Dialect::Presto),
        ("SELECT ARRAY_LENGTH(x) FROM t", Dialect::DuckDB),
        ("SELECT ARRAY_LENGTH(x) FROM t", Dialect::BigQuery),
    ];
    let expected = parse_one(spellings[0].0, spellings[0].1);
    for (sql, dialect) in spellings {
        assert_eq!(parse_one(sql, dialect), expected, "{dialect}: {sql}");
    }
    assert_eq!(
        first_projection(expected),
        Expr::Function(Function::builtin(
            BuiltinFunction::ArraySize,
            vec![Expr::column("x")]
        ))
    );
}

#[test]
fn test_order_by_nulls_match_when_sources_agree() {
    // Presto sorts NULLs last in both directions, so the explicit clause is
    // what Spark needs to say the same thing
    let presto = parse_one("SELECT a FROM t ORDER BY a DESC", Dialect::Presto);
    let spark = parse_one(
        "SELECT a FROM t ORDER BY a DESC NULLS LAST",
        Dialect::Spark,
    );
    assert_eq!(presto, spark);

    let query = query_of(presto);
    assert_eq!(query.order_by[0].nulls, Some(NullsOrder::Last));
}

#[test]
fn test_quoting_styles_agree() {
    let spark = parse_one("SELECT `a b` FROM `t`", Dialect::Spark);
    let postgres = parse_one(r#"SELECT "a b" FROM "t""#, Dialect::Postgres);
    assert_eq!(spark, postgres);
}

#[test]
fn test_unicode_escape_in_backslash_dialect() {
    let expr = first_projection(parse_one(r"SELECT '\u6bdb'", Dialect::Spark));
    assert_eq!(expr, Expr::string("毛"));

    // Without backslash escapes the text is kept as written
    let expr = first_projection(parse_one(r"SELECT '\u6bdb'", Dialect::Presto));
    assert_eq!(expr, Expr::string(r"\u6bdb"));
}

#[test]
fn test_normalize_identifiers() {
    let options = ParseOptions::default().with_normalize_identifiers(true);
    let statements = parse("SELECT UserId FROM Users", Dialect::Postgres, &options).unwrap();
    let expr = first_projection(statements.into_iter().next().unwrap());
    assert_eq!(expr, Expr::column("userid"));

    let statements = parse("SELECT UserId FROM Users", Dialect::Spark, &options).unwrap();
    let expr = first_projection(statements.into_iter().next().unwrap());
    assert_eq!(expr, Expr::column("UserId"));
}

#[test]
fn test_lambda_keyword_params() {
    let expr = first_projection(parse_one(
        "SELECT ARRAY_SORT(x, (left, right) -> -1)",
        Dialect::Spark,
    ));
    let Expr::Function(function) = expr else {
        panic!("expected a call");
    };
    assert_eq!(function.builtin_kind(), Some(BuiltinFunction::ArraySort));
    let Expr::Lambda { params, .. } = &function.args[1] else {
        panic!("expected a lambda");
    };
    assert_eq!(params, &vec![Ident::new("left"), Ident::new("right")]);
}

#[test]
fn test_multiple_statements() {
    let statements = parse(
        "CREATE TABLE t (a INT); INSERT INTO t SELECT 1; SELECT * FROM t;",
        Dialect::Ansi,
        &ParseOptions::default(),
    )
    .unwrap();
    let kinds: Vec<&str> = statements.iter().map(Statement::kind).collect();
    assert_eq!(kinds, vec!["create_table", "insert", "query"]);
}

#[test]
fn test_errors_carry_offsets() {
    let err = parse("SELECT 'abc", Dialect::Ansi, &ParseOptions::default()).unwrap_err();
    assert_eq!(err.offset(), Some(7));

    let err = parse("SELECT a FROM t WHERE", Dialect::Ansi, &ParseOptions::default())
        .unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedEnd {
            expected: "expression".to_string(),
        }
    );
}

#[test]
fn test_unsupported_clauses() {
    let options = ParseOptions::default();
    let cases = [
        ("SELECT a ILIKE 'x'", Dialect::Presto),
        ("SELECT [1, 2]", Dialect::Spark),
        ("SELECT x::INT", Dialect::Hive),
        ("SELECT TRANSFORM(x, y -> y)", Dialect::BigQuery),
        ("CREATE TABLE t (a INT) STORED AS ORC", Dialect::Presto),
    ];
    for (sql, dialect) in cases {
        let err = parse(sql, dialect, &options).unwrap_err();
        assert!(
            matches!(err, ParseError::UnsupportedClause { .. } | ParseError::UnexpectedToken { .. }),
            "{dialect}: {sql} gave {err:?}"
        );
    }
}

#[test]
fn test_recursion_limit_is_configurable() {
    let sql = format!("SELECT {}1{}", "(".repeat(30), ")".repeat(30));
    assert!(parse(&sql, Dialect::Ansi, &ParseOptions::default()).is_ok());

    let err = parse(&sql, Dialect::Ansi, &ParseOptions::default().with_max_depth(10)).unwrap_err();
    assert!(matches!(err, ParseError::RecursionLimitExceeded { limit: 10, .. }));
}

#[test]
fn test_date_part_wraps_string_argument() {
    let expr = first_projection(parse_one("SELECT MONTH('2021-03-01')", Dialect::Spark));
    assert_eq!(
        expr,
        Expr::Function(Function::builtin(
            BuiltinFunction::Month,
            vec![Expr::Function(Function::builtin(
                BuiltinFunction::TsOrDsToDate,
                vec![Expr::string("2021-03-01")]
            ))]
        ))
    );
}
