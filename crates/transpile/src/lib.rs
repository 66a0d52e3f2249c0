// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Unified SQL - Transpile
//!
//! Translate SQL text written for one dialect into another.
//!
//! ## Pipeline
//!
//! ```text
//! text ──parse(read)──▶ Vec<Statement> ──generate(write)──▶ Vec<String>
//! ```
//!
//! Each statement is translated on its own. The first failure stops the
//! whole call and nothing is returned for the statements before it.
//!
//! ## Usage
//!
//! ```rust
//! use unified_sql_transpile::{TranspileOptions, translate};
//!
//! let sql = translate(
//!     "SELECT APPROX_COUNT_DISTINCT(a) FROM foo",
//!     "spark",
//!     "presto",
//!     &TranspileOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(sql, "SELECT APPROX_DISTINCT(a) FROM foo");
//! ```

pub mod config;
pub mod error;

pub use config::TranspileOptions;
pub use error::{ErrorKind, TranspileError, TranspileResult};

// Re-exports for convenience
pub use unified_sql_dialect::TableOptionStyle;
pub use unified_sql_generator::IdentifierQuoting;
pub use unified_sql_ir::Dialect;

use tracing::debug;

/// Statement separator in [`translate`] output
pub const STATEMENT_SEPARATOR: &str = ";\n";

/// Translate every statement of `sql` and join them with `";\n"`
#[tracing::instrument(skip(sql, options))]
pub fn translate(
    sql: &str,
    read: &str,
    write: &str,
    options: &TranspileOptions,
) -> TranspileResult<String> {
    Ok(transpile(sql, read, write, options)?.join(STATEMENT_SEPARATOR))
}

/// Translate every statement of `sql`, one output string per statement
#[tracing::instrument(skip(sql, options))]
pub fn transpile(
    sql: &str,
    read: &str,
    write: &str,
    options: &TranspileOptions,
) -> TranspileResult<Vec<String>> {
    let source = unified_sql_dialect::lookup(read)?.dialect;
    let target = unified_sql_dialect::lookup(write)?.dialect;

    let statements = unified_sql_parser::parse(sql, source, &options.parse_options())?;
    debug!(statements = statements.len(), %source, %target, "Parsed input");

    let generate_options = options.generate_options();
    statements
        .iter()
        .map(|statement| {
            unified_sql_generator::generate(statement, target, &generate_options)
                .map_err(TranspileError::from)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements_joined() {
        let sql = translate(
            "SELECT 1; SELECT SIZE(x) FROM t",
            "hive",
            "presto",
            &TranspileOptions::default(),
        )
        .unwrap();
        assert_eq!(sql, "SELECT 1;\nSELECT CARDINALITY(x) FROM t");
    }

    #[test]
    fn test_double_negation_reads_back() {
        let options = TranspileOptions::default();
        let sql = translate("SELECT - -a FROM t", "spark", "presto", &options).unwrap();
        assert_eq!(sql, "SELECT - -a FROM t");
        assert_eq!(translate(&sql, "presto", "presto", &options).unwrap(), sql);

        let sql = translate("SELECT - -1 FROM t WHERE b = 2", "presto", "spark", &options).unwrap();
        assert_eq!(sql, "SELECT - -1 FROM t WHERE b = 2");
    }

    #[test]
    fn test_clause_keyword_columns_read_back() {
        let options = TranspileOptions::default();
        let sql = translate(
            "SELECT partitioned, stored, location, tblproperties FROM t",
            "presto",
            "spark",
            &options,
        )
        .unwrap();
        assert_eq!(sql, "SELECT partitioned, stored, location, tblproperties FROM t");
        assert_eq!(translate(&sql, "spark", "hive", &options).unwrap(), sql);
    }

    #[test]
    fn test_unknown_dialect_is_config_error() {
        let err = translate("SELECT 1", "oracle", "spark", &TranspileOptions::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_no_partial_output() {
        let err = transpile(
            "SELECT 1; SELECT TRANSFORM(x, y -> y) FROM t",
            "spark",
            "bigquery",
            &TranspileOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedConstruct);
    }

    #[test]
    fn test_empty_input() {
        let out = transpile("", "ansi", "ansi", &TranspileOptions::default()).unwrap();
        assert!(out.is_empty());
    }
}
