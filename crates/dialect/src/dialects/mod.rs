// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Settings record of each dialect

pub mod ansi;
pub mod bigquery;
pub mod duckdb;
pub mod hive;
pub mod postgres;
pub mod presto;
pub mod spark;
pub mod trino;

use crate::settings::DialectSettings;
use unified_sql_ir::Dialect;

/// Build the record of a dialect
pub fn settings(dialect: Dialect) -> DialectSettings {
    match dialect {
        Dialect::Ansi => ansi::settings(),
        Dialect::BigQuery => bigquery::settings(),
        Dialect::DuckDB => duckdb::settings(),
        Dialect::Hive => hive::settings(),
        Dialect::Postgres => postgres::settings(),
        Dialect::Presto => presto::settings(),
        Dialect::Spark => spark::settings(),
        Dialect::Trino => trino::settings(),
    }
}
