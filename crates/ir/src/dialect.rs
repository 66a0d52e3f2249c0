// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect Identifiers
//!
//! This module defines the closed set of SQL dialects the transpiler knows
//! about. A [`Dialect`] is only a name: the rules for a dialect (keywords,
//! quoting, type spelling, function rewrites, null ordering, table options)
//! live in the `unified-sql-dialect` registry.
//!
//! ## Dialect Families
//!
//! - **Hive Family**: Hive and Spark
//!   - Shared syntax: backtick identifiers, `STORED AS`/`TBLPROPERTIES`,
//!     angle-bracket composite types, `/*+ ... */` hints
//! - **Presto Family**: Presto and Trino
//!   - Shared syntax: `WITH (...)` table properties, `ROW(...)` types
//! - **Standalone**: BigQuery, DuckDB, PostgreSQL and the ANSI base dialect

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported SQL dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// ANSI-like base rule set every other dialect is composed from
    Ansi,
    /// Google BigQuery
    BigQuery,
    /// DuckDB
    DuckDB,
    /// Apache Hive
    Hive,
    /// PostgreSQL
    Postgres,
    /// Presto
    Presto,
    /// Apache Spark SQL
    Spark,
    /// Trino
    Trino,
}

impl Dialect {
    /// Every supported dialect, in name order
    pub const ALL: [Dialect; 8] = [
        Dialect::Ansi,
        Dialect::BigQuery,
        Dialect::DuckDB,
        Dialect::Hive,
        Dialect::Postgres,
        Dialect::Presto,
        Dialect::Spark,
        Dialect::Trino,
    ];

    /// Canonical lowercase name used in configuration and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Ansi => "ansi",
            Dialect::BigQuery => "bigquery",
            Dialect::DuckDB => "duckdb",
            Dialect::Hive => "hive",
            Dialect::Postgres => "postgres",
            Dialect::Presto => "presto",
            Dialect::Spark => "spark",
            Dialect::Trino => "trino",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a dialect name is not one of [`Dialect::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown dialect '{0}'")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ansi" => Ok(Dialect::Ansi),
            "bigquery" => Ok(Dialect::BigQuery),
            "duckdb" => Ok(Dialect::DuckDB),
            "hive" => Ok(Dialect::Hive),
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            "presto" => Ok(Dialect::Presto),
            "spark" => Ok(Dialect::Spark),
            "trino" => Ok(Dialect::Trino),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("spark".parse::<Dialect>(), Ok(Dialect::Spark));
        assert_eq!("PostgreSQL".parse::<Dialect>(), Ok(Dialect::Postgres));
        assert_eq!(" DuckDB ".parse::<Dialect>(), Ok(Dialect::DuckDB));
        assert_eq!(
            "oracle".parse::<Dialect>(),
            Err(UnknownDialect("oracle".to_string()))
        );
    }

    #[test]
    fn test_name_round_trip() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.name().parse::<Dialect>(), Ok(dialect));
            assert_eq!(dialect.to_string(), dialect.name());
        }
    }
}
