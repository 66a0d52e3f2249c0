// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect Registry
//!
//! Process-wide, read-only table of every [`DialectSettings`] record. The
//! records are built on first use and shared by all translations.

use crate::dialects;
use crate::error::DialectError;
use crate::settings::DialectSettings;
use std::sync::LazyLock;
use unified_sql_ir::Dialect;

/// Records indexed by `Dialect as usize`, in [`Dialect::ALL`] order
static REGISTRY: LazyLock<[DialectSettings; 8]> =
    LazyLock::new(|| Dialect::ALL.map(dialects::settings));

/// Settings of a dialect
pub fn get(dialect: Dialect) -> &'static DialectSettings {
    &REGISTRY[dialect as usize]
}

/// Settings of a dialect by name (case-insensitive, `postgresql` accepted)
///
/// # Errors
///
/// Returns [`DialectError::Unknown`] for names outside the supported set.
pub fn lookup(name: &str) -> Result<&'static DialectSettings, DialectError> {
    let dialect: Dialect = name.parse()?;
    Ok(get(dialect))
}

/// Every record, in [`Dialect::ALL`] order
pub fn all() -> &'static [DialectSettings] {
    REGISTRY.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_are_indexed_by_dialect() {
        for dialect in Dialect::ALL {
            assert_eq!(get(dialect).dialect, dialect);
        }
        assert_eq!(all().len(), Dialect::ALL.len());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("SPARK").unwrap().dialect, Dialect::Spark);
        assert_eq!(lookup("postgresql").unwrap().dialect, Dialect::Postgres);
        assert_eq!(
            lookup("oracle").unwrap_err(),
            DialectError::Unknown("oracle".to_string())
        );
    }
}
