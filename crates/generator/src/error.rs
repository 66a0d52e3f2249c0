// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Generation errors

use serde::Serialize;
use unified_sql_ir::Dialect;

/// Result type alias for generator operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Errors that can occur while writing a statement for a target dialect
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq, Serialize)]
pub enum GenerateError {
    /// The target dialect has no way to express part of the tree
    #[error("{construct} cannot be expressed in {dialect}")]
    UnsupportedConstruct { dialect: Dialect, construct: String },
}

impl GenerateError {
    pub fn unsupported(dialect: Dialect, construct: impl Into<String>) -> Self {
        GenerateError::UnsupportedConstruct {
            dialect,
            construct: construct.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GenerateError::unsupported(Dialect::BigQuery, "lambda");
        assert_eq!(err.to_string(), "lambda cannot be expressed in bigquery");
    }

    #[test]
    fn test_error_serialization() {
        let err = GenerateError::unsupported(Dialect::Hive, "ILIKE");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("UnsupportedConstruct"));
        assert!(json.contains("hive"));
    }
}
