// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Error type at the translation boundary
//!
//! Every stage keeps its own error enum; [`TranspileError`] wraps them so a
//! caller can match on one type, and [`ErrorKind`] groups them coarsely.

use serde::Serialize;
use unified_sql_dialect::DialectError;
use unified_sql_generator::GenerateError;
use unified_sql_parser::ParseError;

/// Result type alias for translation
pub type TranspileResult<T> = Result<T, TranspileError>;

/// Errors that can occur while translating a text
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq, Serialize)]
pub enum TranspileError {
    /// Options could not be loaded
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A dialect name was not recognized, or a type has no spelling
    #[error(transparent)]
    Dialect(#[from] DialectError),

    /// The text could not be read in the source dialect
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The tree could not be written in the target dialect
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Coarse classification of a [`TranspileError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Bad options or an unknown dialect name
    Config,
    /// The text could not be split into tokens
    Tokenize,
    /// The tokens do not form a statement the source dialect accepts
    Parse,
    /// Nesting exceeded the configured depth
    RecursionLimit,
    /// The target dialect cannot express the statement
    UnsupportedConstruct,
}

impl TranspileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranspileError::Config(_) | TranspileError::Dialect(DialectError::Unknown(_)) => {
                ErrorKind::Config
            }
            TranspileError::Dialect(DialectError::UnsupportedType { .. }) => {
                ErrorKind::UnsupportedConstruct
            }
            TranspileError::Parse(ParseError::Tokenize(_)) => ErrorKind::Tokenize,
            TranspileError::Parse(ParseError::RecursionLimitExceeded { .. }) => {
                ErrorKind::RecursionLimit
            }
            TranspileError::Parse(_) => ErrorKind::Parse,
            TranspileError::Generate(GenerateError::UnsupportedConstruct { .. }) => {
                ErrorKind::UnsupportedConstruct
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unified_sql_ir::Dialect;
    use unified_sql_parser::{TokenizeError, TokenizeErrorKind};

    #[test]
    fn test_kinds() {
        let err: TranspileError = DialectError::Unknown("oracle".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::Config);

        let err: TranspileError =
            ParseError::from(TokenizeError::new(0, TokenizeErrorKind::UnterminatedString)).into();
        assert_eq!(err.kind(), ErrorKind::Tokenize);

        let err: TranspileError = ParseError::RecursionLimitExceeded {
            offset: 0,
            depth: 101,
            limit: 100,
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::RecursionLimit);

        let err: TranspileError = ParseError::UnexpectedEnd {
            expected: "expression".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Parse);

        let err: TranspileError = GenerateError::unsupported(Dialect::Hive, "ILIKE").into();
        assert_eq!(err.kind(), ErrorKind::UnsupportedConstruct);
    }

    #[test]
    fn test_wrapped_message_is_transparent() {
        let err: TranspileError = DialectError::Unknown("oracle".to_string()).into();
        assert_eq!(err.to_string(), "Unknown dialect 'oracle'");
    }

    #[test]
    fn test_serialize_kind() {
        let json = serde_json::to_string(&ErrorKind::RecursionLimit).unwrap();
        assert_eq!(json, "\"recursion_limit\"");
    }
}
