// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Error types for tokenizing and parsing
//!
//! Parsing is fail-fast: the first construct the parser cannot read stops
//! the statement, and the error carries the byte offset where it happened.

use serde::Serialize;
use unified_sql_function_registry::TimeFormatError;
use unified_sql_ir::Dialect;

/// Result type alias for parser operations
pub type ParseResult<T> = Result<T, ParseError>;

/// What went wrong while splitting text into tokens
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq, Serialize)]
pub enum TokenizeErrorKind {
    #[error("Unterminated string literal")]
    UnterminatedString,

    #[error("Unterminated quoted identifier")]
    UnterminatedQuotedIdentifier,

    #[error("Unterminated comment")]
    UnterminatedComment,

    /// Malformed `\u`/`\U` escape, trailing backslash or invalid code point
    #[error("Invalid escape sequence: {0}")]
    InvalidEscape(String),

    #[error("Unexpected character '{0}'")]
    UnexpectedCharacter(char),
}

/// Tokenizer failure at a byte offset
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq, Serialize)]
#[error("{kind} at offset {offset}")]
pub struct TokenizeError {
    pub offset: usize,
    pub kind: TokenizeErrorKind,
}

impl TokenizeError {
    pub fn new(offset: usize, kind: TokenizeErrorKind) -> Self {
        Self { offset, kind }
    }
}

/// Errors that can occur while parsing a statement
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq, Serialize)]
pub enum ParseError {
    /// The text could not be tokenized
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    /// A token other than the expected construct was found
    #[error("Expected {expected} at offset {offset}, found '{found}'")]
    UnexpectedToken {
        offset: usize,
        expected: String,
        found: String,
    },

    /// The statement ended while a construct was still open
    #[error("Expected {expected}, found end of input")]
    UnexpectedEnd { expected: String },

    /// Valid SQL somewhere, but not in the source dialect
    #[error("{clause} is not supported by {dialect} (offset {offset})")]
    UnsupportedClause {
        offset: usize,
        dialect: Dialect,
        clause: String,
    },

    /// A type name or its parameters could not be read
    #[error("Malformed type at offset {offset}: {reason}")]
    MalformedType { offset: usize, reason: String },

    /// A date/time format literal is not valid in the source vocabulary
    #[error("Invalid time format at offset {offset}: {error}")]
    InvalidFormat {
        offset: usize,
        error: TimeFormatError,
    },

    /// Nesting went deeper than the configured guard
    #[error("Recursion limit exceeded at offset {offset} (depth: {depth}, limit: {limit})")]
    RecursionLimitExceeded {
        offset: usize,
        depth: usize,
        limit: usize,
    },
}

impl ParseError {
    /// Byte offset of the error, when it points into the text
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::Tokenize(error) => Some(error.offset),
            ParseError::UnexpectedToken { offset, .. }
            | ParseError::UnsupportedClause { offset, .. }
            | ParseError::MalformedType { offset, .. }
            | ParseError::InvalidFormat { offset, .. }
            | ParseError::RecursionLimitExceeded { offset, .. } => Some(*offset),
            ParseError::UnexpectedEnd { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unexpected_token() {
        let err = ParseError::UnexpectedToken {
            offset: 7,
            expected: "FROM".to_string(),
            found: "WHERE".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Expected FROM"));
        assert!(msg.contains("offset 7"));
        assert!(msg.contains("WHERE"));
    }

    #[test]
    fn test_tokenize_error_converts() {
        let err: ParseError =
            TokenizeError::new(3, TokenizeErrorKind::UnterminatedString).into();
        assert_eq!(err.offset(), Some(3));
        assert_eq!(err.to_string(), "Unterminated string literal at offset 3");
    }

    #[test]
    fn test_unexpected_end_has_no_offset() {
        let err = ParseError::UnexpectedEnd {
            expected: "')'".to_string(),
        };
        assert_eq!(err.offset(), None);
    }

    #[test]
    fn test_error_serialization() {
        let err = ParseError::UnsupportedClause {
            offset: 0,
            dialect: Dialect::Presto,
            clause: "STORED AS".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("presto"));
    }
}
