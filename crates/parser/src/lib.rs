// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Unified SQL - Parser
//!
//! Reads SQL text written in one dialect into canonical [`Statement`]s.
//!
//! ## Overview
//!
//! ```text
//! text → Tokenizer → Parser → Vec<Statement>
//!           ↑           ↑
//!           └── DialectSettings (quotes, keywords, types, function aliases)
//! ```
//!
//! Everything dialect-specific is resolved while parsing: native function
//! names become canonical builtins, type names become canonical types,
//! format literals become canonical time formats, and omitted NULLS
//! clauses take the source dialect's default. The tree that comes out
//! carries no dialect.
//!
//! ## Usage
//!
//! ```rust
//! use unified_sql_parser::{ParseOptions, parse};
//! use unified_sql_ir::Dialect;
//!
//! let statements = parse("SELECT SORT_ARRAY(x) FROM t", Dialect::Hive, &ParseOptions::default())
//!     .unwrap();
//! assert_eq!(statements.len(), 1);
//! ```

pub mod context;
pub mod error;
pub mod parser;
pub mod tokenizer;

pub use context::{DEFAULT_MAX_DEPTH, ParseContext};
pub use error::{ParseError, ParseResult, TokenizeError, TokenizeErrorKind};
pub use parser::Parser;
pub use tokenizer::{Token, TokenKind, Tokenizer, tokenize};

use serde::{Deserialize, Serialize};
use unified_sql_ir::{DataType, Dialect, Statement};

/// Options for reading SQL text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Fold unquoted identifiers in dialects that fold case
    pub normalize_identifiers: bool,

    /// Nesting limit for expressions, subqueries and types
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            normalize_identifiers: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn with_normalize_identifiers(mut self, normalize: bool) -> Self {
        self.normalize_identifiers = normalize;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Parse every statement of `sql` as written in `dialect`
pub fn parse(sql: &str, dialect: Dialect, options: &ParseOptions) -> ParseResult<Vec<Statement>> {
    let ctx = ParseContext::with_max_depth(unified_sql_dialect::get(dialect), options.max_depth)
        .with_normalize_identifiers(options.normalize_identifiers);
    Parser::new(sql, ctx)?.parse_statements()
}

/// Parse a standalone type name such as `ARRAY<STRING>`
pub fn parse_data_type(text: &str, dialect: Dialect) -> ParseResult<DataType> {
    let mut parser = Parser::new(text, ParseContext::new(unified_sql_dialect::get(dialect)))?;
    let data_type = parser.parse_data_type()?;
    parser.finish()?;
    Ok(data_type)
}
