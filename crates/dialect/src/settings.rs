// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect Settings
//!
//! A [`DialectSettings`] record is everything the tokenizer, parser and
//! generator need to know about one dialect. Records are plain data: a
//! dialect is written as the base record plus the fields it overrides,
//!
//! ```rust,ignore
//! DialectSettings {
//!     dialect: Dialect::Postgres,
//!     null_ordering: NullOrdering::new(NullsOrder::Last, NullsOrder::First),
//!     ..DialectSettings::base()
//! }
//! ```
//!
//! and a dialect that differs from another only in a few places is written
//! as that dialect's record plus overrides.

use crate::keywords::KeywordRules;
use crate::types::TypeRules;
use serde::{Deserialize, Serialize};
use unified_sql_function_registry::{FunctionTable, TimeVocabulary, builtin};
use unified_sql_ir::{Dialect, NullsOrder, SortDirection};

/// How unquoted identifiers are normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFolding {
    Preserve,
    Lower,
}

/// Where NULLs sort when a query does not say
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullOrdering {
    pub asc: NullsOrder,
    pub desc: NullsOrder,
}

impl NullOrdering {
    pub const fn new(asc: NullsOrder, desc: NullsOrder) -> Self {
        Self { asc, desc }
    }

    /// Default placement for a sort direction
    pub fn default_for(&self, direction: SortDirection) -> NullsOrder {
        match direction {
            SortDirection::Asc => self.asc,
            SortDirection::Desc => self.desc,
        }
    }
}

/// How `CREATE TABLE` storage options are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableOptionStyle {
    /// No storage options at all
    None,
    /// `USING ... PARTITIONED BY (...) STORED AS ... LOCATION ... TBLPROPERTIES (...)`
    Inline,
    /// `COMMENT='...' WITH (FORMAT = '...', ...)`
    WithProperties,
}

/// How an array constructor is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayLiteralStyle {
    /// `ARRAY[1, 2]`
    Bracketed,
    /// `[1, 2]`
    Bare,
    /// `ARRAY(1, 2)`, `LIST_VALUE(1, 2)`
    Function(&'static str),
}

/// Immutable description of one SQL dialect
#[derive(Debug, Clone)]
pub struct DialectSettings {
    pub dialect: Dialect,

    // Tokenizing
    pub keywords: KeywordRules,
    /// Opening and closing quote of a quoted identifier
    pub identifier_quote: char,
    /// Characters that open a string literal
    pub string_quotes: &'static [char],
    pub backslash_escapes: bool,
    pub case_folding: CaseFolding,

    // Types and functions
    pub types: TypeRules,
    pub functions: FunctionTable,
    pub time_format: TimeVocabulary,

    // Query syntax
    pub null_ordering: NullOrdering,
    pub supports_hints: bool,
    pub supports_lambdas: bool,
    pub array_literal: ArrayLiteralStyle,
    /// Whether `[1, 2]` parses as an array constructor
    pub bracket_array_literals: bool,
    /// Whether `x::INT` parses as a cast
    pub cast_shorthand: bool,
    /// Whether a distinct set operation must say `DISTINCT`
    pub explicit_distinct_set_ops: bool,

    // DDL
    pub table_options: TableOptionStyle,
}

impl DialectSettings {
    /// The ANSI record every dialect is composed from
    pub fn base() -> Self {
        Self {
            dialect: Dialect::Ansi,
            keywords: KeywordRules::base(),
            identifier_quote: '"',
            string_quotes: &['\''],
            backslash_escapes: false,
            case_folding: CaseFolding::Preserve,
            types: TypeRules::base(),
            functions: builtin::base::table(),
            time_format: TimeVocabulary::Strftime,
            null_ordering: NullOrdering::new(NullsOrder::First, NullsOrder::Last),
            supports_hints: false,
            supports_lambdas: false,
            array_literal: ArrayLiteralStyle::Bracketed,
            bracket_array_literals: false,
            cast_shorthand: false,
            explicit_distinct_set_ops: false,
            table_options: TableOptionStyle::None,
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.is_keyword(word)
    }

    pub fn is_string_quote(&self, c: char) -> bool {
        self.string_quotes.contains(&c)
    }
}
