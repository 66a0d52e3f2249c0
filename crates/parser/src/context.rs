// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Parse context for tracking state while reading one statement

use crate::error::ParseError;
use unified_sql_dialect::{CaseFolding, DialectSettings};
use unified_sql_ir::{Dialect, Ident};

/// Default nesting limit for expressions, queries and types
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Context for tracking state while parsing
///
/// The context maintains:
/// - The source dialect's settings record
/// - Whether unquoted identifiers are case-folded
/// - Recursion depth tracking
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Source dialect
    settings: &'static DialectSettings,

    /// Apply the dialect's case folding to unquoted identifiers
    normalize_identifiers: bool,

    /// Current recursion depth
    recursion_depth: usize,

    /// Maximum recursion depth allowed
    max_recursion_depth: usize,
}

impl ParseContext {
    /// Create a new parse context
    pub fn new(settings: &'static DialectSettings) -> Self {
        Self::with_max_depth(settings, DEFAULT_MAX_DEPTH)
    }

    /// Create a new parse context with custom max recursion depth
    pub fn with_max_depth(settings: &'static DialectSettings, max_depth: usize) -> Self {
        Self {
            settings,
            normalize_identifiers: false,
            recursion_depth: 0,
            max_recursion_depth: max_depth,
        }
    }

    pub fn with_normalize_identifiers(mut self, normalize: bool) -> Self {
        self.normalize_identifiers = normalize;
        self
    }

    /// Get the source dialect
    pub fn dialect(&self) -> Dialect {
        self.settings.dialect
    }

    pub fn settings(&self) -> &'static DialectSettings {
        self.settings
    }

    pub fn depth(&self) -> usize {
        self.recursion_depth
    }

    /// Build an identifier, folding its case when normalization is on
    pub fn ident(&self, value: &str, quoted: bool) -> Ident {
        if quoted {
            return Ident::quoted(value);
        }
        match self.settings.case_folding {
            CaseFolding::Lower if self.normalize_identifiers => Ident::new(value.to_lowercase()),
            _ => Ident::new(value),
        }
    }

    /// Increment recursion depth and check for overflow
    pub fn enter_recursive_context(&mut self, offset: usize) -> Result<(), ParseError> {
        self.recursion_depth += 1;
        if self.recursion_depth > self.max_recursion_depth {
            Err(ParseError::RecursionLimitExceeded {
                offset,
                depth: self.recursion_depth,
                limit: self.max_recursion_depth,
            })
        } else {
            Ok(())
        }
    }

    /// Decrement recursion depth when exiting a recursive context
    pub fn exit_recursive_context(&mut self) {
        self.recursion_depth = self.recursion_depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recursion_tracking() {
        let mut ctx = ParseContext::new(unified_sql_dialect::get(Dialect::Spark));

        ctx.enter_recursive_context(0).unwrap();
        assert_eq!(ctx.depth(), 1);

        ctx.exit_recursive_context();
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn test_recursion_limit() {
        let mut ctx = ParseContext::with_max_depth(unified_sql_dialect::get(Dialect::Spark), 5);

        // Should succeed up to the limit
        for _ in 0..5 {
            ctx.enter_recursive_context(0).unwrap();
        }

        // Exceeds limit
        assert_eq!(
            ctx.enter_recursive_context(42),
            Err(ParseError::RecursionLimitExceeded {
                offset: 42,
                depth: 6,
                limit: 5,
            })
        );
    }

    #[test]
    fn test_case_folding() {
        let postgres = unified_sql_dialect::get(Dialect::Postgres);

        let preserving = ParseContext::new(postgres);
        assert_eq!(preserving.ident("UserId", false), Ident::new("UserId"));

        let folding = ParseContext::new(postgres).with_normalize_identifiers(true);
        assert_eq!(folding.ident("UserId", false), Ident::new("userid"));
        assert_eq!(folding.ident("UserId", true), Ident::quoted("UserId"));

        // Spark preserves case even when normalizing
        let spark = ParseContext::new(unified_sql_dialect::get(Dialect::Spark))
            .with_normalize_identifiers(true);
        assert_eq!(spark.ident("UserId", false), Ident::new("UserId"));
    }
}
