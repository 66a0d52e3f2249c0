// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Translation Options
//!
//! One flat options record covers both ends of the pipeline. It loads from
//! a JSON file; every field is optional there and falls back to its default.
//!
//! ## Example
//!
//! ```json
//! {
//!   "pretty": true,
//!   "identifier_quoting": "always",
//!   "table_option_style": "with-properties",
//!   "full_table_properties": false,
//!   "normalize_identifiers": false,
//!   "max_depth": 64
//! }
//! ```

use crate::error::TranspileError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use unified_sql_dialect::TableOptionStyle;
use unified_sql_generator::{GenerateOptions, IdentifierQuoting};
use unified_sql_parser::{DEFAULT_MAX_DEPTH, ParseOptions};

/// Options for [`translate`](crate::translate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranspileOptions {
    /// Clauses on their own lines, list items indented
    pub pretty: bool,

    pub identifier_quoting: IdentifierQuoting,

    /// Override the target's `CREATE TABLE` option layout
    pub table_option_style: Option<TableOptionStyle>,

    /// Keep partition transform arguments and the location in `WITH (...)`
    pub full_table_properties: bool,

    /// Fold unquoted identifiers in source dialects that fold case
    pub normalize_identifiers: bool,

    /// Nesting limit for expressions, subqueries and types
    pub max_depth: usize,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            identifier_quoting: IdentifierQuoting::Auto,
            table_option_style: None,
            full_table_properties: false,
            normalize_identifiers: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl TranspileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_identifier_quoting(mut self, quoting: IdentifierQuoting) -> Self {
        self.identifier_quoting = quoting;
        self
    }

    pub fn with_table_option_style(mut self, style: TableOptionStyle) -> Self {
        self.table_option_style = Some(style);
        self
    }

    pub fn with_full_table_properties(mut self, full: bool) -> Self {
        self.full_table_properties = full;
        self
    }

    pub fn with_normalize_identifiers(mut self, normalize: bool) -> Self {
        self.normalize_identifiers = normalize;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse options from JSON text
    pub fn from_json(text: &str) -> Result<Self, TranspileError> {
        serde_json::from_str(text).map_err(|e| TranspileError::Config(e.to_string()))
    }

    /// Load options from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TranspileError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            TranspileError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&text)
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::default()
            .with_normalize_identifiers(self.normalize_identifiers)
            .with_max_depth(self.max_depth)
    }

    pub fn generate_options(&self) -> GenerateOptions {
        let options = GenerateOptions::default()
            .with_pretty(self.pretty)
            .with_identifier_quoting(self.identifier_quoting)
            .with_full_table_properties(self.full_table_properties);
        match self.table_option_style {
            Some(style) => options.with_table_option_style(style),
            None => options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options = TranspileOptions::from_json(r#"{"pretty": true}"#).unwrap();
        assert!(options.pretty);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(options.identifier_quoting, IdentifierQuoting::Auto);
    }

    #[test]
    fn test_full_json() {
        let options = TranspileOptions::from_json(
            r#"{
                "identifier_quoting": "always",
                "table_option_style": "with-properties",
                "normalize_identifiers": true,
                "max_depth": 12
            }"#,
        )
        .unwrap();
        assert_eq!(
            options,
            TranspileOptions::new()
                .with_identifier_quoting(IdentifierQuoting::Always)
                .with_table_option_style(TableOptionStyle::WithProperties)
                .with_normalize_identifiers(true)
                .with_max_depth(12)
        );
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = TranspileOptions::from_json(r#"{"identifier_quoting": "sometimes"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_split_into_stage_options() {
        let options = TranspileOptions::new()
            .with_pretty(true)
            .with_max_depth(7)
            .with_table_option_style(TableOptionStyle::Inline);
        assert_eq!(options.parse_options().max_depth, 7);
        let generate = options.generate_options();
        assert!(generate.pretty);
        assert_eq!(generate.table_option_style, Some(TableOptionStyle::Inline));
        assert!(!generate.full_table_properties);
        assert!(
            options
                .with_full_table_properties(true)
                .generate_options()
                .full_table_properties
        );
    }
}
