// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Unified SQL - Generator
//!
//! Writes canonical [`Statement`]s as SQL text for a target dialect.
//!
//! ## Overview
//!
//! ```text
//! Statement → Generator → String
//!                 ↑
//!                 └── DialectSettings (quotes, types, function rules,
//!                     null ordering, table option layout)
//! ```
//!
//! Builtin calls go through the target's function rules before they are
//! written, so a rewrite may produce other builtins that are translated in
//! turn. Anything the target cannot express fails the whole statement with
//! [`GenerateError::UnsupportedConstruct`]; no partial text is returned.
//!
//! ## Layouts
//!
//! The compact layout writes a statement on one line. The pretty layout
//! puts each clause on its own line and list items one per line, indented
//! by two spaces.
//!
//! ## Usage
//!
//! ```rust
//! use unified_sql_generator::{GenerateOptions, generate};
//! use unified_sql_ir::{Dialect, Expr, Statement};
//!
//! let statement = Statement::Expression(Expr::Array(vec![Expr::number(1)]));
//! let sql = generate(&statement, Dialect::Presto, &GenerateOptions::default()).unwrap();
//! assert_eq!(sql, "ARRAY[1]");
//! ```

pub mod error;
pub mod generator;

pub use error::{GenerateError, GenerateResult};
pub use generator::Generator;

use serde::{Deserialize, Serialize};
use unified_sql_dialect::TableOptionStyle;
use unified_sql_ir::{Dialect, Statement};

/// When identifiers are wrapped in the target's quote pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierQuoting {
    /// Quote identifiers that were quoted in the source or need it
    #[default]
    Auto,
    /// Quote every identifier
    Always,
}

/// Options for writing SQL text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Clauses on their own lines, list items indented
    pub pretty: bool,

    pub identifier_quoting: IdentifierQuoting,

    /// Layout for `CREATE TABLE` storage options; the target's own when unset
    pub table_option_style: Option<TableOptionStyle>,

    /// Keep partition transform arguments and `EXTERNAL_LOCATION` in the
    /// property layout
    pub full_table_properties: bool,
}

impl GenerateOptions {
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
}

/// Write `statement` as SQL text for `dialect`
pub fn generate(
    statement: &Statement,
    dialect: Dialect,
    options: &GenerateOptions,
) -> GenerateResult<String> {
    let mut generator = Generator::new(unified_sql_dialect::get(dialect), *options);
    generator.write_statement(statement)?;
    Ok(generator.finish())
}
