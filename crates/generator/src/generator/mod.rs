// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL Text Writer
//!
//! [`Generator`] appends SQL text to an output buffer while walking a
//! canonical tree. The walk is split by construct:
//!
//! - [`expr`]: operators, literals, function rules and lambdas
//! - [`query`]: SELECT, set operations, joins, ORDER BY and windows
//! - [`ddl`]: CREATE TABLE with storage options, INSERT, DROP TABLE
//!
//! Layout decisions go through a handful of helpers so the compact and
//! pretty layouts share one walk.

mod ddl;
mod expr;
mod query;

use crate::error::{GenerateError, GenerateResult};
use crate::{GenerateOptions, IdentifierQuoting};
use unified_sql_dialect::DialectSettings;
use unified_sql_ir::{Ident, ObjectName, Statement};

const INDENT: &str = "  ";

/// Writer for one statement in one target dialect
pub struct Generator {
    settings: &'static DialectSettings,
    options: GenerateOptions,
    output: String,
    indent_level: usize,
}

impl Generator {
    pub fn new(settings: &'static DialectSettings, options: GenerateOptions) -> Self {
        Self {
            settings,
            options,
            output: String::new(),
            indent_level: 0,
        }
    }

    pub fn settings(&self) -> &'static DialectSettings {
        self.settings
    }

    /// Take the text written so far
    pub fn finish(self) -> String {
        self.output
    }

    pub fn write_statement(&mut self, statement: &Statement) -> GenerateResult<()> {
        match statement {
            Statement::Query(query) => self.write_query(query),
            Statement::CreateTable(create) => self.write_create_table(create),
            Statement::Insert(insert) => self.write_insert(insert),
            Statement::DropTable(drop) => self.write_drop_table(drop),
            Statement::Expression(expr) => self.write_expr(expr),
        }
    }

    /// Render into a scratch writer that shares the target but not the layout
    fn render_compact(
        &self,
        f: impl FnOnce(&mut Generator) -> GenerateResult<()>,
    ) -> GenerateResult<String> {
        let mut scratch = Generator::new(self.settings, self.options.with_pretty(false));
        f(&mut scratch)?;
        Ok(scratch.finish())
    }

    fn unsupported(&self, construct: impl Into<String>) -> GenerateError {
        GenerateError::unsupported(self.settings.dialect, construct)
    }

    // ========================================================================
    // Layout
    // ========================================================================

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn write_char(&mut self, c: char) {
        self.output.push(c);
    }

    /// Start a new line at the current indent
    fn write_newline(&mut self) {
        self.output.push('\n');
        for _ in 0..self.indent_level {
            self.output.push_str(INDENT);
        }
    }

    /// Clause separator: a line break when pretty, a space otherwise
    fn write_separator(&mut self) {
        if self.options.pretty {
            self.write_newline();
        } else {
            self.write_char(' ');
        }
    }

    /// Line break that has no compact counterpart
    fn write_pretty_break(&mut self) {
        if self.options.pretty {
            self.write_newline();
        }
    }

    /// `KEYWORD a, b` or, when pretty, each item on its own indented line
    fn write_clause<T>(
        &mut self,
        keyword: &str,
        items: &[T],
        mut f: impl FnMut(&mut Self, &T) -> GenerateResult<()>,
    ) -> GenerateResult<()> {
        self.write(keyword);
        if self.options.pretty {
            self.indent_level += 1;
            for (i, item) in items.iter().enumerate() {
                self.write_newline();
                f(self, item)?;
                if i + 1 < items.len() {
                    self.write_char(',');
                }
            }
            self.indent_level -= 1;
        } else {
            self.write_char(' ');
            self.write_comma_separated(items, f)?;
        }
        Ok(())
    }

    /// `(a, b)` or, when pretty, items on their own lines inside the parens
    fn write_wrapped<T>(
        &mut self,
        items: &[T],
        mut f: impl FnMut(&mut Self, &T) -> GenerateResult<()>,
    ) -> GenerateResult<()> {
        self.write_char('(');
        if self.options.pretty {
            self.indent_level += 1;
            for (i, item) in items.iter().enumerate() {
                self.write_newline();
                f(self, item)?;
                if i + 1 < items.len() {
                    self.write_char(',');
                }
            }
            self.indent_level -= 1;
            self.write_newline();
        } else {
            self.write_comma_separated(items, f)?;
        }
        self.write_char(')');
        Ok(())
    }

    fn write_comma_separated<T>(
        &mut self,
        items: &[T],
        mut f: impl FnMut(&mut Self, &T) -> GenerateResult<()>,
    ) -> GenerateResult<()> {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            f(self, item)?;
        }
        Ok(())
    }

    // ========================================================================
    // Names and literals
    // ========================================================================

    fn write_ident(&mut self, ident: &Ident) {
        let quote = ident.quoted
            || self.options.identifier_quoting == IdentifierQuoting::Always
            || !is_bare_identifier(&ident.value);
        if quote {
            let q = self.settings.identifier_quote;
            self.write_char(q);
            for c in ident.value.chars() {
                if c == q {
                    self.write_char(q);
                }
                self.write_char(c);
            }
            self.write_char(q);
        } else {
            self.write(&ident.value);
        }
    }

    fn write_object_name(&mut self, name: &ObjectName) {
        for (i, part) in name.0.iter().enumerate() {
            if i > 0 {
                self.write_char('.');
            }
            self.write_ident(part);
        }
    }

    /// String literal escaped the way the target reads it back
    fn write_string(&mut self, value: &str) {
        let text = quote_string(value, self.settings.backslash_escapes);
        self.write(&text);
    }
}

/// Whether a name can be written without quotes
fn is_bare_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn quote_string(value: &str, backslash_escapes: bool) -> String {
    let mut text = String::with_capacity(value.len() + 2);
    text.push('\'');
    for c in value.chars() {
        match c {
            '\'' if backslash_escapes => text.push_str("\\'"),
            '\\' if backslash_escapes => text.push_str("\\\\"),
            '\'' => text.push_str("''"),
            c => text.push(c),
        }
    }
    text.push('\'');
    text
}
