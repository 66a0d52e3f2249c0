// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! DDL and DML statements
//!
//! Storage options are read in the source dialect's style and folded into
//! one [`TableOptions`] bag:
//!
//! ```text
//! Inline:          USING fmt PARTITIONED BY (...) STORED AS fmt
//!                  LOCATION '...' COMMENT '...' TBLPROPERTIES ('k' = v)
//! WithProperties:  COMMENT='...' WITH (TABLE_FORMAT = '...', FORMAT = '...',
//!                  PARTITIONED_BY = ARRAY['c'], EXTERNAL_LOCATION = '...', k = v)
//! ```

use super::Parser;
use crate::error::ParseResult;
use crate::tokenizer::TokenKind;
use tracing::trace;
use unified_sql_dialect::TableOptionStyle;
use unified_sql_ir::{
    ColumnDef, CreateTable, DropTable, Expr, Insert, Literal, PartitionItem, Statement,
    TableOptions, TableProperty,
};

/// Clauses of the inline style, with the name used in errors
const INLINE_CLAUSES: &[(&str, &str)] = &[
    ("USING", "USING"),
    ("STORED", "STORED AS"),
    ("PARTITIONED", "PARTITIONED BY"),
    ("LOCATION", "LOCATION"),
    ("TBLPROPERTIES", "TBLPROPERTIES"),
];

impl Parser {
    /// `CREATE TABLE [IF NOT EXISTS] name [(columns)] [options] [AS query]`
    pub(super) fn parse_create(&mut self) -> ParseResult<Statement> {
        self.expect_keyword("CREATE")?;
        self.expect_keyword("TABLE")?;
        let if_not_exists = self.consume_words(&["IF", "NOT", "EXISTS"]);
        let mut create = CreateTable::new(self.parse_object_name()?);
        create.if_not_exists = if_not_exists;

        if self.consume_operator("(") {
            create.columns = self.parse_comma_separated(Self::parse_column_def)?;
            self.expect_operator(")")?;
        }

        match self.settings().table_options {
            TableOptionStyle::Inline => self.parse_inline_options(&mut create.options)?,
            TableOptionStyle::WithProperties => self.parse_property_options(&mut create)?,
            TableOptionStyle::None => {
                if let Some(clause) = self.peek_inline_clause().or(self.peek_with_clause()) {
                    return Err(self.unsupported(clause));
                }
                if self.peek_word("COMMENT") {
                    return Err(self.unsupported("COMMENT"));
                }
            }
        }

        if self.consume_keyword("AS") {
            create.query = Some(Box::new(self.parse_query()?));
        }
        Ok(Statement::CreateTable(Box::new(create)))
    }

    /// `name type [NOT NULL] [COMMENT '...']`
    fn parse_column_def(&mut self) -> ParseResult<ColumnDef> {
        let name = self.parse_identifier()?;
        let data_type = self.parse_data_type()?;
        let mut column = ColumnDef {
            name,
            data_type,
            not_null: false,
            comment: None,
        };
        loop {
            if self.consume_words(&["NOT", "NULL"]) {
                column.not_null = true;
            } else if self.consume_keyword("NULL") {
                column.not_null = false;
            } else if self.consume_word("COMMENT") {
                column.comment = Some(self.expect_string("column comment")?);
            } else {
                break;
            }
        }
        Ok(column)
    }

    fn peek_inline_clause(&self) -> Option<&'static str> {
        INLINE_CLAUSES
            .iter()
            .find(|(word, _)| self.peek_word(word))
            .map(|(_, clause)| *clause)
    }

    fn peek_with_clause(&self) -> Option<&'static str> {
        (self.peek_keyword("WITH") && self.peek_nth_operator(1, "(")).then_some("WITH (...)")
    }

    fn parse_inline_options(&mut self, options: &mut TableOptions) -> ParseResult<()> {
        loop {
            if self.consume_keyword("USING") {
                options.table_format = Some(self.parse_option_word("table format")?);
            } else if self.consume_word("STORED") {
                self.expect_keyword("AS")?;
                options.file_format = Some(self.parse_option_word("file format")?);
            } else if self.consume_word("PARTITIONED") {
                self.expect_keyword("BY")?;
                self.expect_operator("(")?;
                options.partitioned_by = self.parse_comma_separated(Self::parse_partition_item)?;
                self.expect_operator(")")?;
            } else if self.consume_word("LOCATION") {
                options.location = Some(self.expect_string("location")?);
            } else if self.consume_word("COMMENT") {
                options.comment = Some(self.expect_string("table comment")?);
            } else if self.consume_word("TBLPROPERTIES") {
                self.expect_operator("(")?;
                let properties = self.parse_comma_separated(|p| {
                    let key = p.parse_property_key()?;
                    p.expect_operator("=")?;
                    Ok(TableProperty {
                        key,
                        value: p.parse_expr()?,
                    })
                })?;
                options.properties.extend(properties);
                self.expect_operator(")")?;
            } else if let Some(clause) = self.peek_with_clause() {
                return Err(self.unsupported(clause));
            } else {
                return Ok(());
            }
        }
    }

    /// A column with its type, or a transform such as `MONTHS(ts)`
    fn parse_partition_item(&mut self) -> ParseResult<PartitionItem> {
        let is_column = self.peek().is_some_and(|t| {
            matches!(t.kind, TokenKind::Identifier | TokenKind::QuotedIdentifier)
        }) && self.peek_nth(1).is_some_and(|t| {
            matches!(t.kind, TokenKind::Identifier | TokenKind::Keyword)
        });
        if is_column {
            Ok(PartitionItem::Column(self.parse_column_def()?))
        } else {
            Ok(PartitionItem::Expr(self.parse_expr()?))
        }
    }

    /// `ICEBERG`, `parquet`, `'delta'`
    fn parse_option_word(&mut self, what: &str) -> ParseResult<String> {
        match self.peek() {
            Some(token)
                if matches!(
                    token.kind,
                    TokenKind::Identifier
                        | TokenKind::Keyword
                        | TokenKind::QuotedIdentifier
                        | TokenKind::String
                ) =>
            {
                let word = token.text.clone();
                self.index += 1;
                Ok(word)
            }
            _ => Err(self.unexpected(what)),
        }
    }

    /// A property key, quoted as a string or written as a word
    fn parse_property_key(&mut self) -> ParseResult<String> {
        if self.peek().is_some_and(|t| t.kind == TokenKind::String) {
            return self.expect_string("property key");
        }
        Ok(self.parse_any_word()?.value)
    }

    fn parse_property_options(&mut self, create: &mut CreateTable) -> ParseResult<()> {
        loop {
            if self.consume_word("COMMENT") {
                self.consume_operator("=");
                create.options.comment = Some(self.expect_string("table comment")?);
            } else if self.peek_with_clause().is_some() {
                self.index += 2;
                let properties = self.parse_comma_separated(|p| {
                    let key = p.parse_property_key()?;
                    p.expect_operator("=")?;
                    Ok((key, p.parse_expr()?))
                })?;
                self.expect_operator(")")?;
                for (key, value) in properties {
                    fold_property(create, key, value);
                }
            } else if let Some(clause) = self.peek_inline_clause() {
                return Err(self.unsupported(clause));
            } else {
                return Ok(());
            }
        }
    }

    /// `INSERT INTO|OVERWRITE [TABLE] name [(columns)] query`
    pub(super) fn parse_insert(&mut self) -> ParseResult<Statement> {
        self.expect_keyword("INSERT")?;
        let overwrite = if self.peek_word("OVERWRITE") {
            if !self.settings().is_keyword("OVERWRITE") {
                return Err(self.unsupported("INSERT OVERWRITE"));
            }
            self.index += 1;
            true
        } else {
            self.expect_keyword("INTO")?;
            false
        };
        self.consume_keyword("TABLE");

        let table = self.parse_object_name()?;
        let columns = if self.peek_operator("(") && !self.peek_query_in_parens() {
            self.parse_parenthesized_identifiers()?
        } else {
            Vec::new()
        };
        let source = self.parse_query()?;

        Ok(Statement::Insert(Box::new(Insert {
            table,
            overwrite,
            columns,
            source: Box::new(source),
        })))
    }

    /// `DROP TABLE [IF EXISTS] name`
    pub(super) fn parse_drop(&mut self) -> ParseResult<Statement> {
        self.expect_keyword("DROP")?;
        self.expect_keyword("TABLE")?;
        let if_exists = self.consume_words(&["IF", "EXISTS"]);
        let name = self.parse_object_name()?;
        Ok(Statement::DropTable(DropTable { name, if_exists }))
    }
}

fn string_value(expr: &Expr) -> Option<&str> {
    match expr {
        Expr::Literal(Literal::String(value)) => Some(value),
        _ => None,
    }
}

/// Fold one `WITH (...)` property into the options bag
fn fold_property(create: &mut CreateTable, key: String, value: Expr) {
    let text = string_value(&value).map(str::to_string);
    match (key.to_ascii_uppercase().as_str(), text) {
        ("TABLE_FORMAT", Some(format)) => create.options.table_format = Some(format),
        ("FORMAT", Some(format)) => create.options.file_format = Some(format),
        ("LOCATION" | "EXTERNAL_LOCATION", Some(location)) => {
            create.options.location = Some(location)
        }
        ("PARTITIONED_BY", None) if matches!(value, Expr::Array(_)) => {
            let Expr::Array(items) = value else {
                return;
            };
            for item in items {
                let partition = match string_value(&item) {
                    Some(name) => take_column(&mut create.columns, name)
                        .map(PartitionItem::Column)
                        .unwrap_or_else(|| PartitionItem::Expr(Expr::column(name))),
                    None => PartitionItem::Expr(item),
                };
                create.options.partitioned_by.push(partition);
            }
        }
        _ => {
            trace!(key = %key, "Keeping table property");
            create.options.properties.push(TableProperty { key, value });
        }
    }
}

/// Move a declared column out of the schema into the partition list
fn take_column(columns: &mut Vec<ColumnDef>, name: &str) -> Option<ColumnDef> {
    let index = columns
        .iter()
        .position(|column| column.name.value.eq_ignore_ascii_case(name))?;
    Some(columns.remove(index))
}
