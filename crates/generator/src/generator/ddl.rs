// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # DDL Writing
//!
//! `CREATE TABLE` storage options are written in one of two layouts:
//!
//! ```text
//! Inline:          USING ICEBERG COMMENT '...' PARTITIONED BY (d STRING)
//!                  STORED AS PARQUET LOCATION '...' TBLPROPERTIES ('k' = v)
//!
//! WithProperties:  COMMENT='...' WITH (TABLE_FORMAT = 'ICEBERG',
//!                  PARTITIONED_BY = ARRAY['d'], FORMAT = 'PARQUET',
//!                  EXTERNAL_LOCATION = '...', k = v)
//! ```
//!
//! In the property layout, partition columns are ordinary columns listed
//! by name in `PARTITIONED_BY` and partition transforms by their function
//! name. The location has no property and is left out. With
//! `full_table_properties` set, transforms keep their arguments and the
//! location is written as `EXTERNAL_LOCATION`.

use super::{Generator, is_bare_identifier, quote_string};
use crate::error::GenerateResult;
use tracing::debug;
use unified_sql_dialect::TableOptionStyle;
use unified_sql_ir::{
    ColumnDef, CreateTable, DropTable, Expr, Ident, Insert, PartitionItem, TableOptions,
};

impl Generator {
    pub fn write_create_table(&mut self, create: &CreateTable) -> GenerateResult<()> {
        let style = self
            .options
            .table_option_style
            .unwrap_or(self.settings.table_options);

        self.write("CREATE TABLE ");
        if create.if_not_exists {
            self.write("IF NOT EXISTS ");
        }
        self.write_object_name(&create.name);

        let mut columns: Vec<&ColumnDef> = create.columns.iter().collect();
        if style == TableOptionStyle::WithProperties {
            columns.extend(create.options.partitioned_by.iter().filter_map(|item| match item {
                PartitionItem::Column(column) => Some(column),
                PartitionItem::Expr(_) => None,
            }));
        }
        if !columns.is_empty() {
            self.write_char(' ');
            self.write_wrapped(&columns, |g, column| g.write_column_def(column))?;
        }

        match style {
            TableOptionStyle::None if !create.options.is_empty() => {
                return Err(self.unsupported("table storage options"));
            }
            TableOptionStyle::None => {}
            TableOptionStyle::Inline => self.write_inline_options(&create.options)?,
            TableOptionStyle::WithProperties => self.write_property_options(&create.options)?,
        }

        if let Some(query) = &create.query {
            self.write_separator();
            self.write("AS");
            self.write_separator();
            self.write_query(query)?;
        }
        Ok(())
    }

    fn write_column_def(&mut self, column: &ColumnDef) -> GenerateResult<()> {
        self.write_ident(&column.name);
        self.write_char(' ');
        self.write_data_type(&column.data_type)?;
        if column.not_null {
            self.write(" NOT NULL");
        }
        if let Some(comment) = &column.comment {
            self.write(" COMMENT ");
            self.write_string(comment);
        }
        Ok(())
    }

    fn write_inline_options(&mut self, options: &TableOptions) -> GenerateResult<()> {
        if let Some(format) = &options.table_format {
            self.write_separator();
            self.write("USING ");
            self.write(format);
        }
        if let Some(comment) = &options.comment {
            self.write_separator();
            self.write("COMMENT ");
            self.write_string(comment);
        }
        if !options.partitioned_by.is_empty() {
            self.write_separator();
            self.write("PARTITIONED BY ");
            self.write_wrapped(&options.partitioned_by, |g, item| match item {
                PartitionItem::Column(column) => g.write_column_def(column),
                PartitionItem::Expr(expr) => g.write_expr(expr),
            })?;
        }
        if let Some(format) = &options.file_format {
            self.write_separator();
            self.write("STORED AS ");
            self.write(format);
        }
        if let Some(location) = &options.location {
            self.write_separator();
            self.write("LOCATION ");
            self.write_string(location);
        }
        if !options.properties.is_empty() {
            self.write_separator();
            self.write("TBLPROPERTIES ");
            self.write_wrapped(&options.properties, |g, property| {
                g.write_string(&property.key);
                g.write(" = ");
                g.write_expr(&property.value)
            })?;
        }
        Ok(())
    }

    fn write_property_options(&mut self, options: &TableOptions) -> GenerateResult<()> {
        if let Some(comment) = &options.comment {
            self.write_separator();
            self.write("COMMENT=");
            self.write_string(comment);
        }

        let backslash_escapes = self.settings.backslash_escapes;
        let quote = |value: &str| quote_string(value, backslash_escapes);
        let mut entries: Vec<String> = Vec::new();
        if let Some(format) = &options.table_format {
            entries.push(format!("TABLE_FORMAT = {}", quote(format)));
        }
        if !options.partitioned_by.is_empty() {
            let mut names = Vec::with_capacity(options.partitioned_by.len());
            for item in &options.partitioned_by {
                names.push(Expr::string(self.partition_name(item)?));
            }
            let array = self.render_compact(|g| g.write_expr(&Expr::Array(names)))?;
            entries.push(format!("PARTITIONED_BY = {array}"));
        }
        if let Some(format) = &options.file_format {
            entries.push(format!("FORMAT = {}", quote(format)));
        }
        if let Some(location) = &options.location {
            if self.options.full_table_properties {
                entries.push(format!("EXTERNAL_LOCATION = {}", quote(location)));
            } else {
                debug!(location = %location, "Table location has no property, dropped");
            }
        }
        for property in &options.properties {
            let value = self.render_compact(|g| g.write_expr(&property.value))?;
            let key = if is_bare_identifier(&property.key) {
                property.key.clone()
            } else {
                self.render_compact(|g| {
                    g.write_ident(&Ident::quoted(property.key.as_str()));
                    Ok(())
                })?
            };
            entries.push(format!("{key} = {value}"));
        }

        if !entries.is_empty() {
            self.write_separator();
            self.write("WITH ");
            self.write_wrapped(&entries, |g, entry| {
                g.write(entry);
                Ok(())
            })?;
        }
        Ok(())
    }

    /// How a partition item is listed in `PARTITIONED_BY`
    fn partition_name(&self, item: &PartitionItem) -> GenerateResult<String> {
        match item {
            PartitionItem::Column(column) => Ok(column.name.value.clone()),
            PartitionItem::Expr(Expr::Column(column)) => Ok(column.qualified()),
            PartitionItem::Expr(Expr::Function(call)) if !self.options.full_table_properties => {
                Ok(call.name.as_str().to_string())
            }
            PartitionItem::Expr(expr) => self.render_compact(|g| g.write_expr(expr)),
        }
    }

    pub fn write_insert(&mut self, insert: &Insert) -> GenerateResult<()> {
        if insert.overwrite {
            if !self.settings.is_keyword("OVERWRITE") {
                return Err(self.unsupported("INSERT OVERWRITE"));
            }
            self.write("INSERT OVERWRITE TABLE ");
        } else {
            self.write("INSERT INTO ");
        }
        self.write_object_name(&insert.table);
        if !insert.columns.is_empty() {
            self.write(" (");
            for (i, column) in insert.columns.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }
                self.write_ident(column);
            }
            self.write_char(')');
        }
        self.write_separator();
        self.write_query(&insert.source)
    }

    pub fn write_drop_table(&mut self, drop: &DropTable) -> GenerateResult<()> {
        self.write("DROP TABLE ");
        if drop.if_exists {
            self.write("IF EXISTS ");
        }
        self.write_object_name(&drop.name);
        Ok(())
    }
}
