// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # DDL and DML Statements
//!
//! `CREATE TABLE`, `INSERT` and `DROP TABLE`.
//!
//! ## Table Options
//!
//! Engines disagree on where storage settings go. Hive and Spark write them
//! as clauses after the column list:
//!
//! ```sql
//! CREATE TABLE x USING ICEBERG PARTITIONED BY (MONTHS(y)) LOCATION 's3://z'
//! ```
//!
//! while Presto and Trino put them into a property map:
//!
//! ```sql
//! CREATE TABLE x WITH (TABLE_FORMAT = 'ICEBERG', PARTITIONED_BY = ARRAY['MONTHS'])
//! ```
//!
//! Both lower to the same [`TableOptions`] bag.

use crate::expr::{Expr, Ident, ObjectName};
use crate::query::Query;
use crate::types::DataType;
use serde::{Deserialize, Serialize};

/// `CREATE TABLE`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTable {
    pub name: ObjectName,
    pub if_not_exists: bool,
    pub columns: Vec<ColumnDef>,
    pub options: TableOptions,
    /// `AS SELECT ...`
    pub query: Option<Box<Query>>,
}

impl CreateTable {
    pub fn new(name: ObjectName) -> Self {
        Self {
            name,
            if_not_exists: false,
            columns: Vec::new(),
            options: TableOptions::default(),
            query: None,
        }
    }

    pub fn with_columns(mut self, columns: Vec<ColumnDef>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query = Some(Box::new(query));
        self
    }
}

/// Column definition in a table schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: Ident,
    pub data_type: DataType,
    pub not_null: bool,
    pub comment: Option<String>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: Ident::new(name),
            data_type,
            not_null: false,
            comment: None,
        }
    }
}

/// Storage options of a table, independent of how a dialect spells them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOptions {
    /// Table format (`USING ICEBERG`)
    pub table_format: Option<String>,
    /// File format (`STORED AS PARQUET`)
    pub file_format: Option<String>,
    pub partitioned_by: Vec<PartitionItem>,
    pub location: Option<String>,
    pub comment: Option<String>,
    /// Any other key/value property, in source order
    pub properties: Vec<TableProperty>,
}

impl TableOptions {
    pub fn is_empty(&self) -> bool {
        self.table_format.is_none()
            && self.file_format.is_none()
            && self.partitioned_by.is_empty()
            && self.location.is_none()
            && self.comment.is_none()
            && self.properties.is_empty()
    }
}

/// One entry of a `PARTITIONED BY` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartitionItem {
    /// A partition column with its type (`date STRING`)
    Column(ColumnDef),
    /// A partition transform or a reference to a declared column
    Expr(Expr),
}

/// A free-form table property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableProperty {
    pub key: String,
    pub value: Expr,
}

/// `INSERT INTO` / `INSERT OVERWRITE`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insert {
    pub table: ObjectName,
    pub overwrite: bool,
    pub columns: Vec<Ident>,
    pub source: Box<Query>,
}

/// `DROP TABLE`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTable {
    pub name: ObjectName,
    pub if_exists: bool,
}
