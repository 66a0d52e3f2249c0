// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Statements
//!
//! Top-level unit of translation. Input text holding several `;`-separated
//! statements yields one [`Statement`] per statement.

use crate::ddl::{CreateTable, DropTable, Insert};
use crate::expr::Expr;
use crate::query::Query;
use serde::{Deserialize, Serialize};

/// A complete SQL statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    Query(Box<Query>),
    CreateTable(Box<CreateTable>),
    Insert(Box<Insert>),
    DropTable(DropTable),
    /// A bare expression such as `TO_DATE(x, 'yyyy')`
    Expression(Expr),
}

impl Statement {
    /// Short name of the statement kind, used in log records
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Query(_) => "query",
            Statement::CreateTable(_) => "create_table",
            Statement::Insert(_) => "insert",
            Statement::DropTable(_) => "drop_table",
            Statement::Expression(_) => "expression",
        }
    }
}

impl From<Query> for Statement {
    fn from(query: Query) -> Self {
        Statement::Query(Box::new(query))
    }
}

impl From<Expr> for Statement {
    fn from(expr: Expr) -> Self {
        Statement::Expression(expr)
    }
}
