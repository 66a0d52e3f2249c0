// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Query Representation
//!
//! This module represents SQL queries in the IR.
//!
//! ## Design
//!
//! The query representation models the complete structure of SQL SELECT queries
//! and set operations (UNION, INTERSECT, EXCEPT). It is the same for every
//! supported dialect: a Spark query and the equivalent Presto query lower to
//! equal trees.
//!
//! ## Query Structure
//!
//! A [`Query`] consists of:
//!
//! - **CTEs**: Common Table Expressions (WITH clauses)
//! - **Body**: The main query (SELECT, VALUES or set operation)
//! - **ORDER BY**: Sorting specification
//! - **LIMIT**: Row count limit
//! - **OFFSET**: Row offset for pagination
//!
//! ## Set Operations
//!
//! [`SetOp`] represents set operations and query combinations:
//!
//! - `Select`: A single SELECT statement
//! - `Union`: UNION [ALL] of two queries
//! - `Intersect`: INTERSECT [ALL] of two queries
//! - `Except`: EXCEPT [ALL] of two queries
//! - `Values`: an inline `VALUES (...), (...)` row list
//!
//! Set operations form a tree structure, allowing complex nested combinations.
//! Without `ALL` a set operation is distinct; dialects that insist on an
//! explicit `DISTINCT` keyword get it from the generator.
//!
//! ## SELECT Statement
//!
//! [`SelectStatement`] contains the core SELECT components:
//!
//! - **Hints**: optimizer hints written as `/*+ ... */` right after `SELECT`
//! - **Projection**: SELECT clause with columns/expressions
//! - **FROM**: Table sources with joins
//! - **WHERE**: Row filtering condition
//! - **GROUP BY**: Aggregation groups
//! - **HAVING**: Group filtering condition
//! - **Distinct**: DISTINCT modifier
//!
//! ## Ordering
//!
//! [`OrderBy`] stores the null placement as an `Option`. The parser always
//! fills it in, using the source dialect's default when the query omits
//! `NULLS FIRST` / `NULLS LAST`, so the meaning of the source survives a
//! change of dialect. Trees built by hand may leave it unset, in which case
//! the generator prints no null placement at all.
//!
//! ```sql
//! -- Postgres: DESC sorts NULLs first, ASC sorts them last
//! SELECT a FROM t ORDER BY a DESC, b
//! -- the same ordering written for Spark
//! SELECT a FROM t ORDER BY a DESC NULLS FIRST, b NULLS LAST
//! ```
//!
//! ## Examples
//!
//! ### SELECT with Joins
//! ```sql
//! SELECT u.id, u.name, o.total
//! FROM users u
//! LEFT JOIN orders o ON u.id = o.user_id
//! WHERE u.active = true
//! ```
//!
//! ### CTE with Window Function
//! ```sql
//! WITH ranked_users AS (
//!   SELECT id, name,
//!     ROW_NUMBER() OVER (PARTITION BY department ORDER BY salary) as rank
//!   FROM employees
//! )
//! SELECT * FROM ranked_users WHERE rank <= 10
//! ```

use crate::expr::{Expr, Ident, ObjectName};
use serde::{Deserialize, Serialize};

/// A SQL query (SELECT statement or set operation)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Optional WITH clause (CTE)
    pub ctes: Vec<CommonTableExpr>,

    /// The main body of the query
    pub body: SetOp,

    /// ORDER BY items, empty when absent
    pub order_by: Vec<OrderBy>,

    /// Optional LIMIT clause
    pub limit: Option<Expr>,

    /// Optional OFFSET clause
    pub offset: Option<Expr>,
}

impl Query {
    pub fn new(body: SetOp) -> Self {
        Self {
            ctes: Vec::new(),
            body,
            order_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    pub fn select(select: SelectStatement) -> Self {
        Self::new(SetOp::Select(Box::new(select)))
    }

    pub fn with_ctes(mut self, ctes: impl IntoIterator<Item = CommonTableExpr>) -> Self {
        self.ctes = ctes.into_iter().collect();
        self
    }

    pub fn with_limit(mut self, limit: Expr) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: Expr) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_order_by(mut self, order_by: Vec<OrderBy>) -> Self {
        self.order_by = order_by;
        self
    }

    /// True when the query is a bare SELECT with no query-level clauses
    pub fn is_simple_select(&self) -> bool {
        matches!(self.body, SetOp::Select(_))
            && self.ctes.is_empty()
            && self.order_by.is_empty()
            && self.limit.is_none()
            && self.offset.is_none()
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::select(SelectStatement::default())
    }
}

/// Set operation (UNION, INTERSECT, EXCEPT), SELECT or VALUES
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetOp {
    /// SELECT statement
    Select(Box<SelectStatement>),

    /// UNION [ALL | DISTINCT]
    Union {
        left: Box<Query>,
        right: Box<Query>,
        all: bool,
    },

    /// INTERSECT [ALL | DISTINCT]
    Intersect {
        left: Box<Query>,
        right: Box<Query>,
        all: bool,
    },

    /// EXCEPT [ALL | DISTINCT]
    Except {
        left: Box<Query>,
        right: Box<Query>,
        all: bool,
    },

    /// VALUES (a, b), (c, d)
    Values(Vec<Vec<Expr>>),
}

/// SELECT statement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectStatement {
    /// SELECT DISTINCT or ALL
    pub distinct: bool,

    /// Optimizer hints, in source order
    pub hints: Vec<Hint>,

    /// Projection list (columns to select)
    pub projection: Vec<SelectItem>,

    /// FROM clause
    pub from: Vec<TableRef>,

    /// WHERE clause
    pub where_clause: Option<Expr>,

    /// GROUP BY clause
    pub group_by: Vec<Expr>,

    /// HAVING clause
    pub having: Option<Expr>,
}

/// An optimizer hint such as `REPARTITION(1)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    /// Hint name, uppercased
    pub name: String,
    pub args: Vec<Expr>,
}

/// Item in a SELECT projection list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectItem {
    /// Unnamed expression (e.g., `column` or `a + b`)
    UnnamedExpr(Expr),

    /// Expression with alias (e.g., `col AS name`)
    AliasedExpr { expr: Expr, alias: Ident },

    /// Qualified wildcard (e.g., `table.*`)
    QualifiedWildcard(ObjectName),

    /// Unqualified wildcard (`*`)
    Wildcard,
}

/// Table reference in FROM clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRef {
    /// The table or derived table
    pub factor: TableFactor,

    /// Alias
    pub alias: Option<Ident>,

    /// Joins
    pub joins: Vec<Join>,
}

impl TableRef {
    pub fn table(name: ObjectName) -> Self {
        Self {
            factor: TableFactor::Table(name),
            alias: None,
            joins: Vec::new(),
        }
    }
}

/// Source of rows in a FROM clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableFactor {
    /// Named table (may include schema/database)
    Table(ObjectName),
    /// Parenthesized subquery
    Derived(Box<Query>),
}

/// JOIN clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Join {
    /// Join type
    pub join_type: JoinType,

    /// Table to join
    pub table: TableRef,

    /// Join condition (ON or USING)
    pub condition: JoinCondition,
}

/// Join type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

/// Join condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinCondition {
    On(Expr),
    Using(Vec<Ident>),
    Natural,
    None,
}

/// ORDER BY item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub expr: Expr,
    pub direction: SortDirection,
    /// Where NULLs sort; `None` leaves it to whatever the target does
    pub nulls: Option<NullsOrder>,
}

impl OrderBy {
    pub fn new(expr: Expr) -> Self {
        Self {
            expr,
            direction: SortDirection::Asc,
            nulls: None,
        }
    }

    pub fn desc(mut self) -> Self {
        self.direction = SortDirection::Desc;
        self
    }

    pub fn with_nulls(mut self, nulls: NullsOrder) -> Self {
        self.nulls = Some(nulls);
        self
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Placement of NULL values in a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NullsOrder {
    First,
    Last,
}

/// Common Table Expression (CTE)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonTableExpr {
    pub name: Ident,
    pub columns: Vec<Ident>,
    pub query: Box<Query>,
}

/// Window specification of an `OVER (...)` clause
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub partition_by: Vec<Expr>,
    pub order_by: Vec<OrderBy>,
    pub frame: Option<WindowFrame>,
}

/// Window frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowFrame {
    pub units: WindowFrameUnits,
    pub start_bound: WindowFrameBound,
    pub end_bound: Option<WindowFrameBound>,
}

/// Window frame units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowFrameUnits {
    Rows,
    Range,
    Groups,
}

/// Window frame bound, `None` offsets meaning UNBOUNDED
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowFrameBound {
    CurrentRow,
    Preceding(Option<Box<Expr>>),
    Following(Option<Box<Expr>>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_default_is_simple() {
        let query = Query::default();
        assert!(query.is_simple_select());
        assert!(query.ctes.is_empty());
    }

    #[test]
    fn test_select_default() {
        let select = SelectStatement::default();
        assert!(!select.distinct);
        assert!(select.hints.is_empty());
        assert!(select.projection.is_empty());
        assert!(select.from.is_empty());
    }

    #[test]
    fn test_order_by_builder() {
        let ob = OrderBy::new(Expr::column("id")).desc().with_nulls(NullsOrder::First);
        assert_eq!(ob.direction, SortDirection::Desc);
        assert_eq!(ob.nulls, Some(NullsOrder::First));
    }

    #[test]
    fn test_limit_makes_query_non_simple() {
        let query = Query::default().with_limit(Expr::number(10));
        assert!(!query.is_simple_select());
    }
}
