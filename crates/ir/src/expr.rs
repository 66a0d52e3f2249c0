// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Expressions
//!
//! This module represents SQL expressions in the IR.
//!
//! ## Design
//!
//! Expressions are the building blocks of SQL statements and can represent:
//!
//! - **Column references**: `db.table.column` or unqualified `column`
//! - **Literal values**: Numbers, strings, booleans, NULL
//! - **Binary operations**: Arithmetic, comparison, logical, string operations
//! - **Unary operations**: Negation, NOT
//! - **Function calls**: Canonical builtins and pass-through named functions
//! - **Lambdas**: `x -> x + 1`, `(left, right) -> -1`
//! - **Case / Cast / Extract** expressions
//! - **Predicates**: BETWEEN, IN, IS NULL, EXISTS
//! - **Array constructors**: `ARRAY(1, 2)`, `ARRAY[1, 2]`, `[1, 2]` all lower
//!   to [`Expr::Array`]
//! - **Time formats**: a date/time pattern argument already translated into
//!   dialect-independent tokens (see [`crate::time_format`])
//!
//! ## Expression Hierarchy
//!
//! Expressions form an owned tree. For example:
//!
//! ```text
//! BinaryOp {
//!   left: Box<Expr::Column("price")>,
//!   op: Mul,
//!   right: Box<Expr::Paren(BinaryOp {
//!     left: Box<Expr::Literal(1.1)>,
//!     op: Add,
//!     right: Box<Expr::Literal(0.5)>
//!   })>
//! }
//! ```
//!
//! Represents: `price * (1.1 + 0.5)`
//!
//! Explicit parentheses from the source are kept as [`Expr::Paren`], so
//! regenerating a parsed tree never has to guess grouping.
//!
//! ## Literal Values
//!
//! Numbers keep their source text (`1.50` stays `1.50`) because the
//! transpiler never evaluates them.

use crate::function::Function;
use crate::query::Query;
use crate::time_format::TimeFormat;
use crate::types::DataType;
use serde::{Deserialize, Serialize};

/// An identifier, remembering whether it was quoted in the source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ident {
    pub value: String,
    pub quoted: bool,
}

impl Ident {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: false,
        }
    }

    pub fn quoted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: true,
        }
    }
}

/// A possibly qualified object name (e.g. `db.example_table`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectName(pub Vec<Ident>);

impl ObjectName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(vec![Ident::new(name)])
    }

    /// The last part of the name (the object itself, without qualifiers)
    pub fn base(&self) -> Option<&Ident> {
        self.0.last()
    }
}

/// Column reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    /// Table, schema or struct qualifiers, outermost first
    pub qualifier: Vec<Ident>,
    /// Column name
    pub column: Ident,
}

impl ColumnRef {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            qualifier: Vec::new(),
            column: Ident::new(column),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.qualifier = vec![Ident::new(table)];
        self
    }

    pub fn qualified(&self) -> String {
        self.qualifier
            .iter()
            .chain(std::iter::once(&self.column))
            .map(|ident| ident.value.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// A SQL expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// Column reference (e.g., `table.column` or just `column`)
    Column(ColumnRef),

    /// Literal value
    Literal(Literal),

    /// Bare `*`, as in `COUNT(*)`
    Wildcard,

    /// Binary operation (e.g., `a + b`, `x = 5`)
    BinaryOp {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },

    /// Unary operation (e.g., `-x`, `NOT a`)
    UnaryOp { op: UnaryOp, expr: Box<Expr> },

    /// Function call (e.g., `COUNT(*)`, `ARRAY_SORT(x)`)
    Function(Function),

    /// Lambda passed to a higher-order function
    Lambda { params: Vec<Ident>, body: Box<Expr> },

    /// CASE expression, with an optional operand for the simple form
    Case {
        operand: Option<Box<Expr>>,
        conditions: Vec<Expr>,
        results: Vec<Expr>,
        else_result: Option<Box<Expr>>,
    },

    /// CAST expression
    Cast {
        expr: Box<Expr>,
        data_type: DataType,
    },

    /// EXTRACT(field FROM expr)
    Extract {
        field: DateTimeField,
        expr: Box<Expr>,
    },

    /// `expr [NOT] BETWEEN low AND high`
    Between {
        expr: Box<Expr>,
        negated: bool,
        low: Box<Expr>,
        high: Box<Expr>,
    },

    /// `expr [NOT] IN (a, b, ...)`
    InList {
        expr: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },

    /// `expr [NOT] IN (SELECT ...)`
    InSubquery {
        expr: Box<Expr>,
        subquery: Box<Query>,
        negated: bool,
    },

    /// `expr IS [NOT] NULL`
    IsNull { expr: Box<Expr>, negated: bool },

    /// `EXISTS (SELECT ...)`
    Exists(Box<Query>),

    /// Scalar subquery
    Subquery(Box<Query>),

    /// Array constructor
    Array(Vec<Expr>),

    /// Element access (`x[1]`)
    Subscript { expr: Box<Expr>, index: Box<Expr> },

    /// Parenthesized expression
    Paren(Box<Expr>),

    /// A date/time format pattern in canonical tokens
    TimeFormat(TimeFormat),
}

impl Expr {
    pub fn column(name: impl Into<String>) -> Self {
        Expr::Column(ColumnRef::new(name))
    }

    pub fn number(value: impl ToString) -> Self {
        Expr::Literal(Literal::Number(value.to_string()))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Literal(Literal::String(value.into()))
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn cast(expr: Expr, data_type: DataType) -> Self {
        Expr::Cast {
            expr: Box::new(expr),
            data_type,
        }
    }

    /// Strip any number of enclosing parentheses
    pub fn unparenthesized(&self) -> &Expr {
        match self {
            Expr::Paren(inner) => inner.unparenthesized(),
            other => other,
        }
    }
}

/// Literal value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Literal {
    Null,
    Boolean(bool),
    /// Numeric literal, kept as written
    Number(String),
    /// String literal, already unescaped
    String(String),
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,

    // String
    Like,
    NotLike,
    ILike,
    NotILike,
    Concat,
}

impl BinaryOp {
    /// Binding strength, higher binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or => 1,
            BinaryOp::And => 2,
            BinaryOp::Eq
            | BinaryOp::NotEq
            | BinaryOp::Lt
            | BinaryOp::LtEq
            | BinaryOp::Gt
            | BinaryOp::GtEq
            | BinaryOp::Like
            | BinaryOp::NotLike
            | BinaryOp::ILike
            | BinaryOp::NotILike => 4,
            BinaryOp::Concat => 5,
            BinaryOp::Add | BinaryOp::Sub => 6,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => 7,
        }
    }

    /// SQL spelling of the operator
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Eq => "=",
            BinaryOp::NotEq => "<>",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
            BinaryOp::Like => "LIKE",
            BinaryOp::NotLike => "NOT LIKE",
            BinaryOp::ILike => "ILIKE",
            BinaryOp::NotILike => "NOT ILIKE",
            BinaryOp::Concat => "||",
        }
    }
}

/// Precedence of `NOT` as a prefix operator
pub const NOT_PRECEDENCE: u8 = 3;

/// Precedence of IS / IN / BETWEEN predicates
pub const PREDICATE_PRECEDENCE: u8 = 4;

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    Neg,
    Plus,
    Not,
}

/// Field of an EXTRACT expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateTimeField {
    Year,
    Quarter,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl DateTimeField {
    pub fn as_str(self) -> &'static str {
        match self {
            DateTimeField::Year => "YEAR",
            DateTimeField::Quarter => "QUARTER",
            DateTimeField::Month => "MONTH",
            DateTimeField::Week => "WEEK",
            DateTimeField::Day => "DAY",
            DateTimeField::Hour => "HOUR",
            DateTimeField::Minute => "MINUTE",
            DateTimeField::Second => "SECOND",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        let field = match word.to_ascii_uppercase().as_str() {
            "YEAR" => DateTimeField::Year,
            "QUARTER" => DateTimeField::Quarter,
            "MONTH" => DateTimeField::Month,
            "WEEK" => DateTimeField::Week,
            "DAY" => DateTimeField::Day,
            "HOUR" => DateTimeField::Hour,
            "MINUTE" => DateTimeField::Minute,
            "SECOND" => DateTimeField::Second,
            _ => return None,
        };
        Some(field)
    }
}
