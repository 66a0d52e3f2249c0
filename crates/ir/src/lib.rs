// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Unified SQL - Intermediate Representation
//!
//! This crate provides the canonical syntax tree shared by every stage of the
//! transpiler. The IR is designed to:
//! - Be dialect-agnostic: a statement written for Spark and the same statement
//!   written for Presto lower to structurally equal trees
//! - Use canonical names for types and builtin functions, so dialect spelling
//!   lives in the dialect tables and never in the tree
//! - Be an owned, acyclic tree (children are boxed, there are no parent links)
//!
//! The tree never records which dialect it was parsed from.

pub mod ddl;
pub mod dialect;
pub mod expr;
pub mod function;
pub mod query;
pub mod statement;
pub mod time_format;
pub mod types;

// Re-export commonly used types
pub use ddl::{
    ColumnDef, CreateTable, DropTable, Insert, PartitionItem, TableOptions, TableProperty,
};
pub use dialect::{Dialect, UnknownDialect};
pub use expr::{
    BinaryOp, ColumnRef, DateTimeField, Expr, Ident, Literal, NOT_PRECEDENCE, ObjectName,
    PREDICATE_PRECEDENCE, UnaryOp,
};
pub use function::{BuiltinFunction, Function, FunctionName};
pub use query::{
    CommonTableExpr, Hint, Join, JoinCondition, JoinType, NullsOrder, OrderBy, Query,
    SelectItem, SelectStatement, SetOp, SortDirection, TableFactor, TableRef, WindowFrame,
    WindowFrameBound, WindowFrameUnits, WindowSpec,
};
pub use statement::Statement;
pub use time_format::{TimeFormat, TimeFormatToken};
pub use types::{DataType, StructField, TypeKind};
