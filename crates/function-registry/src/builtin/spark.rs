// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Spark builtin function table
//!
//! Spark reads everything Hive reads, and natively supports `ARRAY_SORT`
//! with a comparator, `MAP_FROM_ARRAYS` and `TO_TIMESTAMP`.

use crate::rule::FunctionRule;
use crate::table::FunctionTable;
use unified_sql_ir::BuiltinFunction;

/// Spark functions
pub fn table() -> FunctionTable {
    super::hive::table()
        .without_rule(BuiltinFunction::ArraySort)
        .without_rule(BuiltinFunction::MapFromArrays)
        .with_rule(BuiltinFunction::StrToTime, FunctionRule::Rename("TO_TIMESTAMP"))
}
