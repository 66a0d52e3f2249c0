// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! BigQuery builtin function table
//!
//! BigQuery puts the format first in its parsing and formatting functions:
//! `PARSE_DATE('%Y', x)`. The aliases swap the arguments into the canonical
//! `(value, format)` order and the rules swap them back.

use crate::rewrite::{cast_to_date, date_part_to_extract, explicit_format, expect_args, format_first};
use crate::rule::{FunctionRule, RewriteError};
use crate::table::{FunctionAlias, FunctionTable};
use unified_sql_ir::{BuiltinFunction, Expr, Function};

/// BigQuery functions
pub fn table() -> FunctionTable {
    super::base::table()
        .with_alias("ARRAY_LENGTH", FunctionAlias::new(BuiltinFunction::ArraySize, 1, 1))
        .with_alias(
            "PARSE_TIMESTAMP",
            FunctionAlias::new(BuiltinFunction::StrToTime, 2, 2).with_format_first(),
        )
        .with_alias(
            "FORMAT_TIMESTAMP",
            FunctionAlias::new(BuiltinFunction::TimeToStr, 2, 2).with_format_first(),
        )
        .with_alias(
            "PARSE_DATE",
            FunctionAlias::new(BuiltinFunction::TsOrDsToDate, 2, 2).with_format_first(),
        )
        .with_rule(BuiltinFunction::ArraySort, FunctionRule::Unsupported)
        .with_rule(BuiltinFunction::ArraySize, FunctionRule::Rename("ARRAY_LENGTH"))
        .with_rule(BuiltinFunction::Left, FunctionRule::Rename("LEFT"))
        .with_rule(BuiltinFunction::Right, FunctionRule::Rename("RIGHT"))
        .with_rule(BuiltinFunction::MapFromArrays, FunctionRule::Unsupported)
        .with_rule(BuiltinFunction::TsOrDsToDate, FunctionRule::Rewrite(to_date))
        .with_rule(BuiltinFunction::StrToTime, FunctionRule::Rewrite(parse_timestamp))
        .with_rule(BuiltinFunction::TimeToStr, FunctionRule::Rewrite(format_timestamp))
        .with_rule(BuiltinFunction::Year, FunctionRule::Rewrite(date_part_to_extract))
        .with_rule(BuiltinFunction::Month, FunctionRule::Rewrite(date_part_to_extract))
        .with_rule(BuiltinFunction::Day, FunctionRule::Rewrite(date_part_to_extract))
}

fn to_date(function: &Function) -> Result<Expr, RewriteError> {
    expect_args(function, 1, 2)?;
    match explicit_format(function) {
        None => Ok(cast_to_date(function.args[0].clone())),
        Some(_) => format_first("PARSE_DATE", function),
    }
}

fn parse_timestamp(function: &Function) -> Result<Expr, RewriteError> {
    format_first("PARSE_TIMESTAMP", function)
}

fn format_timestamp(function: &Function) -> Result<Expr, RewriteError> {
    format_first("FORMAT_TIMESTAMP", function)
}
