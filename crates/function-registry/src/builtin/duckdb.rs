// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! DuckDB builtin function table

use crate::rewrite::{builtin, cast_to_date, explicit_format, expect_args};
use crate::rule::{FunctionRule, RewriteError};
use crate::table::{FunctionAlias, FunctionTable};
use unified_sql_ir::{BuiltinFunction, Expr, Function};

/// DuckDB functions
pub fn table() -> FunctionTable {
    super::base::table()
        .with_alias("LIST_VALUE", FunctionAlias::array_constructor())
        .with_alias("ARRAY_LENGTH", FunctionAlias::new(BuiltinFunction::ArraySize, 1, 1))
        .with_alias("MAP", FunctionAlias::new(BuiltinFunction::MapFromArrays, 2, 2))
        .with_alias("STRPTIME", FunctionAlias::new(BuiltinFunction::StrToTime, 2, 2))
        .with_alias("STRFTIME", FunctionAlias::new(BuiltinFunction::TimeToStr, 2, 2))
        // DuckDB's ARRAY_SORT takes a sort order, not a comparator
        .with_rule(
            BuiltinFunction::ArraySort,
            FunctionRule::Truncate {
                name: "ARRAY_SORT",
                max_args: 1,
            },
        )
        .with_rule(BuiltinFunction::ArraySize, FunctionRule::Rename("ARRAY_LENGTH"))
        .with_rule(BuiltinFunction::MapFromArrays, FunctionRule::Rename("MAP"))
        .with_rule(BuiltinFunction::TsOrDsToDate, FunctionRule::Rewrite(to_date))
        .with_rule(BuiltinFunction::StrToTime, FunctionRule::Rename("STRPTIME"))
        .with_rule(BuiltinFunction::TimeToStr, FunctionRule::Rename("STRFTIME"))
}

fn to_date(function: &Function) -> Result<Expr, RewriteError> {
    expect_args(function, 1, 2)?;
    let value = function.args[0].clone();
    Ok(match explicit_format(function) {
        None => cast_to_date(value),
        Some(format) => cast_to_date(builtin(
            BuiltinFunction::StrToTime,
            vec![value, format.clone()],
        )),
    })
}
