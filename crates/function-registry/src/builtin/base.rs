// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Base function table shared by every dialect

use crate::rewrite::{cast_to_date, explicit_format, expect_args, left_to_substring, right_to_substring};
use crate::rule::{FunctionRule, RewriteError};
use crate::table::{FunctionAlias, FunctionTable};
use unified_sql_ir::{BuiltinFunction, Expr, Function};

/// Canonical names every dialect understands, plus the base rules
pub fn table() -> FunctionTable {
    FunctionTable::new()
        // Aggregate functions
        .with_alias(
            "APPROX_COUNT_DISTINCT",
            FunctionAlias::new(BuiltinFunction::ApproxDistinct, 1, 2),
        )
        // Array functions
        .with_alias("ARRAY_SORT", FunctionAlias::new(BuiltinFunction::ArraySort, 1, 2))
        .with_alias("CARDINALITY", FunctionAlias::new(BuiltinFunction::ArraySize, 1, 1))
        .with_alias(
            "MAP_FROM_ARRAYS",
            FunctionAlias::new(BuiltinFunction::MapFromArrays, 2, 2),
        )
        // String functions
        .with_alias("LEFT", FunctionAlias::new(BuiltinFunction::Left, 2, 2))
        .with_alias("RIGHT", FunctionAlias::new(BuiltinFunction::Right, 2, 2))
        .with_alias("SUBSTRING", FunctionAlias::new(BuiltinFunction::Substring, 2, 3))
        .with_alias("SUBSTR", FunctionAlias::new(BuiltinFunction::Substring, 2, 3))
        .with_alias("LENGTH", FunctionAlias::new(BuiltinFunction::Length, 1, 1))
        // Date/Time functions
        .with_alias("YEAR", FunctionAlias::new(BuiltinFunction::Year, 1, 1))
        .with_alias("MONTH", FunctionAlias::new(BuiltinFunction::Month, 1, 1))
        .with_alias("DAY", FunctionAlias::new(BuiltinFunction::Day, 1, 1))
        // Conditional functions
        .with_alias("IF", FunctionAlias::new(BuiltinFunction::If, 2, 3))
        .with_rule(BuiltinFunction::Left, FunctionRule::Rewrite(left_to_substring))
        .with_rule(BuiltinFunction::Right, FunctionRule::Rewrite(right_to_substring))
        .with_rule(BuiltinFunction::TsOrDsToDate, FunctionRule::Rewrite(ts_or_ds_to_date))
        .with_rule(BuiltinFunction::StrToTime, FunctionRule::Unsupported)
        .with_rule(BuiltinFunction::TimeToStr, FunctionRule::Unsupported)
}

/// `CAST(x AS DATE)`; a custom format has no portable spelling
fn ts_or_ds_to_date(call: &Function) -> Result<Expr, RewriteError> {
    expect_args(call, 1, 2)?;
    if explicit_format(call).is_some() {
        return Err(RewriteError::Untranslatable {
            function: call.name.as_str().to_string(),
            reason: "date parsing with a custom format".to_string(),
        });
    }
    Ok(cast_to_date(call.args[0].clone()))
}
