// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! PostgreSQL builtin function table

use crate::rewrite::{
    call, cast_to_date, date_part_to_extract, explicit_format, expect_args, if_to_case,
};
use crate::rule::{FunctionRule, RewriteError};
use crate::table::{FunctionAlias, FunctionTable};
use unified_sql_ir::{BuiltinFunction, Expr, Function};

/// PostgreSQL functions
pub fn table() -> FunctionTable {
    super::base::table()
        .with_alias("TO_DATE", FunctionAlias::new(BuiltinFunction::TsOrDsToDate, 2, 2))
        .with_alias("TO_TIMESTAMP", FunctionAlias::new(BuiltinFunction::StrToTime, 2, 2))
        .with_alias("TO_CHAR", FunctionAlias::new(BuiltinFunction::TimeToStr, 2, 2))
        .with_rule(BuiltinFunction::ApproxDistinct, FunctionRule::Unsupported)
        .with_rule(BuiltinFunction::ArraySort, FunctionRule::Unsupported)
        .with_rule(BuiltinFunction::MapFromArrays, FunctionRule::Unsupported)
        .with_rule(BuiltinFunction::Left, FunctionRule::Rename("LEFT"))
        .with_rule(BuiltinFunction::Right, FunctionRule::Rename("RIGHT"))
        .with_rule(BuiltinFunction::TsOrDsToDate, FunctionRule::Rewrite(to_date))
        .with_rule(BuiltinFunction::StrToTime, FunctionRule::Rename("TO_TIMESTAMP"))
        .with_rule(BuiltinFunction::TimeToStr, FunctionRule::Rename("TO_CHAR"))
        .with_rule(BuiltinFunction::Year, FunctionRule::Rewrite(date_part_to_extract))
        .with_rule(BuiltinFunction::Month, FunctionRule::Rewrite(date_part_to_extract))
        .with_rule(BuiltinFunction::Day, FunctionRule::Rewrite(date_part_to_extract))
        .with_rule(BuiltinFunction::If, FunctionRule::Rewrite(if_to_case))
}

fn to_date(function: &Function) -> Result<Expr, RewriteError> {
    expect_args(function, 1, 2)?;
    let value = function.args[0].clone();
    Ok(match explicit_format(function) {
        None => cast_to_date(value),
        Some(format) => call("TO_DATE", vec![value, format.clone()]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_if_becomes_case() {
        let call = Function::builtin(
            BuiltinFunction::If,
            vec![Expr::column("c"), Expr::number(1), Expr::number(2)],
        );
        assert!(matches!(
            table().rewrite(&call),
            Ok(Some(Expr::Case { .. }))
        ));
    }

    #[test]
    fn test_unsupported_builtins() {
        for builtin in [
            BuiltinFunction::ApproxDistinct,
            BuiltinFunction::ArraySort,
            BuiltinFunction::MapFromArrays,
        ] {
            let call = Function::builtin(builtin, vec![Expr::column("x")]);
            assert_eq!(
                table().rewrite(&call),
                Err(RewriteError::Unsupported { function: builtin })
            );
        }
    }
}
