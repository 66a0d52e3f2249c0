// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Hive builtin function table

use crate::rewrite::{call, explicit_format, expect_args};
use crate::rule::{FunctionRule, RewriteError};
use crate::table::{FunctionAlias, FunctionTable};
use unified_sql_ir::{BuiltinFunction, DataType, Expr, Function};

/// Hive functions
pub fn table() -> FunctionTable {
    super::base::table()
        // Array functions
        .with_alias("ARRAY", FunctionAlias::array_constructor())
        .with_alias("SORT_ARRAY", FunctionAlias::new(BuiltinFunction::ArraySort, 1, 1))
        .with_alias("SIZE", FunctionAlias::new(BuiltinFunction::ArraySize, 1, 1))
        // Date/Time functions
        .with_alias("TO_DATE", FunctionAlias::new(BuiltinFunction::TsOrDsToDate, 1, 2))
        .with_alias("TO_TIMESTAMP", FunctionAlias::new(BuiltinFunction::StrToTime, 2, 2))
        .with_alias("DATE_FORMAT", FunctionAlias::new(BuiltinFunction::TimeToStr, 2, 2))
        .with_alias(
            "YEAR",
            FunctionAlias::new(BuiltinFunction::Year, 1, 1).with_date_argument(),
        )
        .with_alias(
            "MONTH",
            FunctionAlias::new(BuiltinFunction::Month, 1, 1).with_date_argument(),
        )
        .with_alias(
            "DAY",
            FunctionAlias::new(BuiltinFunction::Day, 1, 1).with_date_argument(),
        )
        .with_rule(
            BuiltinFunction::ArraySort,
            FunctionRule::Truncate {
                name: "SORT_ARRAY",
                max_args: 1,
            },
        )
        .with_rule(BuiltinFunction::ArraySize, FunctionRule::Rename("SIZE"))
        .with_rule(BuiltinFunction::MapFromArrays, FunctionRule::Rename("MAP"))
        .with_rule(BuiltinFunction::TsOrDsToDate, FunctionRule::Rewrite(to_date))
        .with_rule(BuiltinFunction::StrToTime, FunctionRule::Rewrite(str_to_time))
        .with_rule(BuiltinFunction::TimeToStr, FunctionRule::Rename("DATE_FORMAT"))
}

/// `TO_DATE(x)`, keeping the format only when it is not the ISO layout
fn to_date(function: &Function) -> Result<Expr, RewriteError> {
    expect_args(function, 1, 2)?;
    let value = function.args[0].clone();
    Ok(match explicit_format(function) {
        None => call("TO_DATE", vec![value]),
        Some(format) => call("TO_DATE", vec![value, format.clone()]),
    })
}

/// `CAST(FROM_UNIXTIME(UNIX_TIMESTAMP(x, f)) AS TIMESTAMP)`
fn str_to_time(function: &Function) -> Result<Expr, RewriteError> {
    expect_args(function, 2, 2)?;
    let seconds = call("UNIX_TIMESTAMP", function.args.clone());
    Ok(Expr::cast(
        call("FROM_UNIXTIME", vec![seconds]),
        DataType::Timestamp,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_format::TimeVocabulary;
    use unified_sql_ir::TimeFormat;

    #[test]
    fn test_iso_format_dropped() {
        let iso = Function::builtin(
            BuiltinFunction::TsOrDsToDate,
            vec![Expr::column("x"), Expr::TimeFormat(TimeFormat::iso_date())],
        );
        assert_eq!(
            table().rewrite(&iso),
            Ok(Some(Function::named("TO_DATE", vec![Expr::column("x")]).into()))
        );
    }

    #[test]
    fn test_month_of_string_wraps_conversion() {
        let table = table();
        let alias = table.alias("month", 1).unwrap();
        let expr = alias
            .apply(vec![Expr::string("2021-03-01")], TimeVocabulary::Java)
            .unwrap();
        let expected: Expr = Function::builtin(
            BuiltinFunction::Month,
            vec![
                Function::builtin(
                    BuiltinFunction::TsOrDsToDate,
                    vec![Expr::string("2021-03-01")],
                )
                .into(),
            ],
        )
        .into();
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_array_function_is_constructor() {
        let table = table();
        let alias = table.alias("ARRAY", 3).unwrap();
        let expr = alias
            .apply(
                vec![Expr::number(0), Expr::number(1), Expr::number(2)],
                TimeVocabulary::Java,
            )
            .unwrap();
        assert_eq!(
            expr,
            Expr::Array(vec![Expr::number(0), Expr::number(1), Expr::number(2)])
        );
    }
}
