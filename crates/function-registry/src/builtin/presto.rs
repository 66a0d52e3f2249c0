// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Presto builtin function table, shared with Trino

use crate::rewrite::{builtin, call, cast_to_date, explicit_format, expect_args};
use crate::rule::{FunctionRule, RewriteError};
use crate::table::{FunctionAlias, FunctionTable};
use unified_sql_ir::{BuiltinFunction, DataType, Expr, Function};

/// Presto functions
pub fn table() -> FunctionTable {
    super::base::table()
        .with_alias(
            "APPROX_DISTINCT",
            FunctionAlias::new(BuiltinFunction::ApproxDistinct, 1, 2),
        )
        .with_alias("DATE_PARSE", FunctionAlias::new(BuiltinFunction::StrToTime, 2, 2))
        .with_alias("DATE_FORMAT", FunctionAlias::new(BuiltinFunction::TimeToStr, 2, 2))
        .with_alias("MAP", FunctionAlias::new(BuiltinFunction::MapFromArrays, 2, 2))
        .with_rule(
            BuiltinFunction::ApproxDistinct,
            FunctionRule::Rename("APPROX_DISTINCT"),
        )
        .with_rule(BuiltinFunction::MapFromArrays, FunctionRule::Rename("MAP"))
        .with_rule(BuiltinFunction::TsOrDsToDate, FunctionRule::Rewrite(to_date))
        .with_rule(BuiltinFunction::StrToTime, FunctionRule::Rename("DATE_PARSE"))
        .with_rule(BuiltinFunction::TimeToStr, FunctionRule::Rename("DATE_FORMAT"))
}

/// Date strings may carry a time part Presto refuses to cast, so the ISO
/// case slices the first ten characters off the string form
fn to_date(function: &Function) -> Result<Expr, RewriteError> {
    expect_args(function, 1, 2)?;
    let value = function.args[0].clone();
    Ok(match explicit_format(function) {
        None => {
            let text = Expr::cast(value, DataType::Varchar(None));
            cast_to_date(call(
                "SUBSTR",
                vec![text, Expr::number(1), Expr::number(10)],
            ))
        }
        Some(format) => cast_to_date(builtin(
            BuiltinFunction::StrToTime,
            vec![value, format.clone()],
        )),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date_slices_string() {
        let call = Function::builtin(BuiltinFunction::TsOrDsToDate, vec![Expr::column("x")]);
        let Some(Expr::Cast { expr, data_type }) = table().rewrite(&call).unwrap() else {
            panic!("expected cast");
        };
        assert_eq!(data_type, DataType::Date);
        assert!(matches!(*expr, Expr::Function(ref f) if f.name.as_str() == "SUBSTR"));
    }

    #[test]
    fn test_approx_distinct_rename() {
        let call = Function::builtin(BuiltinFunction::ApproxDistinct, vec![Expr::column("a")]);
        assert_eq!(
            table().rewrite(&call),
            Ok(Some(
                Function::named("APPROX_DISTINCT", vec![Expr::column("a")]).into()
            ))
        );
    }
}
