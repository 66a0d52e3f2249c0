// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Structural Rewrites
//!
//! Rewrites shared by several dialects, plus the argument helpers the
//! dialect-specific rewrites in [`crate::builtin`] are written with.
//!
//! ```text
//! LEFT(x, n)   -> SUBSTRING(x, 1, n)
//! RIGHT(x, n)  -> SUBSTRING(x, LENGTH(x) - n + 1, n)
//! YEAR(x)      -> EXTRACT(YEAR FROM x)
//! IF(c, a, b)  -> CASE WHEN c THEN a ELSE b END
//! ```
//!
//! Rewrites emit canonical builtins where one exists (`SUBSTRING`, `LENGTH`)
//! so the target dialect's own rules still apply to the result.

use crate::rule::RewriteError;
use tracing::warn;
use unified_sql_ir::{
    BinaryOp, BuiltinFunction, DataType, DateTimeField, Expr, Function, FunctionName,
};

/// Check the argument count of a builtin call
pub fn expect_args(call: &Function, min: usize, max: usize) -> Result<(), RewriteError> {
    let found = call.args.len();
    if found < min || found > max {
        let expected = if min == max {
            min.to_string()
        } else {
            format!("{min} to {max}")
        };
        return Err(RewriteError::Arity {
            function: function_name(call),
            expected,
            found,
        });
    }
    Ok(())
}

fn function_name(call: &Function) -> String {
    call.name.as_str().to_string()
}

/// The format argument of a date conversion, `None` when it is absent or
/// the ISO date layout every engine casts implicitly
pub fn explicit_format(call: &Function) -> Option<&Expr> {
    match call.args.get(1) {
        None => None,
        Some(Expr::TimeFormat(format)) if format.is_iso_date() => None,
        Some(format) => {
            if !matches!(format, Expr::TimeFormat(_)) {
                warn!(
                    function = call.name.as_str(),
                    "Format argument is not a string literal, passing it through untranslated"
                );
            }
            Some(format)
        }
    }
}

/// A named function call
pub fn call(name: &str, args: Vec<Expr>) -> Expr {
    Function::named(name, args).into()
}

/// A canonical builtin call
pub fn builtin(builtin: BuiltinFunction, args: Vec<Expr>) -> Expr {
    Function::builtin(builtin, args).into()
}

pub fn cast_to_date(expr: Expr) -> Expr {
    Expr::cast(expr, DataType::Date)
}

/// `LEFT(x, n)` as `SUBSTRING(x, 1, n)`
pub fn left_to_substring(call: &Function) -> Result<Expr, RewriteError> {
    expect_args(call, 2, 2)?;
    let (value, length) = (call.args[0].clone(), call.args[1].clone());
    Ok(builtin(
        BuiltinFunction::Substring,
        vec![value, Expr::number(1), length],
    ))
}

/// `RIGHT(x, n)` as `SUBSTRING(x, LENGTH(x) - n + 1, n)`
pub fn right_to_substring(call: &Function) -> Result<Expr, RewriteError> {
    expect_args(call, 2, 2)?;
    let (value, length) = (call.args[0].clone(), call.args[1].clone());
    let start = Expr::binary(
        Expr::binary(
            builtin(BuiltinFunction::Length, vec![value.clone()]),
            BinaryOp::Sub,
            length.clone(),
        ),
        BinaryOp::Add,
        Expr::number(1),
    );
    Ok(builtin(BuiltinFunction::Substring, vec![value, start, length]))
}

/// `YEAR(x)`, `MONTH(x)`, `DAY(x)` as `EXTRACT(... FROM x)`
pub fn date_part_to_extract(call: &Function) -> Result<Expr, RewriteError> {
    expect_args(call, 1, 1)?;
    let field = match call.name {
        FunctionName::Builtin(BuiltinFunction::Year) => DateTimeField::Year,
        FunctionName::Builtin(BuiltinFunction::Month) => DateTimeField::Month,
        FunctionName::Builtin(BuiltinFunction::Day) => DateTimeField::Day,
        _ => {
            return Err(RewriteError::Untranslatable {
                function: function_name(call),
                reason: "not a date part function".to_string(),
            });
        }
    };
    Ok(Expr::Extract {
        field,
        expr: Box::new(call.args[0].clone()),
    })
}

/// `IF(c, a[, b])` as a searched CASE
pub fn if_to_case(call: &Function) -> Result<Expr, RewriteError> {
    expect_args(call, 2, 3)?;
    Ok(Expr::Case {
        operand: None,
        conditions: vec![call.args[0].clone()],
        results: vec![call.args[1].clone()],
        else_result: call.args.get(2).cloned().map(Box::new),
    })
}

/// Rebuild a `(value, format)` call as `name(format, value)`
pub fn format_first(name: &str, call: &Function) -> Result<Expr, RewriteError> {
    expect_args(call, 2, 2)?;
    Ok(self::call(
        name,
        vec![call.args[1].clone(), call.args[0].clone()],
    ))
}
