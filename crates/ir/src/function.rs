// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Function Calls
//!
//! Function calls name either a canonical [`BuiltinFunction`] or an arbitrary
//! named function. Builtins are the functions whose spelling or shape differs
//! between dialects; the function registry holds the per-dialect rule for
//! each. Anything else passes through unchanged as [`FunctionName::Named`].

use crate::expr::Expr;
use crate::query::WindowSpec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical builtin functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BuiltinFunction {
    /// Approximate distinct count
    ApproxDistinct,
    /// Number of elements of an array
    ArraySize,
    /// Sort an array, optionally with a comparator lambda
    ArraySort,
    /// Day of month of a date
    Day,
    /// `IF(cond, then, else)`
    If,
    /// Leftmost `n` characters
    Left,
    /// String length
    Length,
    /// Build a map from a key array and a value array
    MapFromArrays,
    /// Month of a date
    Month,
    /// Rightmost `n` characters
    Right,
    /// Parse a string into a timestamp using a format
    StrToTime,
    /// Substring by 1-based position and optional length
    Substring,
    /// Format a timestamp as a string
    TimeToStr,
    /// Parse a timestamp-or-date string into a date, optional format
    TsOrDsToDate,
    /// Year of a date
    Year,
}

impl BuiltinFunction {
    /// Canonical spelling, used when a dialect declares no rule
    pub fn canonical_name(self) -> &'static str {
        match self {
            BuiltinFunction::ApproxDistinct => "APPROX_COUNT_DISTINCT",
            BuiltinFunction::ArraySize => "CARDINALITY",
            BuiltinFunction::ArraySort => "ARRAY_SORT",
            BuiltinFunction::Day => "DAY",
            BuiltinFunction::If => "IF",
            BuiltinFunction::Left => "LEFT",
            BuiltinFunction::Length => "LENGTH",
            BuiltinFunction::MapFromArrays => "MAP_FROM_ARRAYS",
            BuiltinFunction::Month => "MONTH",
            BuiltinFunction::Right => "RIGHT",
            BuiltinFunction::StrToTime => "STR_TO_TIME",
            BuiltinFunction::Substring => "SUBSTRING",
            BuiltinFunction::TimeToStr => "TIME_TO_STR",
            BuiltinFunction::TsOrDsToDate => "TS_OR_DS_TO_DATE",
            BuiltinFunction::Year => "YEAR",
        }
    }
}

impl fmt::Display for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Name of a called function
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionName {
    Builtin(BuiltinFunction),
    /// Any other function, stored uppercased
    Named(String),
}

impl FunctionName {
    pub fn named(name: impl AsRef<str>) -> Self {
        FunctionName::Named(name.as_ref().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        match self {
            FunctionName::Builtin(builtin) => builtin.canonical_name(),
            FunctionName::Named(name) => name,
        }
    }
}

/// A function call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: FunctionName,
    pub args: Vec<Expr>,
    /// `COUNT(DISTINCT x)`
    pub distinct: bool,
    /// Window specification for `... OVER (...)`
    pub over: Option<WindowSpec>,
}

impl Function {
    pub fn builtin(builtin: BuiltinFunction, args: Vec<Expr>) -> Self {
        Self {
            name: FunctionName::Builtin(builtin),
            args,
            distinct: false,
            over: None,
        }
    }

    pub fn named(name: impl AsRef<str>, args: Vec<Expr>) -> Self {
        Self {
            name: FunctionName::named(name),
            args,
            distinct: false,
            over: None,
        }
    }

    pub fn builtin_kind(&self) -> Option<BuiltinFunction> {
        match self.name {
            FunctionName::Builtin(builtin) => Some(builtin),
            FunctionName::Named(_) => None,
        }
    }
}

impl From<Function> for Expr {
    fn from(function: Function) -> Self {
        Expr::Function(function)
    }
}
