// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Per-dialect translation rules for canonical builtins

use serde::Serialize;
use std::fmt;
use unified_sql_ir::{BuiltinFunction, Expr, Function};

/// Structural rewrite of a builtin call into target primitives
pub type RewriteFn = fn(&Function) -> Result<Expr, RewriteError>;

/// How a dialect expresses one canonical builtin
#[derive(Clone, Copy)]
pub enum FunctionRule {
    /// Same arguments under another name
    Rename(&'static str),
    /// Rename and drop the trailing arguments the target has no place for
    Truncate { name: &'static str, max_args: usize },
    /// Rebuild the call from other expressions
    Rewrite(RewriteFn),
    /// The target cannot express this builtin
    Unsupported,
}

impl fmt::Debug for FunctionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionRule::Rename(name) => f.debug_tuple("Rename").field(name).finish(),
            FunctionRule::Truncate { name, max_args } => f
                .debug_struct("Truncate")
                .field("name", name)
                .field("max_args", max_args)
                .finish(),
            FunctionRule::Rewrite(_) => f.write_str("Rewrite(..)"),
            FunctionRule::Unsupported => f.write_str("Unsupported"),
        }
    }
}

/// Errors raised while applying a [`FunctionRule`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
pub enum RewriteError {
    #[error("Function {function} is not supported")]
    Unsupported { function: BuiltinFunction },

    #[error("Function {function} cannot be expressed: {reason}")]
    Untranslatable {
        function: String,
        reason: String,
    },

    #[error("Function {function} expects {expected} arguments, found {found}")]
    Arity {
        function: String,
        expected: String,
        found: usize,
    },
}
