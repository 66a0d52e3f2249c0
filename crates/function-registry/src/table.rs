// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

use crate::rule::{FunctionRule, RewriteError};
use crate::time_format::{TimeFormatError, TimeVocabulary};
use std::collections::HashMap;
use tracing::warn;
use unified_sql_ir::{BuiltinFunction, Expr, Function, FunctionName, Literal};

/// What a native function name parses into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasTarget {
    /// A canonical builtin call
    Builtin(BuiltinFunction),
    /// An array constructor (`LIST_VALUE(1, 2)` is `[1, 2]`)
    ArrayConstructor,
}

/// A native function name recognized while parsing one dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionAlias {
    pub target: AliasTarget,
    pub min_args: usize,
    /// `None` accepts any number of arguments
    pub max_args: Option<usize>,
    /// The native call takes the format before the value (`PARSE_DATE(f, x)`)
    pub format_first: bool,
    /// Date part functions that accept strings and dates alike
    pub wrap_date_argument: bool,
}

impl FunctionAlias {
    pub fn new(builtin: BuiltinFunction, min_args: usize, max_args: usize) -> Self {
        Self {
            target: AliasTarget::Builtin(builtin),
            min_args,
            max_args: Some(max_args),
            format_first: false,
            wrap_date_argument: false,
        }
    }

    pub fn array_constructor() -> Self {
        Self {
            target: AliasTarget::ArrayConstructor,
            min_args: 0,
            max_args: None,
            format_first: false,
            wrap_date_argument: false,
        }
    }

    pub fn with_format_first(mut self) -> Self {
        self.format_first = true;
        self
    }

    pub fn with_date_argument(mut self) -> Self {
        self.wrap_date_argument = true;
        self
    }

    pub fn accepts(&self, arity: usize) -> bool {
        arity >= self.min_args && self.max_args.is_none_or(|max| arity <= max)
    }

    /// Build the canonical expression for a native call
    ///
    /// Reorders format-first arguments, parses a string-literal format with
    /// the source `vocabulary`, and wraps date-part arguments.
    pub fn apply(
        &self,
        mut args: Vec<Expr>,
        vocabulary: TimeVocabulary,
    ) -> Result<Expr, TimeFormatError> {
        let builtin = match self.target {
            AliasTarget::ArrayConstructor => return Ok(Expr::Array(args)),
            AliasTarget::Builtin(builtin) => builtin,
        };

        if self.format_first && args.len() >= 2 {
            args.swap(0, 1);
        }

        if let Some(index) = format_argument(builtin)
            && let Some(arg) = args.get_mut(index)
            && let Expr::Literal(Literal::String(pattern)) = arg
        {
            *arg = Expr::TimeFormat(vocabulary.parse(pattern)?);
        }

        if self.wrap_date_argument
            && let Some(arg) = args.first_mut()
            && !is_date_conversion(arg)
        {
            let inner = std::mem::replace(arg, Expr::Literal(Literal::Null));
            *arg = Function::builtin(BuiltinFunction::TsOrDsToDate, vec![inner]).into();
        }

        Ok(Function::builtin(builtin, args).into())
    }
}

/// Index of the format argument of a canonical builtin
pub fn format_argument(builtin: BuiltinFunction) -> Option<usize> {
    match builtin {
        BuiltinFunction::StrToTime | BuiltinFunction::TimeToStr | BuiltinFunction::TsOrDsToDate => {
            Some(1)
        }
        _ => None,
    }
}

fn is_date_conversion(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Function(Function {
            name: FunctionName::Builtin(BuiltinFunction::TsOrDsToDate),
            ..
        })
    )
}

/// Function rules and native aliases of one dialect
///
/// Tables are composed: every dialect starts from the base table and
/// overrides rules and aliases.
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    /// Rules keyed by canonical builtin
    rules: HashMap<BuiltinFunction, FunctionRule>,
    /// Native aliases keyed by uppercased name
    aliases: HashMap<&'static str, Vec<FunctionAlias>>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, builtin: BuiltinFunction, rule: FunctionRule) -> Self {
        self.rules.insert(builtin, rule);
        self
    }

    /// Drop an inherited rule so the canonical spelling applies again
    pub fn without_rule(mut self, builtin: BuiltinFunction) -> Self {
        self.rules.remove(&builtin);
        self
    }

    /// Register a native name; a later alias of the same name shadows an
    /// earlier one for the arities it accepts
    pub fn with_alias(mut self, name: &'static str, alias: FunctionAlias) -> Self {
        self.aliases.entry(name).or_default().insert(0, alias);
        self
    }

    pub fn rule(&self, builtin: BuiltinFunction) -> Option<&FunctionRule> {
        self.rules.get(&builtin)
    }

    /// Lookup the alias of a native name (case-insensitive) for an arity
    pub fn alias(&self, name: &str, arity: usize) -> Option<&FunctionAlias> {
        self.aliases
            .get(name.to_ascii_uppercase().as_str())?
            .iter()
            .find(|alias| alias.accepts(arity))
    }

    /// Translate a canonical call for this dialect
    ///
    /// Returns `Ok(None)` when the call renders as written: named functions
    /// and builtins without a rule.
    pub fn rewrite(&self, call: &Function) -> Result<Option<Expr>, RewriteError> {
        let Some(builtin) = call.builtin_kind() else {
            return Ok(None);
        };
        let Some(rule) = self.rules.get(&builtin) else {
            return Ok(None);
        };

        match rule {
            FunctionRule::Rename(name) => Ok(Some(renamed(call, name, call.args.clone()))),
            FunctionRule::Truncate { name, max_args } => {
                let mut args = call.args.clone();
                if args.len() > *max_args {
                    let dropped = args.split_off(*max_args);
                    warn!(
                        function = %builtin,
                        replacement = name,
                        dropped = dropped.len(),
                        "Dropping arguments the target function cannot take"
                    );
                }
                Ok(Some(renamed(call, name, args)))
            }
            FunctionRule::Rewrite(rewrite) => rewrite(call).map(Some),
            FunctionRule::Unsupported => Err(RewriteError::Unsupported { function: builtin }),
        }
    }
}

fn renamed(call: &Function, name: &str, args: Vec<Expr>) -> Expr {
    Expr::Function(Function {
        name: FunctionName::named(name),
        args,
        distinct: call.distinct,
        over: call.over.clone(),
    })
}
