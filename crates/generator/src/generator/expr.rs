// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Expression writing
//!
//! Parentheses are added from operator precedence, so trees built by
//! structural rewrites come out with the grouping they were built with.

use super::Generator;
use crate::error::GenerateResult;
use tracing::trace;
use unified_sql_dialect::ArrayLiteralStyle;
use unified_sql_function_registry::RewriteError;
use unified_sql_ir::{
    BinaryOp, DataType, Expr, Function, Literal, NOT_PRECEDENCE, PREDICATE_PRECEDENCE, UnaryOp,
};

/// Binding power of unary minus and plus
const UNARY_PRECEDENCE: u8 = 8;
/// Binding power of postfix subscripts
const POSTFIX_PRECEDENCE: u8 = 9;
/// Lambdas bind loosest of all
const LAMBDA_PRECEDENCE: u8 = 0;

fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::BinaryOp { op, .. } => op.precedence(),
        Expr::UnaryOp {
            op: UnaryOp::Not, ..
        } => NOT_PRECEDENCE,
        Expr::UnaryOp { .. } => UNARY_PRECEDENCE,
        Expr::Between { .. }
        | Expr::InList { .. }
        | Expr::InSubquery { .. }
        | Expr::IsNull { .. } => PREDICATE_PRECEDENCE,
        Expr::Lambda { .. } => LAMBDA_PRECEDENCE,
        _ => u8::MAX,
    }
}

impl Generator {
    pub fn write_expr(&mut self, expr: &Expr) -> GenerateResult<()> {
        match expr {
            Expr::Column(column) => {
                for qualifier in &column.qualifier {
                    self.write_ident(qualifier);
                    self.write_char('.');
                }
                self.write_ident(&column.column);
            }
            Expr::Literal(literal) => self.write_literal(literal),
            Expr::Wildcard => self.write_char('*'),
            Expr::BinaryOp { left, op, right } => self.write_binary(left, *op, right)?,
            Expr::UnaryOp { op, expr } => {
                let (prefix, min) = match op {
                    UnaryOp::Neg => ("-", UNARY_PRECEDENCE),
                    UnaryOp::Plus => ("+", UNARY_PRECEDENCE),
                    UnaryOp::Not => ("NOT ", NOT_PRECEDENCE),
                };
                self.write(prefix);
                let start = self.output.len();
                self.write_operand(expr, min)?;
                // `--` opens a line comment
                if *op == UnaryOp::Neg && self.output[start..].starts_with('-') {
                    self.output.insert(start, ' ');
                }
            }
            Expr::Function(call) => self.write_function(call)?,
            Expr::Lambda { params, body } => {
                if !self.settings.supports_lambdas {
                    return Err(self.unsupported("lambda"));
                }
                if let [param] = params.as_slice() {
                    self.write_ident(param);
                } else {
                    self.write_char('(');
                    for (i, param) in params.iter().enumerate() {
                        if i > 0 {
                            self.write(", ");
                        }
                        self.write_ident(param);
                    }
                    self.write_char(')');
                }
                self.write(" -> ");
                self.write_expr(body)?;
            }
            Expr::Case {
                operand,
                conditions,
                results,
                else_result,
            } => {
                self.write("CASE");
                if let Some(operand) = operand {
                    self.write_char(' ');
                    self.write_expr(operand)?;
                }
                for (condition, result) in conditions.iter().zip(results) {
                    self.write(" WHEN ");
                    self.write_expr(condition)?;
                    self.write(" THEN ");
                    self.write_expr(result)?;
                }
                if let Some(else_result) = else_result {
                    self.write(" ELSE ");
                    self.write_expr(else_result)?;
                }
                self.write(" END");
            }
            Expr::Cast { expr, data_type } => {
                self.write("CAST(");
                self.write_expr(expr)?;
                self.write(" AS ");
                self.write_data_type(data_type)?;
                self.write_char(')');
            }
            Expr::Extract { field, expr } => {
                self.write("EXTRACT(");
                self.write(field.as_str());
                self.write(" FROM ");
                self.write_expr(expr)?;
                self.write_char(')');
            }
            Expr::Between {
                expr,
                negated,
                low,
                high,
            } => {
                self.write_operand(expr, PREDICATE_PRECEDENCE + 1)?;
                self.write(if *negated { " NOT BETWEEN " } else { " BETWEEN " });
                self.write_operand(low, PREDICATE_PRECEDENCE + 1)?;
                self.write(" AND ");
                self.write_operand(high, PREDICATE_PRECEDENCE + 1)?;
            }
            Expr::InList {
                expr,
                list,
                negated,
            } => {
                self.write_operand(expr, PREDICATE_PRECEDENCE + 1)?;
                self.write(if *negated { " NOT IN (" } else { " IN (" });
                self.write_comma_separated(list, |g, item| g.write_expr(item))?;
                self.write_char(')');
            }
            Expr::InSubquery {
                expr,
                subquery,
                negated,
            } => {
                self.write_operand(expr, PREDICATE_PRECEDENCE + 1)?;
                self.write(if *negated { " NOT IN " } else { " IN " });
                self.write_nested_query(subquery)?;
            }
            Expr::IsNull { expr, negated } => {
                self.write_operand(expr, PREDICATE_PRECEDENCE + 1)?;
                self.write(if *negated { " IS NOT NULL" } else { " IS NULL" });
            }
            Expr::Exists(query) => {
                self.write("EXISTS ");
                self.write_nested_query(query)?;
            }
            Expr::Subquery(query) => self.write_nested_query(query)?,
            Expr::Array(elements) => self.write_array(elements)?,
            Expr::Subscript { expr, index } => {
                self.write_operand(expr, POSTFIX_PRECEDENCE)?;
                self.write_char('[');
                self.write_expr(index)?;
                self.write_char(']');
            }
            Expr::Paren(inner) => {
                self.write_char('(');
                self.write_expr(inner)?;
                self.write_char(')');
            }
            Expr::TimeFormat(format) => {
                let pattern = self
                    .settings
                    .time_format
                    .render(format)
                    .map_err(|err| self.unsupported(format!("time format ({err})")))?;
                self.write_string(&pattern);
            }
        }
        Ok(())
    }

    /// Write `expr`, parenthesized when it binds looser than `min`
    fn write_operand(&mut self, expr: &Expr, min: u8) -> GenerateResult<()> {
        if precedence(expr) < min {
            self.write_char('(');
            self.write_expr(expr)?;
            self.write_char(')');
            Ok(())
        } else {
            self.write_expr(expr)
        }
    }

    fn write_binary(&mut self, left: &Expr, op: BinaryOp, right: &Expr) -> GenerateResult<()> {
        if matches!(op, BinaryOp::ILike | BinaryOp::NotILike) && !self.settings.is_keyword("ILIKE")
        {
            return Err(self.unsupported("ILIKE"));
        }
        // Left-associative: an equal-precedence right operand keeps its parens
        let prec = op.precedence();
        self.write_operand(left, prec)?;
        self.write_char(' ');
        self.write(op.as_str());
        self.write_char(' ');
        self.write_operand(right, prec + 1)
    }

    fn write_literal(&mut self, literal: &Literal) {
        match literal {
            Literal::Null => self.write("NULL"),
            Literal::Boolean(true) => self.write("TRUE"),
            Literal::Boolean(false) => self.write("FALSE"),
            Literal::Number(text) => self.write(text),
            Literal::String(value) => self.write_string(value),
        }
    }

    fn write_array(&mut self, elements: &[Expr]) -> GenerateResult<()> {
        let (open, close) = match self.settings.array_literal {
            ArrayLiteralStyle::Bracketed => ("ARRAY[".to_string(), ']'),
            ArrayLiteralStyle::Bare => ("[".to_string(), ']'),
            ArrayLiteralStyle::Function(name) => (format!("{name}("), ')'),
        };
        self.write(&open);
        self.write_comma_separated(elements, |g, element| g.write_expr(element))?;
        self.write_char(close);
        Ok(())
    }

    pub(super) fn write_data_type(&mut self, data_type: &DataType) -> GenerateResult<()> {
        let text = self
            .settings
            .types
            .render(data_type)
            .map_err(|err| self.unsupported(err.to_string()))?;
        self.write(&text);
        Ok(())
    }

    /// Apply the target's rule for a builtin, then write what it produced
    fn write_function(&mut self, call: &Function) -> GenerateResult<()> {
        match self.settings.functions.rewrite(call) {
            Ok(None) => self.write_call(call),
            // A rule may hand back the same builtin with adjusted arguments
            Ok(Some(Expr::Function(rewritten)))
                if rewritten.builtin_kind().is_some() && rewritten.name == call.name =>
            {
                self.write_call(&rewritten)
            }
            Ok(Some(expr)) => {
                trace!(function = call.name.as_str(), "Applied function rule");
                self.write_expr(&expr)
            }
            Err(err) => Err(self.rewrite_failure(err)),
        }
    }

    fn rewrite_failure(&self, err: RewriteError) -> crate::GenerateError {
        match err {
            RewriteError::Unsupported { function } => self.unsupported(format!("function {function}")),
            other => self.unsupported(other.to_string()),
        }
    }

    /// `NAME([DISTINCT] args) [OVER (...)]` as written
    fn write_call(&mut self, call: &Function) -> GenerateResult<()> {
        self.write(call.name.as_str());
        self.write_char('(');
        if call.distinct {
            self.write("DISTINCT ");
        }
        self.write_comma_separated(&call.args, |g, arg| g.write_expr(arg))?;
        self.write_char(')');
        if let Some(window) = &call.over {
            self.write(" OVER ");
            self.write_window_spec(window)?;
        }
        Ok(())
    }
}
