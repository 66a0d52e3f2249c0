// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Function calls and lambdas
//!
//! A call whose name the source dialect aliases (`SORT_ARRAY`, `STRPTIME`,
//! `LIST_VALUE`) becomes the canonical builtin or array constructor right
//! here; every other name passes through as a named call.

use super::Parser;
use crate::error::{ParseError, ParseResult};
use crate::tokenizer::TokenKind;
use tracing::trace;
use unified_sql_ir::{Expr, Function, WindowSpec};

impl Parser {
    /// `name(args) [OVER (...)]`
    pub(super) fn parse_function(&mut self) -> ParseResult<Expr> {
        let Some(name) = self.next() else {
            return Err(self.unexpected("function name"));
        };
        self.expect_operator("(")?;
        let distinct = self.consume_keyword("DISTINCT");
        let args = if self.peek_operator(")") {
            Vec::new()
        } else {
            self.parse_comma_separated(Self::parse_expr)?
        };
        self.expect_operator(")")?;

        let over = if self.consume_keyword("OVER") {
            Some(self.parse_window_spec()?)
        } else {
            None
        };

        self.resolve_function(&name.text, name.offset, args, distinct, over)
    }

    fn resolve_function(
        &self,
        name: &str,
        offset: usize,
        args: Vec<Expr>,
        distinct: bool,
        over: Option<WindowSpec>,
    ) -> ParseResult<Expr> {
        let settings = self.settings();
        let Some(alias) = settings.functions.alias(name, args.len()) else {
            let mut function = Function::named(name, args);
            function.distinct = distinct;
            function.over = over;
            return Ok(function.into());
        };

        trace!(function = name, target = ?alias.target, "Resolved native function");
        let expr = alias
            .apply(args, settings.time_format)
            .map_err(|error| ParseError::InvalidFormat { offset, error })?;

        Ok(match expr {
            Expr::Function(mut function) => {
                function.distinct = distinct;
                function.over = over;
                Expr::Function(function)
            }
            other => other,
        })
    }

    /// `x -> body` or `(a, b) -> body` ahead
    pub(super) fn peek_lambda(&self) -> bool {
        let is_param = |n: usize| {
            self.peek_nth(n).is_some_and(|t| {
                matches!(
                    t.kind,
                    TokenKind::Identifier | TokenKind::QuotedIdentifier | TokenKind::Keyword
                )
            })
        };

        if is_param(0) {
            return self.peek_nth_operator(1, "->");
        }
        if !self.peek_operator("(") {
            return false;
        }
        let mut n = 1;
        loop {
            if !is_param(n) {
                return false;
            }
            n += 1;
            if self.peek_nth_operator(n, ",") {
                n += 1;
            } else if self.peek_nth_operator(n, ")") {
                return self.peek_nth_operator(n + 1, "->");
            } else {
                return false;
            }
        }
    }

    pub(super) fn parse_lambda(&mut self) -> ParseResult<Expr> {
        if !self.settings().supports_lambdas {
            return Err(self.unsupported("lambda"));
        }
        let params = if self.consume_operator("(") {
            let params = self.parse_comma_separated(Self::parse_any_word)?;
            self.expect_operator(")")?;
            params
        } else {
            vec![self.parse_any_word()?]
        };
        self.expect_operator("->")?;
        let body = self.parse_expr()?;
        Ok(Expr::Lambda {
            params,
            body: Box::new(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ParseContext;
    use unified_sql_dialect::{Dialect, get};
    use unified_sql_ir::{
        BinaryOp, BuiltinFunction, FunctionName, Ident, Literal, TimeFormat, UnaryOp,
    };

    fn parse(sql: &str, dialect: Dialect) -> ParseResult<Expr> {
        let mut parser = Parser::new(sql, ParseContext::new(get(dialect)))?;
        let expr = parser.parse_expr()?;
        parser.finish()?;
        Ok(expr)
    }

    fn builtin_of(expr: &Expr) -> Option<BuiltinFunction> {
        match expr {
            Expr::Function(function) => function.builtin_kind(),
            _ => None,
        }
    }

    #[test]
    fn test_named_function_passes_through() {
        let expr = parse("my_udf(a, 1)", Dialect::Spark).unwrap();
        let Expr::Function(function) = expr else {
            panic!("expected a call");
        };
        assert_eq!(function.name, FunctionName::Named("MY_UDF".to_string()));
        assert_eq!(function.args.len(), 2);
    }

    #[test]
    fn test_native_names_resolve_to_builtins() {
        assert_eq!(
            builtin_of(&parse("SORT_ARRAY(x)", Dialect::Hive).unwrap()),
            Some(BuiltinFunction::ArraySort)
        );
        assert_eq!(
            builtin_of(&parse("CARDINALITY(x)", Dialect::Presto).unwrap()),
            Some(BuiltinFunction::ArraySize)
        );
        assert_eq!(
            builtin_of(&parse("LEFT(x, 2)", Dialect::Postgres).unwrap()),
            Some(BuiltinFunction::Left)
        );
    }

    #[test]
    fn test_distinct_and_window_survive_resolution() {
        let expr = parse("COUNT(DISTINCT a) OVER (PARTITION BY b)", Dialect::Ansi).unwrap();
        let Expr::Function(function) = expr else {
            panic!("expected a call");
        };
        assert!(function.distinct);
        assert_eq!(
            function.over.map(|w| w.partition_by),
            Some(vec![Expr::column("b")])
        );
    }

    #[test]
    fn test_format_literal_is_canonicalized() {
        let expr = parse("DATE_FORMAT(x, 'yyyy-MM-dd')", Dialect::Hive).unwrap();
        let Expr::Function(function) = expr else {
            panic!("expected a call");
        };
        assert_eq!(function.builtin_kind(), Some(BuiltinFunction::TimeToStr));
        assert!(matches!(function.args[1], Expr::TimeFormat(TimeFormat { .. })));
    }

    #[test]
    fn test_bad_format_literal() {
        assert!(matches!(
            parse("STRPTIME(x, '%Q')", Dialect::DuckDB),
            Err(ParseError::InvalidFormat { offset: 0, .. })
        ));
    }

    #[test]
    fn test_lambda_params_keep_keyword_spelling() {
        let expr = parse(
            "ARRAY_SORT(x, (left, right) -> -1)",
            Dialect::Spark,
        )
        .unwrap();
        let Expr::Function(function) = expr else {
            panic!("expected a call");
        };
        assert_eq!(
            function.args[1],
            Expr::Lambda {
                params: vec![Ident::new("left"), Ident::new("right")],
                body: Box::new(Expr::UnaryOp {
                    op: UnaryOp::Neg,
                    expr: Box::new(Expr::Literal(Literal::Number("1".to_string()))),
                }),
            }
        );
    }

    #[test]
    fn test_single_param_lambda() {
        let expr = parse("TRANSFORM(xs, x -> x + 1)", Dialect::Spark).unwrap();
        let Expr::Function(function) = expr else {
            panic!("expected a call");
        };
        assert_eq!(
            function.args[1],
            Expr::Lambda {
                params: vec![Ident::new("x")],
                body: Box::new(Expr::binary(
                    Expr::column("x"),
                    BinaryOp::Add,
                    Expr::number(1)
                )),
            }
        );
    }

    #[test]
    fn test_lambda_unsupported() {
        assert!(matches!(
            parse("TRANSFORM(xs, x -> x)", Dialect::Postgres),
            Err(ParseError::UnsupportedClause { .. })
        ));
    }

    #[test]
    fn test_parenthesized_expression_is_not_a_lambda() {
        assert!(matches!(
            parse("(a) + 1", Dialect::Spark).unwrap(),
            Expr::BinaryOp { .. }
        ));
    }
}
