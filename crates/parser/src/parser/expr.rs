// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Expressions, by precedence climbing
//!
//! ```text
//! OR < AND < NOT < comparison, IS, IN, LIKE, BETWEEN < || < + - < * / %
//!    < unary - < postfix :: and [ ]
//! ```

use super::Parser;
use crate::error::{ParseError, ParseResult};
use crate::tokenizer::TokenKind;
use unified_sql_dialect::keywords::is_clause_keyword;
use unified_sql_ir::{
    BinaryOp, ColumnRef, DataType, DateTimeField, Expr, Literal, NOT_PRECEDENCE,
    PREDICATE_PRECEDENCE, UnaryOp,
};

const UNARY_PRECEDENCE: u8 = 8;
const POSTFIX_PRECEDENCE: u8 = 9;

fn binary_operator(op: &str) -> Option<BinaryOp> {
    let op = match op {
        "+" => BinaryOp::Add,
        "-" => BinaryOp::Sub,
        "*" => BinaryOp::Mul,
        "/" => BinaryOp::Div,
        "%" => BinaryOp::Mod,
        "=" | "==" => BinaryOp::Eq,
        "<>" | "!=" => BinaryOp::NotEq,
        "<" => BinaryOp::Lt,
        "<=" => BinaryOp::LtEq,
        ">" => BinaryOp::Gt,
        ">=" => BinaryOp::GtEq,
        "||" => BinaryOp::Concat,
        _ => return None,
    };
    Some(op)
}

impl Parser {
    /// Parse a full expression
    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_subexpr(0)
    }

    /// Parse an expression whose operators bind tighter than `min_precedence`
    pub(super) fn parse_subexpr(&mut self, min_precedence: u8) -> ParseResult<Expr> {
        self.nested(|p| {
            let left = p.parse_prefix()?;
            let mut chained = 0;
            let result = p.parse_infix_chain(left, min_precedence, &mut chained);
            for _ in 0..chained {
                p.ctx.exit_recursive_context();
            }
            result
        })
    }

    /// Fold operators onto `expr` while they bind tighter than `min_precedence`
    ///
    /// Every operator nests the tree one level deeper on its left side, so
    /// each one counts against the depth limit until the chain ends.
    fn parse_infix_chain(
        &mut self,
        mut expr: Expr,
        min_precedence: u8,
        chained: &mut usize,
    ) -> ParseResult<Expr> {
        while let Some(precedence) = self.next_precedence() {
            if precedence <= min_precedence {
                break;
            }
            *chained += 1;
            let offset = self.offset();
            self.ctx.enter_recursive_context(offset)?;
            expr = self.parse_infix(expr, precedence)?;
        }
        Ok(expr)
    }

    fn next_precedence(&self) -> Option<u8> {
        let token = self.peek()?;
        match token.kind {
            TokenKind::Operator => match token.text.as_str() {
                "::" | "[" => Some(POSTFIX_PRECEDENCE),
                op => binary_operator(op).map(BinaryOp::precedence),
            },
            TokenKind::Keyword => {
                let word = token.text.to_ascii_uppercase();
                match word.as_str() {
                    "OR" => Some(BinaryOp::Or.precedence()),
                    "AND" => Some(BinaryOp::And.precedence()),
                    "IS" | "IN" | "BETWEEN" | "LIKE" | "ILIKE" => Some(PREDICATE_PRECEDENCE),
                    "NOT" => self
                        .peek_nth(1)
                        .filter(|next| {
                            ["IN", "BETWEEN", "LIKE", "ILIKE"]
                                .iter()
                                .any(|kw| next.is_keyword(kw))
                        })
                        .map(|_| PREDICATE_PRECEDENCE),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    fn parse_infix(&mut self, left: Expr, precedence: u8) -> ParseResult<Expr> {
        if self.peek_operator("::") && !self.settings().cast_shorthand {
            return Err(self.unsupported("'::' cast"));
        }
        let Some(token) = self.next() else {
            return Err(self.unexpected("operator"));
        };

        if token.kind == TokenKind::Operator {
            return match token.text.as_str() {
                "::" => {
                    let data_type = self.parse_data_type()?;
                    Ok(Expr::cast(left, data_type))
                }
                "[" => {
                    let index = self.parse_expr()?;
                    self.expect_operator("]")?;
                    Ok(Expr::Subscript {
                        expr: Box::new(left),
                        index: Box::new(index),
                    })
                }
                op => {
                    let op = binary_operator(op).ok_or_else(|| ParseError::UnexpectedToken {
                        offset: token.offset,
                        expected: "operator".to_string(),
                        found: token.to_string(),
                    })?;
                    let right = self.parse_subexpr(precedence)?;
                    Ok(Expr::binary(left, op, right))
                }
            };
        }

        let mut word = token.text.to_ascii_uppercase();
        let negated = word == "NOT";
        if negated {
            let Some(next) = self.next() else {
                return Err(self.unexpected("IN, BETWEEN or LIKE"));
            };
            word = next.text.to_ascii_uppercase();
        }

        match word.as_str() {
            "OR" | "AND" => {
                let op = if word == "OR" {
                    BinaryOp::Or
                } else {
                    BinaryOp::And
                };
                let right = self.parse_subexpr(precedence)?;
                Ok(Expr::binary(left, op, right))
            }
            "IS" => {
                let negated = self.consume_keyword("NOT");
                self.expect_keyword("NULL")?;
                Ok(Expr::IsNull {
                    expr: Box::new(left),
                    negated,
                })
            }
            "IN" => self.parse_in(left, negated),
            "BETWEEN" => {
                let low = self.parse_subexpr(PREDICATE_PRECEDENCE)?;
                self.expect_keyword("AND")?;
                let high = self.parse_subexpr(PREDICATE_PRECEDENCE)?;
                Ok(Expr::Between {
                    expr: Box::new(left),
                    negated,
                    low: Box::new(low),
                    high: Box::new(high),
                })
            }
            "LIKE" | "ILIKE" => {
                let op = match (word.as_str(), negated) {
                    ("LIKE", false) => BinaryOp::Like,
                    ("LIKE", true) => BinaryOp::NotLike,
                    (_, false) => BinaryOp::ILike,
                    (_, true) => BinaryOp::NotILike,
                };
                let right = self.parse_subexpr(PREDICATE_PRECEDENCE)?;
                Ok(Expr::binary(left, op, right))
            }
            _ => Err(ParseError::UnexpectedToken {
                offset: token.offset,
                expected: "operator".to_string(),
                found: token.to_string(),
            }),
        }
    }

    fn parse_in(&mut self, left: Expr, negated: bool) -> ParseResult<Expr> {
        self.expect_operator("(")?;
        let expr = if self.peek_keyword("SELECT") || self.peek_keyword("WITH") {
            Expr::InSubquery {
                expr: Box::new(left),
                subquery: Box::new(self.parse_query()?),
                negated,
            }
        } else {
            Expr::InList {
                expr: Box::new(left),
                list: self.parse_comma_separated(Self::parse_expr)?,
                negated,
            }
        };
        self.expect_operator(")")?;
        Ok(expr)
    }

    fn parse_prefix(&mut self) -> ParseResult<Expr> {
        if self.peek_lambda() {
            return self.parse_lambda();
        }
        let Some(token) = self.peek().cloned() else {
            return Err(self.unexpected("expression"));
        };

        match token.kind {
            TokenKind::Number => {
                self.index += 1;
                Ok(Expr::Literal(Literal::Number(token.text)))
            }
            TokenKind::String => {
                self.index += 1;
                Ok(Expr::Literal(Literal::String(token.text)))
            }
            TokenKind::Identifier => {
                // DATE '2020-01-01'
                let typed = match token.text.to_ascii_uppercase().as_str() {
                    "DATE" => Some(DataType::Date),
                    "TIMESTAMP" => Some(DataType::Timestamp),
                    _ => None,
                };
                if let Some(data_type) = typed
                    && self
                        .peek_nth(1)
                        .is_some_and(|next| next.kind == TokenKind::String)
                {
                    self.index += 1;
                    let value = self.expect_string("string")?;
                    return Ok(Expr::cast(Expr::string(value), data_type));
                }
                self.parse_word_expr()
            }
            TokenKind::QuotedIdentifier => self.parse_word_expr(),
            TokenKind::Keyword => self.parse_keyword_expr(),
            TokenKind::Operator => self.parse_operator_prefix(),
            TokenKind::Comment | TokenKind::Hint | TokenKind::EndOfStatement => {
                Err(self.unexpected("expression"))
            }
        }
    }

    fn parse_keyword_expr(&mut self) -> ParseResult<Expr> {
        let Some(token) = self.peek().cloned() else {
            return Err(self.unexpected("expression"));
        };
        let word = token.text.to_ascii_uppercase();
        match word.as_str() {
            "NULL" | "TRUE" | "FALSE" => {
                self.index += 1;
                Ok(Expr::Literal(match word.as_str() {
                    "NULL" => Literal::Null,
                    "TRUE" => Literal::Boolean(true),
                    _ => Literal::Boolean(false),
                }))
            }
            "NOT" => {
                self.index += 1;
                let expr = self.parse_subexpr(NOT_PRECEDENCE)?;
                Ok(Expr::UnaryOp {
                    op: UnaryOp::Not,
                    expr: Box::new(expr),
                })
            }
            "EXISTS" => {
                self.index += 1;
                self.expect_operator("(")?;
                let query = self.parse_query()?;
                self.expect_operator(")")?;
                Ok(Expr::Exists(Box::new(query)))
            }
            "CASE" => self.parse_case(),
            "CAST" => self.parse_cast(),
            "EXTRACT" => self.parse_extract(),
            "ARRAY" if self.peek_nth_operator(1, "[") => {
                self.index += 1;
                self.parse_bracket_array()
            }
            // LEFT(x, 2), ARRAY(1, 2)
            _ if self.peek_nth_operator(1, "(") => self.parse_function(),
            _ if is_clause_keyword(&word) => self.parse_word_expr(),
            _ => Err(self.unexpected("expression")),
        }
    }

    fn parse_operator_prefix(&mut self) -> ParseResult<Expr> {
        let Some(token) = self.peek().cloned() else {
            return Err(self.unexpected("expression"));
        };
        match token.text.as_str() {
            "*" => {
                self.index += 1;
                Ok(Expr::Wildcard)
            }
            "(" => {
                if self
                    .peek_nth(1)
                    .is_some_and(|t| t.is_keyword("SELECT") || t.is_keyword("WITH"))
                {
                    self.index += 1;
                    let query = self.parse_query()?;
                    self.expect_operator(")")?;
                    return Ok(Expr::Subquery(Box::new(query)));
                }
                self.index += 1;
                let expr = self.parse_expr()?;
                self.expect_operator(")")?;
                Ok(Expr::Paren(Box::new(expr)))
            }
            "-" | "+" => {
                self.index += 1;
                let op = if token.text == "-" {
                    UnaryOp::Neg
                } else {
                    UnaryOp::Plus
                };
                let expr = self.parse_subexpr(UNARY_PRECEDENCE)?;
                Ok(Expr::UnaryOp {
                    op,
                    expr: Box::new(expr),
                })
            }
            "[" if self.settings().bracket_array_literals => self.parse_bracket_array(),
            "[" => Err(self.unsupported("bracket array literal")),
            _ => Err(self.unexpected("expression")),
        }
    }

    /// A column path or a function call
    fn parse_word_expr(&mut self) -> ParseResult<Expr> {
        let quoted = self
            .peek()
            .is_some_and(|t| t.kind == TokenKind::QuotedIdentifier);
        if !quoted && self.peek_nth_operator(1, "(") {
            return self.parse_function();
        }

        let mut parts = vec![self.parse_identifier()?];
        while self.peek_operator(".") && !self.peek_nth_operator(1, "*") {
            self.index += 1;
            parts.push(self.parse_any_word()?);
        }
        let column = parts.pop().ok_or_else(|| self.unexpected("identifier"))?;
        Ok(Expr::Column(ColumnRef {
            qualifier: parts,
            column,
        }))
    }

    /// `[a, b]`, after an optional `ARRAY` keyword
    fn parse_bracket_array(&mut self) -> ParseResult<Expr> {
        self.expect_operator("[")?;
        let items = if self.peek_operator("]") {
            Vec::new()
        } else {
            self.parse_comma_separated(Self::parse_expr)?
        };
        self.expect_operator("]")?;
        Ok(Expr::Array(items))
    }

    fn parse_case(&mut self) -> ParseResult<Expr> {
        self.expect_keyword("CASE")?;
        let operand = if self.peek_keyword("WHEN") {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };

        let mut conditions = Vec::new();
        let mut results = Vec::new();
        while self.consume_keyword("WHEN") {
            conditions.push(self.parse_expr()?);
            self.expect_keyword("THEN")?;
            results.push(self.parse_expr()?);
        }
        if conditions.is_empty() {
            return Err(self.unexpected("WHEN"));
        }

        let else_result = if self.consume_keyword("ELSE") {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_keyword("END")?;

        Ok(Expr::Case {
            operand,
            conditions,
            results,
            else_result,
        })
    }

    fn parse_cast(&mut self) -> ParseResult<Expr> {
        self.expect_keyword("CAST")?;
        self.expect_operator("(")?;
        let expr = self.parse_expr()?;
        self.expect_keyword("AS")?;
        let data_type = self.parse_data_type()?;
        self.expect_operator(")")?;
        Ok(Expr::cast(expr, data_type))
    }

    fn parse_extract(&mut self) -> ParseResult<Expr> {
        self.expect_keyword("EXTRACT")?;
        self.expect_operator("(")?;
        let field = self
            .peek()
            .filter(|t| matches!(t.kind, TokenKind::Identifier | TokenKind::Keyword))
            .and_then(|t| DateTimeField::from_keyword(&t.text))
            .ok_or_else(|| self.unexpected("date/time field"))?;
        self.index += 1;
        self.expect_keyword("FROM")?;
        let expr = self.parse_expr()?;
        self.expect_operator(")")?;
        Ok(Expr::Extract {
            field,
            expr: Box::new(expr),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ParseContext;
    use unified_sql_dialect::{Dialect, get};
    use unified_sql_ir::Ident;

    fn parse(sql: &str, dialect: Dialect) -> ParseResult<Expr> {
        let mut parser = Parser::new(sql, ParseContext::new(get(dialect)))?;
        let expr = parser.parse_expr()?;
        parser.finish()?;
        Ok(expr)
    }

    fn col(name: &str) -> Expr {
        Expr::column(name)
    }

    #[test]
    fn test_arithmetic_precedence() {
        let expr = parse("a + b * c", Dialect::Ansi).unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                col("a"),
                BinaryOp::Add,
                Expr::binary(col("b"), BinaryOp::Mul, col("c"))
            )
        );
    }

    #[test]
    fn test_left_associative() {
        let expr = parse("a - b - c", Dialect::Ansi).unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                Expr::binary(col("a"), BinaryOp::Sub, col("b")),
                BinaryOp::Sub,
                col("c")
            )
        );
    }

    #[test]
    fn test_not_binds_looser_than_comparison() {
        let expr = parse("NOT a = 1 AND b", Dialect::Ansi).unwrap();
        let Expr::BinaryOp { left, op, .. } = expr else {
            panic!("expected AND");
        };
        assert_eq!(op, BinaryOp::And);
        assert!(matches!(*left, Expr::UnaryOp { op: UnaryOp::Not, .. }));
    }

    #[test]
    fn test_predicates() {
        assert!(matches!(
            parse("x NOT BETWEEN 1 AND 2 OR y", Dialect::Ansi).unwrap(),
            Expr::BinaryOp {
                op: BinaryOp::Or,
                ..
            }
        ));
        assert!(matches!(
            parse("x IS NOT NULL", Dialect::Ansi).unwrap(),
            Expr::IsNull { negated: true, .. }
        ));
        assert!(matches!(
            parse("x NOT IN (1, 2)", Dialect::Ansi).unwrap(),
            Expr::InList { negated: true, .. }
        ));
        assert!(matches!(
            parse("x IN (SELECT 1)", Dialect::Ansi).unwrap(),
            Expr::InSubquery { negated: false, .. }
        ));
    }

    #[test]
    fn test_ilike_is_not_hive() {
        assert!(matches!(
            parse("a ILIKE 'x%'", Dialect::Postgres).unwrap(),
            Expr::BinaryOp {
                op: BinaryOp::ILike,
                ..
            }
        ));
        assert!(parse("a ILIKE 'x%'", Dialect::Hive).is_err());
    }

    #[test]
    fn test_cast_shorthand_is_gated() {
        assert_eq!(
            parse("x::INT", Dialect::Postgres).unwrap(),
            Expr::cast(col("x"), DataType::Int)
        );
        assert!(matches!(
            parse("x::INT", Dialect::Spark),
            Err(ParseError::UnsupportedClause { .. })
        ));
    }

    #[test]
    fn test_array_literals() {
        let expected = Expr::Array(vec![Expr::number(1), Expr::number(2)]);
        assert_eq!(parse("ARRAY[1, 2]", Dialect::Presto).unwrap(), expected);
        assert_eq!(parse("[1, 2]", Dialect::BigQuery).unwrap(), expected);
        assert_eq!(parse("ARRAY(1, 2)", Dialect::Spark).unwrap(), expected);
        assert_eq!(parse("LIST_VALUE(1, 2)", Dialect::DuckDB).unwrap(), expected);
        assert!(matches!(
            parse("[1, 2]", Dialect::Presto),
            Err(ParseError::UnsupportedClause { .. })
        ));
    }

    #[test]
    fn test_subscript_and_qualified_column() {
        let expr = parse("t.arr[1]", Dialect::Presto).unwrap();
        assert_eq!(
            expr,
            Expr::Subscript {
                expr: Box::new(Expr::Column(ColumnRef {
                    qualifier: vec![Ident::new("t")],
                    column: Ident::new("arr"),
                })),
                index: Box::new(Expr::number(1)),
            }
        );
    }

    #[test]
    fn test_case_and_extract() {
        assert!(matches!(
            parse("CASE WHEN a THEN 1 ELSE 2 END", Dialect::Ansi).unwrap(),
            Expr::Case { operand: None, .. }
        ));
        assert_eq!(
            parse("EXTRACT(year FROM d)", Dialect::Ansi).unwrap(),
            Expr::Extract {
                field: DateTimeField::Year,
                expr: Box::new(col("d")),
            }
        );
        assert!(parse("CASE a END", Dialect::Ansi).is_err());
    }

    #[test]
    fn test_typed_literal() {
        assert_eq!(
            parse("DATE '2021-03-01'", Dialect::Ansi).unwrap(),
            Expr::cast(Expr::string("2021-03-01"), DataType::Date)
        );
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(
            parse("-1", Dialect::Ansi).unwrap(),
            Expr::UnaryOp {
                op: UnaryOp::Neg,
                expr: Box::new(Expr::number(1)),
            }
        );
    }

    #[test]
    fn test_recursion_guard() {
        let sql = format!("{}1{}", "(".repeat(200), ")".repeat(200));
        assert!(matches!(
            parse(&sql, Dialect::Ansi),
            Err(ParseError::RecursionLimitExceeded { limit: 100, .. })
        ));

        let sql = format!("{}1{}", "(".repeat(20), ")".repeat(20));
        assert!(parse(&sql, Dialect::Ansi).is_ok());
    }

    #[test]
    fn test_missing_operand() {
        assert_eq!(
            parse("1 +", Dialect::Ansi),
            Err(ParseError::UnexpectedEnd {
                expected: "expression".to_string(),
            })
        );
    }
}
