// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Queries: CTEs, set operations, SELECT, FROM/JOIN, ORDER BY and windows

use super::Parser;
use crate::error::ParseResult;
use crate::tokenizer::{TokenKind, Tokenizer};
use tracing::debug;
use unified_sql_ir::{
    CommonTableExpr, Hint, Ident, Join, JoinCondition, JoinType, NullsOrder, ObjectName, OrderBy,
    PREDICATE_PRECEDENCE, Query, SelectItem, SelectStatement, SetOp, SortDirection, TableFactor,
    TableRef, WindowFrame, WindowFrameBound, WindowFrameUnits, WindowSpec,
};

enum SetKind {
    Union,
    Intersect,
    Except,
}

impl Parser {
    /// `[WITH ...] body [ORDER BY ...] [LIMIT n] [OFFSET n]`
    pub fn parse_query(&mut self) -> ParseResult<Query> {
        self.nested(|p| {
            let mut ctes = if p.consume_keyword("WITH") {
                p.parse_comma_separated(Self::parse_cte)?
            } else {
                Vec::new()
            };

            let mut query = p.parse_set_expr()?;
            if !ctes.is_empty() {
                ctes.append(&mut query.ctes);
                query.ctes = ctes;
            }

            if p.peek_keyword("ORDER") && query.order_by.is_empty() {
                p.index += 1;
                p.expect_keyword("BY")?;
                query.order_by = p.parse_comma_separated(Self::parse_order_by)?;
            }
            loop {
                if query.limit.is_none() && p.consume_keyword("LIMIT") {
                    query.limit = Some(p.parse_expr()?);
                } else if query.offset.is_none() && p.consume_keyword("OFFSET") {
                    query.offset = Some(p.parse_expr()?);
                } else {
                    break;
                }
            }
            Ok(query)
        })
    }

    fn parse_cte(&mut self) -> ParseResult<CommonTableExpr> {
        let name = self.parse_identifier()?;
        let columns = if self.peek_operator("(") {
            self.parse_parenthesized_identifiers()?
        } else {
            Vec::new()
        };
        self.expect_keyword("AS")?;
        self.expect_operator("(")?;
        let query = self.parse_query()?;
        self.expect_operator(")")?;
        Ok(CommonTableExpr {
            name,
            columns,
            query: Box::new(query),
        })
    }

    /// Left-associative chain of UNION, INTERSECT and EXCEPT
    fn parse_set_expr(&mut self) -> ParseResult<Query> {
        let mut left = self.parse_set_operand()?;
        loop {
            let kind = if self.consume_keyword("UNION") {
                SetKind::Union
            } else if self.consume_keyword("INTERSECT") {
                SetKind::Intersect
            } else if self.consume_keyword("EXCEPT") {
                SetKind::Except
            } else {
                break;
            };
            let all = self.consume_keyword("ALL");
            if !all {
                self.consume_keyword("DISTINCT");
            }

            let right = Box::new(self.parse_set_operand()?);
            let left_query = Box::new(left);
            left = Query::new(match kind {
                SetKind::Union => SetOp::Union {
                    left: left_query,
                    right,
                    all,
                },
                SetKind::Intersect => SetOp::Intersect {
                    left: left_query,
                    right,
                    all,
                },
                SetKind::Except => SetOp::Except {
                    left: left_query,
                    right,
                    all,
                },
            });
        }
        Ok(left)
    }

    fn parse_set_operand(&mut self) -> ParseResult<Query> {
        if self.consume_operator("(") {
            let query = self.parse_query()?;
            self.expect_operator(")")?;
            return Ok(query);
        }
        if self.consume_keyword("VALUES") {
            let rows = self.parse_comma_separated(|p| {
                p.expect_operator("(")?;
                let row = p.parse_comma_separated(Self::parse_expr)?;
                p.expect_operator(")")?;
                Ok(row)
            })?;
            return Ok(Query::new(SetOp::Values(rows)));
        }
        Ok(Query::select(self.parse_select()?))
    }

    fn parse_select(&mut self) -> ParseResult<SelectStatement> {
        self.expect_keyword("SELECT")?;

        let mut hints = Vec::new();
        while let Some(token) = self.peek().filter(|t| t.kind == TokenKind::Hint).cloned() {
            self.index += 1;
            match self.parse_hints(&token.text) {
                Ok(parsed) => hints.extend(parsed),
                Err(error) => {
                    debug!(hint = %token.text, %error, "Unreadable hint, treated as a comment");
                }
            }
        }

        let distinct = self.consume_keyword("DISTINCT");
        if !distinct {
            self.consume_keyword("ALL");
        }

        let projection = self.parse_comma_separated(Self::parse_select_item)?;

        let from = if self.consume_keyword("FROM") {
            self.parse_comma_separated(Self::parse_table_ref)?
        } else {
            Vec::new()
        };

        let where_clause = if self.consume_keyword("WHERE") {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let group_by = if self.consume_keyword("GROUP") {
            self.expect_keyword("BY")?;
            self.parse_comma_separated(Self::parse_expr)?
        } else {
            Vec::new()
        };

        let having = if self.consume_keyword("HAVING") {
            Some(self.parse_expr()?)
        } else {
            None
        };

        Ok(SelectStatement {
            distinct,
            hints,
            projection,
            from,
            where_clause,
            group_by,
            having,
        })
    }

    /// Hints inside `/*+ ... */`: `NAME[(args)]`, optionally comma separated
    fn parse_hints(&mut self, body: &str) -> ParseResult<Vec<Hint>> {
        let tokens = Tokenizer::new(body, self.settings()).collect::<Result<Vec<_>, _>>()?;
        let mut inner = Parser::from_tokens(tokens, self.ctx.clone());

        let mut hints = Vec::new();
        while !inner.is_at_end() {
            let name = match inner.next() {
                Some(token) if matches!(token.kind, TokenKind::Identifier | TokenKind::Keyword) => {
                    token.text.to_ascii_uppercase()
                }
                _ => {
                    inner.index = inner.index.saturating_sub(1);
                    return Err(inner.unexpected("hint name"));
                }
            };
            let args = if inner.consume_operator("(") {
                let args = if inner.peek_operator(")") {
                    Vec::new()
                } else {
                    inner.parse_comma_separated(Self::parse_expr)?
                };
                inner.expect_operator(")")?;
                args
            } else {
                Vec::new()
            };
            hints.push(Hint { name, args });
            inner.consume_operator(",");
        }
        Ok(hints)
    }

    fn parse_select_item(&mut self) -> ParseResult<SelectItem> {
        if self.consume_operator("*") {
            return Ok(SelectItem::Wildcard);
        }
        if let Some(name) = self.try_parse_qualified_wildcard()? {
            return Ok(SelectItem::QualifiedWildcard(name));
        }

        let expr = self.parse_expr()?;
        Ok(match self.parse_optional_alias()? {
            Some(alias) => SelectItem::AliasedExpr { expr, alias },
            None => SelectItem::UnnamedExpr(expr),
        })
    }

    /// `t.*` or `db.t.*`
    fn try_parse_qualified_wildcard(&mut self) -> ParseResult<Option<ObjectName>> {
        let mut n = 0;
        loop {
            let is_name = self.peek_nth(n).is_some_and(|t| {
                matches!(t.kind, TokenKind::Identifier | TokenKind::QuotedIdentifier)
            });
            if !is_name || !self.peek_nth_operator(n + 1, ".") {
                return Ok(None);
            }
            if self.peek_nth_operator(n + 2, "*") {
                break;
            }
            n += 2;
        }

        let mut parts = vec![self.parse_identifier()?];
        self.expect_operator(".")?;
        while !self.consume_operator("*") {
            parts.push(self.parse_identifier()?);
            self.expect_operator(".")?;
        }
        Ok(Some(ObjectName(parts)))
    }

    /// `AS word` or a bare unreserved identifier
    fn parse_optional_alias(&mut self) -> ParseResult<Option<Ident>> {
        if self.consume_keyword("AS") {
            return self.parse_any_word().map(Some);
        }
        let bare = self.peek().is_some_and(|t| {
            matches!(t.kind, TokenKind::Identifier | TokenKind::QuotedIdentifier)
        });
        if bare {
            self.parse_identifier().map(Some)
        } else {
            Ok(None)
        }
    }

    fn parse_table_ref(&mut self) -> ParseResult<TableRef> {
        let mut table = self.parse_table_factor()?;
        while let Some(join) = self.parse_join()? {
            table.joins.push(join);
        }
        Ok(table)
    }

    fn parse_table_factor(&mut self) -> ParseResult<TableRef> {
        let factor = if self.consume_operator("(") {
            let query = self.parse_query()?;
            self.expect_operator(")")?;
            TableFactor::Derived(Box::new(query))
        } else {
            TableFactor::Table(self.parse_object_name()?)
        };
        let alias = self.parse_optional_alias()?;
        Ok(TableRef {
            factor,
            alias,
            joins: Vec::new(),
        })
    }

    fn parse_join(&mut self) -> ParseResult<Option<Join>> {
        let natural = self.consume_keyword("NATURAL");
        let join_type = if self.consume_keyword("JOIN") {
            JoinType::Inner
        } else if self.consume_keyword("INNER") {
            self.expect_keyword("JOIN")?;
            JoinType::Inner
        } else if self.consume_keyword("CROSS") {
            self.expect_keyword("JOIN")?;
            JoinType::Cross
        } else if let Some(join_type) = self.parse_outer_join_type() {
            self.consume_keyword("OUTER");
            self.expect_keyword("JOIN")?;
            join_type
        } else if natural {
            return Err(self.unexpected("JOIN"));
        } else {
            return Ok(None);
        };

        let table = self.parse_table_factor()?;
        let condition = if natural {
            JoinCondition::Natural
        } else if self.consume_keyword("ON") {
            JoinCondition::On(self.parse_expr()?)
        } else if self.consume_keyword("USING") {
            JoinCondition::Using(self.parse_parenthesized_identifiers()?)
        } else {
            JoinCondition::None
        };

        Ok(Some(Join {
            join_type,
            table,
            condition,
        }))
    }

    fn parse_outer_join_type(&mut self) -> Option<JoinType> {
        let join_type = if self.peek_keyword("LEFT") {
            JoinType::Left
        } else if self.peek_keyword("RIGHT") {
            JoinType::Right
        } else if self.peek_keyword("FULL") {
            JoinType::Full
        } else {
            return None;
        };
        self.index += 1;
        Some(join_type)
    }

    /// One ORDER BY item; an omitted NULLS clause takes the source default
    pub(super) fn parse_order_by(&mut self) -> ParseResult<OrderBy> {
        let expr = self.parse_expr()?;
        let direction = if self.consume_keyword("DESC") {
            SortDirection::Desc
        } else {
            self.consume_keyword("ASC");
            SortDirection::Asc
        };

        let nulls = if self.consume_word("NULLS") {
            if self.consume_word("FIRST") {
                NullsOrder::First
            } else if self.consume_word("LAST") {
                NullsOrder::Last
            } else {
                return Err(self.unexpected("FIRST or LAST"));
            }
        } else {
            self.settings().null_ordering.default_for(direction)
        };

        Ok(OrderBy {
            expr,
            direction,
            nulls: Some(nulls),
        })
    }

    /// `( [PARTITION BY ...] [ORDER BY ...] [frame] )`
    pub(super) fn parse_window_spec(&mut self) -> ParseResult<WindowSpec> {
        self.expect_operator("(")?;

        let partition_by = if self.consume_keyword("PARTITION") {
            self.expect_keyword("BY")?;
            self.parse_comma_separated(Self::parse_expr)?
        } else {
            Vec::new()
        };

        let order_by = if self.consume_keyword("ORDER") {
            self.expect_keyword("BY")?;
            self.parse_comma_separated(Self::parse_order_by)?
        } else {
            Vec::new()
        };

        let units = if self.consume_keyword("ROWS") {
            Some(WindowFrameUnits::Rows)
        } else if self.consume_keyword("RANGE") {
            Some(WindowFrameUnits::Range)
        } else if self.consume_word("GROUPS") {
            Some(WindowFrameUnits::Groups)
        } else {
            None
        };

        let frame = match units {
            Some(units) => Some(self.parse_window_frame(units)?),
            None => None,
        };

        self.expect_operator(")")?;
        Ok(WindowSpec {
            partition_by,
            order_by,
            frame,
        })
    }

    fn parse_window_frame(&mut self, units: WindowFrameUnits) -> ParseResult<WindowFrame> {
        if self.consume_keyword("BETWEEN") {
            let start_bound = self.parse_frame_bound()?;
            self.expect_keyword("AND")?;
            let end_bound = self.parse_frame_bound()?;
            Ok(WindowFrame {
                units,
                start_bound,
                end_bound: Some(end_bound),
            })
        } else {
            Ok(WindowFrame {
                units,
                start_bound: self.parse_frame_bound()?,
                end_bound: None,
            })
        }
    }

    fn parse_frame_bound(&mut self) -> ParseResult<WindowFrameBound> {
        if self.consume_words(&["CURRENT", "ROW"]) {
            return Ok(WindowFrameBound::CurrentRow);
        }
        let offset = if self.consume_word("UNBOUNDED") {
            None
        } else {
            Some(Box::new(self.parse_subexpr(PREDICATE_PRECEDENCE)?))
        };
        if self.consume_word("PRECEDING") {
            Ok(WindowFrameBound::Preceding(offset))
        } else if self.consume_word("FOLLOWING") {
            Ok(WindowFrameBound::Following(offset))
        } else {
            Err(self.unexpected("PRECEDING or FOLLOWING"))
        }
    }
}
