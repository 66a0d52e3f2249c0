// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Query writing: SELECT, set operations, joins, ORDER BY and windows

use super::Generator;
use crate::error::GenerateResult;
use tracing::debug;
use unified_sql_ir::{
    CommonTableExpr, Hint, Join, JoinCondition, JoinType, NullsOrder, OrderBy, Query,
    SelectItem, SelectStatement, SetOp, SortDirection, TableFactor, TableRef, WindowFrameBound,
    WindowFrameUnits, WindowSpec,
};

impl Generator {
    pub fn write_query(&mut self, query: &Query) -> GenerateResult<()> {
        if !query.ctes.is_empty() {
            self.write("WITH ");
            for (i, cte) in query.ctes.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }
                self.write_cte(cte)?;
            }
            self.write_separator();
        }

        self.write_set_expr(&query.body)?;

        if !query.order_by.is_empty() {
            self.write_separator();
            self.write_clause("ORDER BY", &query.order_by, Self::write_order_by)?;
        }
        if let Some(limit) = &query.limit {
            self.write_separator();
            self.write("LIMIT ");
            self.write_expr(limit)?;
        }
        if let Some(offset) = &query.offset {
            self.write_separator();
            self.write("OFFSET ");
            self.write_expr(offset)?;
        }
        Ok(())
    }

    /// `(query)`, indented one level when pretty
    pub(super) fn write_nested_query(&mut self, query: &Query) -> GenerateResult<()> {
        self.write_char('(');
        self.indent_level += 1;
        self.write_pretty_break();
        self.write_query(query)?;
        self.indent_level -= 1;
        self.write_pretty_break();
        self.write_char(')');
        Ok(())
    }

    fn write_cte(&mut self, cte: &CommonTableExpr) -> GenerateResult<()> {
        self.write_ident(&cte.name);
        if !cte.columns.is_empty() {
            self.write(" (");
            for (i, column) in cte.columns.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }
                self.write_ident(column);
            }
            self.write_char(')');
        }
        self.write(" AS ");
        self.write_nested_query(&cte.query)
    }

    fn write_set_expr(&mut self, body: &SetOp) -> GenerateResult<()> {
        let (keyword, left, right, all) = match body {
            SetOp::Select(select) => return self.write_select(select),
            SetOp::Values(rows) => return self.write_values(rows),
            SetOp::Union { left, right, all } => ("UNION", left, right, *all),
            SetOp::Intersect { left, right, all } => ("INTERSECT", left, right, *all),
            SetOp::Except { left, right, all } => ("EXCEPT", left, right, *all),
        };

        self.write_set_operand(left, true)?;
        self.write_separator();
        self.write(keyword);
        if all {
            self.write(" ALL");
        } else if self.settings.explicit_distinct_set_ops {
            self.write(" DISTINCT");
        }
        self.write_separator();
        self.write_set_operand(right, false)
    }

    /// Operands are bare unless they carry their own clauses; a left-nested
    /// set operation reads the same without parentheses
    fn write_set_operand(&mut self, query: &Query, is_left: bool) -> GenerateResult<()> {
        let bare_clauses = query.ctes.is_empty()
            && query.order_by.is_empty()
            && query.limit.is_none()
            && query.offset.is_none();
        let bare = bare_clauses
            && match query.body {
                SetOp::Select(_) | SetOp::Values(_) => true,
                _ => is_left,
            };
        if bare {
            self.write_set_expr(&query.body)
        } else {
            self.write_nested_query(query)
        }
    }

    fn write_values(&mut self, rows: &[Vec<unified_sql_ir::Expr>]) -> GenerateResult<()> {
        self.write_clause("VALUES", rows, |g, row| {
            g.write_char('(');
            g.write_comma_separated(row, |g, value| g.write_expr(value))?;
            g.write_char(')');
            Ok(())
        })
    }

    fn write_select(&mut self, select: &SelectStatement) -> GenerateResult<()> {
        let mut keyword = String::from("SELECT");
        if !select.hints.is_empty() {
            if self.settings.supports_hints {
                keyword.push_str(" /*+ ");
                keyword.push_str(&self.render_hints(&select.hints)?);
                keyword.push_str(" */");
            } else {
                debug!(
                    dialect = %self.settings.dialect,
                    hints = select.hints.len(),
                    "Dropping hints the target does not support"
                );
            }
        }
        if select.distinct {
            keyword.push_str(" DISTINCT");
        }
        self.write_clause(&keyword, &select.projection, Self::write_select_item)?;

        if !select.from.is_empty() {
            self.write_separator();
            self.write("FROM ");
            for (i, table) in select.from.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }
                self.write_table_ref(table)?;
            }
        }
        if let Some(condition) = &select.where_clause {
            self.write_separator();
            self.write_clause("WHERE", std::slice::from_ref(condition), Self::write_expr)?;
        }
        if !select.group_by.is_empty() {
            self.write_separator();
            self.write_clause("GROUP BY", &select.group_by, Self::write_expr)?;
        }
        if let Some(condition) = &select.having {
            self.write_separator();
            self.write_clause("HAVING", std::slice::from_ref(condition), Self::write_expr)?;
        }
        Ok(())
    }

    fn render_hints(&self, hints: &[Hint]) -> GenerateResult<String> {
        self.render_compact(|g| {
            g.write_comma_separated(hints, |g, hint| {
                g.write(&hint.name);
                if !hint.args.is_empty() {
                    g.write_char('(');
                    g.write_comma_separated(&hint.args, |g, arg| g.write_expr(arg))?;
                    g.write_char(')');
                }
                Ok(())
            })
        })
    }

    fn write_select_item(&mut self, item: &SelectItem) -> GenerateResult<()> {
        match item {
            SelectItem::Wildcard => self.write_char('*'),
            SelectItem::QualifiedWildcard(name) => {
                self.write_object_name(name);
                self.write(".*");
            }
            SelectItem::UnnamedExpr(expr) => self.write_expr(expr)?,
            SelectItem::AliasedExpr { expr, alias } => {
                self.write_expr(expr)?;
                self.write(" AS ");
                self.write_ident(alias);
            }
        }
        Ok(())
    }

    fn write_table_ref(&mut self, table: &TableRef) -> GenerateResult<()> {
        match &table.factor {
            TableFactor::Table(name) => self.write_object_name(name),
            TableFactor::Derived(query) => self.write_nested_query(query)?,
        }
        if let Some(alias) = &table.alias {
            self.write(" AS ");
            self.write_ident(alias);
        }
        for join in &table.joins {
            self.write_separator();
            self.write_join(join)?;
        }
        Ok(())
    }

    fn write_join(&mut self, join: &Join) -> GenerateResult<()> {
        if join.condition == JoinCondition::Natural {
            self.write("NATURAL ");
        }
        self.write(match join.join_type {
            JoinType::Inner => "JOIN ",
            JoinType::Left => "LEFT JOIN ",
            JoinType::Right => "RIGHT JOIN ",
            JoinType::Full => "FULL JOIN ",
            JoinType::Cross => "CROSS JOIN ",
        });
        self.write_table_ref(&join.table)?;
        match &join.condition {
            JoinCondition::On(condition) => {
                self.write(" ON ");
                self.write_expr(condition)?;
            }
            JoinCondition::Using(columns) => {
                self.write(" USING (");
                for (i, column) in columns.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.write_ident(column);
                }
                self.write_char(')');
            }
            JoinCondition::Natural | JoinCondition::None => {}
        }
        Ok(())
    }

    /// `expr [DESC] [NULLS FIRST|LAST]`
    ///
    /// The NULLS clause is written only where the recorded placement differs
    /// from the target's default for the direction.
    fn write_order_by(&mut self, item: &OrderBy) -> GenerateResult<()> {
        self.write_expr(&item.expr)?;
        if item.direction == SortDirection::Desc {
            self.write(" DESC");
        }
        if let Some(nulls) = item.nulls
            && nulls != self.settings.null_ordering.default_for(item.direction)
        {
            self.write(match nulls {
                NullsOrder::First => " NULLS FIRST",
                NullsOrder::Last => " NULLS LAST",
            });
        }
        Ok(())
    }

    pub(super) fn write_window_spec(&mut self, window: &WindowSpec) -> GenerateResult<()> {
        let mut parts: Vec<String> = Vec::new();
        if !window.partition_by.is_empty() {
            let exprs = self.render_compact(|g| {
                g.write_comma_separated(&window.partition_by, |g, expr| g.write_expr(expr))
            })?;
            parts.push(format!("PARTITION BY {exprs}"));
        }
        if !window.order_by.is_empty() {
            let items = self.render_compact(|g| {
                g.write_comma_separated(&window.order_by, |g, item| g.write_order_by(item))
            })?;
            parts.push(format!("ORDER BY {items}"));
        }
        if let Some(frame) = &window.frame {
            let units = match frame.units {
                WindowFrameUnits::Rows => "ROWS",
                WindowFrameUnits::Range => "RANGE",
                WindowFrameUnits::Groups => "GROUPS",
            };
            let start = self.render_frame_bound(&frame.start_bound)?;
            parts.push(match &frame.end_bound {
                Some(end) => {
                    let end = self.render_frame_bound(end)?;
                    format!("{units} BETWEEN {start} AND {end}")
                }
                None => format!("{units} {start}"),
            });
        }
        self.write_char('(');
        self.write(&parts.join(" "));
        self.write_char(')');
        Ok(())
    }

    fn render_frame_bound(&self, bound: &WindowFrameBound) -> GenerateResult<String> {
        Ok(match bound {
            WindowFrameBound::CurrentRow => "CURRENT ROW".to_string(),
            WindowFrameBound::Preceding(None) => "UNBOUNDED PRECEDING".to_string(),
            WindowFrameBound::Following(None) => "UNBOUNDED FOLLOWING".to_string(),
            WindowFrameBound::Preceding(Some(offset)) => {
                format!("{} PRECEDING", self.render_compact(|g| g.write_expr(offset))?)
            }
            WindowFrameBound::Following(Some(offset)) => {
                format!("{} FOLLOWING", self.render_compact(|g| g.write_expr(offset))?)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenerateOptions;
    use pretty_assertions::assert_eq;
    use unified_sql_dialect::{Dialect, get};
    use unified_sql_ir::{Expr, Ident, ObjectName};

    fn render(query: &Query, dialect: Dialect, pretty: bool) -> String {
        let options = GenerateOptions::default().with_pretty(pretty);
        let mut generator = Generator::new(get(dialect), options);
        generator.write_query(query).unwrap();
        generator.finish()
    }

    fn select_from(columns: &[&str], table: &str) -> SelectStatement {
        SelectStatement {
            projection: columns
                .iter()
                .map(|c| SelectItem::UnnamedExpr(Expr::column(*c)))
                .collect(),
            from: vec![TableRef::table(ObjectName::new(table))],
            ..Default::default()
        }
    }

    #[test]
    fn test_null_order_against_target_default() {
        let query = Query::select(select_from(&["a"], "t")).with_order_by(vec![
            OrderBy::new(Expr::column("a"))
                .desc()
                .with_nulls(NullsOrder::First),
            OrderBy::new(Expr::column("b")).with_nulls(NullsOrder::First),
            OrderBy::new(Expr::column("c")),
        ]);
        assert_eq!(
            render(&query, Dialect::Presto, false),
            "SELECT a FROM t ORDER BY a DESC NULLS FIRST, b NULLS FIRST, c"
        );
        assert_eq!(
            render(&query, Dialect::Postgres, false),
            "SELECT a FROM t ORDER BY a DESC, b NULLS FIRST, c"
        );
    }

    #[test]
    fn test_pretty_select() {
        let mut select = select_from(&["a", "b"], "t");
        select.where_clause = Some(Expr::binary(
            Expr::column("a"),
            unified_sql_ir::BinaryOp::Gt,
            Expr::number(1),
        ));
        let query = Query::select(select).with_limit(Expr::number(10));
        assert_eq!(
            render(&query, Dialect::Ansi, true),
            "SELECT\n  a,\n  b\nFROM t\nWHERE\n  a > 1\nLIMIT 10"
        );
    }

    #[test]
    fn test_union_distinct_spelling() {
        let left = Query::select(select_from(&["a"], "t"));
        let right = Query::select(select_from(&["a"], "u"));
        let query = Query::new(SetOp::Union {
            left: Box::new(left),
            right: Box::new(right),
            all: false,
        });
        assert_eq!(
            render(&query, Dialect::BigQuery, false),
            "SELECT a FROM t UNION DISTINCT SELECT a FROM u"
        );
        assert_eq!(
            render(&query, Dialect::Spark, false),
            "SELECT a FROM t UNION SELECT a FROM u"
        );
    }

    #[test]
    fn test_hints_dropped_for_other_targets() {
        let mut select = select_from(&[], "x");
        select.projection = vec![SelectItem::Wildcard];
        select.hints = vec![
            Hint {
                name: "COALESCE".to_string(),
                args: vec![Expr::number(3)],
            },
            Hint {
                name: "REPARTITION".to_string(),
                args: vec![Expr::number(1)],
            },
        ];
        let query = Query::select(select);
        assert_eq!(
            render(&query, Dialect::Spark, false),
            "SELECT /*+ COALESCE(3), REPARTITION(1) */ * FROM x"
        );
        assert_eq!(render(&query, Dialect::Presto, false), "SELECT * FROM x");
    }

    #[test]
    fn test_joins() {
        let mut table = TableRef::table(ObjectName::new("a"));
        table.joins = vec![
            Join {
                join_type: JoinType::Left,
                table: TableRef::table(ObjectName::new("b")),
                condition: JoinCondition::Using(vec![Ident::new("id")]),
            },
            Join {
                join_type: JoinType::Inner,
                table: TableRef::table(ObjectName::new("c")),
                condition: JoinCondition::Natural,
            },
        ];
        let select = SelectStatement {
            projection: vec![SelectItem::Wildcard],
            from: vec![table],
            ..Default::default()
        };
        assert_eq!(
            render(&Query::select(select), Dialect::Ansi, false),
            "SELECT * FROM a LEFT JOIN b USING (id) NATURAL JOIN c"
        );
    }
}
