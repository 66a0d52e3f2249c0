// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Unit tests for IR Query and statement representation

use unified_sql_ir::{
    ColumnDef, CommonTableExpr, CreateTable, DataType, Expr, Hint, Ident, Join, JoinCondition,
    JoinType, NullsOrder, ObjectName, OrderBy, PartitionItem, Query, SelectItem, SelectStatement,
    SetOp, SortDirection, Statement, TableOptions, TableRef,
};

fn select_from(table: &str) -> SelectStatement {
    SelectStatement {
        projection: vec![SelectItem::Wildcard],
        from: vec![TableRef::table(ObjectName::new(table))],
        ..SelectStatement::default()
    }
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_query_with_ctes() {
    let cte = CommonTableExpr {
        name: Ident::new("active_users"),
        columns: vec![],
        query: Box::new(Query::select(select_from("users"))),
    };
    let query = Query::select(select_from("active_users")).with_ctes(vec![cte]);

    assert_eq!(query.ctes.len(), 1);
    assert_eq!(query.ctes[0].name.value, "active_users");
    assert!(!query.is_simple_select());
}

#[test]
fn test_union_tree() {
    let union = Query::new(SetOp::Union {
        left: Box::new(Query::select(select_from("a"))),
        right: Box::new(Query::select(select_from("b"))),
        all: true,
    });
    assert!(matches!(union.body, SetOp::Union { all: true, .. }));
}

#[test]
fn test_join() {
    let mut users = TableRef::table(ObjectName::new("users"));
    users.alias = Some(Ident::new("u"));
    users.joins.push(Join {
        join_type: JoinType::Left,
        table: TableRef::table(ObjectName::new("orders")),
        condition: JoinCondition::Using(vec![Ident::new("user_id")]),
    });

    assert_eq!(users.joins.len(), 1);
    assert_eq!(users.joins[0].join_type, JoinType::Left);
}

#[test]
fn test_hints_are_ordered() {
    let select = SelectStatement {
        hints: vec![
            Hint {
                name: "COALESCE".into(),
                args: vec![Expr::number(3)],
            },
            Hint {
                name: "REPARTITION".into(),
                args: vec![Expr::number(1)],
            },
        ],
        ..select_from("x")
    };
    let names: Vec<_> = select.hints.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["COALESCE", "REPARTITION"]);
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn test_order_by_defaults() {
    let item = OrderBy::new(Expr::column("lname"));
    assert_eq!(item.direction, SortDirection::Asc);
    assert_eq!(item.nulls, None);
}

#[test]
fn test_order_by_explicit_nulls() {
    let query = Query::select(select_from("person")).with_order_by(vec![
        OrderBy::new(Expr::column("age"))
            .desc()
            .with_nulls(NullsOrder::First),
        OrderBy::new(Expr::column("fname")).with_nulls(NullsOrder::Last),
    ]);
    assert_eq!(query.order_by[0].nulls, Some(NullsOrder::First));
    assert_eq!(query.order_by[1].direction, SortDirection::Asc);
}

// =============================================================================
// Statements
// =============================================================================

#[test]
fn test_create_table_with_partition() {
    let options = TableOptions {
        file_format: Some("ICEBERG".into()),
        partitioned_by: vec![PartitionItem::Column(ColumnDef::new("date", DataType::Text))],
        comment: Some("Test comment: blah".into()),
        ..TableOptions::default()
    };
    let create = CreateTable::new(ObjectName::new("blah"))
        .with_columns(vec![ColumnDef::new("col_a", DataType::Int)])
        .with_options(options);

    let statement = Statement::CreateTable(Box::new(create));
    assert_eq!(statement.kind(), "create_table");
}

#[test]
fn test_statement_from_query() {
    let statement: Statement = Query::default().into();
    assert_eq!(statement.kind(), "query");
}

#[test]
fn test_statement_serialization() {
    let statement: Statement = Query::select(select_from("foo")).into();
    let json = serde_json::to_value(&statement).unwrap();
    let back: Statement = serde_json::from_value(json).unwrap();
    assert_eq!(back, statement);
}
