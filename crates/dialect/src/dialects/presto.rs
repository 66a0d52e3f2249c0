// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Presto

use crate::keywords::KeywordRules;
use crate::settings::{ArrayLiteralStyle, DialectSettings, NullOrdering, TableOptionStyle};
use crate::types::{ArrayStyle, Delimiters, MapStyle, StructStyle, TypeRules};
use unified_sql_function_registry::{TimeVocabulary, builtin};
use unified_sql_ir::{Dialect, NullsOrder, TypeKind};

pub const SPELLINGS: &[(TypeKind, &str)] = &[
    (TypeKind::Boolean, "BOOLEAN"),
    (TypeKind::TinyInt, "TINYINT"),
    (TypeKind::SmallInt, "SMALLINT"),
    (TypeKind::Int, "INTEGER"),
    (TypeKind::BigInt, "BIGINT"),
    (TypeKind::Float, "REAL"),
    (TypeKind::Double, "DOUBLE"),
    (TypeKind::Decimal, "DECIMAL"),
    (TypeKind::Char, "CHAR"),
    (TypeKind::Varchar, "VARCHAR"),
    (TypeKind::Text, "VARCHAR"),
    (TypeKind::Binary, "VARBINARY"),
    (TypeKind::Date, "DATE"),
    (TypeKind::Timestamp, "TIMESTAMP"),
    (TypeKind::Json, "JSON"),
];

pub fn settings() -> DialectSettings {
    DialectSettings {
        dialect: Dialect::Presto,
        keywords: KeywordRules {
            additions: &[],
            removals: &["ILIKE"],
        },
        types: TypeRules {
            spellings: SPELLINGS,
            array: ArrayStyle::Keyword(Delimiters::Paren),
            map: MapStyle::Keyword(Delimiters::Paren),
            structs: StructStyle::Keyword {
                name: "ROW",
                delimiters: Delimiters::Paren,
                field_separator: " ",
            },
            ..TypeRules::base()
        },
        functions: builtin::presto::table(),
        time_format: TimeVocabulary::MySql,
        null_ordering: NullOrdering::new(NullsOrder::Last, NullsOrder::Last),
        supports_lambdas: true,
        array_literal: ArrayLiteralStyle::Bracketed,
        table_options: TableOptionStyle::WithProperties,
        ..DialectSettings::base()
    }
}
