// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! DuckDB

use crate::settings::{ArrayLiteralStyle, CaseFolding, DialectSettings, NullOrdering};
use crate::types::{ArrayStyle, Delimiters, MapStyle, StructStyle, TypeRules};
use unified_sql_function_registry::{TimeVocabulary, builtin};
use unified_sql_ir::{Dialect, NullsOrder, TypeKind};

pub const SPELLINGS: &[(TypeKind, &str)] = &[
    (TypeKind::Boolean, "BOOLEAN"),
    (TypeKind::TinyInt, "TINYINT"),
    (TypeKind::SmallInt, "SMALLINT"),
    (TypeKind::Int, "INT"),
    (TypeKind::BigInt, "BIGINT"),
    (TypeKind::Float, "REAL"),
    (TypeKind::Double, "DOUBLE"),
    (TypeKind::Decimal, "DECIMAL"),
    (TypeKind::Char, "CHAR"),
    (TypeKind::Varchar, "VARCHAR"),
    (TypeKind::Text, "TEXT"),
    (TypeKind::Binary, "BLOB"),
    (TypeKind::Date, "DATE"),
    (TypeKind::Timestamp, "TIMESTAMP"),
    (TypeKind::Json, "JSON"),
];

pub fn settings() -> DialectSettings {
    DialectSettings {
        dialect: Dialect::DuckDB,
        case_folding: CaseFolding::Lower,
        types: TypeRules {
            spellings: SPELLINGS,
            parameterless: &[],
            array: ArrayStyle::Suffix,
            map: MapStyle::Keyword(Delimiters::Paren),
            structs: StructStyle::Keyword {
                name: "STRUCT",
                delimiters: Delimiters::Paren,
                field_separator: " ",
            },
        },
        functions: builtin::duckdb::table(),
        time_format: TimeVocabulary::Strftime,
        null_ordering: NullOrdering::new(NullsOrder::First, NullsOrder::Last),
        supports_lambdas: true,
        array_literal: ArrayLiteralStyle::Function("LIST_VALUE"),
        bracket_array_literals: true,
        cast_shorthand: true,
        ..DialectSettings::base()
    }
}
