// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Google BigQuery

use crate::settings::{ArrayLiteralStyle, DialectSettings, NullOrdering};
use crate::types::{ArrayStyle, Delimiters, MapStyle, StructStyle, TypeRules};
use unified_sql_function_registry::{TimeVocabulary, builtin};
use unified_sql_ir::{Dialect, NullsOrder, TypeKind};

/// BigQuery has a single integer, float and string type
pub const SPELLINGS: &[(TypeKind, &str)] = &[
    (TypeKind::Boolean, "BOOL"),
    (TypeKind::TinyInt, "INT64"),
    (TypeKind::SmallInt, "INT64"),
    (TypeKind::Int, "INT64"),
    (TypeKind::BigInt, "INT64"),
    (TypeKind::Float, "FLOAT64"),
    (TypeKind::Double, "FLOAT64"),
    (TypeKind::Decimal, "NUMERIC"),
    (TypeKind::Char, "STRING"),
    (TypeKind::Varchar, "STRING"),
    (TypeKind::Text, "STRING"),
    (TypeKind::Binary, "BYTES"),
    (TypeKind::Date, "DATE"),
    (TypeKind::Timestamp, "DATETIME"),
    (TypeKind::Json, "JSON"),
];

pub fn settings() -> DialectSettings {
    DialectSettings {
        dialect: Dialect::BigQuery,
        identifier_quote: '`',
        string_quotes: &['\'', '"'],
        backslash_escapes: true,
        types: TypeRules {
            spellings: SPELLINGS,
            parameterless: &[TypeKind::Char, TypeKind::Varchar],
            array: ArrayStyle::Keyword(Delimiters::Angle),
            map: MapStyle::Unsupported,
            structs: StructStyle::Keyword {
                name: "STRUCT",
                delimiters: Delimiters::Angle,
                field_separator: " ",
            },
        },
        functions: builtin::bigquery::table(),
        time_format: TimeVocabulary::Strftime,
        null_ordering: NullOrdering::new(NullsOrder::First, NullsOrder::Last),
        array_literal: ArrayLiteralStyle::Bare,
        bracket_array_literals: true,
        explicit_distinct_set_ops: true,
        ..DialectSettings::base()
    }
}
