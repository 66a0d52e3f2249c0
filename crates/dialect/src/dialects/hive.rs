// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Apache Hive

use crate::keywords::{CLAUSE_KEYWORDS, KeywordRules};
use crate::settings::{ArrayLiteralStyle, DialectSettings, NullOrdering, TableOptionStyle};
use crate::types::{ArrayStyle, Delimiters, MapStyle, StructStyle, TypeRules};
use unified_sql_function_registry::{TimeVocabulary, builtin};
use unified_sql_ir::{Dialect, NullsOrder, TypeKind};

/// Storage clause words reserved in the Hive family
pub const KEYWORDS: &[&str] = CLAUSE_KEYWORDS;

/// Hive scalar spellings; Hive has no JSON type
pub const SPELLINGS: &[(TypeKind, &str)] = &[
    (TypeKind::Boolean, "BOOLEAN"),
    (TypeKind::TinyInt, "TINYINT"),
    (TypeKind::SmallInt, "SMALLINT"),
    (TypeKind::Int, "INT"),
    (TypeKind::BigInt, "BIGINT"),
    (TypeKind::Float, "FLOAT"),
    (TypeKind::Double, "DOUBLE"),
    (TypeKind::Decimal, "DECIMAL"),
    (TypeKind::Char, "CHAR"),
    (TypeKind::Varchar, "VARCHAR"),
    (TypeKind::Text, "STRING"),
    (TypeKind::Binary, "BINARY"),
    (TypeKind::Date, "DATE"),
    (TypeKind::Timestamp, "TIMESTAMP"),
];

pub fn settings() -> DialectSettings {
    DialectSettings {
        dialect: Dialect::Hive,
        keywords: KeywordRules {
            additions: KEYWORDS,
            removals: &["ILIKE"],
        },
        identifier_quote: '`',
        string_quotes: &['\'', '"'],
        backslash_escapes: true,
        types: TypeRules {
            spellings: SPELLINGS,
            array: ArrayStyle::Keyword(Delimiters::Angle),
            map: MapStyle::Keyword(Delimiters::Angle),
            structs: StructStyle::Keyword {
                name: "STRUCT",
                delimiters: Delimiters::Angle,
                field_separator: " ",
            },
            ..TypeRules::base()
        },
        functions: builtin::hive::table(),
        time_format: TimeVocabulary::Java,
        null_ordering: NullOrdering::new(NullsOrder::First, NullsOrder::Last),
        supports_hints: true,
        supports_lambdas: true,
        array_literal: ArrayLiteralStyle::Function("ARRAY"),
        table_options: TableOptionStyle::Inline,
        ..DialectSettings::base()
    }
}
