// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! PostgreSQL

use crate::settings::{ArrayLiteralStyle, CaseFolding, DialectSettings, NullOrdering};
use crate::types::{ArrayStyle, MapStyle, StructStyle, TypeRules};
use unified_sql_function_registry::{TimeVocabulary, builtin};
use unified_sql_ir::{Dialect, NullsOrder, TypeKind};

pub const SPELLINGS: &[(TypeKind, &str)] = &[
    (TypeKind::Boolean, "BOOLEAN"),
    (TypeKind::TinyInt, "SMALLINT"),
    (TypeKind::SmallInt, "SMALLINT"),
    (TypeKind::Int, "INT"),
    (TypeKind::BigInt, "BIGINT"),
    (TypeKind::Float, "REAL"),
    (TypeKind::Double, "DOUBLE PRECISION"),
    (TypeKind::Decimal, "DECIMAL"),
    (TypeKind::Char, "CHAR"),
    (TypeKind::Varchar, "VARCHAR"),
    (TypeKind::Text, "TEXT"),
    (TypeKind::Binary, "BYTEA"),
    (TypeKind::Date, "DATE"),
    (TypeKind::Timestamp, "TIMESTAMP"),
    (TypeKind::Json, "JSON"),
];

pub fn settings() -> DialectSettings {
    DialectSettings {
        dialect: Dialect::Postgres,
        case_folding: CaseFolding::Lower,
        types: TypeRules {
            spellings: SPELLINGS,
            parameterless: &[],
            array: ArrayStyle::Suffix,
            map: MapStyle::Unsupported,
            structs: StructStyle::Unsupported,
        },
        functions: builtin::postgres::table(),
        time_format: TimeVocabulary::Postgres,
        null_ordering: NullOrdering::new(NullsOrder::Last, NullsOrder::First),
        array_literal: ArrayLiteralStyle::Bracketed,
        cast_shorthand: true,
        ..DialectSettings::base()
    }
}
