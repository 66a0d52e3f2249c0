// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Apache Spark SQL
//!
//! Spark is Hive's record with its own struct field separator, function
//! table and keyword set.

use crate::keywords::KeywordRules;
use crate::settings::DialectSettings;
use crate::types::{Delimiters, StructStyle, TypeRules};
use unified_sql_function_registry::builtin;
use unified_sql_ir::Dialect;

pub fn settings() -> DialectSettings {
    let hive = super::hive::settings();
    DialectSettings {
        dialect: Dialect::Spark,
        keywords: KeywordRules {
            additions: super::hive::KEYWORDS,
            removals: &[],
        },
        types: TypeRules {
            structs: StructStyle::Keyword {
                name: "STRUCT",
                delimiters: Delimiters::Angle,
                field_separator: ": ",
            },
            ..hive.types
        },
        functions: builtin::spark::table(),
        ..hive
    }
}
