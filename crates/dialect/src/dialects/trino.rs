// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Trino, spelled exactly like Presto

use crate::settings::DialectSettings;
use unified_sql_ir::Dialect;

pub fn settings() -> DialectSettings {
    DialectSettings {
        dialect: Dialect::Trino,
        ..super::presto::settings()
    }
}
