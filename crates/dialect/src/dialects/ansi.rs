// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! ANSI base dialect

use crate::settings::{DialectSettings, NullOrdering};
use unified_sql_ir::{Dialect, NullsOrder};

pub fn settings() -> DialectSettings {
    DialectSettings {
        dialect: Dialect::Ansi,
        null_ordering: NullOrdering::new(NullsOrder::First, NullsOrder::Last),
        ..DialectSettings::base()
    }
}
