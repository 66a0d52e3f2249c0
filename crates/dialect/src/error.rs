// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Dialect lookup and type mapping errors

use serde::Serialize;
use thiserror::Error;

/// Errors raised by the dialect registry and type mapper
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum DialectError {
    /// The name is not one of the supported dialects
    #[error("Unknown dialect '{0}'")]
    Unknown(String),

    /// The type has no spelling in the dialect
    #[error("Type {data_type} is not supported: {reason}")]
    UnsupportedType { data_type: String, reason: String },
}

impl From<unified_sql_ir::UnknownDialect> for DialectError {
    fn from(err: unified_sql_ir::UnknownDialect) -> Self {
        DialectError::Unknown(err.0)
    }
}
