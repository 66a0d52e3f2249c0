// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Unified SQL - Dialects
//!
//! Immutable per-dialect settings records and the type mapper.
//!
//! Dialects are data, not types: each is a [`DialectSettings`] record
//! composed from [`DialectSettings::base`] plus overrides, stored in a
//! process-wide [`registry`] built once on first use.
//!
//! ## Supported Dialects
//!
//! | Dialect  | Identifier quote | Null ordering (ASC / DESC) | Table options |
//! |----------|------------------|----------------------------|---------------|
//! | ansi     | `"`              | first / last               | none          |
//! | bigquery | `` ` ``          | first / last               | none          |
//! | duckdb   | `"`              | first / last               | none          |
//! | hive     | `` ` ``          | first / last               | inline        |
//! | postgres | `"`              | last / first               | none          |
//! | presto   | `"`              | last / last                | `WITH (...)`  |
//! | spark    | `` ` ``          | first / last               | inline        |
//! | trino    | `"`              | last / last                | `WITH (...)`  |

pub mod dialects;
pub mod error;
pub mod keywords;
pub mod registry;
pub mod settings;
pub mod types;

pub use error::DialectError;
pub use keywords::KeywordRules;
pub use registry::{all, get, lookup};
pub use settings::{ArrayLiteralStyle, CaseFolding, DialectSettings, NullOrdering, TableOptionStyle};
pub use types::{ArrayStyle, Delimiters, MapStyle, StructStyle, TypeRules};

// Re-exports for convenience
pub use unified_sql_ir::Dialect;
