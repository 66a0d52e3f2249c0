// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL Function Registry
//!
//! This crate holds, per dialect, how each canonical builtin function is
//! written and which native names parse into it.
//!
//! ## Features
//!
//! - [`FunctionRule`]s: rename, truncate, structural rewrite or unsupported
//! - Native name aliases with arity checks, argument reordering and
//!   format-string parsing
//! - Date/time pattern vocabularies ([`TimeVocabulary`])
//!
//! ## Usage
//!
//! ```rust,ignore
//! use unified_sql_function_registry::builtin;
//!
//! let presto = builtin::presto::table();
//! let rewritten = presto.rewrite(&call)?;
//! ```

pub mod builtin;
pub mod rewrite;
pub mod rule;
pub mod table;
pub mod time_format;

pub use rule::{FunctionRule, RewriteError, RewriteFn};
pub use table::{AliasTarget, FunctionAlias, FunctionTable, format_argument};
pub use time_format::{TimeFormatError, TimeVocabulary};
