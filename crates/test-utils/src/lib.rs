// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for unified-sql
//!
//! This crate provides:
//! - A YAML fixture format describing one input and its expected output per
//!   target dialect
//! - A runner that checks every target of every case and reports all
//!   mismatches at once
//!
//! The runner takes the translate function as a callback, so this crate
//! does not depend on the pipeline it tests.

pub mod fixture;
pub mod runner;

// Re-exports for convenience
pub use fixture::{FixtureCase, FixtureError, load_fixtures, parse_fixtures};
pub use runner::{Mismatch, assert_fixtures, check_case, check_fixtures};
