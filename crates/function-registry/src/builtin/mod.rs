// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Builtin function tables
//!
//! One table per dialect family. Each starts from [`base::table`] and
//! overrides the rules and aliases the dialect spells differently.

pub mod base;
pub mod bigquery;
pub mod duckdb;
pub mod hive;
pub mod postgres;
pub mod presto;
pub mod spark;
