// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! YAML translation fixtures
//!
//! A fixture file is a list of cases. Each case names its source dialect,
//! the input text, and the expected output per target dialect:
//!
//! ```yaml
//! - description: LEFT becomes SUBSTRING
//!   read: spark
//!   sql: SELECT LEFT(x, 2) FROM t
//!   write:
//!     presto: SELECT SUBSTRING(x, 1, 2) FROM t
//!     hive: SELECT SUBSTRING(x, 1, 2) FROM t
//!   errors:
//!     bigquery: cannot be expressed
//! ```
//!
//! `errors` maps a target to a fragment its error message must contain.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use unified_sql_ir::Dialect;

/// A single translation case
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureCase {
    pub description: String,
    pub read: Dialect,
    pub sql: String,
    #[serde(default)]
    pub pretty: bool,
    #[serde(default)]
    pub write: BTreeMap<Dialect, String>,
    #[serde(default)]
    pub errors: BTreeMap<Dialect, String>,
}

impl FixtureCase {
    /// Every target this case says something about
    pub fn targets(&self) -> impl Iterator<Item = Dialect> + '_ {
        self.write.keys().chain(self.errors.keys()).copied()
    }
}

/// Fixture loading errors
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid fixture YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Empty fixture file")]
    EmptyFile,

    #[error("Case '{0}' has no expected output")]
    NoExpectations(String),

    #[error("Case '{description}' expects both output and an error for {target}")]
    ConflictingExpectations { description: String, target: Dialect },
}

/// Load a fixture file
pub fn load_fixtures(path: impl AsRef<Path>) -> Result<Vec<FixtureCase>, FixtureError> {
    let content = std::fs::read_to_string(path)?;
    parse_fixtures(&content)
}

/// Parse fixture content from a string
pub fn parse_fixtures(content: &str) -> Result<Vec<FixtureCase>, FixtureError> {
    if content.trim().is_empty() {
        return Err(FixtureError::EmptyFile);
    }
    let cases: Vec<FixtureCase> = serde_yaml::from_str(content)?;
    if cases.is_empty() {
        return Err(FixtureError::EmptyFile);
    }

    for case in &cases {
        if case.write.is_empty() && case.errors.is_empty() {
            return Err(FixtureError::NoExpectations(case.description.clone()));
        }
        if let Some(target) = case.write.keys().find(|t| case.errors.contains_key(t)) {
            return Err(FixtureError::ConflictingExpectations {
                description: case.description.clone(),
                target: *target,
            });
        }
    }
    Ok(cases)
}
