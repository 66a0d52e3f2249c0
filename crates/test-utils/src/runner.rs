// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Fixture checking
//!
//! Runs every target of every case through a caller-supplied translate
//! function and collects what differs, so one failing target does not hide
//! the others.

use crate::fixture::FixtureCase;
use pretty_assertions::StrComparison;
use std::fmt;
use unified_sql_ir::Dialect;

/// One target of one case that did not come out as expected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub description: String,
    pub target: Dialect,
    pub expected: Result<String, String>,
    pub actual: Result<String, String>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] -> {}", self.description, self.target)?;
        match (&self.expected, &self.actual) {
            (Ok(expected), Ok(actual)) => {
                write!(f, "{}", StrComparison::new(expected, actual))
            }
            (Ok(expected), Err(error)) => {
                write!(f, "  expected: {expected}\n  error:    {error}")
            }
            (Err(fragment), Ok(actual)) => {
                write!(f, "  expected an error containing '{fragment}'\n  got: {actual}")
            }
            (Err(fragment), Err(error)) => {
                write!(f, "  expected an error containing '{fragment}'\n  error: {error}")
            }
        }
    }
}

/// Check every target of one case
pub fn check_case<F, E>(case: &FixtureCase, translate: &mut F) -> Vec<Mismatch>
where
    F: FnMut(&FixtureCase, Dialect) -> Result<String, E>,
    E: fmt::Display,
{
    let mut mismatches = Vec::new();

    for (target, expected) in &case.write {
        let actual = translate(case, *target).map_err(|e| e.to_string());
        if actual.as_deref() != Ok(expected.as_str()) {
            mismatches.push(Mismatch {
                description: case.description.clone(),
                target: *target,
                expected: Ok(expected.clone()),
                actual,
            });
        }
    }

    for (target, fragment) in &case.errors {
        let actual = translate(case, *target).map_err(|e| e.to_string());
        let matched = matches!(&actual, Err(message) if message.contains(fragment.as_str()));
        if !matched {
            mismatches.push(Mismatch {
                description: case.description.clone(),
                target: *target,
                expected: Err(fragment.clone()),
                actual,
            });
        }
    }

    mismatches
}

/// Check every case
pub fn check_fixtures<F, E>(cases: &[FixtureCase], mut translate: F) -> Vec<Mismatch>
where
    F: FnMut(&FixtureCase, Dialect) -> Result<String, E>,
    E: fmt::Display,
{
    cases
        .iter()
        .flat_map(|case| check_case(case, &mut translate))
        .collect()
}

/// Check every case and panic with a report of all mismatches
#[track_caller]
pub fn assert_fixtures<F, E>(cases: &[FixtureCase], translate: F)
where
    F: FnMut(&FixtureCase, Dialect) -> Result<String, E>,
    E: fmt::Display,
{
    let mismatches = check_fixtures(cases, translate);
    if !mismatches.is_empty() {
        let report = mismatches
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n\n");
        panic!(
            "{} mismatches across {} cases:\n\n{report}",
            mismatches.len(),
            cases.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::parse_fixtures;

    fn cases() -> Vec<FixtureCase> {
        parse_fixtures(
            r#"
- description: upper
  read: ansi
  sql: select 1
  write:
    presto: SELECT 1
    hive: SELECT 1
  errors:
    bigquery: unsupported
"#,
        )
        .unwrap()
    }

    fn uppercase(case: &FixtureCase, target: Dialect) -> Result<String, String> {
        match target {
            Dialect::BigQuery => Err("construct unsupported here".to_string()),
            _ => Ok(case.sql.to_uppercase()),
        }
    }

    #[test]
    fn test_all_targets_pass() {
        assert!(check_fixtures(&cases(), uppercase).is_empty());
    }

    #[test]
    fn test_every_mismatch_is_reported() {
        let mismatches = check_fixtures(&cases(), |case, _| -> Result<String, String> {
            Ok(case.sql.clone())
        });
        let targets: Vec<_> = mismatches.iter().map(|m| m.target).collect();
        assert_eq!(targets, vec![Dialect::Hive, Dialect::Presto, Dialect::BigQuery]);
        assert_eq!(mismatches[2].actual, Ok("select 1".to_string()));
    }

    #[test]
    fn test_wrong_error_message() {
        let mismatches = check_fixtures(&cases(), |case, target| match target {
            Dialect::BigQuery => Err("boom".to_string()),
            _ => Ok(case.sql.to_uppercase()),
        });
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].expected, Err("unsupported".to_string()));
        assert!(mismatches[0].to_string().contains("error: boom"));
    }

    #[test]
    #[should_panic(expected = "1 mismatches across 1 cases")]
    fn test_assert_panics_with_report() {
        assert_fixtures(&cases(), |_, target| match target {
            Dialect::Presto => Ok("SELECT 2".to_string()),
            Dialect::BigQuery => Err("unsupported"),
            _ => Ok("SELECT 1".to_string()),
        });
    }
}
