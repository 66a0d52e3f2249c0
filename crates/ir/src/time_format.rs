// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Time Formats
//!
//! Date/time format patterns differ in every engine: Spark writes
//! `yyyy-MM-dd`, Presto `%Y-%m-%d`, Postgres `YYYY-MM-DD`. A string-literal
//! format argument is parsed once, with the source dialect's vocabulary,
//! into a [`TimeFormat`] token list and rendered again with the target's.

use serde::{Deserialize, Serialize};

/// One element of a date/time pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeFormatToken {
    /// Four digit year
    Year4,
    /// Two digit year
    Year2,
    /// Full month name (`January`)
    MonthName,
    /// Abbreviated month name (`Jan`)
    MonthAbbr,
    /// Zero padded month number
    Month2,
    /// Month number without padding
    Month1,
    /// Zero padded day of month
    Day2,
    /// Day of month without padding
    Day1,
    DayOfYear,
    WeekdayName,
    WeekdayAbbr,
    Hour24,
    Hour12,
    Minute,
    Second,
    /// Fractional seconds
    Fraction,
    /// AM / PM marker
    AmPm,
    /// Literal text copied as is
    Literal(String),
}

/// A parsed date/time pattern
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeFormat {
    pub tokens: Vec<TimeFormatToken>,
}

impl TimeFormat {
    pub fn new(tokens: Vec<TimeFormatToken>) -> Self {
        Self { tokens }
    }

    /// `Year4 '-' Month2 '-' Day2`, the layout every engine casts implicitly
    pub fn iso_date() -> Self {
        Self::new(vec![
            TimeFormatToken::Year4,
            TimeFormatToken::Literal("-".to_string()),
            TimeFormatToken::Month2,
            TimeFormatToken::Literal("-".to_string()),
            TimeFormatToken::Day2,
        ])
    }

    pub fn is_iso_date(&self) -> bool {
        *self == Self::iso_date()
    }

    /// Append a literal, merging it with a preceding literal
    pub fn push_literal(&mut self, text: &str) {
        if let Some(TimeFormatToken::Literal(previous)) = self.tokens.last_mut() {
            previous.push_str(text);
        } else {
            self.tokens.push(TimeFormatToken::Literal(text.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date() {
        let mut format = TimeFormat::default();
        format.tokens.push(TimeFormatToken::Year4);
        format.push_literal("-");
        format.tokens.push(TimeFormatToken::Month2);
        format.push_literal("-");
        format.tokens.push(TimeFormatToken::Day2);
        assert!(format.is_iso_date());
    }

    #[test]
    fn test_literals_merge() {
        let mut format = TimeFormat::default();
        format.push_literal("T");
        format.push_literal("'");
        assert_eq!(
            format.tokens,
            vec![TimeFormatToken::Literal("T'".to_string())]
        );
        assert!(!format.is_iso_date());
    }
}
