// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Time Format Vocabularies
//!
//! Each engine family spells date/time patterns with its own directives:
//!
//! | Token       | Java (hive, spark) | strftime (duckdb, bigquery) | MySQL (presto, trino) | Postgres |
//! |-------------|--------------------|-----------------------------|-----------------------|----------|
//! | Year4       | `yyyy`             | `%Y`                        | `%Y`                  | `YYYY`   |
//! | Month2      | `MM`               | `%m`                        | `%m`                  | `MM`     |
//! | Day2        | `dd`               | `%d`                        | `%d`                  | `DD`     |
//! | Minute      | `mm`               | `%M`                        | `%i`                  | `MI`     |
//!
//! A [`TimeVocabulary`] parses a pattern string into a dialect-independent
//! [`TimeFormat`] and renders a [`TimeFormat`] back into a pattern string.

use serde::Serialize;
use std::fmt;
use unified_sql_ir::{TimeFormat, TimeFormatToken};

/// Errors raised while reading or writing a time format pattern
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
pub enum TimeFormatError {
    #[error("Invalid {vocabulary} time format '{pattern}' at position {position}: {reason}")]
    InvalidPattern {
        vocabulary: TimeVocabulary,
        pattern: String,
        position: usize,
        reason: String,
    },

    #[error("Time format element {token} has no {vocabulary} spelling")]
    MissingToken {
        vocabulary: TimeVocabulary,
        token: String,
    },
}

/// A family of date/time pattern spellings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimeVocabulary {
    /// `yyyy-MM-dd HH:mm:ss`
    Java,
    /// `%Y-%m-%d %H:%M:%S`
    Strftime,
    /// `%Y-%m-%d %H:%i:%s`
    MySql,
    /// `YYYY-MM-DD HH24:MI:SS`
    Postgres,
}

impl fmt::Display for TimeVocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeVocabulary::Java => "Java",
            TimeVocabulary::Strftime => "strftime",
            TimeVocabulary::MySql => "MySQL",
            TimeVocabulary::Postgres => "Postgres",
        };
        f.write_str(name)
    }
}

const POSTGRES_PATTERNS: &[&str] = &[
    "Month", "MONTH", "FMMM", "FMDD", "YYYY", "HH24", "HH12", "Mon", "MON", "DDD", "Day", "DAY",
    "Dy", "DY", "YY", "MM", "DD", "HH", "MI", "SS", "US", "AM", "PM",
];

impl TimeVocabulary {
    /// Parse a pattern string into canonical tokens
    pub fn parse(self, pattern: &str) -> Result<TimeFormat, TimeFormatError> {
        match self {
            TimeVocabulary::Java => self.parse_java(pattern),
            TimeVocabulary::Strftime | TimeVocabulary::MySql => self.parse_percent(pattern),
            TimeVocabulary::Postgres => self.parse_postgres(pattern),
        }
    }

    /// Render canonical tokens as a pattern string
    pub fn render(self, format: &TimeFormat) -> Result<String, TimeFormatError> {
        let mut out = String::new();
        for token in &format.tokens {
            match token {
                TimeFormatToken::Literal(text) => self.push_literal(&mut out, text),
                token => {
                    let spelling =
                        self.spelling(token)
                            .ok_or_else(|| TimeFormatError::MissingToken {
                                vocabulary: self,
                                token: format!("{token:?}"),
                            })?;
                    out.push_str(spelling);
                }
            }
        }
        Ok(out)
    }

    fn spelling(self, token: &TimeFormatToken) -> Option<&'static str> {
        use TimeFormatToken::*;
        let spelling = match self {
            TimeVocabulary::Java => match token {
                Year4 => "yyyy",
                Year2 => "yy",
                MonthName => "MMMM",
                MonthAbbr => "MMM",
                Month2 => "MM",
                Month1 => "M",
                Day2 => "dd",
                Day1 => "d",
                DayOfYear => "DDD",
                WeekdayName => "EEEE",
                WeekdayAbbr => "EEE",
                Hour24 => "HH",
                Hour12 => "hh",
                Minute => "mm",
                Second => "ss",
                Fraction => "SSSSSS",
                AmPm => "a",
                Literal(_) => return None,
            },
            TimeVocabulary::Strftime => match token {
                Year4 => "%Y",
                Year2 => "%y",
                MonthName => "%B",
                MonthAbbr => "%b",
                Month2 => "%m",
                Month1 => "%-m",
                Day2 => "%d",
                Day1 => "%-d",
                DayOfYear => "%j",
                WeekdayName => "%A",
                WeekdayAbbr => "%a",
                Hour24 => "%H",
                Hour12 => "%I",
                Minute => "%M",
                Second => "%S",
                Fraction => "%f",
                AmPm => "%p",
                Literal(_) => return None,
            },
            TimeVocabulary::MySql => match token {
                Year4 => "%Y",
                Year2 => "%y",
                MonthName => "%M",
                MonthAbbr => "%b",
                Month2 => "%m",
                Month1 => "%c",
                Day2 => "%d",
                Day1 => "%e",
                DayOfYear => "%j",
                WeekdayName => "%W",
                WeekdayAbbr => "%a",
                Hour24 => "%H",
                Hour12 => "%h",
                Minute => "%i",
                Second => "%s",
                Fraction => "%f",
                AmPm => "%p",
                Literal(_) => return None,
            },
            TimeVocabulary::Postgres => match token {
                Year4 => "YYYY",
                Year2 => "YY",
                MonthName => "Month",
                MonthAbbr => "Mon",
                Month2 => "MM",
                Month1 => "FMMM",
                Day2 => "DD",
                Day1 => "FMDD",
                DayOfYear => "DDD",
                WeekdayName => "Day",
                WeekdayAbbr => "Dy",
                Hour24 => "HH24",
                Hour12 => "HH12",
                Minute => "MI",
                Second => "SS",
                Fraction => "US",
                AmPm => "AM",
                Literal(_) => return None,
            },
        };
        Some(spelling)
    }

    fn push_literal(self, out: &mut String, text: &str) {
        match self {
            TimeVocabulary::Java => {
                if text.chars().any(|c| c.is_ascii_alphabetic() || c == '\'') {
                    out.push('\'');
                    out.push_str(&text.replace('\'', "''"));
                    out.push('\'');
                } else {
                    out.push_str(text);
                }
            }
            TimeVocabulary::Strftime | TimeVocabulary::MySql => {
                out.push_str(&text.replace('%', "%%"));
            }
            TimeVocabulary::Postgres => {
                if text.chars().any(|c| c.is_ascii_alphabetic()) {
                    out.push('"');
                    out.push_str(&text.replace('"', "\\\""));
                    out.push('"');
                } else {
                    out.push_str(text);
                }
            }
        }
    }

    fn invalid(self, pattern: &str, position: usize, reason: &str) -> TimeFormatError {
        TimeFormatError::InvalidPattern {
            vocabulary: self,
            pattern: pattern.to_string(),
            position,
            reason: reason.to_string(),
        }
    }

    fn parse_java(self, pattern: &str) -> Result<TimeFormat, TimeFormatError> {
        use TimeFormatToken::*;
        let chars: Vec<char> = pattern.chars().collect();
        let mut format = TimeFormat::default();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c == '\'' {
                let start = i;
                i += 1;
                if chars.get(i) == Some(&'\'') {
                    format.push_literal("'");
                    i += 1;
                    continue;
                }
                let mut text = String::new();
                loop {
                    match chars.get(i) {
                        None => return Err(self.invalid(pattern, start, "unterminated quoted text")),
                        Some('\'') if chars.get(i + 1) == Some(&'\'') => {
                            text.push('\'');
                            i += 2;
                        }
                        Some('\'') => {
                            i += 1;
                            break;
                        }
                        Some(other) => {
                            text.push(*other);
                            i += 1;
                        }
                    }
                }
                format.push_literal(&text);
                continue;
            }

            if c.is_ascii_alphabetic() {
                let mut run = 1;
                while chars.get(i + run) == Some(&c) {
                    run += 1;
                }
                let token = match (c, run) {
                    ('y', 2) => Year2,
                    ('y', _) => Year4,
                    ('M', 1) => Month1,
                    ('M', 2) => Month2,
                    ('M', 3) => MonthAbbr,
                    ('M', _) => MonthName,
                    ('d', 1) => Day1,
                    ('d', 2) => Day2,
                    ('D', _) => DayOfYear,
                    ('E', 1..=3) => WeekdayAbbr,
                    ('E', _) => WeekdayName,
                    ('H', 1..=2) => Hour24,
                    ('h', 1..=2) => Hour12,
                    ('m', 1..=2) => Minute,
                    ('s', 1..=2) => Second,
                    ('S', _) => Fraction,
                    ('a', 1) => AmPm,
                    _ => return Err(self.invalid(pattern, i, "unknown pattern letter")),
                };
                format.tokens.push(token);
                i += run;
                continue;
            }

            format.push_literal(c.encode_utf8(&mut [0; 4]));
            i += 1;
        }

        Ok(format)
    }

    fn parse_percent(self, pattern: &str) -> Result<TimeFormat, TimeFormatError> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut format = TimeFormat::default();
        let mut i = 0;

        while i < chars.len() {
            if chars[i] != '%' {
                format.push_literal(chars[i].encode_utf8(&mut [0; 4]));
                i += 1;
                continue;
            }

            let start = i;
            let mut directive = String::new();
            i += 1;
            if self == TimeVocabulary::Strftime && chars.get(i) == Some(&'-') {
                directive.push('-');
                i += 1;
            }
            let Some(&c) = chars.get(i) else {
                return Err(self.invalid(pattern, start, "dangling '%'"));
            };
            directive.push(c);
            i += 1;

            if directive == "%" {
                format.push_literal("%");
                continue;
            }
            let token = self
                .directive(&directive)
                .ok_or_else(|| self.invalid(pattern, start, "unknown directive"))?;
            format.tokens.push(token);
        }

        Ok(format)
    }

    fn directive(self, directive: &str) -> Option<TimeFormatToken> {
        use TimeFormatToken::*;
        let token = match (self, directive) {
            (_, "Y") => Year4,
            (_, "y") => Year2,
            (_, "b") => MonthAbbr,
            (_, "m") => Month2,
            (_, "d") => Day2,
            (_, "j") => DayOfYear,
            (_, "a") => WeekdayAbbr,
            (_, "H") => Hour24,
            (_, "f") => Fraction,
            (_, "p") => AmPm,
            (TimeVocabulary::Strftime, "B") => MonthName,
            (TimeVocabulary::Strftime, "-m") => Month1,
            (TimeVocabulary::Strftime, "-d") => Day1,
            (TimeVocabulary::Strftime, "A") => WeekdayName,
            (TimeVocabulary::Strftime, "I") => Hour12,
            (TimeVocabulary::Strftime, "M") => Minute,
            (TimeVocabulary::Strftime, "S") => Second,
            (TimeVocabulary::MySql, "M") => MonthName,
            (TimeVocabulary::MySql, "c") => Month1,
            (TimeVocabulary::MySql, "e") => Day1,
            (TimeVocabulary::MySql, "W") => WeekdayName,
            (TimeVocabulary::MySql, "h" | "I") => Hour12,
            (TimeVocabulary::MySql, "i") => Minute,
            (TimeVocabulary::MySql, "s" | "S") => Second,
            _ => return None,
        };
        Some(token)
    }

    fn parse_postgres(self, pattern: &str) -> Result<TimeFormat, TimeFormatError> {
        use TimeFormatToken::*;
        let mut format = TimeFormat::default();
        let mut rest = pattern;

        while !rest.is_empty() {
            if let Some(quoted) = rest.strip_prefix('"') {
                let position = pattern.len() - rest.len();
                let end = quoted
                    .find('"')
                    .ok_or_else(|| self.invalid(pattern, position, "unterminated quoted text"))?;
                format.push_literal(&quoted[..end]);
                rest = &quoted[end + 1..];
                continue;
            }

            if let Some(matched) = POSTGRES_PATTERNS.iter().find(|p| rest.starts_with(**p)) {
                let token = match *matched {
                    "YYYY" => Year4,
                    "YY" => Year2,
                    "Month" | "MONTH" => MonthName,
                    "Mon" | "MON" => MonthAbbr,
                    "MM" => Month2,
                    "FMMM" => Month1,
                    "DD" => Day2,
                    "FMDD" => Day1,
                    "DDD" => DayOfYear,
                    "Day" | "DAY" => WeekdayName,
                    "Dy" | "DY" => WeekdayAbbr,
                    "HH24" => Hour24,
                    "HH12" | "HH" => Hour12,
                    "MI" => Minute,
                    "SS" => Second,
                    "US" => Fraction,
                    _ => AmPm,
                };
                format.tokens.push(token);
                rest = &rest[matched.len()..];
                continue;
            }

            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                format.push_literal(c.encode_utf8(&mut [0; 4]));
            }
            rest = chars.as_str();
        }

        Ok(format)
    }
}
