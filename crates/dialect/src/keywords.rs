// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Reserved words
//!
//! Every dialect reserves the base set plus its additions, minus its
//! removals. Type names are never reserved, and words that only mean
//! something in one position (`NULLS`, `FIRST`, `COMMENT`) are matched by
//! the parser as plain identifiers.
//!
//! Clause keywords (`LOCATION`, `STORED`, ...) are reserved where a dialect
//! has the clause, but still name columns and tables outside it.

/// Words reserved in every dialect unless removed
pub const BASE_KEYWORDS: &[&str] = &[
    "ALL", "AND", "ARRAY", "AS", "ASC", "BETWEEN", "BY", "CASE", "CAST", "CREATE", "CROSS",
    "DESC", "DISTINCT", "DROP", "ELSE", "END", "EXCEPT", "EXISTS", "EXTRACT", "FALSE", "FROM",
    "FULL", "GROUP", "HAVING", "ILIKE", "IN", "INNER", "INSERT", "INTERSECT", "INTO", "IS",
    "JOIN", "LEFT", "LIKE", "LIMIT", "NATURAL", "NOT", "NULL", "OFFSET", "ON", "OR", "ORDER",
    "OUTER", "OVER", "PARTITION", "RANGE", "RIGHT", "ROWS", "SELECT", "TABLE", "THEN", "TRUE",
    "UNION", "USING", "VALUES", "WHEN", "WHERE", "WITH",
];

/// Storage clause words; reserved by the Hive family, usable as names
pub const CLAUSE_KEYWORDS: &[&str] =
    &["LOCATION", "OVERWRITE", "PARTITIONED", "STORED", "TBLPROPERTIES"];

/// Check whether a word is a clause keyword (case-insensitive)
pub fn is_clause_keyword(word: &str) -> bool {
    CLAUSE_KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(word))
}

/// Keyword additions and removals of one dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRules {
    pub additions: &'static [&'static str],
    pub removals: &'static [&'static str],
}

impl KeywordRules {
    pub const fn base() -> Self {
        Self {
            additions: &[],
            removals: &[],
        }
    }

    /// Check whether a word is reserved (case-insensitive)
    pub fn is_keyword(&self, word: &str) -> bool {
        let contains = |set: &[&str]| set.iter().any(|kw| kw.eq_ignore_ascii_case(word));
        contains(self.additions) || (contains(BASE_KEYWORDS) && !contains(self.removals))
    }
}

impl Default for KeywordRules {
    fn default() -> Self {
        Self::base()
    }
}
