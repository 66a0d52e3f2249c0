// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Type Mapper
//!
//! Spelling of canonical [`DataType`]s in one dialect, and the reverse
//! lookup used while parsing.
//!
//! ## Composite styles
//!
//! | Dialect      | Array      | Map           | Struct            |
//! |--------------|------------|---------------|-------------------|
//! | hive         | `ARRAY<T>` | `MAP<K, V>`   | `STRUCT<a T>`     |
//! | spark        | `ARRAY<T>` | `MAP<K, V>`   | `STRUCT<a: T>`    |
//! | bigquery     | `ARRAY<T>` | unsupported   | `STRUCT<a T>`     |
//! | presto/trino | `ARRAY(T)` | `MAP(K, V)`   | `ROW(a T)`        |
//! | duckdb       | `T[]`      | `MAP(K, V)`   | `STRUCT(a T)`     |
//! | postgres     | `T[]`      | unsupported   | unsupported       |
//!
//! ## Stability
//!
//! Rendering a type, parsing the result and rendering again yields the
//! same text. Spellings shared by several canonical kinds (BigQuery
//! `INT64`, Presto `VARCHAR`) parse to a single kind, so parsing a rendered
//! type gives back the original only where the spellings are distinct.

use crate::error::DialectError;
use unified_sql_ir::{DataType, TypeKind};

/// Brackets around the parameters of a composite type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiters {
    /// `ARRAY<INT>`
    Angle,
    /// `ARRAY(INT)`
    Paren,
}

impl Delimiters {
    pub fn open(self) -> char {
        match self {
            Delimiters::Angle => '<',
            Delimiters::Paren => '(',
        }
    }

    pub fn close(self) -> char {
        match self {
            Delimiters::Angle => '>',
            Delimiters::Paren => ')',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayStyle {
    /// `ARRAY<T>` or `ARRAY(T)`
    Keyword(Delimiters),
    /// `T[]`
    Suffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapStyle {
    Keyword(Delimiters),
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructStyle {
    Keyword {
        /// `STRUCT` or `ROW`
        name: &'static str,
        delimiters: Delimiters,
        /// Between field name and type: `" "` or `": "`
        field_separator: &'static str,
    },
    Unsupported,
}

/// Spellings accepted for every dialect, in addition to its own
const COMMON_SPELLINGS: &[(&str, TypeKind)] = &[
    ("BOOLEAN", TypeKind::Boolean),
    ("BOOL", TypeKind::Boolean),
    ("TINYINT", TypeKind::TinyInt),
    ("BYTE", TypeKind::TinyInt),
    ("SMALLINT", TypeKind::SmallInt),
    ("SHORT", TypeKind::SmallInt),
    ("INT2", TypeKind::SmallInt),
    ("INT", TypeKind::Int),
    ("INTEGER", TypeKind::Int),
    ("INT4", TypeKind::Int),
    ("BIGINT", TypeKind::BigInt),
    ("LONG", TypeKind::BigInt),
    ("INT8", TypeKind::BigInt),
    ("INT64", TypeKind::BigInt),
    ("FLOAT", TypeKind::Float),
    ("FLOAT4", TypeKind::Float),
    ("REAL", TypeKind::Float),
    ("DOUBLE", TypeKind::Double),
    ("DOUBLE PRECISION", TypeKind::Double),
    ("FLOAT8", TypeKind::Double),
    ("FLOAT64", TypeKind::Double),
    ("DECIMAL", TypeKind::Decimal),
    ("DEC", TypeKind::Decimal),
    ("NUMERIC", TypeKind::Decimal),
    ("CHAR", TypeKind::Char),
    ("CHARACTER", TypeKind::Char),
    ("VARCHAR", TypeKind::Varchar),
    ("TEXT", TypeKind::Text),
    ("STRING", TypeKind::Text),
    ("BINARY", TypeKind::Binary),
    ("VARBINARY", TypeKind::Binary),
    ("BLOB", TypeKind::Binary),
    ("BYTEA", TypeKind::Binary),
    ("BYTES", TypeKind::Binary),
    ("DATE", TypeKind::Date),
    ("TIMESTAMP", TypeKind::Timestamp),
    ("DATETIME", TypeKind::Timestamp),
    ("JSON", TypeKind::Json),
];

/// ANSI spellings of the scalar kinds
pub const ANSI_SPELLINGS: &[(TypeKind, &str)] = &[
    (TypeKind::Boolean, "BOOLEAN"),
    (TypeKind::TinyInt, "TINYINT"),
    (TypeKind::SmallInt, "SMALLINT"),
    (TypeKind::Int, "INT"),
    (TypeKind::BigInt, "BIGINT"),
    (TypeKind::Float, "FLOAT"),
    (TypeKind::Double, "DOUBLE"),
    (TypeKind::Decimal, "DECIMAL"),
    (TypeKind::Char, "CHAR"),
    (TypeKind::Varchar, "VARCHAR"),
    (TypeKind::Text, "TEXT"),
    (TypeKind::Binary, "BINARY"),
    (TypeKind::Date, "DATE"),
    (TypeKind::Timestamp, "TIMESTAMP"),
    (TypeKind::Json, "JSON"),
];

/// Type spelling rules of one dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRules {
    /// Canonical kind to spelling; a missing kind is unsupported
    pub spellings: &'static [(TypeKind, &'static str)],
    /// Kinds whose spelling takes no length/precision parameters
    pub parameterless: &'static [TypeKind],
    pub array: ArrayStyle,
    pub map: MapStyle,
    pub structs: StructStyle,
}

impl TypeRules {
    pub const fn base() -> Self {
        Self {
            spellings: ANSI_SPELLINGS,
            parameterless: &[],
            array: ArrayStyle::Keyword(Delimiters::Angle),
            map: MapStyle::Keyword(Delimiters::Angle),
            structs: StructStyle::Keyword {
                name: "STRUCT",
                delimiters: Delimiters::Angle,
                field_separator: " ",
            },
        }
    }

    /// Spelling of a scalar kind, `None` when the dialect lacks it
    pub fn spelling(&self, kind: TypeKind) -> Option<&'static str> {
        self.spellings
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, spelling)| *spelling)
    }

    /// Canonical kind of a scalar type name (case-insensitive)
    pub fn scalar(&self, name: &str) -> Option<TypeKind> {
        COMMON_SPELLINGS
            .iter()
            .find(|(spelling, _)| spelling.eq_ignore_ascii_case(name))
            .map(|(_, kind)| *kind)
            .or_else(|| {
                self.spellings
                    .iter()
                    .find(|(_, spelling)| spelling.eq_ignore_ascii_case(name))
                    .map(|(kind, _)| *kind)
            })
    }

    /// Render a canonical type in this dialect
    pub fn render(&self, data_type: &DataType) -> Result<String, DialectError> {
        let mut out = String::new();
        self.render_into(data_type, &mut out)?;
        Ok(out)
    }

    fn render_into(&self, data_type: &DataType, out: &mut String) -> Result<(), DialectError> {
        match data_type {
            DataType::Array(element) => match self.array {
                ArrayStyle::Keyword(delimiters) => {
                    out.push_str("ARRAY");
                    out.push(delimiters.open());
                    self.render_into(element, out)?;
                    out.push(delimiters.close());
                }
                ArrayStyle::Suffix => {
                    self.render_into(element, out)?;
                    out.push_str("[]");
                }
            },
            DataType::Map(key, value) => match self.map {
                MapStyle::Keyword(delimiters) => {
                    out.push_str("MAP");
                    out.push(delimiters.open());
                    self.render_into(key, out)?;
                    out.push_str(", ");
                    self.render_into(value, out)?;
                    out.push(delimiters.close());
                }
                MapStyle::Unsupported => return Err(unsupported("MAP", "no map type")),
            },
            DataType::Struct(fields) => match self.structs {
                StructStyle::Keyword {
                    name,
                    delimiters,
                    field_separator,
                } => {
                    out.push_str(name);
                    out.push(delimiters.open());
                    for (i, field) in fields.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        out.push_str(&field.name);
                        out.push_str(field_separator);
                        self.render_into(&field.data_type, out)?;
                    }
                    out.push(delimiters.close());
                }
                StructStyle::Unsupported => return Err(unsupported("STRUCT", "no struct type")),
            },
            DataType::Other(name) => out.push_str(name),
            scalar => {
                // Every non-composite, non-Other type has a kind
                let Some(kind) = scalar.kind() else {
                    return Err(unsupported(&format!("{scalar:?}"), "unknown type"));
                };
                let spelling = self
                    .spelling(kind)
                    .ok_or_else(|| unsupported(&format!("{kind:?}"), "no spelling"))?;
                out.push_str(spelling);
                if !self.parameterless.contains(&kind) {
                    push_parameters(scalar, out);
                }
            }
        }
        Ok(())
    }
}

impl Default for TypeRules {
    fn default() -> Self {
        Self::base()
    }
}

fn push_parameters(data_type: &DataType, out: &mut String) {
    match data_type {
        DataType::Decimal {
            precision: Some(precision),
            scale,
        } => {
            out.push_str(&format!("({precision}"));
            if let Some(scale) = scale {
                out.push_str(&format!(", {scale}"));
            }
            out.push(')');
        }
        DataType::Char(Some(length)) | DataType::Varchar(Some(length)) => {
            out.push_str(&format!("({length})"));
        }
        _ => {}
    }
}

fn unsupported(data_type: &str, reason: &str) -> DialectError {
    DialectError::UnsupportedType {
        data_type: data_type.to_string(),
        reason: reason.to_string(),
    }
}
