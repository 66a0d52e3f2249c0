// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Data Types
//!
//! Canonical SQL data types, unified across dialects. Each dialect spells
//! these differently (`INT64` vs `BIGINT`, `ARRAY<INT>` vs `INT[]`); the
//! spelling tables live with the dialect settings, the tree only holds the
//! canonical kind.

use serde::{Deserialize, Serialize};

/// SQL data types (unified across dialects)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    // Boolean
    Boolean,

    // Numeric types
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Float,
    Double,
    Decimal {
        precision: Option<u32>,
        scale: Option<u32>,
    },

    // String types
    Char(Option<u32>),
    Varchar(Option<u32>),
    Text,

    // Binary types
    Binary,

    // Date/Time types
    Date,
    Timestamp,

    // JSON
    Json,

    // Composite types
    Array(Box<DataType>),
    Map(Box<DataType>, Box<DataType>),
    Struct(Vec<StructField>),

    // Unknown/Other (with original type name)
    Other(String),
}

impl DataType {
    pub fn array(element: DataType) -> Self {
        DataType::Array(Box::new(element))
    }

    pub fn map(key: DataType, value: DataType) -> Self {
        DataType::Map(Box::new(key), Box::new(value))
    }

    /// Kind of a scalar type, `None` for composites and `Other`
    pub fn kind(&self) -> Option<TypeKind> {
        let kind = match self {
            DataType::Boolean => TypeKind::Boolean,
            DataType::TinyInt => TypeKind::TinyInt,
            DataType::SmallInt => TypeKind::SmallInt,
            DataType::Int => TypeKind::Int,
            DataType::BigInt => TypeKind::BigInt,
            DataType::Float => TypeKind::Float,
            DataType::Double => TypeKind::Double,
            DataType::Decimal { .. } => TypeKind::Decimal,
            DataType::Char(_) => TypeKind::Char,
            DataType::Varchar(_) => TypeKind::Varchar,
            DataType::Text => TypeKind::Text,
            DataType::Binary => TypeKind::Binary,
            DataType::Date => TypeKind::Date,
            DataType::Timestamp => TypeKind::Timestamp,
            DataType::Json => TypeKind::Json,
            DataType::Array(_) | DataType::Map(..) | DataType::Struct(_) | DataType::Other(_) => {
                return None;
            }
        };
        Some(kind)
    }

    /// True for ARRAY, MAP and STRUCT
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            DataType::Array(_) | DataType::Map(..) | DataType::Struct(_)
        )
    }
}

/// A named field of a STRUCT type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructField {
    pub name: String,
    pub data_type: DataType,
}

impl StructField {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Parameterless discriminant of the scalar [`DataType`]s, the key of the
/// per-dialect spelling tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TypeKind {
    Boolean,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Float,
    Double,
    Decimal,
    Char,
    Varchar,
    Text,
    Binary,
    Date,
    Timestamp,
    Json,
}

impl TypeKind {
    pub const ALL: [TypeKind; 15] = [
        TypeKind::Boolean,
        TypeKind::TinyInt,
        TypeKind::SmallInt,
        TypeKind::Int,
        TypeKind::BigInt,
        TypeKind::Float,
        TypeKind::Double,
        TypeKind::Decimal,
        TypeKind::Char,
        TypeKind::Varchar,
        TypeKind::Text,
        TypeKind::Binary,
        TypeKind::Date,
        TypeKind::Timestamp,
        TypeKind::Json,
    ];

    /// The type with no parameters
    pub fn to_data_type(self) -> DataType {
        match self {
            TypeKind::Boolean => DataType::Boolean,
            TypeKind::TinyInt => DataType::TinyInt,
            TypeKind::SmallInt => DataType::SmallInt,
            TypeKind::Int => DataType::Int,
            TypeKind::BigInt => DataType::BigInt,
            TypeKind::Float => DataType::Float,
            TypeKind::Double => DataType::Double,
            TypeKind::Decimal => DataType::Decimal {
                precision: None,
                scale: None,
            },
            TypeKind::Char => DataType::Char(None),
            TypeKind::Varchar => DataType::Varchar(None),
            TypeKind::Text => DataType::Text,
            TypeKind::Binary => DataType::Binary,
            TypeKind::Date => DataType::Date,
            TypeKind::Timestamp => DataType::Timestamp,
            TypeKind::Json => DataType::Json,
        }
    }
}
