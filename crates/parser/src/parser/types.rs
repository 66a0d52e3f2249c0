// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Type syntax
//!
//! Composite types are read in either delimiter style (`ARRAY<INT>` and
//! `ARRAY(INT)`, `STRUCT<a: INT>` and `ROW(a INT)`) whatever the source
//! dialect; scalar names resolve through the dialect's spelling table.

use super::Parser;
use crate::error::{ParseError, ParseResult};
use crate::tokenizer::TokenKind;
use unified_sql_ir::{DataType, StructField, TypeKind};

impl Parser {
    /// Parse a type, including `[]` array suffixes
    pub fn parse_data_type(&mut self) -> ParseResult<DataType> {
        self.nested(|p| {
            let mut data_type = p.parse_base_type()?;
            while p.peek_operator("[") && p.peek_nth_operator(1, "]") {
                p.index += 2;
                data_type = DataType::array(data_type);
            }
            Ok(data_type)
        })
    }

    fn parse_base_type(&mut self) -> ParseResult<DataType> {
        let offset = self.offset();
        let name = match self.peek() {
            Some(token) if matches!(token.kind, TokenKind::Identifier | TokenKind::Keyword) => {
                token.text.to_ascii_uppercase()
            }
            _ => return Err(self.unexpected("data type")),
        };
        self.index += 1;

        match name.as_str() {
            "ARRAY" => {
                let close = self.open_type_arguments(offset)?;
                let element = self.parse_data_type()?;
                self.expect_operator(close)?;
                Ok(DataType::array(element))
            }
            "MAP" => {
                let close = self.open_type_arguments(offset)?;
                let key = self.parse_data_type()?;
                self.expect_operator(",")?;
                let value = self.parse_data_type()?;
                self.expect_operator(close)?;
                Ok(DataType::map(key, value))
            }
            "STRUCT" | "ROW" => {
                let close = self.open_type_arguments(offset)?;
                let fields = self.parse_comma_separated(Self::parse_struct_field)?;
                self.expect_operator(close)?;
                Ok(DataType::Struct(fields))
            }
            _ => self.parse_scalar_type(name, offset),
        }
    }

    /// Consume `<` or `(` and return the matching closer
    fn open_type_arguments(&mut self, offset: usize) -> ParseResult<&'static str> {
        if self.consume_operator("<") {
            Ok(">")
        } else if self.consume_operator("(") {
            Ok(")")
        } else {
            Err(ParseError::MalformedType {
                offset,
                reason: "expected '<' or '(' after composite type".to_string(),
            })
        }
    }

    /// `name: type` or `name type`
    fn parse_struct_field(&mut self) -> ParseResult<StructField> {
        let name = match self.peek() {
            Some(token)
                if matches!(
                    token.kind,
                    TokenKind::Identifier | TokenKind::QuotedIdentifier | TokenKind::Keyword
                ) =>
            {
                token.text.clone()
            }
            _ => return Err(self.unexpected("field name")),
        };
        self.index += 1;
        self.consume_operator(":");
        let data_type = self.parse_data_type()?;
        Ok(StructField { name, data_type })
    }

    fn parse_scalar_type(&mut self, mut name: String, offset: usize) -> ParseResult<DataType> {
        if name == "DOUBLE" && self.consume_word("PRECISION") {
            name.push_str(" PRECISION");
        }
        let params = if self.peek_operator("(") {
            self.parse_type_parameters()?
        } else {
            Vec::new()
        };

        let Some(kind) = self.settings().types.scalar(&name) else {
            if !params.is_empty() {
                let params: Vec<String> = params.iter().map(u32::to_string).collect();
                name = format!("{name}({})", params.join(", "));
            }
            return Ok(DataType::Other(name));
        };

        match (kind, params.as_slice()) {
            (TypeKind::Decimal, []) => Ok(DataType::Decimal {
                precision: None,
                scale: None,
            }),
            (TypeKind::Decimal, [precision]) => Ok(DataType::Decimal {
                precision: Some(*precision),
                scale: None,
            }),
            (TypeKind::Decimal, [precision, scale]) => Ok(DataType::Decimal {
                precision: Some(*precision),
                scale: Some(*scale),
            }),
            (TypeKind::Char, [length]) => Ok(DataType::Char(Some(*length))),
            (TypeKind::Varchar, [length]) => Ok(DataType::Varchar(Some(*length))),
            // Fractional-second precision has no canonical slot
            (TypeKind::Timestamp, [_]) => Ok(DataType::Timestamp),
            (kind, []) => Ok(kind.to_data_type()),
            (_, params) => Err(ParseError::MalformedType {
                offset,
                reason: format!("{name} does not take {} parameter(s)", params.len()),
            }),
        }
    }

    /// `(n[, m])`
    fn parse_type_parameters(&mut self) -> ParseResult<Vec<u32>> {
        self.expect_operator("(")?;
        let params = self.parse_comma_separated(|p| {
            let offset = p.offset();
            match p.peek() {
                Some(token) if token.kind == TokenKind::Number => {
                    let value = token.text.parse::<u32>().map_err(|_| ParseError::MalformedType {
                        offset,
                        reason: format!("'{}' is not a valid type parameter", token.text),
                    })?;
                    p.index += 1;
                    Ok(value)
                }
                _ => Err(p.unexpected("type parameter")),
            }
        })?;
        self.expect_operator(")")?;
        Ok(params)
    }
}
