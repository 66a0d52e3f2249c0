// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Tokenizer
//!
//! Splits SQL text into [`Token`]s using the quoting, escaping and keyword
//! rules of one dialect.
//!
//! ## Dialect-sensitive lexing
//!
//! - `"x"` is a string in Hive, Spark and BigQuery and a quoted identifier
//!   elsewhere; `` `x` `` is an identifier only where backtick is the quote
//! - Backslash escapes (`'\n'`, `'毛'`) are resolved only in dialects
//!   that enable them
//! - Whether a word is a [`TokenKind::Keyword`] depends on the dialect's
//!   reserved set (`STORED` is reserved in Hive, an identifier in Presto)
//!
//! [`Tokenizer`] is a lazy iterator; [`tokenize`] collects it.

use crate::error::{TokenizeError, TokenizeErrorKind};
use serde::Serialize;
use std::fmt;
use unified_sql_dialect::DialectSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// Reserved word
    Keyword,
    Identifier,
    /// Identifier in the dialect's quotes, text without quotes
    QuotedIdentifier,
    /// String literal, text unescaped
    String,
    Number,
    Operator,
    Comment,
    /// `/*+ ... */`, text is the body
    Hint,
    /// `;`
    EndOfStatement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Byte offset of the first character
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }

    /// Whether this is a bare word (reserved or not) equal to `word`
    pub fn is_word(&self, word: &str) -> bool {
        matches!(self.kind, TokenKind::Keyword | TokenKind::Identifier)
            && self.text.eq_ignore_ascii_case(word)
    }

    /// Whether this is the reserved word `keyword`
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text.eq_ignore_ascii_case(keyword)
    }

    pub fn is_operator(&self, op: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == op
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "'{}'", self.text),
            TokenKind::EndOfStatement => f.write_str(";"),
            _ => f.write_str(&self.text),
        }
    }
}

const TWO_CHAR_OPERATORS: &[&str] = &["<=", ">=", "<>", "!=", "==", "||", "::", "->"];
const ONE_CHAR_OPERATORS: &str = "+-*/%=<>()[],.:";

/// Lazy tokenizer over one text
///
/// Yields tokens until the input is exhausted or an error occurs; after an
/// error the iterator is finished. [`Tokenizer::reset`] restarts it.
pub struct Tokenizer<'a> {
    source: &'a str,
    settings: &'a DialectSettings,
    pos: usize,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str, settings: &'a DialectSettings) -> Self {
        Self {
            source,
            settings,
            pos: 0,
            finished: false,
        }
    }

    /// Restart from the beginning of the text
    pub fn reset(&mut self) {
        self.pos = 0;
        self.finished = false;
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn error(&mut self, offset: usize, kind: TokenizeErrorKind) -> TokenizeError {
        self.finished = true;
        TokenizeError::new(offset, kind)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn next_token(&mut self) -> Option<Result<Token, TokenizeError>> {
        self.skip_whitespace();
        let start = self.pos;
        let c = self.peek()?;

        let token = if c == '-' && self.peek_nth(1) == Some('-') {
            Ok(self.line_comment(start))
        } else if c == '/' && self.peek_nth(1) == Some('*') {
            self.block_comment(start)
        } else if c == '\'' || self.settings.is_string_quote(c) {
            self.string(start, c)
        } else if c == self.settings.identifier_quote {
            self.quoted_identifier(start, c)
        } else if c.is_ascii_digit() || (c == '.' && self.peek_nth(1).is_some_and(|n| n.is_ascii_digit())) {
            Ok(self.number(start))
        } else if c.is_alphabetic() || c == '_' {
            Ok(self.word(start))
        } else if c == ';' {
            self.bump();
            Ok(Token::new(TokenKind::EndOfStatement, ";", start))
        } else {
            self.operator(start, c)
        };
        Some(token)
    }

    fn line_comment(&mut self, start: usize) -> Token {
        self.pos += 2;
        let body_start = self.pos;
        while self.peek().is_some_and(|c| c != '\n') {
            self.bump();
        }
        Token::new(TokenKind::Comment, self.source[body_start..self.pos].trim(), start)
    }

    fn block_comment(&mut self, start: usize) -> Result<Token, TokenizeError> {
        self.pos += 2;
        let is_hint = self.peek() == Some('+');
        if is_hint {
            self.bump();
        }
        let body_start = self.pos;
        let Some(end) = self.rest().find("*/") else {
            self.pos = self.source.len();
            return Err(self.error(start, TokenizeErrorKind::UnterminatedComment));
        };
        let body = self.source[body_start..body_start + end].trim();
        self.pos = body_start + end + 2;
        let kind = if is_hint {
            TokenKind::Hint
        } else {
            TokenKind::Comment
        };
        Ok(Token::new(kind, body, start))
    }

    fn string(&mut self, start: usize, quote: char) -> Result<Token, TokenizeError> {
        self.bump();
        let mut value = String::new();
        loop {
            let Some(c) = self.bump() else {
                return Err(self.error(start, TokenizeErrorKind::UnterminatedString));
            };
            if c == quote {
                if self.peek() == Some(quote) {
                    self.bump();
                    value.push(quote);
                    continue;
                }
                return Ok(Token::new(TokenKind::String, value, start));
            }
            if c == '\\' && self.settings.backslash_escapes {
                let escape_offset = self.pos - 1;
                value.push(self.escape(escape_offset)?);
            } else {
                value.push(c);
            }
        }
    }

    /// Resolve the escape after a backslash
    fn escape(&mut self, offset: usize) -> Result<char, TokenizeError> {
        let Some(c) = self.bump() else {
            return Err(self.error(
                offset,
                TokenizeErrorKind::InvalidEscape("trailing backslash".to_string()),
            ));
        };
        let resolved = match c {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '0' => '\0',
            'u' => self.unicode_escape(offset, 4)?,
            'U' => self.unicode_escape(offset, 8)?,
            other => other,
        };
        Ok(resolved)
    }

    fn unicode_escape(&mut self, offset: usize, digits: usize) -> Result<char, TokenizeError> {
        let hex: String = self.rest().chars().take(digits).collect();
        if hex.len() != digits || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(self.error(
                offset,
                TokenizeErrorKind::InvalidEscape(format!("expected {digits} hex digits")),
            ));
        }
        self.pos += digits;
        u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| {
                self.error(
                    offset,
                    TokenizeErrorKind::InvalidEscape(format!("invalid code point U+{hex}")),
                )
            })
    }

    fn quoted_identifier(&mut self, start: usize, quote: char) -> Result<Token, TokenizeError> {
        self.bump();
        let mut value = String::new();
        loop {
            let Some(c) = self.bump() else {
                return Err(self.error(start, TokenizeErrorKind::UnterminatedQuotedIdentifier));
            };
            if c == quote {
                if self.peek() == Some(quote) {
                    self.bump();
                    value.push(quote);
                    continue;
                }
                return Ok(Token::new(TokenKind::QuotedIdentifier, value, start));
            }
            value.push(c);
        }
    }

    fn number(&mut self, start: usize) -> Token {
        let eat_digits = |this: &mut Self| {
            while this.peek().is_some_and(|c| c.is_ascii_digit()) {
                this.bump();
            }
        };
        eat_digits(self);
        if self.peek() == Some('.') {
            self.bump();
            eat_digits(self);
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            let sign = usize::from(matches!(self.peek_nth(1), Some('+' | '-')));
            if self.peek_nth(1 + sign).is_some_and(|c| c.is_ascii_digit()) {
                self.pos += 1 + sign;
                eat_digits(self);
            }
        }
        Token::new(TokenKind::Number, &self.source[start..self.pos], start)
    }

    fn word(&mut self, start: usize) -> Token {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.bump();
        }
        let word = &self.source[start..self.pos];
        let kind = if self.settings.is_keyword(word) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Token::new(kind, word, start)
    }

    fn operator(&mut self, start: usize, c: char) -> Result<Token, TokenizeError> {
        if let Some(op) = TWO_CHAR_OPERATORS
            .iter()
            .find(|op| self.rest().starts_with(**op))
        {
            self.pos += op.len();
            return Ok(Token::new(TokenKind::Operator, *op, start));
        }
        if ONE_CHAR_OPERATORS.contains(c) {
            self.bump();
            return Ok(Token::new(TokenKind::Operator, c.to_string(), start));
        }
        Err(self.error(start, TokenizeErrorKind::UnexpectedCharacter(c)))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_none() {
            self.finished = true;
        }
        token
    }
}

/// Tokenize a whole text
pub fn tokenize(source: &str, settings: &DialectSettings) -> Result<Vec<Token>, TokenizeError> {
    Tokenizer::new(source, settings).collect()
}
