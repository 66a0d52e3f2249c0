// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Recursive Descent Parser
//!
//! Builds canonical [`Statement`]s from tokens. The grammar is split by
//! construct:
//!
//! - [`expr`]: precedence climbing over operators and predicates
//! - [`functions`]: calls, native alias resolution and lambdas
//! - [`query`]: SELECT, set operations, joins, ORDER BY and windows
//! - [`ddl`]: CREATE TABLE with storage options, INSERT, DROP TABLE
//! - [`types`]: scalar and composite type syntax
//!
//! Everything dialect-specific comes from the [`ParseContext`]'s settings
//! record; the produced tree never records the dialect.

mod ddl;
mod expr;
mod functions;
mod query;
mod types;

use crate::context::ParseContext;
use crate::error::{ParseError, ParseResult};
use crate::tokenizer::{Token, TokenKind, Tokenizer};
use tracing::debug;
use unified_sql_dialect::DialectSettings;
use unified_sql_dialect::keywords::is_clause_keyword;
use unified_sql_ir::{Ident, ObjectName, Statement};

/// Parser over the tokens of one text
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
    ctx: ParseContext,
}

impl Parser {
    /// Tokenize `sql` and prepare to parse it
    pub fn new(sql: &str, ctx: ParseContext) -> ParseResult<Self> {
        let tokens = Tokenizer::new(sql, ctx.settings()).collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_tokens(tokens, ctx))
    }

    /// Parse already tokenized text
    ///
    /// Comments are dropped. Hints are kept only directly after `SELECT` in
    /// dialects that have them; anywhere else they are comments.
    pub fn from_tokens(tokens: Vec<Token>, ctx: ParseContext) -> Self {
        let supports_hints = ctx.settings().supports_hints;
        let mut kept: Vec<Token> = Vec::with_capacity(tokens.len());
        for token in tokens {
            match token.kind {
                TokenKind::Comment => continue,
                TokenKind::Hint => {
                    let after_select = kept.last().is_some_and(|t| t.is_keyword("SELECT"));
                    if !(supports_hints && after_select) {
                        debug!(hint = %token.text, "Treating hint as a comment");
                        continue;
                    }
                }
                _ => {}
            }
            kept.push(token);
        }
        Self {
            tokens: kept,
            index: 0,
            ctx,
        }
    }

    pub fn settings(&self) -> &'static DialectSettings {
        self.ctx.settings()
    }

    /// Parse every `;`-separated statement
    pub fn parse_statements(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();
        loop {
            while self.consume_kind(TokenKind::EndOfStatement) {}
            if self.is_at_end() {
                break;
            }
            let statement = self.parse_statement()?;
            debug!(
                dialect = %self.ctx.dialect(),
                kind = statement.kind(),
                "Parsed statement"
            );
            statements.push(statement);
            if !self.is_at_end() && !self.consume_kind(TokenKind::EndOfStatement) {
                return Err(self.unexpected("end of statement"));
            }
        }
        Ok(statements)
    }

    /// Parse one statement
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        if self.peek_keyword("SELECT")
            || self.peek_keyword("WITH")
            || self.peek_keyword("VALUES")
            || self.peek_query_in_parens()
        {
            return Ok(self.parse_query()?.into());
        }
        if self.peek_keyword("CREATE") {
            return self.parse_create();
        }
        if self.peek_keyword("INSERT") {
            return self.parse_insert();
        }
        if self.peek_keyword("DROP") {
            return self.parse_drop();
        }
        Ok(Statement::Expression(self.parse_expr()?))
    }

    /// Fail unless every token has been consumed
    pub fn finish(&self) -> ParseResult<()> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.unexpected("end of input"))
        }
    }

    // =========================================================================
    // Token cursor
    // =========================================================================

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.index + n)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    fn is_at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    /// Offset of the current token, or the end of the last one
    fn offset(&self) -> usize {
        match self.peek() {
            Some(token) => token.offset,
            None => self
                .tokens
                .last()
                .map(|t| t.offset + t.text.len())
                .unwrap_or(0),
        }
    }

    fn peek_keyword(&self, keyword: &str) -> bool {
        self.peek().is_some_and(|t| t.is_keyword(keyword))
    }

    /// Reserved or not, e.g. `NULLS`, `FIRST`, `LOCATION` outside Hive
    fn peek_word(&self, word: &str) -> bool {
        self.peek().is_some_and(|t| t.is_word(word))
    }

    fn peek_operator(&self, op: &str) -> bool {
        self.peek().is_some_and(|t| t.is_operator(op))
    }

    fn peek_nth_operator(&self, n: usize, op: &str) -> bool {
        self.peek_nth(n).is_some_and(|t| t.is_operator(op))
    }

    fn consume_keyword(&mut self, keyword: &str) -> bool {
        self.consume_if(|t| t.is_keyword(keyword))
    }

    fn consume_word(&mut self, word: &str) -> bool {
        self.consume_if(|t| t.is_word(word))
    }

    fn consume_words(&mut self, words: &[&str]) -> bool {
        let matches = words
            .iter()
            .enumerate()
            .all(|(i, word)| self.peek_nth(i).is_some_and(|t| t.is_word(word)));
        if matches {
            self.index += words.len();
        }
        matches
    }

    fn consume_operator(&mut self, op: &str) -> bool {
        self.consume_if(|t| t.is_operator(op))
    }

    fn consume_kind(&mut self, kind: TokenKind) -> bool {
        self.consume_if(|t| t.kind == kind)
    }

    fn consume_if(&mut self, predicate: impl FnOnce(&Token) -> bool) -> bool {
        if self.peek().is_some_and(predicate) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<()> {
        if self.consume_keyword(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(keyword))
        }
    }

    fn expect_operator(&mut self, op: &str) -> ParseResult<()> {
        if self.consume_operator(op) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{op}'")))
        }
    }

    fn expect_string(&mut self, what: &str) -> ParseResult<String> {
        match self.peek() {
            Some(token) if token.kind == TokenKind::String => {
                let value = token.text.clone();
                self.index += 1;
                Ok(value)
            }
            _ => Err(self.unexpected(what)),
        }
    }

    /// `( SELECT`, `( WITH` or `( (` leading to one of them
    fn peek_query_in_parens(&self) -> bool {
        let mut n = 0;
        while self.peek_nth_operator(n, "(") {
            n += 1;
        }
        n > 0
            && self
                .peek_nth(n)
                .is_some_and(|t| t.is_keyword("SELECT") || t.is_keyword("WITH"))
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// An unreserved or quoted identifier, or a clause keyword used as a name
    fn parse_identifier(&mut self) -> ParseResult<Ident> {
        match self.peek() {
            Some(token)
                if matches!(token.kind, TokenKind::Identifier | TokenKind::QuotedIdentifier)
                    || (token.kind == TokenKind::Keyword && is_clause_keyword(&token.text)) =>
            {
                let quoted = token.kind == TokenKind::QuotedIdentifier;
                let ident = self.ctx.ident(&token.text, quoted);
                self.index += 1;
                Ok(ident)
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Any word, reserved ones included, as after `AS` or a `.`
    fn parse_any_word(&mut self) -> ParseResult<Ident> {
        match self.peek() {
            Some(token) if token.kind == TokenKind::Keyword => {
                let ident = self.ctx.ident(&token.text, false);
                self.index += 1;
                Ok(ident)
            }
            _ => self.parse_identifier(),
        }
    }

    /// `a.b.c`
    fn parse_object_name(&mut self) -> ParseResult<ObjectName> {
        let mut parts = vec![self.parse_identifier()?];
        while self.consume_operator(".") {
            parts.push(self.parse_any_word()?);
        }
        Ok(ObjectName(parts))
    }

    /// `(a, b, c)`
    fn parse_parenthesized_identifiers(&mut self) -> ParseResult<Vec<Ident>> {
        self.expect_operator("(")?;
        let idents = self.parse_comma_separated(Self::parse_identifier)?;
        self.expect_operator(")")?;
        Ok(idents)
    }

    fn parse_comma_separated<T>(
        &mut self,
        mut parse: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        let mut items = vec![parse(self)?];
        while self.consume_operator(",") {
            items.push(parse(self)?);
        }
        Ok(items)
    }

    // =========================================================================
    // Errors
    // =========================================================================

    fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                offset: token.offset,
                expected: expected.to_string(),
                found: token.to_string(),
            },
            None => ParseError::UnexpectedEnd {
                expected: expected.to_string(),
            },
        }
    }

    fn unsupported(&self, clause: &str) -> ParseError {
        ParseError::UnsupportedClause {
            offset: self.offset(),
            dialect: self.ctx.dialect(),
            clause: clause.to_string(),
        }
    }

    /// Run `parse` one nesting level deeper
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        let offset = self.offset();
        self.ctx.enter_recursive_context(offset)?;
        let result = parse(self);
        self.ctx.exit_recursive_context();
        result
    }
}
