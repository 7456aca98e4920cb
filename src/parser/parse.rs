//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure: error types, cursor helpers, and the entry points.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following
//! organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: Parsing `enum` declarations
//! - `expressions`: Parsing qualified names and initializer chains
//!
//! Parser methods are split across multiple files using `impl Parser`
//! blocks, allowing each module to extend the Parser with related
//! functionality while maintaining access to the shared cursor state.
//!
//! There is no backtracking: once a grammar branch commits, any
//! violation aborts the whole parse with a positioned error.

use crate::parser::ast::Enumeration;
use crate::parser::lexer::{LexError, Lexer, Token, TokenKind};
use std::fmt;

/// Grammar-rule violation during enumeration parsing.
///
/// Carries the index of the offending token rather than a byte offset;
/// callers map it back to line/offset through the token's stored
/// position. The index points one past the last token when the stream
/// ended prematurely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub token_index: usize,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Syntax error at token {}: {}", self.token_index, self.message)
    }
}

impl std::error::Error for SyntaxError {}

/// Either of the two failure modes of the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Lex(LexError),
    Syntax(SyntaxError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(err) => err.fmt(f),
            ParseError::Syntax(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(err: SyntaxError) -> Self {
        ParseError::Syntax(err)
    }
}

/// Tokenize and parse a source buffer in one step.
pub fn parse_enumerations(source: &str) -> Result<Vec<Enumeration>, ParseError> {
    let mut parser = Parser::new(source)?;
    parser.parse_enumerations()
}

/// Recursive descent parser over a token buffer.
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    /// Tokenize `source` and position a parser at its first token.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let tokens = Lexer::new(source).tokenize()?;
        Ok(Self::from_tokens(tokens))
    }

    /// Wrap an already-lexed token sequence.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// The token buffer this parser reads from.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    // ===== Helper methods =====

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn describe_current(&self) -> String {
        match self.peek() {
            Some(token) => token.to_string(),
            None => "end of input".to_string(),
        }
    }

    pub(crate) fn syntax_error(&self, message: impl Into<String>) -> ParseError {
        ParseError::Syntax(SyntaxError {
            message: message.into(),
            token_index: self.position,
        })
    }

    pub(crate) fn expect_kind(
        &mut self,
        kind: TokenKind,
        message: &str,
    ) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.syntax_error(format!("{}, found {}", message, self.describe_current())))
        }
    }

    pub(crate) fn expect_identifier(&mut self, ctx: &str) -> Result<String, ParseError> {
        match self.peek() {
            Some(token) if token.kind == TokenKind::Ident => {
                let name = token.text.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.syntax_error(format!(
                "expected identifier {}, found {}",
                ctx,
                self.describe_current()
            ))),
        }
    }
}
