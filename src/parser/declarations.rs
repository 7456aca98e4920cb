//! Declaration parsing implementation
//!
//! This module handles the `enum` declaration grammar:
//!
//! ```text
//! enumerations ::= enumeration*
//! enumeration  ::= "enum" ["struct" | "class"] [name]
//!                  [":" qualified_name*] "{" members "}" ";"
//! members      ::= (member ("," member)* [","])?
//! member       ::= name ["=" expression_chain]
//! ```
//!
//! `enum`, `struct` and `class` reach this stage as ordinary identifier
//! tokens; their keyword meaning is assigned here. Enumeration and
//! member names are not validated against keywords.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::{Enumeration, ExpressionChain, Member};
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse declarations back-to-back until the token stream is
    /// exhausted. An empty stream yields an empty list.
    ///
    /// The first failing declaration aborts the whole parse; no partial
    /// results are returned.
    pub fn parse_enumerations(&mut self) -> Result<Vec<Enumeration>, ParseError> {
        let mut enumerations = Vec::new();

        while !self.is_at_end() {
            enumerations.push(self.parse_enumeration()?);
        }

        Ok(enumerations)
    }

    /// Parse one `enum ... ;` declaration.
    pub(crate) fn parse_enumeration(&mut self) -> Result<Enumeration, ParseError> {
        match self.peek() {
            Some(token) if token.kind == TokenKind::Ident && token.text == "enum" => {
                self.advance();
            }
            _ => {
                return Err(self.syntax_error(format!(
                    "expected 'enum', found {}",
                    self.describe_current()
                )))
            }
        }

        let mut is_scoped = false;
        if let Some(token) = self.peek() {
            if token.kind == TokenKind::Ident
                && (token.text == "struct" || token.text == "class")
            {
                is_scoped = true;
                self.advance();
            }
        }

        // Anonymous enums leave the name empty
        let mut name = String::new();
        if let Some(token) = self.peek() {
            if token.kind == TokenKind::Ident {
                name = token.text.clone();
                self.advance();
            }
        }

        let mut base_types = Vec::new();
        if self.match_kind(TokenKind::Colon) {
            while matches!(
                self.peek_kind(),
                Some(TokenKind::Ident) | Some(TokenKind::Scope)
            ) {
                base_types.push(self.parse_qualified_name()?);
            }
        }

        self.expect_kind(TokenKind::LBrace, "expected '{' before enumeration body")?;

        let mut members = Vec::new();
        loop {
            if self.match_kind(TokenKind::RBrace) {
                break;
            }

            let member_name = self.expect_identifier("as enumerator name")?;

            let value = if self.match_kind(TokenKind::Eq) {
                self.parse_expression_chain()?
            } else {
                ExpressionChain::default()
            };

            members.push(Member {
                name: member_name,
                value,
            });

            if self.match_kind(TokenKind::Comma) {
                continue;
            }
            if self.check(TokenKind::RBrace) {
                // loop top consumes it
                continue;
            }
            return Err(self.syntax_error(format!(
                "expected ',' or '}}' after enumerator, found {}",
                self.describe_current()
            )));
        }

        self.expect_kind(TokenKind::Semicolon, "expected ';' after enumeration")?;

        Ok(Enumeration {
            name,
            is_scoped,
            base_types,
            members,
        })
    }
}
