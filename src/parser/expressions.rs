//! Expression parsing implementation
//!
//! This module handles qualified names and enumerator initializers.
//! An initializer is a flat chain of components separated by `+ - * /`,
//! with no precedence or associativity: `1 + 2 * 3` stays the
//! left-to-right list it was written as. Parenthesized subexpressions
//! recurse into a nested chain.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::{BinaryOp, ChainLink, ExprComponent, ExpressionChain, QualifiedName};
use crate::parser::lexer::{LexError, TokenKind};
use crate::parser::parse::{ParseError, Parser};

/// Bound on `(` nesting, so pathological input fails with a positioned
/// error instead of overflowing the call stack.
const MAX_BRACKET_DEPTH: usize = 256;

impl Parser {
    /// Parse a `::`-separated chain of identifiers.
    ///
    /// A leading `::` yields an empty first segment. Stops without
    /// error at the first token that does not continue the chain.
    pub(crate) fn parse_qualified_name(&mut self) -> Result<QualifiedName, ParseError> {
        let mut segments = Vec::new();

        match self.peek() {
            Some(token) if token.kind == TokenKind::Ident => {
                segments.push(token.text.clone());
                self.advance();
            }
            _ => segments.push(String::new()),
        }

        while self.check(TokenKind::Scope) {
            self.advance();
            segments.push(self.expect_identifier("after '::'")?);
        }

        Ok(QualifiedName::new(segments))
    }

    /// Parse a maximal chain of binary-operation components.
    ///
    /// An empty chain is valid and not an error; the chain simply ends
    /// at the first token that cannot start a component.
    pub(crate) fn parse_expression_chain(&mut self) -> Result<ExpressionChain, ParseError> {
        self.parse_chain_at_depth(0)
    }

    fn parse_chain_at_depth(&mut self, depth: usize) -> Result<ExpressionChain, ParseError> {
        let mut links = Vec::new();

        loop {
            let component = match self.peek_kind() {
                Some(TokenKind::Ident) | Some(TokenKind::Scope) => {
                    ExprComponent::Name(self.parse_qualified_name()?)
                }
                Some(TokenKind::Number) => {
                    let text = self.tokens[self.position].text.clone();
                    self.advance();
                    ExprComponent::Number(text)
                }
                Some(TokenKind::LParen) => {
                    let open_offset = self.tokens[self.position].offset;
                    if depth >= MAX_BRACKET_DEPTH {
                        return Err(LexError {
                            message: "parenthesized expression nested too deeply".to_string(),
                            offset: open_offset,
                        }
                        .into());
                    }
                    self.advance();
                    let subexpression = self.parse_chain_at_depth(depth + 1)?;
                    match self.peek() {
                        Some(token) if token.kind == TokenKind::RParen => {
                            self.advance();
                        }
                        Some(token) => {
                            return Err(LexError {
                                message: format!("expected ')', found {}", token),
                                offset: token.offset,
                            }
                            .into());
                        }
                        None => {
                            return Err(LexError {
                                message: "unterminated parenthesized expression".to_string(),
                                offset: open_offset,
                            }
                            .into());
                        }
                    }
                    ExprComponent::Parenthesized(subexpression)
                }
                _ => break,
            };

            let op = match self.peek_kind() {
                Some(TokenKind::Plus) => Some(BinaryOp::Add),
                Some(TokenKind::Minus) => Some(BinaryOp::Sub),
                Some(TokenKind::Star) => Some(BinaryOp::Mul),
                Some(TokenKind::Slash) => Some(BinaryOp::Div),
                _ => None,
            };
            if op.is_some() {
                self.advance();
            }

            let chain_ends = op.is_none();
            links.push(ChainLink { component, op });
            if chain_ends {
                break;
            }
        }

        Ok(ExpressionChain { links })
    }
}
