//! Human-readable diagnostics
//!
//! The core reports errors as structured positions only: a byte offset
//! for lexical errors, a token index for syntax errors. This module
//! maps either back to "line N, column M" against the original source
//! and renders the offending line with a caret marker:
//!
//! ```text
//! Syntax error at line 1, column 18: expected ',' or '}' after enumerator, found identifier 'B'
//! enum Bad { A = 1 B };
//!                  ^
//! ```

use crate::parser::lexer::{LexError, Token};
use crate::parser::parse::{ParseError, SyntaxError};

/// Render a front-end error against the source it came from.
///
/// `tokens` is the sequence the parser ran over; it is only consulted
/// for syntax errors, whose token index is resolved through it.
pub fn render(source: &str, tokens: &[Token], error: &ParseError) -> String {
    match error {
        ParseError::Lex(err) => render_lex_error(source, err),
        ParseError::Syntax(err) => render_syntax_error(source, tokens, err),
    }
}

/// Render a lexical error at its byte offset.
pub fn render_lex_error(source: &str, error: &LexError) -> String {
    render_at_offset(source, "Lexical error", &error.message, error.offset)
}

/// Render a syntax error at the offset of its offending token.
pub fn render_syntax_error(source: &str, tokens: &[Token], error: &SyntaxError) -> String {
    match tokens.get(error.token_index) {
        Some(token) => render_at_offset(source, "Syntax error", &error.message, token.offset),
        // index one past the end means the stream ran out
        None => format!("Syntax error at end of input: {}", error.message),
    }
}

fn render_at_offset(source: &str, kind: &str, message: &str, offset: usize) -> String {
    let bytes = source.as_bytes();
    let offset = offset.min(bytes.len());

    let line = 1 + bytes[..offset].iter().filter(|&&b| b == b'\n').count();
    let line_start = bytes[..offset]
        .iter()
        .rposition(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);
    let line_end = bytes[offset..]
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| offset + i)
        .unwrap_or(bytes.len());
    let column = offset - line_start + 1;

    let line_text = String::from_utf8_lossy(&bytes[line_start..line_end]);
    let caret_pad = " ".repeat(column - 1);

    format!(
        "{} at line {}, column {}: {}\n{}\n{}^",
        kind, line, column, message, line_text, caret_pad
    )
}
