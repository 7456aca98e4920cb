//! # Introduction
//!
//! enumscan reads source text written in a C++-like surface syntax and
//! extracts structured descriptions of the `enum` declarations in it,
//! including scoped enums, qualified base-type lists, and member
//! initializers given as chains of binary arithmetic expressions.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Enumerations
//! ```
//!
//! 1. [`parser::lexer`] — tokenises the source, recording a line number
//!    and byte offset per token.
//! 2. [`parser::parse`] — recursive descent over the token buffer,
//!    producing [`parser::ast::Enumeration`] values or a positioned
//!    error.
//! 3. [`report`] — renders a lexical or syntax error as a caret
//!    diagnostic against the original source.
//! 4. [`output`] — converts parse results to JSON.
//!
//! Lexing and parsing are pure transformations of an in-memory buffer;
//! there is no shared state between parses, so independent buffers may
//! be parsed concurrently without locking.
//!
//! ## Errors
//!
//! Failures are values, not panics: [`parser::lexer::LexError`] carries
//! a byte offset, [`parser::parse::SyntaxError`] a token index, and
//! [`parser::parse::ParseError`] joins the two. No partial results are
//! returned on failure.

pub mod output;
pub mod parser;
pub mod report;
