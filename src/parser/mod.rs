//! C++ enum declaration parser
//!
//! This module transforms source text into structured enum descriptions:
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → enumerations)
//! - [`ast`]: Parsed data definitions
//!
//! # Supported grammar
//!
//! Only `enum` declarations are recognized:
//! - Scoped (`enum class`/`enum struct`) and unscoped enums
//! - Anonymous enums
//! - Base-type clauses with qualified names (`: std::uint8_t`)
//! - Member initializers as flat chains of `+ - * /` operations over
//!   numeric constants, qualified names, and parenthesized
//!   subexpressions
//! - No preprocessor handling, no evaluation, no operator precedence
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser over an eagerly lexed token
//! buffer. No external parser generator dependencies.

pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod lexer;
pub mod parse;
