//! Lexer (tokenizer) for C++-like source text
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Only single-byte text is supported, so byte offsets and char
//! positions coincide.
//!
//! Keywords are not recognized here: `enum`, `class` and `struct` come out
//! as ordinary [`TokenKind::Ident`] tokens and acquire meaning during
//! declaration parsing.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::LazyLock;

/// Classification of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier, e.g. `BlaBla87`
    Ident,
    /// Numeric constant, e.g. `9887` or `0x78`
    Number,

    LParen,   // (
    RParen,   // )
    LBracket, // [
    RBracket, // ]
    LBrace,   // {
    RBrace,   // }

    Dot,       // .
    Comma,     // ,
    Semicolon, // ;
    Colon,     // :
    Scope,     // ::

    // Assignment
    Eq,        // =
    PlusEq,    // +=
    MinusEq,   // -=
    StarEq,    // *=
    SlashEq,   // /=
    PercentEq, // %=
    AmpEq,     // &=
    PipeEq,    // |=
    CaretEq,   // ^=
    LtLtEq,    // <<=
    GtGtEq,    // >>=

    // Comparison
    Lt,    // <
    Gt,    // >
    EqEq,  // ==
    NotEq, // !=
    Le,    // <=
    Ge,    // >=

    // Increment/Decrement
    PlusPlus,   // ++
    MinusMinus, // --

    // Arithmetic and bitwise
    Plus,  // +
    Minus, // -
    Star,  // *
    Slash, // /
    Amp,   // &
    Pipe,  // |
    Caret, // ^
    Tilde, // ~
    Bang,  // !

    // Logical
    AndAnd, // &&
    OrOr,   // ||
}

/// A classified, positioned unit of source text.
///
/// Tokens are immutable once produced; the parser only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact matched substring
    pub text: String,
    /// 1-based line number at the start of the token
    pub line: u32,
    /// 0-based byte offset of the token's first character.
    ///
    /// The lexer assumes single-byte text, so char and byte positions
    /// coincide; non-ASCII input anywhere in the buffer skews the
    /// offsets of everything after it.
    pub offset: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident => write!(f, "identifier '{}'", self.text),
            TokenKind::Number => write!(f, "numeric constant '{}'", self.text),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    /// Byte offset of the offending character
    pub offset: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lexical error at offset {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for LexError {}

/// Fixed table of operator and punctuation lexemes.
static OPERATORS: &[(&str, TokenKind)] = &[
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("[", TokenKind::LBracket),
    ("]", TokenKind::RBracket),
    ("{", TokenKind::LBrace),
    ("}", TokenKind::RBrace),
    (".", TokenKind::Dot),
    (",", TokenKind::Comma),
    (";", TokenKind::Semicolon),
    (":", TokenKind::Colon),
    ("::", TokenKind::Scope),
    ("=", TokenKind::Eq),
    ("+=", TokenKind::PlusEq),
    ("-=", TokenKind::MinusEq),
    ("*=", TokenKind::StarEq),
    ("/=", TokenKind::SlashEq),
    ("%=", TokenKind::PercentEq),
    ("&=", TokenKind::AmpEq),
    ("|=", TokenKind::PipeEq),
    ("^=", TokenKind::CaretEq),
    ("<<=", TokenKind::LtLtEq),
    (">>=", TokenKind::GtGtEq),
    ("<", TokenKind::Lt),
    (">", TokenKind::Gt),
    ("==", TokenKind::EqEq),
    ("!=", TokenKind::NotEq),
    ("<=", TokenKind::Le),
    (">=", TokenKind::Ge),
    ("++", TokenKind::PlusPlus),
    ("--", TokenKind::MinusMinus),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("&", TokenKind::Amp),
    ("|", TokenKind::Pipe),
    ("^", TokenKind::Caret),
    ("~", TokenKind::Tilde),
    ("!", TokenKind::Bang),
    ("&&", TokenKind::AndAnd),
    ("||", TokenKind::OrOr),
];

static OPERATOR_TABLE: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| OPERATORS.iter().copied().collect());

/// Longest lexeme the operator matcher will attempt.
const MAX_OPERATOR_LEN: usize = 4;

/// Tokenize an entire source buffer.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Lexer over a single source buffer.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: u32,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
        }
    }

    /// Tokenize the entire input.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            if ch == '/' {
                match self.peek_ahead(1) {
                    Some('/') => {
                        self.skip_line_comment();
                        continue;
                    }
                    Some('*') => {
                        self.skip_block_comment();
                        continue;
                    }
                    _ => {
                        tokens.push(Token {
                            kind: TokenKind::Slash,
                            text: "/".to_string(),
                            line: self.line,
                            offset: self.position,
                        });
                        self.advance();
                        continue;
                    }
                }
            }

            if ch.is_whitespace() {
                // advance() counts the newline
                self.advance();
                continue;
            }

            if ch.is_ascii_digit() {
                tokens.push(self.number()?);
                continue;
            }

            if ch.is_ascii_alphabetic() {
                tokens.push(self.identifier());
                continue;
            }

            if let Some(token) = self.operator() {
                tokens.push(token);
                continue;
            }

            // TODO: report unrecognized characters instead of skipping them
            self.advance();
        }

        Ok(tokens)
    }

    /// Lex a numeric constant (decimal, or hex with a `0x` prefix).
    fn number(&mut self) -> Result<Token, LexError> {
        let offset = self.position;
        let line = self.line;
        let mut text = String::new();

        if self.peek() == Some('0') && self.peek_ahead(1) == Some('x') {
            text.push_str("0x");
            self.advance();
            self.advance();

            let digits_start = self.position;
            while let Some(ch) = self.peek() {
                if ch.is_ascii_hexdigit() {
                    text.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }

            if self.position == digits_start {
                // Point at the offending character when there is one,
                // otherwise at the '0' that started the literal
                let error_offset = match self.peek() {
                    Some(ch) if ch.is_ascii_alphabetic() => self.position,
                    _ => offset,
                };
                return Err(LexError {
                    message: "expected hex digit after '0x'".to_string(),
                    offset: error_offset,
                });
            }
        } else {
            while let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    text.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        // Guards against malformed identifiers like `12abc`
        if let Some(ch) = self.peek() {
            if ch.is_ascii_alphabetic() {
                return Err(LexError {
                    message: format!("unexpected '{}' after numeric constant", ch),
                    offset: self.position,
                });
            }
        }

        Ok(Token {
            kind: TokenKind::Number,
            text,
            line,
            offset,
        })
    }

    /// Lex an identifier: a letter followed by letters, digits or `_`.
    fn identifier(&mut self) -> Token {
        let offset = self.position;
        let line = self.line;
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token {
            kind: TokenKind::Ident,
            text,
            line,
            offset,
        }
    }

    /// Match the longest operator lexeme at the cursor, if any.
    fn operator(&mut self) -> Option<Token> {
        let remaining = self.input.len() - self.position;
        let max_len = MAX_OPERATOR_LEN.min(remaining);

        for len in (1..=max_len).rev() {
            let candidate: String =
                self.input[self.position..self.position + len].iter().collect();
            if let Some(&kind) = OPERATOR_TABLE.get(candidate.as_str()) {
                let token = Token {
                    kind,
                    text: candidate,
                    line: self.line,
                    offset: self.position,
                };
                for _ in 0..len {
                    self.advance();
                }
                return Some(token);
            }
        }

        None
    }

    /// Skip a `//` comment, leaving the terminating newline unconsumed.
    fn skip_line_comment(&mut self) {
        self.advance(); // skip '/'
        self.advance(); // skip '/'

        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Skip a `/* */` comment.
    ///
    /// An unterminated block comment runs to the end of the buffer
    /// without raising an error.
    fn skip_block_comment(&mut self) {
        self.advance(); // skip '/'
        self.advance(); // skip '*'

        while let Some(ch) = self.peek() {
            if ch == '*' && self.peek_ahead(1) == Some('/') {
                self.advance();
                self.advance();
                return;
            }
            self.advance();
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.input.get(self.position).copied()?;
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = tokenize("enum Color { Red = 1, };").unwrap();

        assert!(matches!(tokens[0].kind, TokenKind::Ident));
        assert_eq!(tokens[0].text, "enum");
        assert!(matches!(tokens[1].kind, TokenKind::Ident));
        assert_eq!(tokens[1].text, "Color");
        assert!(matches!(tokens[2].kind, TokenKind::LBrace));
        assert!(matches!(tokens[3].kind, TokenKind::Ident));
        assert!(matches!(tokens[4].kind, TokenKind::Eq));
        assert!(matches!(tokens[5].kind, TokenKind::Number));
        assert_eq!(tokens[5].text, "1");
        assert!(matches!(tokens[6].kind, TokenKind::Comma));
        assert!(matches!(tokens[7].kind, TokenKind::RBrace));
        assert!(matches!(tokens[8].kind, TokenKind::Semicolon));
        assert_eq!(tokens.len(), 9);
    }

    #[test]
    fn test_longest_match() {
        assert_eq!(
            kinds("<<= >>= :: << >> <= < ="),
            vec![
                TokenKind::LtLtEq,
                TokenKind::GtGtEq,
                TokenKind::Scope,
                // '<<' is not in the table, so it lexes as two '<'
                TokenKind::Lt,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Gt,
                TokenKind::Le,
                TokenKind::Lt,
                TokenKind::Eq,
            ]
        );
    }

    #[test]
    fn test_scope_never_splits() {
        let tokens = tokenize("a::b").unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(matches!(tokens[1].kind, TokenKind::Scope));
    }

    #[test]
    fn test_comments() {
        let tokens = tokenize("a // comment\nb /* block\ncomment */ c").unwrap();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "a");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].text, "b");
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[2].text, "c");
        assert_eq!(tokens[2].line, 3);
    }

    #[test]
    fn test_unterminated_block_comment_tolerated() {
        let tokens = tokenize("a /* never closed").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "a");
    }

    #[test]
    fn test_lone_slash() {
        assert_eq!(kinds("a / b"), vec![
            TokenKind::Ident,
            TokenKind::Slash,
            TokenKind::Ident,
        ]);
    }

    #[test]
    fn test_hex_literal() {
        let tokens = tokenize("0x1F 0xabc").unwrap();
        assert_eq!(tokens[0].text, "0x1F");
        assert_eq!(tokens[1].text, "0xabc");
    }

    #[test]
    fn test_bad_hex_literal() {
        let err = tokenize("x = 0xg").unwrap_err();
        // points at the 'g'
        assert_eq!(err.offset, 6);
    }

    #[test]
    fn test_hex_prefix_without_digits() {
        let err = tokenize("0x;").unwrap_err();
        // no alphabetic follower, so the error points at the '0'
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn test_letter_after_number() {
        let err = tokenize("12abc").unwrap_err();
        assert_eq!(err.offset, 2);
    }

    #[test]
    fn test_unrecognized_characters_skipped() {
        assert_eq!(kinds("a # b @ c"), vec![
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Ident,
        ]);
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("ab\n  cd").unwrap();
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[0].offset, 0);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[1].offset, 5);
    }
}
