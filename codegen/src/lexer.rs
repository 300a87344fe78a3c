//! Tokenizer adapter. Wraps the raw lexer and normalizes its output into
//! the small token alphabet the compiler consumes.
//!
//! The adapter reads one token at a time. Whitespace and comments are
//! skipped, and a malformed token is returned as an error that ends
//! compilation.
use std::num::IntErrorKind;
use std::ops::Range;

use expr_problems::Problem;
use log::trace;
use logos::{Lexer, Logos};

use crate::error::CompileError;
use crate::token::TokenType;

/// A classified token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Integer(i64),
    Float(f64),
    Identifier(String),
    /// A single character that is not part of any other token.
    Punctuation(char),
    /// A quoted string or character literal.
    Quoted(String),
    EndOfInput,
}

/// A token and its byte range in the source.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Token { kind, span }
    }
}

/// A source of tokens for the compiler.
///
/// After the input is exhausted, every call returns
/// [`TokenKind::EndOfInput`].
pub trait TokenSource {
    fn next_token(&mut self) -> Result<Token, CompileError>;
}

/// Tokenizes expression text.
pub struct Tokenizer<'src> {
    lexer: Lexer<'src, TokenType>,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Tokenizer {
            lexer: TokenType::lexer(source),
        }
    }
}

impl TokenSource for Tokenizer<'_> {
    fn next_token(&mut self) -> Result<Token, CompileError> {
        loop {
            let Some(result) = self.lexer.next() else {
                let end = self.lexer.source().len();
                return Ok(Token::new(TokenKind::EndOfInput, end..end));
            };

            let span = self.lexer.span();
            let text = self.lexer.slice();

            let kind = match result {
                Ok(TokenType::BlockComment) => continue,
                Ok(TokenType::Integer) => TokenKind::Integer(parse_integer(text, &span)?),
                Ok(TokenType::Float) => TokenKind::Float(parse_float(text, &span)?),
                Ok(TokenType::MalformedNumber) => return Err(malformed_number(text, span)),
                Ok(TokenType::Identifier) => TokenKind::Identifier(text.to_string()),
                Ok(TokenType::Quoted) => TokenKind::Quoted(text.to_string()),
                Ok(TokenType::Punctuation) => match text.chars().next() {
                    Some(ch) => TokenKind::Punctuation(ch),
                    None => return Err(malformed(text, span)),
                },
                Err(()) => return Err(malformed(text, span)),
            };

            trace!("Token {:?} at {}..{}", kind, span.start, span.end);
            return Ok(Token::new(kind, span));
        }
    }
}

fn malformed(text: &str, span: Range<usize>) -> CompileError {
    let detail = if text.starts_with("/*") {
        String::from("The block comment is not closed")
    } else if text.starts_with(['"', '\'', '`']) {
        format!("The quoted literal starting with {text} is not closed")
    } else {
        format!("The text '{text}' is not a valid token")
    };
    CompileError::new(Problem::MalformedToken, span, detail)
}

fn malformed_number(text: &str, span: Range<usize>) -> CompileError {
    let detail = if text.starts_with("0x") || text.starts_with("0X") {
        format!("The hexadecimal literal {text} is not an integer")
    } else {
        format!("The exponent of {text} has no digits")
    };
    CompileError::new(Problem::MalformedToken, span, detail)
}

/// Returns true when every `_` in a numeral sits between two digits, or
/// between a two-character radix prefix and a digit.
fn underscores_separate_digits(
    text: &str,
    prefix_len: usize,
    is_digit: fn(&char) -> bool,
) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars.iter().enumerate().filter(|(_, c)| **c == '_').all(|(i, _)| {
        let after = (prefix_len == 2 && i == 2) || (i > 0 && is_digit(&chars[i - 1]));
        let before = chars.get(i + 1).is_some_and(is_digit);
        after && before
    })
}

fn misplaced_underscore(text: &str, span: &Range<usize>) -> CompileError {
    CompileError::new(
        Problem::MalformedToken,
        span.clone(),
        format!("The '_' in {text} does not separate digits"),
    )
}

/// Parses an integer literal the way C-like scanners read them: `0x`,
/// `0o` and `0b` select the radix, and a plain leading zero means octal.
fn parse_integer(text: &str, span: &Range<usize>) -> Result<i64, CompileError> {
    let (radix, prefix_len) = match text.get(..2) {
        Some("0x" | "0X") => (16, 2),
        Some("0o" | "0O") => (8, 2),
        Some("0b" | "0B") => (2, 2),
        _ if text.len() > 1 && text.starts_with('0') => (8, 1),
        _ => (10, 0),
    };

    let is_digit: fn(&char) -> bool = if radix == 16 {
        char::is_ascii_hexdigit
    } else {
        char::is_ascii_digit
    };
    if !underscores_separate_digits(text, prefix_len, is_digit) {
        return Err(misplaced_underscore(text, span));
    }

    let body: String = text[prefix_len..].chars().filter(|c| *c != '_').collect();
    i64::from_str_radix(&body, radix).map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => CompileError::new(
            Problem::NumericLiteralOutOfRange,
            span.clone(),
            format!("The integer {text} does not fit in 64 bits"),
        ),
        _ => CompileError::new(
            Problem::MalformedToken,
            span.clone(),
            format!("The integer {text} has no valid base-{radix} digits"),
        ),
    })
}

fn parse_float(text: &str, span: &Range<usize>) -> Result<f64, CompileError> {
    if !underscores_separate_digits(text, 0, char::is_ascii_digit) {
        return Err(misplaced_underscore(text, span));
    }
    let digits: String = text.chars().filter(|c| *c != '_').collect();
    digits.parse::<f64>().map_err(|_| {
        CompileError::new(
            Problem::MalformedToken,
            span.clone(),
            format!("The text '{text}' is not a valid floating-point number"),
        )
    })
}
