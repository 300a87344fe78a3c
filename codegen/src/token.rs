//! Provides the raw token definitions recognized by the lexer.
use logos::{Lexer, Logos};

/// Consumes a block comment through its closing `*/`.
///
/// Returns false (a lexer error) when the comment is never closed.
fn block_comment(lex: &mut Lexer<TokenType>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(lex.remainder().len());
            false
        }
    }
}

#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
#[logos(skip r"([ \t\r\n\f]+|//[^\n]*)")]
pub enum TokenType {
    #[token("/*", block_comment)]
    BlockComment,

    // Integer literals: decimal, legacy leading-zero octal, and prefixed
    // hex, octal and binary. A prefix consumes every following digit so
    // that `0x` and `0b12` reach digit validation as one token.
    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"0[xX][0-9a-fA-F_]*")]
    #[regex(r"0[oO][0-9_]*")]
    #[regex(r"0[bB][0-9_]*")]
    Integer,

    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+")]
    Float,

    // Numerals that cannot be completed: an exponent marker without
    // digits, or a hexadecimal mantissa with a fraction or `p` exponent.
    #[regex(r"[0-9][0-9_]*(\.[0-9_]*)?[eE][+-]?")]
    #[regex(r"\.[0-9][0-9_]*[eE][+-]?")]
    #[regex(r"0[xX][0-9a-fA-F_]*\.[0-9a-fA-F_]*")]
    #[regex(r"0[xX][0-9a-fA-F_]*(\.[0-9a-fA-F_]*)?[pP][+-]?[0-9_]*")]
    MalformedNumber,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    #[regex(r"`[^`]*`")]
    Quoted,

    // Any other single character. Quote characters are excluded so that an
    // unterminated literal is an error rather than punctuation.
    #[regex(r#"[^\sA-Za-z0-9_"'`]"#)]
    Punctuation,
}
