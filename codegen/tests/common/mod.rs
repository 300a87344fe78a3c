//! Shared test helpers for codegen integration tests.

use std::collections::VecDeque;

use expr_codegen::{compile, CompileError, Token, TokenKind, TokenSource};

/// A token source backed by a fixed sequence, for driving the compiler
/// without text.
#[allow(dead_code)]
pub struct TokenList {
    tokens: VecDeque<Token>,
}

impl TokenList {
    /// Builds a token list, giving each token a one-byte span at its index.
    #[allow(dead_code)]
    pub fn new(kinds: Vec<TokenKind>) -> Self {
        let tokens = kinds
            .into_iter()
            .enumerate()
            .map(|(i, kind)| Token::new(kind, i..i + 1))
            .collect();
        TokenList { tokens }
    }
}

impl TokenSource for TokenList {
    fn next_token(&mut self) -> Result<Token, CompileError> {
        Ok(self
            .tokens
            .pop_front()
            .unwrap_or_else(|| Token::new(TokenKind::EndOfInput, 0..0)))
    }
}

/// Compiles and runs an expression, returning its value.
#[allow(dead_code)]
pub fn eval(source: &str) -> f64 {
    let bytecode = compile(source).unwrap();
    expr_vm::run(&bytecode).unwrap()
}

/// Returns the 9-byte FLOAT_LITERAL encoding of `value`.
#[allow(dead_code)]
pub fn lit(value: f64) -> Vec<u8> {
    let mut bytes = vec![0x01];
    bytes.extend_from_slice(&value.to_bits().to_le_bytes());
    bytes
}
