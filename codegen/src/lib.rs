//! Code generation for expr.
//!
//! This crate turns expression text into bytecode that the expr VM can
//! execute. Translation is a single left-to-right pass over the token
//! stream with no syntax tree.
//!
//! # Operand order
//!
//! Operators are emitted the moment they are read and their arity is
//! checked against the values already emitted. Expressions are therefore
//! written in postfix order: `5 3 -` evaluates to `2`, while `5 - 3`
//! fails because `-` arrives before its second operand. Parentheses only
//! group; they do not reorder evaluation.
//!
//! # Example
//!
//! ```
//! let bytecode = expr_codegen::compile("1 2 + log").unwrap();
//! assert_eq!(bytecode.len(), 9 + 9 + 1 + 1);
//! ```

mod compile;
mod emit;
mod error;
mod lexer;
mod operators;
mod token;

pub use compile::{compile, compile_reader, Compiler};
pub use error::CompileError;
pub use expr_problems::Problem;
pub use lexer::{Token, TokenKind, TokenSource, Tokenizer};
pub use operators::{OperatorError, OperatorSpec, OperatorTable};
