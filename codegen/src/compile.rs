//! Compiles a token stream into bytecode.
//!
//! Tokens are consumed left to right and translated immediately:
//!
//! - a numeric literal emits FLOAT_LITERAL (integers become doubles),
//! - punctuation or an identifier is resolved in the operator table and
//!   emits its opcode once enough operands have been emitted,
//! - `(` starts a nested group that must end with `)`.
//!
//! There is no operator precedence and no reordering, so operators follow
//! their operands.

use std::io::Read;
use std::ops::Range;

use expr_problems::Problem;
use log::debug;

use crate::emit::Emitter;
use crate::error::CompileError;
use crate::lexer::{TokenKind, TokenSource, Tokenizer};
use crate::operators::OperatorTable;

/// How a group of tokens ended.
enum GroupEnd {
    EndOfInput(Range<usize>),
    CloseParen(Range<usize>),
}

/// Compiles expression text with the default operators.
pub fn compile(source: &str) -> Result<Vec<u8>, CompileError> {
    Compiler::new().compile(source)
}

/// Reads expression text from `reader` and compiles it with the default
/// operators.
pub fn compile_reader(reader: impl Read) -> Result<Vec<u8>, CompileError> {
    Compiler::new().compile_reader(reader)
}

/// A configured compiler.
///
/// The compiler itself holds only configuration; each compilation owns
/// its own emitter and depth counter.
#[derive(Clone, Debug, Default)]
pub struct Compiler {
    operators: OperatorTable,
    require_single_result: bool,
}

impl Compiler {
    /// Creates a compiler with the default operator table.
    pub fn new() -> Self {
        Compiler {
            operators: OperatorTable::new(),
            require_single_result: false,
        }
    }

    /// Replaces the operator table.
    pub fn with_operators(mut self, operators: OperatorTable) -> Self {
        self.operators = operators;
        self
    }

    /// When set, compilation fails unless the expression leaves exactly one
    /// value on the stack. Otherwise that check is left to the VM.
    pub fn require_single_result(mut self, required: bool) -> Self {
        self.require_single_result = required;
        self
    }

    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    /// Compiles expression text.
    pub fn compile(&self, source: &str) -> Result<Vec<u8>, CompileError> {
        let mut tokens = Tokenizer::new(source);
        self.compile_tokens(&mut tokens)
    }

    /// Reads all of `reader` as UTF-8 and compiles it.
    pub fn compile_reader(&self, mut reader: impl Read) -> Result<Vec<u8>, CompileError> {
        let mut source = String::new();
        reader.read_to_string(&mut source).map_err(|e| {
            CompileError::new(
                Problem::UnreadableSource,
                0..0,
                format!("Unable to read source: {e}"),
            )
        })?;
        self.compile(&source)
    }

    /// Compiles tokens from any token source.
    pub fn compile_tokens(&self, tokens: &mut impl TokenSource) -> Result<Vec<u8>, CompileError> {
        let mut emitter = Emitter::new();

        match self.compile_group(tokens, &mut emitter)? {
            GroupEnd::EndOfInput(span) => {
                if self.require_single_result && emitter.stack_depth() != 1 {
                    return Err(CompileError::new(
                        Problem::ExpectedSingleResult,
                        span,
                        format!(
                            "The expression leaves {} values on the stack",
                            emitter.stack_depth()
                        ),
                    ));
                }
            }
            GroupEnd::CloseParen(span) => {
                return Err(CompileError::new(
                    Problem::UnbalancedParentheses,
                    span,
                    "The ')' has no matching '('",
                ));
            }
        }

        debug!(
            "Compiled {} bytes, final depth {}, max depth {}",
            emitter.bytecode().len(),
            emitter.stack_depth(),
            emitter.max_stack_depth()
        );
        Ok(emitter.into_bytecode())
    }

    /// Compiles tokens until end of input or a closing parenthesis.
    ///
    /// Nested groups share the emitter, so operands emitted inside a group
    /// count toward operators that follow it.
    fn compile_group(
        &self,
        tokens: &mut impl TokenSource,
        emitter: &mut Emitter,
    ) -> Result<GroupEnd, CompileError> {
        loop {
            let token = tokens.next_token()?;
            match token.kind {
                TokenKind::EndOfInput => return Ok(GroupEnd::EndOfInput(token.span)),
                TokenKind::Punctuation(')') => return Ok(GroupEnd::CloseParen(token.span)),
                TokenKind::Punctuation('(') => match self.compile_group(tokens, emitter)? {
                    GroupEnd::CloseParen(_) => {}
                    GroupEnd::EndOfInput(end) => {
                        return Err(CompileError::new(
                            Problem::ExpectedCloseParen,
                            token.span.start..end.end,
                            "The '(' is not closed before the end of input",
                        ));
                    }
                },
                TokenKind::Integer(value) => emitter.emit_float_literal(value as f64),
                TokenKind::Float(value) => emitter.emit_float_literal(value),
                TokenKind::Punctuation(ch) => {
                    self.emit_operator(&ch.to_string(), token.span, emitter)?
                }
                TokenKind::Identifier(name) => self.emit_operator(&name, token.span, emitter)?,
                TokenKind::Quoted(text) => {
                    return Err(CompileError::new(
                        Problem::UnexpectedToken,
                        token.span,
                        format!("The literal {text} is not a number or operator"),
                    ));
                }
            }
        }
    }

    fn emit_operator(
        &self,
        name: &str,
        span: Range<usize>,
        emitter: &mut Emitter,
    ) -> Result<(), CompileError> {
        let spec = self.operators.lookup(name).ok_or_else(|| {
            CompileError::new(
                Problem::UnknownOperator,
                span.clone(),
                format!("'{name}' is not a known operator"),
            )
        })?;

        if emitter.stack_depth() < spec.arity {
            return Err(CompileError::new(
                Problem::InsufficientOperands,
                span,
                format!(
                    "'{name}' takes {} operands but {} precede it; operators follow their operands",
                    spec.arity,
                    emitter.stack_depth()
                ),
            ));
        }

        emitter.emit_operator(spec.opcode);
        Ok(())
    }
}
