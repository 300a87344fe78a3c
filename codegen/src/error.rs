//! Error types for code generation.

use std::fmt;
use std::ops::Range;

use expr_problems::Problem;

/// An error that stops compilation.
///
/// Compilation never recovers: the first error is returned and no bytecode
/// is produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileError {
    /// The category of the error.
    pub problem: Problem,
    /// Byte range in the source of the token that caused the error.
    pub span: Range<usize>,
    /// Description of this particular occurrence.
    pub detail: String,
}

impl CompileError {
    pub fn new(problem: Problem, span: Range<usize>, detail: impl Into<String>) -> Self {
        CompileError {
            problem,
            span,
            detail: detail.into(),
        }
    }

    /// Returns the stable problem code, e.g. `E0006`.
    pub fn code(&self) -> &'static str {
        self.problem.code()
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (at {}..{})",
            self.problem, self.detail, self.span.start, self.span.end
        )
    }
}

impl std::error::Error for CompileError {}
