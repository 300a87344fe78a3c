use std::fmt;

/// Runtime traps that halt VM execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Trap {
    /// The byte is not a recognized opcode (including the zero guard).
    InvalidInstruction(u8),
    /// An instruction needed more operands than the stack holds.
    StackUnderflow,
    /// A push exceeded the configured maximum depth.
    StackOverflow,
    /// The buffer ended inside the operand of the instruction at `offset`.
    TruncatedOperand { offset: usize },
    /// Execution finished with this many values on the stack instead of one.
    UnbalancedStack(usize),
}

impl fmt::Display for Trap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trap::InvalidInstruction(op) => write!(f, "invalid instruction: 0x{op:02X}"),
            Trap::StackUnderflow => write!(f, "stack underflow"),
            Trap::StackOverflow => write!(f, "stack overflow"),
            Trap::TruncatedOperand { offset } => {
                write!(f, "truncated operand at offset {offset}")
            }
            Trap::UnbalancedStack(depth) => {
                write!(f, "expected exactly one result but stack holds {depth}")
            }
        }
    }
}

impl std::error::Error for Trap {}
