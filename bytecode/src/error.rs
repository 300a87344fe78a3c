use core::fmt;

/// A byte that does not name any opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownOpcode(pub u8);

impl fmt::Display for UnknownOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown opcode 0x{:02X}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownOpcode {}

/// Errors that can occur when decoding a bytecode buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The byte at `offset` is not a known opcode.
    InvalidOpcode { offset: usize, byte: u8 },
    /// The buffer ends inside the operand of the instruction at `offset`.
    TruncatedOperand { offset: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidOpcode { offset, byte } => {
                write!(f, "invalid opcode 0x{byte:02X} at offset {offset}")
            }
            DecodeError::TruncatedOperand { offset } => {
                write!(f, "truncated operand for instruction at offset {offset}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}
