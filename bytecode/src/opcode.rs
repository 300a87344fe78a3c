//! Opcode definitions shared between the compiler and VM.

use crate::error::UnknownOpcode;

/// Number of operand bytes that follow a `FLOAT_LITERAL` opcode.
pub const FLOAT_OPERAND_LEN: usize = 8;

/// The operation performed by an instruction.
///
/// The discriminant is the encoded opcode byte. Renumbering variants
/// changes the bytecode format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Zero-value guard. Never emitted.
    Invalid = 0x00,
    /// Push a double.
    /// Operand: 8-byte little-endian IEEE-754 bit pattern.
    FloatLiteral = 0x01,
    /// Pops two values (b then a), pushes a + b.
    Add = 0x02,
    /// Pops two values (b then a), pushes a - b.
    Subtract = 0x03,
    /// Replaces the top of stack with its natural logarithm.
    Log = 0x04,
}

impl Opcode {
    /// Number of stack values the instruction consumes.
    pub const fn arity(self) -> usize {
        match self {
            Opcode::Invalid | Opcode::FloatLiteral => 0,
            Opcode::Add | Opcode::Subtract => 2,
            Opcode::Log => 1,
        }
    }

    /// Number of operand bytes that follow the opcode byte.
    pub const fn operand_len(self) -> usize {
        match self {
            Opcode::FloatLiteral => FLOAT_OPERAND_LEN,
            _ => 0,
        }
    }

    /// Returns true for opcodes that may be bound to an operator name.
    pub const fn is_operator(self) -> bool {
        matches!(self, Opcode::Add | Opcode::Subtract | Opcode::Log)
    }

    /// The name used in disassembly listings.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Invalid => "INVALID",
            Opcode::FloatLiteral => "FLOAT_LITERAL",
            Opcode::Add => "ADD",
            Opcode::Subtract => "SUB",
            Opcode::Log => "LOG",
        }
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        op as u8
    }
}

impl TryFrom<u8> for Opcode {
    type Error = UnknownOpcode;

    /// Decodes an opcode byte. The `Invalid` guard decodes successfully so
    /// that callers can report it the same way as any unknown byte.
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0x00 => Ok(Opcode::Invalid),
            0x01 => Ok(Opcode::FloatLiteral),
            0x02 => Ok(Opcode::Add),
            0x03 => Ok(Opcode::Subtract),
            0x04 => Ok(Opcode::Log),
            _ => Err(UnknownOpcode(byte)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcode_try_from_when_known_byte_then_matches_discriminant() {
        for op in [
            Opcode::Invalid,
            Opcode::FloatLiteral,
            Opcode::Add,
            Opcode::Subtract,
            Opcode::Log,
        ] {
            assert_eq!(Opcode::try_from(u8::from(op)), Ok(op));
        }
    }

    #[test]
    fn opcode_try_from_when_unknown_byte_then_error() {
        assert_eq!(Opcode::try_from(0xFF), Err(UnknownOpcode(0xFF)));
        assert_eq!(Opcode::try_from(0x05), Err(UnknownOpcode(0x05)));
    }

    #[test]
    fn opcode_arity_when_binary_then_two() {
        assert_eq!(Opcode::Add.arity(), 2);
        assert_eq!(Opcode::Subtract.arity(), 2);
        assert_eq!(Opcode::Log.arity(), 1);
    }

    #[test]
    fn opcode_operand_len_when_float_literal_then_eight() {
        assert_eq!(Opcode::FloatLiteral.operand_len(), 8);
        assert_eq!(Opcode::Add.operand_len(), 0);
    }

    #[test]
    fn opcode_is_operator_when_literal_or_guard_then_false() {
        assert!(!Opcode::Invalid.is_operator());
        assert!(!Opcode::FloatLiteral.is_operator());
        assert!(Opcode::Log.is_operator());
    }
}
