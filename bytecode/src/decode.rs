//! Decoding of bytecode buffers.

use crate::error::{DecodeError, UnknownOpcode};
use crate::opcode::{Opcode, FLOAT_OPERAND_LEN};

/// Reads the little-endian double starting at `offset`.
///
/// Returns `None` when fewer than 8 bytes remain.
#[inline]
pub fn read_f64_le(bytecode: &[u8], offset: usize) -> Option<f64> {
    let end = offset.checked_add(FLOAT_OPERAND_LEN)?;
    let bytes: [u8; FLOAT_OPERAND_LEN] = bytecode.get(offset..end)?.try_into().ok()?;
    Some(f64::from_bits(u64::from_le_bytes(bytes)))
}

/// A decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Instruction {
    FloatLiteral(f64),
    Add,
    Subtract,
    Log,
}

impl Instruction {
    /// The opcode that encodes this instruction.
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::FloatLiteral(_) => Opcode::FloatLiteral,
            Instruction::Add => Opcode::Add,
            Instruction::Subtract => Opcode::Subtract,
            Instruction::Log => Opcode::Log,
        }
    }

    /// Number of bytes the instruction occupies in a buffer.
    pub fn encoded_len(&self) -> usize {
        1 + self.opcode().operand_len()
    }
}

/// Iterates over the instructions in a buffer, yielding each with its offset.
///
/// Stops after the first error.
pub struct Decoder<'a> {
    bytecode: &'a [u8],
    pc: usize,
    failed: bool,
}

impl<'a> Decoder<'a> {
    pub fn new(bytecode: &'a [u8]) -> Self {
        Decoder {
            bytecode,
            pc: 0,
            failed: false,
        }
    }

    fn decode_at(&self, offset: usize) -> Result<Instruction, DecodeError> {
        let byte = self.bytecode[offset];
        let op = Opcode::try_from(byte)
            .map_err(|UnknownOpcode(byte)| DecodeError::InvalidOpcode { offset, byte })?;
        match op {
            Opcode::FloatLiteral => read_f64_le(self.bytecode, offset + 1)
                .map(Instruction::FloatLiteral)
                .ok_or(DecodeError::TruncatedOperand { offset }),
            Opcode::Add => Ok(Instruction::Add),
            Opcode::Subtract => Ok(Instruction::Subtract),
            Opcode::Log => Ok(Instruction::Log),
            Opcode::Invalid => Err(DecodeError::InvalidOpcode { offset, byte }),
        }
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<(usize, Instruction), DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pc >= self.bytecode.len() {
            return None;
        }
        let offset = self.pc;
        match self.decode_at(offset) {
            Ok(inst) => {
                self.pc += inst.encoded_len();
                Some(Ok((offset, inst)))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
