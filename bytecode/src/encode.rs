//! Append operations for building bytecode buffers.
//!
//! No alignment or padding is introduced.

use std::vec::Vec;

use crate::opcode::Opcode;

/// Appends a bare opcode byte.
pub fn push_opcode(bytecode: &mut Vec<u8>, op: Opcode) {
    bytecode.push(op.into());
}

/// Appends a `FLOAT_LITERAL` instruction carrying the exact bit pattern of
/// `value`, including NaN payloads and signed zero.
pub fn push_float_literal(bytecode: &mut Vec<u8>, value: f64) {
    push_opcode(bytecode, Opcode::FloatLiteral);
    bytecode.extend_from_slice(&value.to_bits().to_le_bytes());
}
