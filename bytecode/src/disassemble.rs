use std::format;
use std::string::String;

use crate::decode::{Decoder, Instruction};
use crate::error::DecodeError;

/// Renders a bytecode buffer as a listing with one instruction per line.
///
/// ```
/// let listing = expr_bytecode::disassemble(&[0x04]).unwrap();
/// assert_eq!(listing, "0000 LOG\n");
/// ```
pub fn disassemble(bytecode: &[u8]) -> Result<String, DecodeError> {
    let mut out = String::new();
    for item in Decoder::new(bytecode) {
        let (offset, inst) = item?;
        let mnemonic = inst.opcode().mnemonic();
        let line = match inst {
            Instruction::FloatLiteral(value) => format!("{offset:04} {mnemonic} {value:?}\n"),
            _ => format!("{offset:04} {mnemonic}\n"),
        };
        out.push_str(&line);
    }
    Ok(out)
}
