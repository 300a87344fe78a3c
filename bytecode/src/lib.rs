#![no_std]
//! Instruction set for expression bytecode.
//!
//! A bytecode buffer is a flat sequence of instructions. Each instruction
//! is one opcode byte; `FLOAT_LITERAL` is followed by the 8-byte
//! little-endian bit pattern of an IEEE-754 double. There is no header,
//! length prefix or version tag.

#[cfg(feature = "std")]
extern crate std;

// Always available (no_std)
pub mod decode;
mod error;
mod opcode;

// Only available with std
#[cfg(feature = "std")]
mod disassemble;
#[cfg(feature = "std")]
pub mod encode;

// Always-available re-exports
pub use decode::{Decoder, Instruction};
pub use error::{DecodeError, UnknownOpcode};
pub use opcode::{Opcode, FLOAT_OPERAND_LEN};

// std-only re-exports
#[cfg(feature = "std")]
pub use disassemble::disassemble;
