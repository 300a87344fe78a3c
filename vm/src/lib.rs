//! Virtual machine for expr bytecode.
//!
//! The VM decodes a buffer produced by `expr-codegen` and evaluates it on a
//! stack of doubles. The buffer is re-validated as it executes, so a
//! hand-built or corrupted buffer traps instead of reading out of bounds.

pub mod error;
pub(crate) mod stack;
mod vm;

pub use vm::{run, Vm};
