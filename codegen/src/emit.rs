//! Low-level bytecode emitter.
//!
//! Appends instructions to a byte buffer and keeps the compile-time count
//! of values the instructions leave on the stack.

use expr_bytecode::encode::{push_float_literal, push_opcode};
use expr_bytecode::Opcode;

/// Accumulates bytecode instructions.
pub struct Emitter {
    bytecode: Vec<u8>,
    max_stack_depth: usize,
    current_stack_depth: usize,
}

impl Emitter {
    pub fn new() -> Self {
        Emitter {
            bytecode: Vec::new(),
            max_stack_depth: 0,
            current_stack_depth: 0,
        }
    }

    /// Emits FLOAT_LITERAL with the value's bit pattern (pushes one).
    pub fn emit_float_literal(&mut self, value: f64) {
        push_float_literal(&mut self.bytecode, value);
        self.push_stack(1);
    }

    /// Emits an operator opcode (pops its arity, pushes one).
    ///
    /// The caller checks that enough operands are on the stack.
    pub fn emit_operator(&mut self, op: Opcode) {
        debug_assert!(self.current_stack_depth >= op.arity());
        push_opcode(&mut self.bytecode, op);
        self.pop_stack(op.arity());
        self.push_stack(1);
    }

    /// Returns the number of values on the stack after the emitted code runs.
    pub fn stack_depth(&self) -> usize {
        self.current_stack_depth
    }

    /// Returns the maximum stack depth reached during emission.
    pub fn max_stack_depth(&self) -> usize {
        self.max_stack_depth
    }

    /// Returns the accumulated bytecode.
    pub fn bytecode(&self) -> &[u8] {
        &self.bytecode
    }

    /// Consumes the emitter, returning the bytecode.
    pub fn into_bytecode(self) -> Vec<u8> {
        self.bytecode
    }

    fn push_stack(&mut self, count: usize) {
        self.current_stack_depth += count;
        if self.current_stack_depth > self.max_stack_depth {
            self.max_stack_depth = self.current_stack_depth;
        }
    }

    fn pop_stack(&mut self, count: usize) {
        self.current_stack_depth = self.current_stack_depth.saturating_sub(count);
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}
