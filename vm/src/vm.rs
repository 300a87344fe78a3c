use expr_bytecode::decode::read_f64_le;
use expr_bytecode::{Opcode, FLOAT_OPERAND_LEN};
use log::{debug, trace};

use crate::error::Trap;
use crate::stack::OperandStack;

/// Initial capacity of the operand stack.
const DEFAULT_STACK_CAPACITY: usize = 16;

/// Executes a bytecode buffer with the default VM configuration.
///
/// Returns the single value left on the stack, or the trap that stopped
/// execution. No partial result is produced.
pub fn run(bytecode: &[u8]) -> Result<f64, Trap> {
    Vm::new().run(bytecode)
}

/// A configured virtual machine.
///
/// The VM holds no state between runs; each call to [`run`](Vm::run)
/// creates a fresh operand stack.
#[derive(Clone, Debug)]
pub struct Vm {
    stack_capacity: usize,
    max_stack_depth: Option<usize>,
}

impl Vm {
    /// Creates a VM with an unbounded operand stack.
    pub fn new() -> Self {
        Vm {
            stack_capacity: DEFAULT_STACK_CAPACITY,
            max_stack_depth: None,
        }
    }

    /// Limits the operand stack to `depth` values. Pushing beyond the
    /// limit traps with [`Trap::StackOverflow`].
    pub fn with_max_stack_depth(mut self, depth: usize) -> Self {
        self.max_stack_depth = Some(depth);
        self.stack_capacity = self.stack_capacity.min(depth);
        self
    }

    /// Executes `bytecode` and returns its result.
    pub fn run(&self, bytecode: &[u8]) -> Result<f64, Trap> {
        debug!("Executing {} bytes of bytecode", bytecode.len());
        let mut stack = OperandStack::new(self.stack_capacity, self.max_stack_depth);
        execute(bytecode, &mut stack)?;
        let result = stack.into_result()?;
        debug!("Execution result {result}");
        Ok(result)
    }
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}

/// Executes every instruction in `bytecode` against `stack`.
fn execute(bytecode: &[u8], stack: &mut OperandStack) -> Result<(), Trap> {
    let mut pc: usize = 0;

    while pc < bytecode.len() {
        let offset = pc;
        let byte = bytecode[pc];
        pc += 1;

        let op = Opcode::try_from(byte).map_err(|_| Trap::InvalidInstruction(byte))?;
        trace!("{offset:04} {} depth={}", op.mnemonic(), stack.len());

        match op {
            Opcode::FloatLiteral => {
                let value = read_f64_le(bytecode, pc).ok_or(Trap::TruncatedOperand { offset })?;
                pc += FLOAT_OPERAND_LEN;
                stack.push(value)?;
            }
            Opcode::Add => {
                stack.fold_top(|a, b| *a += b)?;
            }
            Opcode::Subtract => {
                stack.fold_top(|a, b| *a -= b)?;
            }
            Opcode::Log => {
                let top = stack.top_mut()?;
                *top = top.ln();
            }
            Opcode::Invalid => {
                return Err(Trap::InvalidInstruction(byte));
            }
        }
    }

    Ok(())
}
