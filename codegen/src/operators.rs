//! The table that maps operator names to the opcodes they emit.

use std::collections::HashMap;
use std::fmt;

use expr_bytecode::Opcode;

/// What an operator name compiles to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatorSpec {
    /// Number of operands consumed from the stack.
    pub arity: usize,
    /// The opcode to emit.
    pub opcode: Opcode,
}

impl From<Opcode> for OperatorSpec {
    fn from(opcode: Opcode) -> Self {
        OperatorSpec {
            arity: opcode.arity(),
            opcode,
        }
    }
}

/// Errors from registering an operator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperatorError {
    /// The name is already bound.
    DuplicateName(String),
    /// The tokenizer never produces this name: it is not a single ASCII
    /// punctuation character or an identifier, or it is a parenthesis.
    UnreachableName(String),
    /// The opcode does not consume operands from the stack.
    NotAnOperator(Opcode),
}

impl fmt::Display for OperatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorError::DuplicateName(name) => {
                write!(f, "operator '{name}' is already registered")
            }
            OperatorError::UnreachableName(name) => {
                write!(f, "'{name}' cannot be written as an operator")
            }
            OperatorError::NotAnOperator(op) => {
                write!(f, "{} is not an operator opcode", op.mnemonic())
            }
        }
    }
}

impl std::error::Error for OperatorError {}

/// Operator names and their specs.
///
/// Entries are validated when registered, so every lookup that succeeds
/// yields an opcode the VM can execute.
#[derive(Clone, Debug)]
pub struct OperatorTable {
    ops: HashMap<String, OperatorSpec>,
}

impl OperatorTable {
    /// Creates the default table: `+`, `-` and `log`.
    pub fn new() -> Self {
        let mut ops = HashMap::new();
        ops.insert(String::from("+"), OperatorSpec::from(Opcode::Add));
        ops.insert(String::from("-"), OperatorSpec::from(Opcode::Subtract));
        ops.insert(String::from("log"), OperatorSpec::from(Opcode::Log));
        OperatorTable { ops }
    }

    /// Creates a table with no operators.
    pub fn empty() -> Self {
        OperatorTable {
            ops: HashMap::new(),
        }
    }

    /// Binds `name` to `opcode`. The arity comes from the opcode.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        opcode: Opcode,
    ) -> Result<(), OperatorError> {
        let name = name.into();
        if !opcode.is_operator() {
            return Err(OperatorError::NotAnOperator(opcode));
        }
        if !is_reachable_name(&name) {
            return Err(OperatorError::UnreachableName(name));
        }
        if self.ops.contains_key(&name) {
            return Err(OperatorError::DuplicateName(name));
        }
        self.ops.insert(name, OperatorSpec::from(opcode));
        Ok(())
    }

    /// Builder form of [`register`](OperatorTable::register).
    pub fn with(
        mut self,
        name: impl Into<String>,
        opcode: Opcode,
    ) -> Result<Self, OperatorError> {
        self.register(name, opcode)?;
        Ok(self)
    }

    pub fn lookup(&self, name: &str) -> Option<OperatorSpec> {
        self.ops.get(name).copied()
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.ops.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns true if the tokenizer can produce `name` as a punctuation or
/// identifier token.
fn is_reachable_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if first.is_ascii_alphabetic() || first == '_' {
        return chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    }

    chars.next().is_none()
        && first.is_ascii_punctuation()
        && !matches!(first, '_' | '(' | ')' | '"' | '\'' | '`')
}
