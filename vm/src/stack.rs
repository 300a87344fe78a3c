use crate::error::Trap;

/// Growable operand stack of doubles, optionally bounded.
pub struct OperandStack {
    data: Vec<f64>,
    max_depth: Option<usize>,
}

impl OperandStack {
    /// Creates an empty stack with room for `capacity` values.
    pub fn new(capacity: usize, max_depth: Option<usize>) -> Self {
        OperandStack {
            data: Vec::with_capacity(capacity),
            max_depth,
        }
    }

    /// Pushes a value onto the stack.
    pub fn push(&mut self, value: f64) -> Result<(), Trap> {
        if let Some(max) = self.max_depth {
            if self.data.len() >= max {
                return Err(Trap::StackOverflow);
            }
        }
        self.data.push(value);
        Ok(())
    }

    /// Returns a mutable reference to the top value.
    pub fn top_mut(&mut self) -> Result<&mut f64, Trap> {
        self.data.last_mut().ok_or(Trap::StackUnderflow)
    }

    /// Folds the top value into the one below it and discards the top.
    ///
    /// `f` receives the second-from-top slot and the top value, so for
    /// subtraction the result is (earlier pushed) - (later pushed).
    pub fn fold_top(&mut self, f: impl FnOnce(&mut f64, f64)) -> Result<(), Trap> {
        let len = self.data.len();
        if len < 2 {
            return Err(Trap::StackUnderflow);
        }
        let top = self.data[len - 1];
        f(&mut self.data[len - 2], top);
        self.data.truncate(len - 1);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Consumes the stack, returning its only value.
    pub fn into_result(self) -> Result<f64, Trap> {
        match self.data.as_slice() {
            [value] => Ok(*value),
            other => Err(Trap::UnbalancedStack(other.len())),
        }
    }
}
