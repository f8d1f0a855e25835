//! The operand stack.

use befunge_types::Value;
use serde::{Deserialize, Serialize};

/// Unbounded LIFO stack of integers.
///
/// Popping an empty stack yields `0` and leaves it empty, so operations on
/// a near-empty stack never need special cases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    values: Vec<Value>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `value` as the new top.
    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Remove and return the top, or `0` if the stack is empty.
    pub fn pop(&mut self) -> Value {
        self.values.pop().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values from bottom to top.
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}
