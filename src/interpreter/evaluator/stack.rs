use crate::{
    error::{EvalError, eval_error::EvalResult},
    interpreter::symbol::core::Symbol,
};

/// LIFO stack of operands and intermediate results.
#[derive(Debug, Default, Clone)]
pub struct ValueStack {
    values: Vec<f64>,
}

impl ValueStack {
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Pops the most recently pushed value.
    ///
    /// # Errors
    /// Returns [`EvalError::StackUnderflow`] if the stack is empty.
    pub fn pull(&mut self) -> EvalResult<f64> {
        self.values.pop().ok_or(EvalError::StackUnderflow)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// LIFO stack of pending operators, functions and markers.
#[derive(Debug, Default, Clone)]
pub struct OperatorStack {
    entries: Vec<Symbol>,
}

impl OperatorStack {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn push(&mut self, symbol: Symbol) {
        self.entries.push(symbol);
    }

    pub fn pop(&mut self) -> Option<Symbol> {
        self.entries.pop()
    }

    #[must_use]
    pub fn top(&self) -> Option<&Symbol> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulls_most_recent_value_first() {
        let mut values = ValueStack::new();
        values.push(1.0);
        values.push(2.0);

        assert_eq!(values.pull(), Ok(2.0));
        assert_eq!(values.pull(), Ok(1.0));
        assert_eq!(values.pull(), Err(EvalError::StackUnderflow));
    }

    #[test]
    fn operator_stack_exposes_its_top() {
        let mut operators = OperatorStack::new();
        assert!(operators.top().is_none());

        operators.push(Symbol::ParenLeft);
        operators.push(Symbol::Comma);
        assert_eq!(operators.top(), Some(&Symbol::Comma));
        assert_eq!(operators.len(), 2);

        operators.clear();
        assert!(operators.is_empty());
    }
}
