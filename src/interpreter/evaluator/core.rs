use log::{debug, trace};

use crate::{
    error::{EvalError, eval_error::EvalResult},
    interpreter::{
        evaluator::stack::{OperatorStack, ValueStack},
        lexer::{Tokenizer, prepare},
        symbol::{core::Symbol, table::SymbolTable},
    },
};

/// Stack-based evaluation engine.
///
/// An `Evaluator` owns the operator stack and the value stack. Both are
/// cleared at the start of every call to [`Evaluator::evaluate`], so no state
/// survives from one expression to the next. The symbol table is only read.
///
/// ## Usage
///
/// One evaluator can be reused for any number of expressions, but it must not
/// be shared between concurrent callers; create one per thread instead. The
/// table itself can be shared.
///
/// # Example
/// ```
/// use stackeval::{Evaluator, SymbolTable};
///
/// let mut evaluator = Evaluator::new(SymbolTable::standard());
///
/// assert_eq!(evaluator.evaluate("3 * 4 + 1").unwrap(), 13.0);
/// assert_eq!(evaluator.evaluate("(3 + 4) * 2").unwrap(), 14.0);
/// ```
#[derive(Debug)]
pub struct Evaluator<'t> {
    table:     &'t SymbolTable,
    operators: OperatorStack,
    values:    ValueStack,
}

impl<'t> Evaluator<'t> {
    #[must_use]
    pub const fn new(table: &'t SymbolTable) -> Self {
        Self { table,
               operators: OperatorStack::new(),
               values: ValueStack::new() }
    }

    /// Evaluates an infix expression to a single value.
    ///
    /// # Errors
    /// Returns the first [`EvalError`] met; no partial result is produced.
    pub fn evaluate(&mut self, expression: &str) -> EvalResult<f64> {
        debug!("evaluating `{expression}`");
        self.operators.clear();
        self.values.clear();

        let outcome = prepare(expression).and_then(|source| self.run(&source));
        match &outcome {
            Ok(value) => debug!("`{expression}` = {value}"),
            Err(e) => debug!("`{expression}` failed: {e}"),
        }
        outcome
    }

    fn run(&mut self, source: &str) -> EvalResult<f64> {
        let mut outer_closed = false;

        for token in Tokenizer::new(source, self.table) {
            let symbol = token?;
            // The synthetic outer group was closed by a stray `)` in the input.
            if outer_closed {
                return Err(EvalError::UnmatchedParenthesis { paren: ')' });
            }
            self.dispatch(symbol)?;
            outer_closed = symbol == Symbol::ParenRight && self.operators.is_empty();
        }

        self.finish()
    }

    fn dispatch(&mut self, symbol: Symbol) -> EvalResult<()> {
        trace!("dispatch {symbol:?}");

        // A function only ever waits for its argument group.
        if let Some(Symbol::Function(function)) = self.operators.top()
           && symbol != Symbol::ParenLeft
        {
            return Err(EvalError::DanglingFunction { name: function.name().to_string() });
        }

        match symbol {
            Symbol::Literal(_) | Symbol::Variable(_) => {
                if let Some(value) = symbol.eval(&mut self.values)? {
                    self.values.push(value);
                }
            },
            Symbol::Function(_) | Symbol::ParenLeft => self.operators.push(symbol),
            Symbol::Operator(op) => {
                self.reduce_operators(op.priority())?;
                self.operators.push(symbol);
            },
            Symbol::Comma => {
                // Settle the argument that just ended before marking the next.
                self.reduce_operators(0)?;
                self.operators.push(symbol);
            },
            Symbol::ParenRight => self.close_group()?,
        }
        Ok(())
    }

    /// Evaluates the operators on top of the operator stack for as long as
    /// they bind at least as tightly as `priority`.
    ///
    /// Markers and functions stop the reduction.
    fn reduce_operators(&mut self, priority: u8) -> EvalResult<()> {
        while let Some(&top) = self.operators.top() {
            if !matches!(top, Symbol::Operator(_)) || top.priority() < priority {
                break;
            }
            self.apply(top)?;
            self.operators.pop();
        }
        Ok(())
    }

    /// Closing reduction triggered by `)`.
    ///
    /// Everything down to the matching `(` is evaluated: operators push their
    /// result, commas are discarded. If a function sits right below the `(`,
    /// it is then applied to the values its argument group left behind.
    fn close_group(&mut self) -> EvalResult<()> {
        loop {
            let top = self.operators
                          .pop()
                          .ok_or(EvalError::UnmatchedParenthesis { paren: ')' })?;
            match top {
                Symbol::ParenLeft => break,
                Symbol::Function(function) => {
                    return Err(EvalError::DanglingFunction { name: function.name().to_string() });
                },
                Symbol::Operator(_) => self.apply(top)?,
                marker => {
                    trace!("discard {marker:?}");
                    marker.eval(&mut self.values)?;
                },
            }
        }

        if let Some(&function) = self.operators.top()
           && matches!(function, Symbol::Function(_))
        {
            self.apply(function)?;
            self.operators.pop();
        }
        Ok(())
    }

    fn apply(&mut self, symbol: Symbol) -> EvalResult<()> {
        if let Some(value) = symbol.eval(&mut self.values)? {
            trace!("{symbol:?} -> {value}");
            self.values.push(value);
        }
        Ok(())
    }

    fn finish(&mut self) -> EvalResult<f64> {
        if !self.operators.is_empty() {
            return Err(EvalError::UnmatchedParenthesis { paren: '(' });
        }

        match self.values.len() {
            0 | 1 => self.values.pull(),
            count => Err(EvalError::LeftoverValues { count }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacks_are_reset_between_calls() {
        let mut evaluator = Evaluator::new(SymbolTable::standard());

        assert!(evaluator.evaluate("1 + (2").is_err());
        assert_eq!(evaluator.evaluate("3 + 3"), Ok(6.0));
        assert_eq!(evaluator.evaluate("3 + 3"), Ok(6.0));
    }

    #[test]
    fn stacks_are_drained_after_success() {
        let mut evaluator = Evaluator::new(SymbolTable::standard());

        assert_eq!(evaluator.evaluate("pow(1 + 1, 3) * sin(0) + 2"), Ok(2.0));
        assert!(evaluator.operators.is_empty());
        assert!(evaluator.values.is_empty());
    }
}
