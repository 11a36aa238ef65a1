use std::fmt;

use crate::{error::eval_error::EvalResult, interpreter::evaluator::stack::ValueStack};

/// Priority of every symbol that never competes with operators.
pub const PRIORITY_MAX: u8 = 10;
/// Priority of `+` and `-`.
pub const PRIORITY_ADDITIVE: u8 = PRIORITY_MAX - 2;
/// Priority of `*` and `/`.
pub const PRIORITY_MULTIPLICATIVE: u8 = PRIORITY_MAX - 1;

/// The kind of a symbol, used for dispatch and for listing the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Literal,
    Variable,
    ParenLeft,
    ParenRight,
    Comma,
    Operator,
    Function,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Literal => "literal",
            Self::Variable => "variable",
            Self::ParenLeft => "left parenthesis",
            Self::ParenRight => "right parenthesis",
            Self::Comma => "comma",
            Self::Operator => "operator",
            Self::Function => "function",
        };
        f.write_str(name)
    }
}

/// The binary operators understood by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Every operator, in registration order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// The single character spelling the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Binding strength; multiplicative operators bind tighter than additive
    /// ones.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Add | Self::Sub => PRIORITY_ADDITIVE,
            Self::Mul | Self::Div => PRIORITY_MULTIPLICATIVE,
        }
    }

    /// Applies the operator to its operands.
    ///
    /// Division follows IEEE rules: dividing by zero yields a signed infinity,
    /// or NaN for `0 / 0`.
    ///
    /// # Example
    /// ```
    /// use stackeval::interpreter::symbol::core::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(10.0, 4.0), 6.0);
    /// assert!(BinaryOperator::Div.apply(0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

/// Evaluation rule of a function: pulls its own operands from the value
/// stack and returns one result.
pub type FunctionRule = fn(&mut ValueStack) -> EvalResult<f64>;

/// A named function together with its evaluation rule.
///
/// Arity is not declared: the rule pulls as many operands as it needs, and a
/// missing operand surfaces as a stack underflow.
#[derive(Clone, Copy)]
pub struct Function {
    name: &'static str,
    rule: FunctionRule,
}

impl Function {
    /// Creates a function descriptor.
    #[must_use]
    pub const fn new(name: &'static str, rule: FunctionRule) -> Self {
        Self { name, rule }
    }

    /// The name the function is registered under.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Runs the function against the value stack.
    pub fn call(&self, values: &mut ValueStack) -> EvalResult<f64> {
        (self.rule)(values)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("name", &self.name)
         .finish_non_exhaustive()
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// One classified token, or one entry of the operator stack.
///
/// Every symbol carries a priority and an evaluation rule over the value
/// stack, see [`Symbol::priority`] and [`Symbol::eval`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Symbol {
    /// A numeric literal parsed from the input.
    Literal(f64),
    /// A named constant and its bound value.
    Variable(f64),
    /// `(`
    ParenLeft,
    /// `)`
    ParenRight,
    /// `,`
    Comma,
    /// A binary operator.
    Operator(BinaryOperator),
    /// A function applied to its parenthesized argument group.
    Function(Function),
}

impl Symbol {
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Literal(_) => Kind::Literal,
            Self::Variable(_) => Kind::Variable,
            Self::ParenLeft => Kind::ParenLeft,
            Self::ParenRight => Kind::ParenRight,
            Self::Comma => Kind::Comma,
            Self::Operator(_) => Kind::Operator,
            Self::Function(_) => Kind::Function,
        }
    }

    /// Priority used when operators compete; everything else sits at
    /// [`PRIORITY_MAX`] and never takes part in the comparison.
    ///
    /// # Example
    /// ```
    /// use stackeval::interpreter::symbol::core::{
    ///     BinaryOperator, PRIORITY_ADDITIVE, PRIORITY_MAX, PRIORITY_MULTIPLICATIVE, Symbol,
    /// };
    ///
    /// assert_eq!(Symbol::Operator(BinaryOperator::Sub).priority(), PRIORITY_ADDITIVE);
    /// assert_eq!(Symbol::Operator(BinaryOperator::Div).priority(), PRIORITY_MULTIPLICATIVE);
    /// assert_eq!(Symbol::ParenLeft.priority(), PRIORITY_MAX);
    /// assert_eq!(Symbol::Comma.priority(), PRIORITY_MAX);
    /// assert_eq!(Symbol::Literal(1.0).priority(), PRIORITY_MAX);
    /// ```
    #[must_use]
    pub const fn priority(&self) -> u8 {
        match self {
            Self::Operator(op) => op.priority(),
            _ => PRIORITY_MAX,
        }
    }

    /// Whether single-character spellings of this kind split the input.
    #[must_use]
    pub const fn is_delimiter(&self) -> bool {
        matches!(self,
                 Self::Operator(_) | Self::Comma | Self::ParenLeft | Self::ParenRight)
    }

    /// Applies the symbol's evaluation rule to the value stack.
    ///
    /// - Literals and variables consume nothing and produce their value.
    /// - Operators pull the right operand, then the left one, and produce the
    ///   result.
    /// - Functions pull their own operands and produce the result.
    /// - Parentheses and commas are markers: they consume and produce nothing.
    ///
    /// The caller decides whether a produced value is pushed back.
    ///
    /// # Example
    /// ```
    /// use stackeval::interpreter::{
    ///     evaluator::stack::ValueStack,
    ///     symbol::core::{BinaryOperator, Symbol},
    /// };
    ///
    /// let mut values = ValueStack::new();
    /// values.push(7.0);
    /// values.push(2.0);
    ///
    /// let result = Symbol::Operator(BinaryOperator::Sub).eval(&mut values).unwrap();
    /// assert_eq!(result, Some(5.0));
    /// assert!(values.is_empty());
    /// ```
    pub fn eval(&self, values: &mut ValueStack) -> EvalResult<Option<f64>> {
        match self {
            Self::Literal(value) | Self::Variable(value) => Ok(Some(*value)),
            Self::ParenLeft | Self::ParenRight | Self::Comma => Ok(None),
            Self::Operator(op) => {
                let right = values.pull()?;
                let left = values.pull()?;
                Ok(Some(op.apply(left, right)))
            },
            Self::Function(function) => function.call(values).map(Some),
        }
    }
}
