//! # stackeval
//!
//! stackeval evaluates infix arithmetic expressions into a single `f64`.
//! Expressions may contain decimal literals, named constants, the binary
//! operators `+ - * /` with the usual precedence, parentheses and
//! multi-argument functions such as `pow(2, 3)`.
//!
//! There is no syntax tree: tokens are reduced on the fly with an operator
//! stack and a value stack. Unary minus is not supported, write `0 - 1`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error types for evaluation and symbol table construction.
///
/// # Responsibilities
/// - Defines one error enum per failure domain.
/// - Implements `Display` and `std::error::Error` for each of them.
pub mod error;
/// Ties together tokenizing, symbol lookup and stack evaluation.
///
/// # Responsibilities
/// - Declares the symbol descriptor, the builtin functions and the symbol
///   table.
/// - Splits and classifies the input.
/// - Reduces the token stream to one value.
pub mod interpreter;

pub use error::{EvalError, SymbolError, eval_error::EvalResult};
pub use interpreter::{
    evaluator::core::Evaluator,
    symbol::table::{SymbolTable, SymbolTableBuilder},
};

/// Evaluates an expression against the standard symbol table.
///
/// Each call uses fresh stacks, so calls are independent of each other and
/// may run concurrently.
///
/// # Errors
/// Returns an error if the expression contains an unknown symbol, lacks an
/// operand, has unbalanced parentheses, or does not reduce to exactly one
/// value.
///
/// # Examples
/// ```
/// use stackeval::{EvalError, evaluate};
///
/// assert_eq!(evaluate("3 + 3").unwrap(), 6.0);
/// assert_eq!(evaluate("pow(2, 3)").unwrap(), 8.0);
/// assert_eq!(evaluate("x").unwrap(), 10.0);
///
/// // Division by zero is not an error.
/// assert_eq!(evaluate("1/0").unwrap(), f64::INFINITY);
///
/// assert!(matches!(evaluate("3 $ 4"), Err(EvalError::UnknownSymbol { .. })));
/// assert_eq!(evaluate("+"), Err(EvalError::StackUnderflow));
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    evaluate_with(SymbolTable::standard(), expression)
}

/// Evaluates an expression against a custom symbol table.
pub fn evaluate_with(table: &SymbolTable, expression: &str) -> EvalResult<f64> {
    Evaluator::new(table).evaluate(expression)
}
