/// Evaluation errors.
///
/// Defines every error that can abort the evaluation of an expression:
/// unknown symbols, value stack underflow, unbalanced parentheses and
/// malformed leftovers at the end of the reduction.
pub mod eval_error;
/// Symbol table errors.
///
/// Raised while building a custom [`SymbolTable`](crate::SymbolTable), when a
/// variable name cannot be tokenized back or would shadow a builtin.
pub mod symbol_error;

pub use eval_error::EvalError;
pub use symbol_error::SymbolError;
