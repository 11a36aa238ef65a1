use thiserror::Error;

/// Result type used by the tokenizer and the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while evaluating an expression.
///
/// The first error aborts the evaluation; no partial result is produced.
/// Division by zero is not an error, it follows IEEE rules.
pub enum EvalError {
    /// A token is neither a number nor a registered symbol.
    #[error("Unknown symbol '{token}'.")]
    UnknownSymbol {
        /// The offending token.
        token: String,
    },
    /// An operator, function or closing reduction needed a value that was not
    /// there.
    #[error("Not enough values on the stack. Check the number of arguments and parentheses.")]
    StackUnderflow,
    /// A parenthesis has no counterpart.
    #[error("Unmatched parenthesis '{paren}'.")]
    UnmatchedParenthesis {
        /// The parenthesis that was left unmatched, `(` or `)`.
        paren: char,
    },
    /// A function name was not directly followed by its argument group.
    #[error("Function '{name}' must be followed by a parenthesized argument list.")]
    DanglingFunction {
        /// The name of the function.
        name: String,
    },
    /// The reduction finished with more than one value left.
    #[error("Malformed expression: {count} values remain where one was expected.")]
    LeftoverValues {
        /// The number of values left on the stack.
        count: usize,
    },
    /// The input holds nothing but whitespace.
    #[error("Empty expression.")]
    EmptyExpression,
}
