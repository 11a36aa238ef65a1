use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while building a symbol table.
pub enum SymbolError {
    /// The name could never be produced as a single token.
    #[error("Invalid variable name '{name}'.")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
    /// The name belongs to a structural symbol, an operator or a function.
    #[error("Symbol '{name}' is reserved and cannot be redefined.")]
    Reserved {
        /// The reserved name.
        name: String,
    },
}
