/// The evaluator module reduces a token stream to a single value.
///
/// It drives an operator stack and a value stack through a shunting-yard
/// style reduction: operators are applied by priority, and every closing
/// parenthesis drains its group and applies an enclosing function.
///
/// # Responsibilities
/// - Dispatches each token by kind.
/// - Owns the call-scoped stacks.
/// - Reports underflow, unbalanced parentheses and malformed leftovers.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// Strips whitespace, wraps the input in an outer pair of parentheses, splits
/// it on delimiters and classifies each piece as a literal or a registered
/// symbol.
pub mod lexer;
/// The symbol module defines what each token means.
///
/// # Responsibilities
/// - Defines the `Symbol` enum and its evaluation rules.
/// - Provides the builtin functions.
/// - Provides the immutable symbol table shared by every evaluation.
pub mod symbol;
