/// The evaluation engine.
///
/// Dispatches every classified token against the operator stack and the value
/// stack and runs the closing reduction on each `)`.
pub mod core;

/// The operator stack and the value stack.
///
/// Both are owned by a single evaluation and never shared.
pub mod stack;
