/// Builtin function implementations.
///
/// Every builtin pulls its own operands from the value stack, most recent
/// first.
pub mod builtin;
/// The symbol descriptor.
///
/// Declares the `Symbol` enum, its kinds, priorities and evaluation rules,
/// and the binary operators.
pub mod core;
/// The symbol table.
///
/// Maps spellings to symbols, exposes the delimiter set, and builds custom
/// tables with extra variables.
pub mod table;
