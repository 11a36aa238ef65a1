use std::{
    collections::HashMap,
    f64::consts::{E, PI},
};

use lazy_static::lazy_static;

use crate::{
    error::SymbolError,
    interpreter::symbol::{
        builtin::BUILTIN_FUNCTIONS,
        core::{BinaryOperator, Symbol},
    },
};

/// Variables bound in the standard table.
pub const STANDARD_VARIABLES: &[(&str, f64)] = &[("x", 10.0), ("pi", PI), ("e", E)];

lazy_static! {
    static ref STANDARD: SymbolTable = SymbolTable::with_builtins();
}

/// Immutable registry mapping symbol spellings to their [`Symbol`].
///
/// The standard table is built once per process and shared by every
/// evaluation. Custom tables start from the standard entries and may bind
/// extra variables through [`SymbolTable::builder`]; once built they are never
/// mutated, so a table can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    /// Returns the shared standard table.
    ///
    /// # Example
    /// ```
    /// use stackeval::{SymbolTable, interpreter::symbol::core::Kind};
    ///
    /// let table = SymbolTable::standard();
    /// assert_eq!(table.lookup("pow").map(|s| s.kind()), Some(Kind::Function));
    /// assert!(table.lookup("$").is_none());
    /// ```
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Starts a custom table from the standard entries.
    #[must_use]
    pub fn builder() -> SymbolTableBuilder {
        SymbolTableBuilder { table: Self::standard().clone() }
    }

    fn with_builtins() -> Self {
        let mut symbols = HashMap::new();

        symbols.insert("(".to_string(), Symbol::ParenLeft);
        symbols.insert(")".to_string(), Symbol::ParenRight);
        symbols.insert(",".to_string(), Symbol::Comma);

        for op in BinaryOperator::ALL {
            symbols.insert(op.symbol().to_string(), Symbol::Operator(op));
        }
        for function in BUILTIN_FUNCTIONS {
            symbols.insert(function.name().to_string(), Symbol::Function(*function));
        }
        for (name, value) in STANDARD_VARIABLES {
            symbols.insert((*name).to_string(), Symbol::Variable(*value));
        }

        Self { symbols }
    }

    /// Looks up a symbol by its exact spelling.
    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<&Symbol> {
        self.symbols.get(text)
    }

    /// The characters that split an expression into tokens: every
    /// single-character operator, comma or parenthesis, sorted.
    #[must_use]
    pub fn delimiters(&self) -> Vec<char> {
        let mut delimiters = self.symbols
                                 .iter()
                                 .filter(|(_, symbol)| symbol.is_delimiter())
                                 .filter_map(|(name, _)| single_char(name))
                                 .collect::<Vec<_>>();
        delimiters.sort_unstable();
        delimiters
    }

    /// Whether `c` is one of [`SymbolTable::delimiters`].
    #[must_use]
    pub fn is_delimiter(&self, c: char) -> bool {
        let mut buf = [0; 4];
        self.lookup(c.encode_utf8(&mut buf))
            .is_some_and(Symbol::is_delimiter)
    }

    /// Iterates over all registered symbols, sorted by name.
    pub fn symbols(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        let mut entries = self.symbols
                              .iter()
                              .map(|(name, symbol)| (name.as_str(), symbol))
                              .collect::<Vec<_>>();
        entries.sort_unstable_by_key(|(name, _)| *name);
        entries.into_iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Builds a custom [`SymbolTable`] on top of the standard one.
///
/// # Example
/// ```
/// use stackeval::{SymbolTable, evaluate_with};
///
/// let table = SymbolTable::builder().define("rate", 0.5)
///                                   .unwrap()
///                                   .define("x", 2.0)
///                                   .unwrap()
///                                   .build();
///
/// assert_eq!(evaluate_with(&table, "rate * x").unwrap(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct SymbolTableBuilder {
    table: SymbolTable,
}

impl SymbolTableBuilder {
    /// Binds a variable, or rebinds an existing one.
    ///
    /// A name is rejected if it could never come out of the tokenizer as a
    /// single token: it is empty, starts with a decimal digit, or contains
    /// whitespace or a delimiter. Names of parentheses, the comma, operators
    /// and functions are reserved.
    pub fn define(mut self, name: &str, value: f64) -> Result<Self, SymbolError> {
        if let Some(existing) = self.table.lookup(name)
           && !matches!(existing, Symbol::Variable(_))
        {
            return Err(SymbolError::Reserved { name: name.to_string() });
        }

        let invalid = name.is_empty()
                      || name.starts_with(|c: char| c.is_ascii_digit())
                      || name.chars()
                             .any(|c| c.is_whitespace() || self.table.is_delimiter(c));
        if invalid {
            return Err(SymbolError::InvalidName { name: name.to_string() });
        }

        self.table
            .symbols
            .insert(name.to_string(), Symbol::Variable(value));
        Ok(self)
    }

    /// Freezes the table.
    #[must_use]
    pub fn build(self) -> SymbolTable {
        self.table
    }
}
