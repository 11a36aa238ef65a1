use logos::Logos;

use crate::{
    error::{EvalError, eval_error::EvalResult},
    interpreter::symbol::{core::Symbol, table::SymbolTable},
};

/// A raw piece of the prepared input, before classification.
///
/// The delimiter class mirrors [`SymbolTable::delimiters`]: every
/// single-character operator, the comma and both parentheses. Everything
/// between two delimiters is one word, so names and numbers are never merged
/// with their neighbours.
///
/// The class is fixed at compile time. Custom tables can only add variables,
/// and [`SymbolTableBuilder::define`](crate::SymbolTableBuilder::define)
/// rejects names containing a delimiter, so no table ever adds one.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme<'src> {
    /// `+`, `-`, `*`, `/`, `,`, `(` or `)`.
    #[regex(r"[+\-*/,()]", |lex| lex.slice())]
    Delimiter(&'src str),
    /// A maximal run of non-delimiter characters, such as `4.88` or `sin`.
    #[regex(r"[^+\-*/,()]+", |lex| lex.slice())]
    Word(&'src str),
}

/// Prepares an expression for tokenizing.
///
/// All whitespace is removed and the result is wrapped in one outer pair of
/// parentheses, so the final `)` drains every pending operator and function.
///
/// # Errors
/// Returns [`EvalError::EmptyExpression`] if nothing but whitespace is left.
///
/// # Example
/// ```
/// use stackeval::interpreter::lexer::prepare;
///
/// assert_eq!(prepare(" pow(2, 3) ").unwrap(), "(pow(2,3))");
/// assert!(prepare(" \t ").is_err());
/// ```
pub fn prepare(expression: &str) -> EvalResult<String> {
    let stripped = expression.chars()
                             .filter(|c| !c.is_whitespace())
                             .collect::<String>();
    if stripped.is_empty() {
        return Err(EvalError::EmptyExpression);
    }
    Ok(format!("({stripped})"))
}

/// Lazily splits a prepared expression and classifies every piece.
///
/// A piece whose first character is a decimal digit is a literal; anything
/// else must be registered in the symbol table. Only the first character is
/// inspected, so `.5` is not a literal and `-1` is the `-` operator followed
/// by `1`.
pub struct Tokenizer<'src, 't> {
    lexer: logos::Lexer<'src, Lexeme<'src>>,
    table: &'t SymbolTable,
}

impl<'src, 't> Tokenizer<'src, 't> {
    /// Creates a tokenizer over an input already passed through [`prepare`].
    #[must_use]
    pub fn new(source: &'src str, table: &'t SymbolTable) -> Self {
        Self { lexer: Lexeme::lexer(source),
               table }
    }

    fn classify(&self, text: &str) -> EvalResult<Symbol> {
        if text.starts_with(|c: char| c.is_ascii_digit()) {
            return text.parse()
                       .map(Symbol::Literal)
                       .map_err(|_| unknown_symbol(text));
        }

        self.table
            .lookup(text)
            .copied()
            .ok_or_else(|| unknown_symbol(text))
    }
}

impl Iterator for Tokenizer<'_, '_> {
    type Item = EvalResult<Symbol>;

    fn next(&mut self) -> Option<Self::Item> {
        let lexeme = self.lexer.next()?;

        Some(match lexeme {
                 Ok(Lexeme::Delimiter(text) | Lexeme::Word(text)) => self.classify(text),
                 Err(()) => Err(unknown_symbol(self.lexer.slice())),
             })
    }
}

fn unknown_symbol(text: &str) -> EvalError {
    EvalError::UnknownSymbol { token: text.to_string() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::symbol::core::{BinaryOperator, Kind};

    fn lexemes(source: &str) -> Vec<Lexeme<'_>> {
        Lexeme::lexer(source).map(|lexeme| lexeme.unwrap()).collect()
    }

    fn kinds(expression: &str) -> Vec<Kind> {
        let source = prepare(expression).unwrap();
        Tokenizer::new(&source, SymbolTable::standard()).map(|token| token.unwrap().kind())
                                                        .collect()
    }

    #[test]
    fn delimiters_are_never_merged() {
        assert_eq!(lexemes("(sin(4.88)*x)"),
                   vec![Lexeme::Delimiter("("),
                        Lexeme::Word("sin"),
                        Lexeme::Delimiter("("),
                        Lexeme::Word("4.88"),
                        Lexeme::Delimiter(")"),
                        Lexeme::Delimiter("*"),
                        Lexeme::Word("x"),
                        Lexeme::Delimiter(")")]);
    }

    #[test]
    fn lexer_agrees_with_table_delimiters() {
        for delimiter in SymbolTable::standard().delimiters() {
            let text = delimiter.to_string();
            assert_eq!(lexemes(&text), vec![Lexeme::Delimiter(&text)]);
        }
    }

    #[test]
    fn whitespace_is_stripped_before_splitting() {
        assert_eq!(prepare("1 2 +\t3\n").unwrap(), "(12+3)");
    }

    #[test]
    fn classifies_every_kind() {
        assert_eq!(kinds("pow(x, 2) - 1"),
                   vec![Kind::ParenLeft,
                        Kind::Function,
                        Kind::ParenLeft,
                        Kind::Variable,
                        Kind::Comma,
                        Kind::Literal,
                        Kind::ParenRight,
                        Kind::Operator,
                        Kind::Literal,
                        Kind::ParenRight]);
    }

    #[test]
    fn literals_are_parsed_as_doubles() {
        let source = prepare("4.88/1e3").unwrap();
        let tokens = Tokenizer::new(&source, SymbolTable::standard()).collect::<EvalResult<Vec<_>>>()
                                                                     .unwrap();
        assert_eq!(tokens,
                   vec![Symbol::ParenLeft,
                        Symbol::Literal(4.88),
                        Symbol::Operator(BinaryOperator::Div),
                        Symbol::Literal(1000.0),
                        Symbol::ParenRight]);
    }

    #[test]
    fn only_the_first_character_marks_a_literal() {
        let source = prepare(".5").unwrap();
        let error = Tokenizer::new(&source, SymbolTable::standard()).find_map(Result::err);
        assert_eq!(error, Some(EvalError::UnknownSymbol { token: ".5".to_string() }));
    }

    #[test]
    fn digit_led_garbage_is_an_unknown_symbol() {
        let source = prepare("3 $ 4").unwrap();
        let error = Tokenizer::new(&source, SymbolTable::standard()).find_map(Result::err);
        assert_eq!(error, Some(EvalError::UnknownSymbol { token: "3$4".to_string() }));
    }
}
