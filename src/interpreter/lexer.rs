use logos::Logos;
use tracing::{debug, trace};

use crate::{
    error::ParseError,
    token::{Operator, Token},
    util::num::parse_operand,
};

/// Represents a raw lexical unit of a whitespace-free expression.
///
/// Every character is either one of the eight fixed symbols or part of an
/// operand fragment, so lexing only ever splits around symbols. The `.` is
/// not a symbol and therefore stays attached to the digits around it.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme<'src> {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// A maximal run of non-symbol characters, such as `3.14` or `12`.
    #[regex(r"[^+\-*/()%^]+", |lex| lex.slice())]
    Fragment(&'src str),
}

impl Lexeme<'_> {
    /// Classifies the lexeme, parsing operand fragments to their value.
    ///
    /// # Errors
    /// Returns [`ParseError::MalformedNumber`] when a fragment is not a
    /// decimal number.
    pub fn classify(self) -> Result<Token, ParseError> {
        Ok(match self {
            Self::Plus => Token::Operator(Operator::Add),
            Self::Minus => Token::Operator(Operator::Sub),
            Self::Star => Token::Operator(Operator::Mul),
            Self::Slash => Token::Operator(Operator::Div),
            Self::Percent => Token::Operator(Operator::Mod),
            Self::Caret => Token::Operator(Operator::Pow),
            Self::LParen => Token::Open,
            Self::RParen => Token::Close,
            Self::Fragment(text) => Token::Operand(parse_operand(text)?),
        })
    }
}

/// Removes every whitespace character from the expression.
///
/// Whitespace never separates tokens: `1 2` reads as `12`.
#[must_use]
pub fn strip_whitespace(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Splits an expression into classified tokens.
///
/// Whitespace is discarded first, then the remaining text is cut around the
/// fixed symbols `+ - * / ( ) % ^`, each of which becomes its own token.
/// Empty input yields an empty sequence.
///
/// # Errors
/// - [`ParseError::MalformedNumber`] if an operand fragment is not a number.
/// - [`ParseError::UnexpectedCharacter`] if the lexer rejects a slice.
///
/// # Example
/// ```
/// use calcpad::{
///     interpreter::lexer::tokenize,
///     token::{Operator, Token},
/// };
///
/// let tokens = tokenize(" 1.5 * (2+3) ").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Operand(1.5),
///                 Token::Operator(Operator::Mul),
///                 Token::Open,
///                 Token::Operand(2.0),
///                 Token::Operator(Operator::Add),
///                 Token::Operand(3.0),
///                 Token::Close]);
///
/// assert!(tokenize("").unwrap().is_empty());
/// assert!(tokenize("1..2").is_err());
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, ParseError> {
    let compact = strip_whitespace(expression);
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(&compact);

    while let Some(lexeme) = lexer.next() {
        match lexeme {
            Ok(lexeme) => {
                trace!(?lexeme, "lexed");
                tokens.push(lexeme.classify()?);
            },
            Err(()) => {
                return Err(ParseError::UnexpectedCharacter { text:   lexer.slice().to_string(),
                                                             offset: lexer.span().start, });
            },
        }
    }

    debug!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}
