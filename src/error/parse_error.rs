use thiserror::Error;

/// Represents all errors that can occur during lexing or conversion to
/// postfix.
///
/// Evaluation of a postfix sequence itself cannot fail, so this is the only
/// error surface of the pipeline. [`crate::evaluate`] maps every variant to
/// `0.0`; [`crate::try_evaluate`] hands it to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An operand fragment is not a decimal number.
    #[error("Malformed number literal '{literal}'.")]
    MalformedNumber {
        /// The offending fragment, whitespace already removed.
        literal: String,
    },
    /// A `)` was found with no `(` left on the operator stack.
    #[error("Unbalanced parenthesis: ')' at token {index} has no matching '('.")]
    UnbalancedParen {
        /// Position of the `)` in the token sequence.
        index: usize,
    },
    /// The lexer could not classify part of the input.
    #[error("Unexpected input '{text}' at offset {offset}.")]
    UnexpectedCharacter {
        /// The rejected slice.
        text:   String,
        /// Byte offset in the whitespace-free expression.
        offset: usize,
    },
}
