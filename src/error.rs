/// Parsing errors.
///
/// Defines all error types that can occur while turning an expression into
/// postfix form: literals that are not numbers, closing parentheses without a
/// partner, and characters the lexer cannot classify.
pub mod parse_error;

pub use parse_error::ParseError;
