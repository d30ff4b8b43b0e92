/// Infix to postfix conversion.
///
/// Implements the shunting-yard algorithm over classified tokens, together
/// with the `to_postfix` entry point that runs the lexer first.
pub mod core;
