//! # calcpad
//!
//! calcpad evaluates the arithmetic expressions typed on a calculator keypad.
//! An expression is made of decimal numbers, the binary operators
//! `+ - * / % ^` and parentheses. It goes through three stages: the lexer
//! splits it into tokens, the parser reorders them into postfix form with the
//! shunting-yard algorithm, and the evaluator folds the postfix sequence over
//! a value stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::ParseError,
    interpreter::{evaluator::core::evaluate_postfix, parser::core::to_postfix},
};

/// Provides the error types of the pipeline.
///
/// This module defines every error that can be raised while lexing or
/// converting an expression. Evaluation of postfix sequences cannot fail, so
/// these are the only errors [`try_evaluate`] ever returns.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser).
/// - Carries the offending literal or position for diagnostics.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together lexing, conversion to postfix and postfix
/// evaluation. Each stage consumes the output of the previous one; data flows
/// in one direction only.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, and evaluator.
/// - Passes explicit errors between stages.
pub mod interpreter;
/// Headless model of the calculator keypad.
///
/// The keypad owns the text being typed and the error message shown next to
/// it. It appends characters on key presses and calls into the pipeline when
/// `=` is pressed.
pub mod keypad;
/// Defines tokens and operators.
///
/// Declares the operator precedence table and the tagged token type shared by
/// every stage.
pub mod token;
/// General numeric helpers.
///
/// Validates operand literals and renders results for display.
pub mod util;

/// Evaluates an expression, reporting failures to the caller.
///
/// # Errors
/// Returns the first [`ParseError`] raised by the lexer or the parser, for
/// example a malformed number or a `)` without a matching `(`.
///
/// # Examples
/// ```
/// use calcpad::{error::ParseError, try_evaluate};
///
/// assert_eq!(try_evaluate("(2+3)*4").unwrap(), 20.0);
///
/// let err = try_evaluate("1.2.3+1").unwrap_err();
/// assert!(matches!(err, ParseError::MalformedNumber { .. }));
/// ```
pub fn try_evaluate(expression: &str) -> Result<f64, ParseError> {
    let postfix = to_postfix(expression)?;
    Ok(evaluate_postfix(&postfix))
}

/// Evaluates an expression, returning `0.0` when it cannot be evaluated.
///
/// This function never fails: any error from [`try_evaluate`] is logged and
/// replaced by `0.0`. IEEE special values such as an infinity from a division
/// by zero are returned as they are.
///
/// # Examples
/// ```
/// use calcpad::evaluate;
///
/// assert_eq!(evaluate("2+3*4"), 14.0);
/// assert_eq!(evaluate("2-3-4"), -5.0);
/// assert_eq!(evaluate(""), 0.0);
///
/// // An unmatched `)` cannot be evaluated.
/// assert_eq!(evaluate("2+3)"), 0.0);
/// assert!(evaluate("10/0").is_infinite());
/// ```
#[must_use]
pub fn evaluate(expression: &str) -> f64 {
    try_evaluate(expression).unwrap_or_else(|error| {
        debug!(%error, expression, "evaluation failed, falling back to 0.0");
        0.0
    })
}
