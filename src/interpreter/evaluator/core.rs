use tracing::{debug, trace};

use crate::token::Token;

/// Stack of intermediate values used while evaluating a postfix sequence.
///
/// Popping an empty stack yields `0.0`, so operators with missing operands
/// still produce a value.
#[derive(Debug, Default)]
pub struct ValueStack {
    values: Vec<f64>,
}

impl ValueStack {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Pushes a value on top of the stack.
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Pops the top value, or returns `0.0` if the stack is empty.
    ///
    /// # Example
    /// ```
    /// use calcpad::interpreter::evaluator::core::ValueStack;
    ///
    /// let mut stack = ValueStack::new();
    /// stack.push(4.0);
    /// assert_eq!(stack.len(), 1);
    /// assert_eq!(stack.pop_or_zero(), 4.0);
    /// assert!(stack.is_empty());
    /// assert_eq!(stack.pop_or_zero(), 0.0);
    /// assert!(stack.is_empty());
    /// ```
    pub fn pop_or_zero(&mut self) -> f64 {
        self.values.pop().unwrap_or_else(|| {
            trace!("value stack underflow, substituting 0.0");
            0.0
        })
    }

    /// Number of values currently on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the stack holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Evaluates a postfix token sequence to a single number.
///
/// Operands are pushed. An operator pops the right operand first and the left
/// operand second, substituting `0.0` for any missing one, and pushes
/// `left <op> right`. Parentheses left over from an unbalanced `(` are
/// skipped. The result is the top of the stack, or `0.0` for an empty
/// sequence.
///
/// # Example
/// ```
/// use calcpad::{
///     interpreter::{evaluator::core::evaluate_postfix, parser::core::to_postfix},
///     token::{Operator, Token},
/// };
///
/// assert_eq!(evaluate_postfix(&to_postfix("2+3*4").unwrap()), 14.0);
/// assert_eq!(evaluate_postfix(&[]), 0.0);
///
/// // `- 5` with nothing on the stack reads as `0 - 5`.
/// let underflow = [Token::Operand(5.0), Token::Operator(Operator::Sub)];
/// assert_eq!(evaluate_postfix(&underflow), -5.0);
/// ```
#[must_use]
pub fn evaluate_postfix(tokens: &[Token]) -> f64 {
    let mut stack = ValueStack::new();

    for token in tokens {
        match *token {
            Token::Operand(value) => stack.push(value),
            Token::Operator(op) => {
                let right = stack.pop_or_zero();
                let left = stack.pop_or_zero();
                let result = op.apply(left, right);
                trace!(%op, left, right, result, "applied operator");
                stack.push(result);
            },
            Token::Open | Token::Close => trace!(%token, "skipping grouping token"),
        }
    }

    let result = stack.pop_or_zero();
    debug!(result, leftover = stack.len(), "evaluated postfix");
    result
}
