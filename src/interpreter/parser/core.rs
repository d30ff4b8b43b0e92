use tracing::{debug, trace};

use crate::{
    error::ParseError,
    interpreter::lexer::tokenize,
    token::{Operator, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Converts an infix expression string into postfix (reverse Polish) order.
///
/// This is the entry point for conversion. It tokenizes the expression and
/// hands the tokens to [`infix_to_postfix`]. The function is pure: converting
/// the same string twice yields identical sequences.
///
/// # Errors
/// Propagates lexer errors and reports [`ParseError::UnbalancedParen`] for a
/// `)` without a matching `(`.
///
/// # Example
/// ```
/// use calcpad::{interpreter::parser::core::to_postfix, token::join};
///
/// assert_eq!(join(&to_postfix("2+3*4").unwrap()), "2 3 4 * +");
/// assert_eq!(join(&to_postfix("(2+3)*4").unwrap()), "2 3 + 4 *");
/// assert!(to_postfix("2+3)").is_err());
/// ```
pub fn to_postfix(expression: &str) -> ParseResult<Vec<Token>> {
    let tokens = tokenize(expression)?;
    infix_to_postfix(tokens)
}

/// Reorders infix tokens into postfix order with an explicit operator stack.
///
/// - Operands go straight to the output.
/// - `(` is pushed on the stack.
/// - `)` pops operators to the output until the matching `(`, which is
///   discarded.
/// - An operator first pops every stacked operator whose precedence is at
///   least its own, then is pushed. Equal precedence pops, so all operators,
///   `^` included, associate to the left.
/// - At the end the stack is flushed to the output, top first. Unmatched `(`
///   are flushed along with the operators.
///
/// # Errors
/// Returns [`ParseError::UnbalancedParen`] when a `)` empties the stack
/// without finding a `(`.
///
/// # Example
/// ```
/// use calcpad::{
///     interpreter::{lexer::tokenize, parser::core::infix_to_postfix},
///     token::join,
/// };
///
/// let tokens = tokenize("2^3^2").unwrap();
/// assert_eq!(join(&infix_to_postfix(tokens).unwrap()), "2 3 ^ 2 ^");
///
/// let tokens = tokenize("(1+2").unwrap();
/// assert_eq!(join(&infix_to_postfix(tokens).unwrap()), "1 2 + (");
/// ```
pub fn infix_to_postfix<I>(tokens: I) -> ParseResult<Vec<Token>>
    where I: IntoIterator<Item = Token>
{
    let tokens = tokens.into_iter();
    let mut output = Vec::with_capacity(tokens.size_hint().0);
    let mut stack: Vec<Token> = Vec::new();

    for (index, token) in tokens.enumerate() {
        trace!(%token, depth = stack.len(), "converting");
        match token {
            Token::Operand(_) => output.push(token),
            Token::Open => stack.push(token),
            Token::Close => pop_until_open(&mut stack, &mut output, index)?,
            Token::Operator(op) => {
                pop_while_binding(&mut stack, &mut output, op);
                stack.push(token);
            },
        }
    }

    output.extend(stack.drain(..).rev());

    debug!(count = output.len(), "converted to postfix");
    Ok(output)
}

/// Moves operators to the output until a `(` is on top, then drops the `(`.
fn pop_until_open(stack: &mut Vec<Token>,
                  output: &mut Vec<Token>,
                  index: usize)
                  -> ParseResult<()> {
    loop {
        match stack.pop() {
            Some(Token::Open) => return Ok(()),
            Some(token) => output.push(token),
            None => return Err(ParseError::UnbalancedParen { index }),
        }
    }
}

/// Moves stacked operators that bind at least as tightly as `incoming` to the
/// output. A `(` stops the loop.
fn pop_while_binding(stack: &mut Vec<Token>, output: &mut Vec<Token>, incoming: Operator) {
    while let Some(&Token::Operator(top)) = stack.last()
          && top.precedence() >= incoming.precedence()
    {
        stack.pop();
        output.push(Token::Operator(top));
    }
}
