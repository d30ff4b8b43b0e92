/// A binary arithmetic operator.
///
/// Every operator is left-associative, including `^`: `2 ^ 3 ^ 2` is
/// `(2 ^ 3) ^ 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
}

impl Operator {
    /// Binding strength used by the shunting-yard conversion.
    ///
    /// `+` and `-` bind at 1, `*`, `/` and `%` at 2, `^` at 3.
    ///
    /// # Example
    /// ```
    /// use calcpad::token::Operator;
    ///
    /// assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    /// assert_eq!(Operator::Div.precedence(), Operator::Mod.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div | Self::Mod => 2,
            Self::Pow => 3,
        }
    }

    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
            Self::Pow => '^',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A classified token of an arithmetic expression.
///
/// Operands carry their parsed value, so no stage after the lexer looks at
/// source text again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal such as `3`, `1.5` or `.25`.
    Operand(f64),
    /// One of `+ - * / % ^`.
    Operator(Operator),
    /// `(`
    Open,
    /// `)`
    Close,
}

impl Token {
    /// Returns `true` for numeric literals and `false` for operators and
    /// parentheses.
    ///
    /// # Example
    /// ```
    /// use calcpad::token::{Operator, Token};
    ///
    /// assert!(Token::Operand(2.0).is_operand());
    /// assert!(!Token::Operator(Operator::Add).is_operand());
    /// assert!(!Token::Open.is_operand());
    /// ```
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(self, Self::Operand(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operand(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Open => write!(f, "("),
            Self::Close => write!(f, ")"),
        }
    }
}

/// Renders a token sequence as space-separated symbols, e.g. `2 3 4 * +`.
///
/// # Example
/// ```
/// use calcpad::token::{Operator, Token, join};
///
/// let postfix = [Token::Operand(2.0), Token::Operand(1.5), Token::Operator(Operator::Pow)];
/// assert_eq!(join(&postfix), "2 1.5 ^");
/// ```
#[must_use]
pub fn join(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
