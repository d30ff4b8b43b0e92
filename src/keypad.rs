use tracing::debug;

use crate::{evaluate, token::Operator, try_evaluate, util::num::format_real};

/// Message shown when an expression cannot be evaluated under
/// [`ErrorPolicy::Report`].
pub const INVALID_INPUT: &str = "Invalid input";

/// What pressing `=` does with an expression that cannot be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Show `0.0`, the result of [`evaluate`].
    #[default]
    Mask,
    /// Keep the text and show [`INVALID_INPUT`].
    Report,
}

/// A key on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `0` to `9`. Values above 9 are ignored.
    Digit(u8),
    /// `.`
    Point,
    /// One of `+ - * / % ^`.
    Operator(Operator),
    /// `(`
    Open,
    /// `)`
    Close,
    /// Removes the last character.
    Backspace,
    /// `AC`: empties the display.
    Clear,
    /// `=`: replaces the text with its value.
    Equals,
}

/// The state behind a calculator display.
///
/// `text` is the expression being typed (or the last result), `error` the
/// message shown above it. Both start empty.
///
/// # Example
/// ```
/// use calcpad::{
///     keypad::{Key, Keypad},
///     token::Operator,
/// };
///
/// let mut keypad = Keypad::new();
/// for key in [Key::Digit(2), Key::Operator(Operator::Add), Key::Digit(3), Key::Equals] {
///     keypad.press(key);
/// }
/// assert_eq!(keypad.text(), "5.0");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Keypad {
    text:   String,
    error:  String,
    policy: ErrorPolicy,
}

impl Keypad {
    /// Creates an empty keypad that masks evaluation failures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty keypad with the given error policy.
    #[must_use]
    pub fn with_policy(policy: ErrorPolicy) -> Self {
        Self { policy,
               ..Self::default() }
    }

    /// The expression or result currently displayed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The error message currently displayed, empty when there is none.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Handles a key press.
    ///
    /// `.` and operators are only appended once something has been typed.
    /// Every key except `=` clears the error message, even when nothing is
    /// appended.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => {
                if let Some(c) = char::from_digit(u32::from(d), 10) {
                    self.text.push(c);
                }
            },
            Key::Point => self.push_after_input('.'),
            Key::Operator(op) => self.push_after_input(op.symbol()),
            Key::Open => self.text.push('('),
            Key::Close => self.text.push(')'),
            Key::Backspace => {
                self.text.pop();
            },
            Key::Clear => self.text.clear(),
            Key::Equals => {
                self.equals();
                return;
            },
        }
        self.error.clear();
    }

    fn push_after_input(&mut self, c: char) {
        if !self.text.is_empty() {
            self.text.push(c);
        }
    }

    fn equals(&mut self) {
        match self.policy {
            ErrorPolicy::Mask => {
                self.text = format_real(evaluate(&self.text));
                self.error.clear();
            },
            ErrorPolicy::Report => match try_evaluate(&self.text) {
                Ok(value) => {
                    self.text = format_real(value);
                    self.error.clear();
                },
                Err(error) => {
                    debug!(%error, text = %self.text, "rejected keypad input");
                    INVALID_INPUT.clone_into(&mut self.error);
                },
            },
        }
    }
}
