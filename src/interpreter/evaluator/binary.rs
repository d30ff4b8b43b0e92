use crate::token::Operator;

impl Operator {
    /// Applies the operator as `left <op> right`.
    ///
    /// Division and remainder follow IEEE 754: dividing by zero yields an
    /// infinity or `NaN` instead of an error. `^` raises `left` to the power
    /// `right`.
    ///
    /// # Example
    /// ```
    /// use calcpad::token::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(2.0, 3.0), -1.0);
    /// assert_eq!(Operator::Mod.apply(5.0, 2.0), 1.0);
    /// assert_eq!(Operator::Pow.apply(2.0, 10.0), 1024.0);
    /// assert!(Operator::Div.apply(1.0, 0.0).is_infinite());
    /// assert!(Operator::Mod.apply(1.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Mod => left % right,
            Self::Pow => left.powf(right),
        }
    }
}
