use crate::error::ParseError;

/// Lower bound (inclusive) of magnitudes rendered in plain decimal form.
pub const PLAIN_MIN: f64 = 1e-3;
/// Upper bound (exclusive) of magnitudes rendered in plain decimal form.
pub const PLAIN_MAX: f64 = 1e7;

/// Parses an operand fragment into an `f64`.
///
/// A valid fragment consists of ASCII digits with at most one decimal point
/// and at least one digit. A leading or trailing point is accepted.
///
/// ## Errors
/// Returns [`ParseError::MalformedNumber`] for anything else, such as `.`,
/// `1.2.3` or a fragment containing letters.
///
/// ## Example
/// ```
/// use calcpad::util::num::parse_operand;
///
/// assert_eq!(parse_operand("1.5").unwrap(), 1.5);
/// assert_eq!(parse_operand(".5").unwrap(), 0.5);
/// assert_eq!(parse_operand("7.").unwrap(), 7.0);
/// assert!(parse_operand("1.2.3").is_err());
/// assert!(parse_operand(".").is_err());
/// ```
pub fn parse_operand(literal: &str) -> Result<f64, ParseError> {
    let malformed = || ParseError::MalformedNumber { literal: literal.to_string() };

    let mut digits = 0usize;
    let mut points = 0usize;
    for c in literal.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return Err(malformed()),
        }
    }
    if digits == 0 || points > 1 {
        return Err(malformed());
    }

    literal.parse().map_err(|_| malformed())
}

/// Renders a result the way the keypad display shows it.
///
/// - `NaN`, `Infinity` and `-Infinity` for the IEEE special values.
/// - Plain decimal with at least one fractional digit for zero and for
///   magnitudes in `[1e-3, 1e7)`.
/// - Scientific notation with an upper case `E` otherwise.
///
/// ## Example
/// ```
/// use calcpad::util::num::format_real;
///
/// assert_eq!(format_real(14.0), "14.0");
/// assert_eq!(format_real(-5.0), "-5.0");
/// assert_eq!(format_real(0.25), "0.25");
/// assert_eq!(format_real(1e7), "1.0E7");
/// assert_eq!(format_real(0.000_015), "1.5E-5");
/// assert_eq!(format_real(f64::INFINITY), "Infinity");
/// assert_eq!(format_real(f64::NAN), "NaN");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        return format!("{value:?}");
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => scientific,
    }
}
