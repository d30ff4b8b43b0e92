/// The evaluator module computes the value of a postfix sequence.
///
/// The evaluator walks the postfix tokens once, pushing operands on a value
/// stack and folding operators over the two topmost values. It is the last
/// stage of the pipeline and never fails.
///
/// # Responsibilities
/// - Applies the arithmetic operators with IEEE 754 semantics.
/// - Substitutes `0.0` for operands missing from the value stack.
pub mod evaluator;
/// The lexer module tokenizes expressions for further conversion.
///
/// The lexer removes whitespace, splits the text around the fixed operator and
/// grouping symbols, and parses operand fragments to numbers. This is the
/// first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input text into classified tokens.
/// - Reports operand fragments that are not decimal numbers.
pub mod lexer;
/// The parser module reorders tokens into postfix form.
///
/// The parser runs the shunting-yard algorithm over the token sequence,
/// resolving operator precedence and parentheses so that the evaluator can
/// work with a flat sequence.
///
/// # Responsibilities
/// - Applies the fixed precedence table with left associativity.
/// - Detects a `)` without a matching `(`.
pub mod parser;
