/// Binary operator evaluation logic.
///
/// Applies the six arithmetic operators to two `f64` operands with plain IEEE
/// 754 semantics.
pub mod binary;

/// Postfix evaluation over a value stack.
///
/// Contains the value stack with its underflow policy and the evaluation loop
/// that consumes a postfix token sequence.
pub mod core;
