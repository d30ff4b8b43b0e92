/// Numeric helpers.
///
/// This module validates operand literals before they become `f64` values and
/// renders results back to text for display. Both directions live here so the
/// accepted input grammar and the produced output format stay side by side.
pub mod num;
