/// Core evaluation logic.
///
/// Holds the caller-owned [`core::EvalContext`] and [`core::AngleMode`], the
/// node dispatcher, and the finiteness check applied to every result.
pub mod core;

/// Unary operator evaluation.
///
/// Handles negation and the postfix factorial.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements `+ - * /` and `^`, including the division-by-zero and
/// power-domain checks.
pub mod binary;

/// Function evaluation.
///
/// Implements the trigonometric functions (angle-mode aware), the two
/// logarithms and the square root, each with an explicit domain check.
pub mod function;
