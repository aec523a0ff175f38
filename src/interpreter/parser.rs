/// Parser state, configuration and the entry points.
///
/// Defines the [`core::Parser`] cursor over a token slice, the depth guard,
/// and the top-level [`core::parse`] / [`core::parse_with`] functions.
pub mod core;

/// Binary operator parsing.
///
/// Handles the two left-associative precedence levels: `+ -` and `* /`.
pub mod binary;

/// Unary, power, postfix and primary parsing.
///
/// Handles prefix negation, right-associative `^`, postfix `!` and the
/// atomic forms: numbers, constants, function calls and groups.
pub mod unary;
