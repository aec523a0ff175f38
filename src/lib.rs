//! # sciexpr
//!
//! sciexpr is the expression core of a scientific calculator. It turns a
//! string such as `2+3*sin(90)` into a number, honouring operator precedence,
//! right-associative powers, postfix factorials, constants and an angle mode
//! for trigonometric functions, and reports every failure as a typed error.
//!
//! The pipeline is `tokenize -> parse -> evaluate`; each stage is a pure
//! function and may be called from any number of threads at once.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator, function and
/// constant types that represent an expression as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one node variant per grammar construct.
/// - Owns children exclusively; trees share nothing and contain no cycles.
/// - Renders trees fully parenthesized for diagnostics.
pub mod ast;
/// Provides error types for lexing, parsing and evaluation.
///
/// Each stage has its own error family carrying the position and token text
/// (where there is one) needed to show a human-readable message. A wrapper
/// type unifies them for the one-shot entry points.
pub mod error;
/// Orchestrates the stages of evaluation.
///
/// This module ties together the lexer, parser and evaluator.
pub mod interpreter;
/// General numeric and display helpers.
///
/// Integral checks, checked conversions, the 64-bit factorial and result
/// formatting used by the command-line front end.
pub mod util;

use tracing::debug;

pub use crate::{
    error::Error,
    interpreter::{
        evaluator::core::{AngleMode, EvalContext, evaluate},
        lexer::tokenize,
        parser::core::{ParserConfig, parse, parse_with},
    },
};

/// Tokenizes, parses and evaluates `source` in one call.
///
/// # Errors
/// Returns the first lexing, parsing or evaluation error.
///
/// # Examples
/// ```
/// use sciexpr::{AngleMode, EvalContext, evaluate_str};
///
/// let radians = EvalContext::default();
/// assert_eq!(evaluate_str("2+3*4", &radians).unwrap(), 14.0);
/// assert_eq!(evaluate_str("2^3^2", &radians).unwrap(), 512.0);
///
/// let degrees = EvalContext::new(AngleMode::Degrees);
/// assert!((evaluate_str("sin(90)", &degrees).unwrap() - 1.0).abs() < 1e-12);
///
/// // Errors are reported, never replaced by a default value.
/// assert!(evaluate_str("1/0", &radians).is_err());
/// ```
pub fn evaluate_str(source: &str, context: &EvalContext) -> Result<f64, Error> {
    evaluate_str_with(source, context, ParserConfig::default())
}

/// Like [`evaluate_str`], with an explicit parser configuration.
///
/// # Errors
/// Returns the first lexing, parsing or evaluation error.
pub fn evaluate_str_with(source: &str,
                         context: &EvalContext,
                         config: ParserConfig)
                         -> Result<f64, Error> {
    let tokens = tokenize(source).inspect_err(|e| debug!(error = %e, "tokenizing failed"))?;
    let expr = parse_with(&tokens, config).inspect_err(|e| debug!(error = %e, "parsing failed"))?;
    Ok(evaluate(&expr, context)?)
}
