use thiserror::Error;

/// Represents all errors that can occur during evaluation.
///
/// The evaluator never yields NaN or an infinity; any such value is reported
/// through one of these variants instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The right operand of `/` evaluated to exactly zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// An operand lies outside the domain of the operation, or the result is
    /// not a finite number.
    #[error("Domain error: {details}.")]
    DomainError {
        /// What went wrong, e.g. `sqrt of negative number -1`.
        details: String,
    },
    /// An integer computation does not fit into 64 bits.
    #[error("Integer overflow while trying to compute result.")]
    Overflow,
}

impl EvalError {
    pub(crate) fn domain(details: impl Into<String>) -> Self {
        Self::DomainError { details: details.into() }
    }
}
