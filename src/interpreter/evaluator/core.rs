use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{ast::Expr, error::EvalError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// How the arguments of `sin`, `cos` and `tan` are interpreted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AngleMode {
    /// Arguments are radians and are passed through unchanged.
    #[default]
    Radians,
    /// Arguments are degrees and are converted to radians before use.
    Degrees,
}

impl AngleMode {
    /// Converts an angle in this mode to radians.
    ///
    /// ## Example
    /// ```
    /// use sciexpr::interpreter::evaluator::core::AngleMode;
    ///
    /// assert_eq!(AngleMode::Radians.to_radians(1.5), 1.5);
    /// let pi = AngleMode::Degrees.to_radians(180.0);
    /// assert!((pi - std::f64::consts::PI).abs() < 1e-15);
    /// ```
    #[must_use]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Radians => angle,
            Self::Degrees => angle * std::f64::consts::PI / 180.0,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Radians => write!(f, "radians"),
            Self::Degrees => write!(f, "degrees"),
        }
    }
}

impl FromStr for AngleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rad" | "radians" => Ok(Self::Radians),
            "deg" | "degrees" => Ok(Self::Degrees),
            other => Err(format!("unknown angle mode '{other}', expected 'radians' or 'degrees'")),
        }
    }
}

/// Settings read by the evaluator.
///
/// The context is owned by the caller and only ever borrowed immutably, so a
/// single context can serve any number of concurrent evaluations. No state is
/// carried from one evaluation to the next.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EvalContext {
    /// Interpretation of trigonometric arguments.
    pub angle_mode: AngleMode,
}

impl EvalContext {
    /// Creates a context with the given angle mode.
    #[must_use]
    pub const fn new(angle_mode: AngleMode) -> Self {
        Self { angle_mode }
    }

    /// Evaluates an expression and returns its value.
    ///
    /// The evaluator dispatches on the node variant: literals and constants
    /// are returned directly, operators and function calls evaluate their
    /// operands first. Every intermediate result is checked for finiteness,
    /// so NaN and infinities never propagate.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The finite value of the expression.
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        let value = match expr {
            Expr::Number { value } => *value,
            Expr::Constant(constant) => constant.value(),
            Expr::UnaryOp { op, expr } => {
                let operand = self.eval(expr)?;
                Self::eval_unary(*op, operand)?
            },
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right)?
            },
            Expr::FunctionCall { function, argument } => {
                let argument = self.eval(argument)?;
                self.eval_function(*function, argument)?
            },
        };
        ensure_finite(value, expr)
    }
}

/// Evaluates an expression tree under the given context.
///
/// # Errors
/// Returns an [`EvalError`] for division by zero, domain violations,
/// factorial overflow, or any non-finite intermediate result.
///
/// # Example
/// ```
/// use sciexpr::{
///     evaluate, parse, tokenize,
///     interpreter::evaluator::core::{AngleMode, EvalContext},
/// };
///
/// let expr = parse(&tokenize("sin(90)").unwrap()).unwrap();
/// let degrees = evaluate(&expr, &EvalContext::new(AngleMode::Degrees)).unwrap();
/// assert!((degrees - 1.0).abs() < 1e-12);
/// ```
pub fn evaluate(expr: &Expr, context: &EvalContext) -> EvalResult<f64> {
    match context.eval(expr) {
        Ok(value) => {
            debug!(value, angle_mode = %context.angle_mode, "evaluated expression");
            Ok(value)
        },
        Err(e) => {
            debug!(error = %e, "evaluation failed");
            Err(e)
        },
    }
}

/// Rejects NaN and infinities that no specific check classified.
fn ensure_finite(value: f64, expr: &Expr) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::domain(format!("{expr} has no finite value")))
    }
}
