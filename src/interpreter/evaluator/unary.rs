use crate::{
    ast::UnaryOperator,
    error::EvalError,
    interpreter::evaluator::core::{EvalContext, EvalResult},
    util::num::{as_integral, f64_to_u64_checked, factorial},
};

impl EvalContext {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: arithmetic negation.
    /// - `Factorial`: the operand must be a non-negative integer (within
    ///   floating-point tolerance). The product is accumulated in checked
    ///   64-bit integer arithmetic, so `21!` and above are reported as
    ///   overflow instead of wrapping.
    ///
    /// # Example
    /// ```
    /// use sciexpr::{ast::UnaryOperator, interpreter::evaluator::core::EvalContext};
    ///
    /// assert_eq!(EvalContext::eval_unary(UnaryOperator::Negate, 5.0).unwrap(), -5.0);
    /// assert_eq!(EvalContext::eval_unary(UnaryOperator::Factorial, 4.0).unwrap(), 24.0);
    /// assert!(EvalContext::eval_unary(UnaryOperator::Factorial, 2.5).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: f64) -> EvalResult<f64> {
        match op {
            UnaryOperator::Negate => Ok(-value),
            UnaryOperator::Factorial => {
                if value < 0.0 {
                    return Err(EvalError::domain(format!("factorial of negative number {value}")));
                }

                let integral = as_integral(value).ok_or_else(|| {
                                   EvalError::domain(format!("factorial of non-integer {value}"))
                               })?;
                let n = f64_to_u64_checked(integral).ok_or(EvalError::Overflow)?;

                #[allow(clippy::cast_precision_loss)]
                let result = factorial(n).ok_or(EvalError::Overflow)? as f64;
                Ok(result)
            },
        }
    }
}
