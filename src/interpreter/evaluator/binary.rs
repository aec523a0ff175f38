use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::{EvalContext, EvalResult},
};

impl EvalContext {
    /// Evaluates a binary arithmetic operation.
    ///
    /// Division by exactly zero is reported rather than producing an
    /// infinity. Exponentiation uses `powf`; a NaN result (a negative base
    /// with a fractional exponent) is a domain error.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Example
    /// ```
    /// use sciexpr::{ast::BinaryOperator, interpreter::evaluator::core::EvalContext};
    ///
    /// assert_eq!(EvalContext::eval_binary(BinaryOperator::Pow, 2.0, 10.0).unwrap(), 1024.0);
    /// assert!(EvalContext::eval_binary(BinaryOperator::Div, 1.0, 0.0).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(left / right)
            },
            BinaryOperator::Pow => Self::eval_pow(left, right),
        }
    }

    /// Evaluates `base ^ exponent`.
    fn eval_pow(base: f64, exponent: f64) -> EvalResult<f64> {
        let result = base.powf(exponent);
        if result.is_nan() {
            return Err(EvalError::domain(format!("{base} ^ {exponent} is not a real number")));
        }
        Ok(result)
    }
}
