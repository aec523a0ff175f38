use crate::{
    ast::Function,
    error::EvalError,
    interpreter::evaluator::core::{EvalContext, EvalResult},
};

impl EvalContext {
    /// Evaluates a function call on an already evaluated argument.
    ///
    /// Trigonometric arguments are converted from degrees exactly once, here,
    /// when the context asks for it; the syntax tree is never rewritten.
    /// `log` is base 10 and, like `ln`, requires a positive argument. `sqrt`
    /// requires a non-negative argument.
    ///
    /// # Example
    /// ```
    /// use sciexpr::{
    ///     ast::Function,
    ///     interpreter::evaluator::core::{AngleMode, EvalContext},
    /// };
    ///
    /// let degrees = EvalContext::new(AngleMode::Degrees);
    /// let r = degrees.eval_function(Function::Cos, 180.0).unwrap();
    /// assert!((r + 1.0).abs() < 1e-12);
    ///
    /// let radians = EvalContext::default();
    /// let r = radians.eval_function(Function::Log, 1000.0).unwrap();
    /// assert!((r - 3.0).abs() < 1e-12);
    /// assert!(radians.eval_function(Function::Ln, 0.0).is_err());
    /// ```
    pub fn eval_function(&self, function: Function, argument: f64) -> EvalResult<f64> {
        let argument = if function.is_trigonometric() {
            self.angle_mode.to_radians(argument)
        } else {
            argument
        };

        match function {
            Function::Sin => Ok(argument.sin()),
            Function::Cos => Ok(argument.cos()),
            Function::Tan => Ok(argument.tan()),
            Function::Log => Ok(positive(function, argument)?.log10()),
            Function::Ln => Ok(positive(function, argument)?.ln()),
            Function::Sqrt => {
                if argument < 0.0 {
                    return Err(EvalError::domain(format!("sqrt of negative number {argument}")));
                }
                Ok(argument.sqrt())
            },
        }
    }
}

/// Passes `argument` through if it lies in the domain of a logarithm.
fn positive(function: Function, argument: f64) -> EvalResult<f64> {
    if argument <= 0.0 {
        return Err(EvalError::domain(format!("{function} of non-positive number {argument}")));
    }
    Ok(argument)
}
