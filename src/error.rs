/// Lexing errors.
///
/// Raised by the tokenizer when the input contains a character or identifier
/// that is not part of the calculator grammar.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// a token sequence: unexpected tokens, unbalanced parentheses, premature end
/// of input and nesting that exceeds the configured depth limit.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing a syntax tree to
/// a number, such as division by zero, domain violations and factorial
/// overflow.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any failure of the full `text -> number` pipeline.
///
/// Each stage keeps its own error family; this enum only exists so that the
/// one-shot entry points can return a single type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The tokenizer rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token sequence is not a well-formed expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression is well-formed but has no finite value.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
