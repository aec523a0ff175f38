use thiserror::Error;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token that cannot appear at this point of the grammar.
    #[error("Error at position {position}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The 0-based character offset of the token.
        position: usize,
        /// The source text of the token.
        token:    String,
    },
    /// An opening parenthesis was never closed.
    #[error("Error at position {position}: Parenthesis opened here is never closed.")]
    UnclosedParen {
        /// The 0-based character offset of the opening `(`.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Error at position {position}: Unexpected end of input.")]
    UnexpectedEnd {
        /// The 0-based character offset of the end of input.
        position: usize,
    },
    /// The expression nests deeper than the parser is allowed to recurse.
    #[error("Expression is too complex: nesting exceeds the limit of {limit}.")]
    TooComplex {
        /// The configured maximum depth.
        limit: usize,
    },
}

impl ParseError {
    /// Returns the character offset the error refers to, if it has one.
    ///
    /// ## Example
    /// ```
    /// use sciexpr::error::ParseError;
    ///
    /// let err = ParseError::UnclosedParen { position: 4 };
    /// assert_eq!(err.position(), Some(4));
    ///
    /// let err = ParseError::TooComplex { limit: 200 };
    /// assert_eq!(err.position(), None);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnclosedParen { position }
            | Self::UnexpectedEnd { position } => Some(*position),
            Self::TooComplex { .. } => None,
        }
    }
}
