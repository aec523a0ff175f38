use thiserror::Error;

/// Represents all errors that can occur during tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character or identifier run that the calculator does not know.
    #[error("Error at position {position}: Unknown token '{text}'.")]
    UnknownToken {
        /// The 0-based character offset of the first offending character.
        position: usize,
        /// The offending source text.
        text:     String,
    },
}

impl LexError {
    /// Returns the character offset at which lexing failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnknownToken { position, .. } => *position,
        }
    }
}
