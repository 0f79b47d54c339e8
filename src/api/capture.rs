use thiserror::Error;

/// The reason a token failed to convert to an unsigned 32-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UintError {
    /// The token is empty (ex: `"1,,2"` contains an empty token).
    #[error("cannot parse an integer from an empty string")]
    Empty,
    /// The token carries a leading minus sign.
    #[error("negative values are not permitted")]
    Negative,
    /// The token contains a character which is not a digit of the inferred base, or a misplaced `_`.
    #[error("invalid digit found in string")]
    InvalidDigit,
    /// The token is well formed, but its magnitude exceeds `u32::MAX`.
    #[error("number too large to fit in 32 bits")]
    Overflow,
}

/// A flag value rejected the text it was updated with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidUpdate {
    /// A token could not be converted to an unsigned 32-bit integer.
    #[error("cannot convert '{token}' to an unsigned 32-bit integer: {source}.")]
    InvalidUint {
        /// The offending token.
        token: String,
        /// The underlying conversion failure.
        source: UintError,
    },
    /// A custom flag value refused the text.
    #[error("cannot update with '{token}': {message}.")]
    Rejected {
        /// The offending token.
        token: String,
        /// Why the token was refused.
        message: String,
    },
}

impl InvalidUpdate {
    /// The offending token.
    pub fn token(&self) -> &str {
        match self {
            InvalidUpdate::InvalidUint { token, .. } => token,
            InvalidUpdate::Rejected { token, .. } => token,
        }
    }
}
