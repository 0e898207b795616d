//! Codec error types.

use thiserror::Error;

/// Errors that can occur while working on a single token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A character is not one of the 64 alphabet symbols.
    #[error("Character '{0}' is not in the Base64 alphabet")]
    InvalidCharacter(char),

    /// A token is not a structurally valid Base64 string.
    #[error("Malformed token '{0}'")]
    MalformedToken(String),
}
