//! Error types shared by the whole crate.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid parameters or malformed code text
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The corrected payload could not be turned into text
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Failures of the strict text decode path.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Corrected bytes are not valid UTF-8
    #[error("decoded bytes are not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 {
        valid_up_to: usize,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl Error {
    /// Shorthand for building an [`Error::InvalidInput`]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

impl From<std::string::FromUtf8Error> for DecodeError {
    fn from(source: std::string::FromUtf8Error) -> Self {
        DecodeError::InvalidUtf8 {
            valid_up_to: source.utf8_error().valid_up_to(),
            source,
        }
    }
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;
