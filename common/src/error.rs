use std::string::FromUtf8Error;

use thiserror::Error;

/// Possible errors when converting user input.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid UTF-8 binary input: {0}")]
    InvalidBinaryInput(#[from] BinaryInputError),
    #[error("Invalid binary number: '{0}'")]
    InvalidBinaryNumber(String),
    #[error("Invalid integer literal: '{0}'")]
    InvalidIntegerLiteral(String),
}

/// Reason a binary string could not be decoded to text.
#[derive(Debug, Error)]
pub enum BinaryInputError {
    #[error("'{0}' is not an 8-bit binary value")]
    Chunk(String),
    #[error(transparent)]
    Utf8(#[from] FromUtf8Error),
}

impl From<FromUtf8Error> for Error {
    fn from(value: FromUtf8Error) -> Self {
        Self::InvalidBinaryInput(value.into())
    }
}
