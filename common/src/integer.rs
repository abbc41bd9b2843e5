//! Arbitrary-precision integers to binary digit strings and back.

use num_bigint::{BigInt, BigUint};

use crate::error::Error;

/// Minimal binary digits of `number`.
///
/// Negative numbers are written as a `-` followed by the digits of their magnitude.
#[must_use]
pub fn encode_int_to_binary(number: &BigInt) -> String {
    number.to_str_radix(2)
}

/// Interpret a string of `0` and `1` characters as an unsigned base-2 number.
///
/// # Errors
///
/// Fails with [`Error::InvalidBinaryNumber`] if `digits` is empty or contains any other character.
pub fn decode_binary_to_int(digits: &str) -> Result<BigInt, Error> {
    let invalid = || Error::InvalidBinaryNumber(digits.to_owned());

    if digits.is_empty() || !digits.bytes().all(|c| matches!(c, b'0' | b'1')) {
        return Err(invalid());
    }

    BigUint::parse_bytes(digits.as_bytes(), 2)
        .map(BigInt::from)
        .ok_or_else(invalid)
}

/// Parse a decimal integer literal with an optional sign.
///
/// # Errors
///
/// Fails with [`Error::InvalidIntegerLiteral`] if `text` is not a decimal integer.
pub fn parse_integer(text: &str) -> Result<BigInt, Error> {
    text.trim()
        .parse()
        .map_err(|_| Error::InvalidIntegerLiteral(text.to_owned()))
}
