//! Text to space separated 8-bit binary groups and back, using UTF-8.

use itertools::Itertools;

use crate::error::{BinaryInputError, Error};

/// Render every UTF-8 byte of `text` as an 8-digit binary group.
#[must_use]
pub fn encode_text_to_binary(text: &str) -> String {
    text.bytes()
        .format_with(" ", |byte, f| f(&format_args!("{byte:08b}")))
        .to_string()
}

/// Decode whitespace separated binary groups back into text.
///
/// Groups are not required to be exactly 8 digits long, as long as their value fits into a byte.
///
/// # Errors
///
/// Fails with [`Error::InvalidBinaryInput`] if a group is not a binary byte value or if the
/// resulting bytes are not valid UTF-8.
pub fn decode_binary_to_text(binary: &str) -> Result<String, Error> {
    let bytes = binary
        .split_whitespace()
        .map(parse_group)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(String::from_utf8(bytes)?)
}

fn parse_group(chunk: &str) -> Result<u8, BinaryInputError> {
    // `from_str_radix` would also accept a leading sign
    if !chunk.bytes().all(|c| matches!(c, b'0' | b'1')) {
        return Err(BinaryInputError::Chunk(chunk.to_owned()));
    }

    u8::from_str_radix(chunk, 2).map_err(|_| BinaryInputError::Chunk(chunk.to_owned()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encode_single_character() {
        assert_eq!(encode_text_to_binary("A"), "01000001");
        assert_eq!(encode_text_to_binary("ab"), "01100001 01100010");
        assert_eq!(encode_text_to_binary(""), "");
    }

    #[test]
    fn encode_multibyte_character() {
        assert_eq!(encode_text_to_binary("é"), "11000011 10101001");
        assert_eq!(
            encode_text_to_binary("€"),
            "11100010 10000010 10101100"
        );
    }

    #[test]
    fn decode_groups() {
        assert_eq!(decode_binary_to_text("01100001 01100010").unwrap(), "ab");
        assert_eq!(decode_binary_to_text("  01100001\t\n01100010 ").unwrap(), "ab");
        assert_eq!(decode_binary_to_text("").unwrap(), "");
        assert_eq!(decode_binary_to_text("   ").unwrap(), "");
    }

    #[test]
    fn decode_short_and_long_groups() {
        assert_eq!(decode_binary_to_text("1 10").unwrap(), "\u{1}\u{2}");
        assert_eq!(decode_binary_to_text("0000001000001").unwrap(), "A");
    }

    #[test]
    fn decode_invalid_chunk() {
        for input in ["01100001 0110002", "100000000", "+1000001", "0b1000001", "1_0"] {
            let err = decode_binary_to_text(input).unwrap_err();
            assert!(
                matches!(err, Error::InvalidBinaryInput(BinaryInputError::Chunk(_))),
                "{input:?} gave {err:?}"
            );
        }

        let err = decode_binary_to_text("01 2").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidBinaryInput(BinaryInputError::Chunk(chunk)) if chunk == "2"
        ));
    }

    #[test]
    fn decode_invalid_utf8() {
        let err = decode_binary_to_text("11000011").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidBinaryInput(BinaryInputError::Utf8(_))
        ));
        assert!(err.to_string().starts_with("Invalid UTF-8 binary input: "));
    }

    #[test]
    fn text_round_trip() {
        for text in ["", "A", "Hello, World!", "naïve café", "日本語", "🦀 ferris", "\0\n\t"] {
            assert_eq!(
                decode_binary_to_text(&encode_text_to_binary(text)).unwrap(),
                text
            );
        }
    }

    #[test]
    fn encoded_groups_are_bytes() {
        let text = "grouping 🦀";
        let encoded = encode_text_to_binary(text);
        itertools::assert_equal(
            encoded.split(' ').map(str::len),
            std::iter::repeat_n(8, text.len()),
        );
    }
}
