use std::fmt::{self, Display};

use common::{
    Error,
    integer::{decode_binary_to_int, encode_int_to_binary, parse_integer},
    text::{decode_binary_to_text, encode_text_to_binary},
};

/// The conversions offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    TextToBinary,
    BinaryToText,
    IntToBinary,
    BinaryToInt,
}

impl Conversion {
    pub fn iter() -> impl Iterator<Item = Self> {
        [
            Self::TextToBinary,
            Self::BinaryToText,
            Self::IntToBinary,
            Self::BinaryToInt,
        ]
        .into_iter()
    }

    /// Menu key selecting this conversion.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::TextToBinary => "1",
            Self::BinaryToText => "2",
            Self::IntToBinary => "3",
            Self::BinaryToInt => "4",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::iter().find(|conversion| conversion.key() == key)
    }

    /// Name used in file names of saved results.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::TextToBinary => "text_to_binary",
            Self::BinaryToText => "binary_to_text",
            Self::IntToBinary => "int_to_binary",
            Self::BinaryToInt => "binary_to_int",
        }
    }

    #[must_use]
    pub fn prompt(self) -> &'static str {
        match self {
            Self::TextToBinary => "Enter text: ",
            Self::BinaryToText => {
                "Enter space-separated 8-bit binary (e.g. '01100001 01100010'): "
            }
            Self::IntToBinary => "Enter integer number: ",
            Self::BinaryToInt => "Enter binary number (e.g. '1101'): ",
        }
    }

    #[must_use]
    pub fn result_label(self) -> &'static str {
        match self {
            Self::TextToBinary => "Binary (8-bit per byte)",
            Self::BinaryToText => "Text",
            Self::IntToBinary => "Binary representation",
            Self::BinaryToInt => "Integer value",
        }
    }

    /// Run the conversion on raw user input.
    ///
    /// Text is taken as entered, all other inputs are trimmed.
    pub fn convert(self, input: &str) -> Result<String, Error> {
        match self {
            Self::TextToBinary => Ok(encode_text_to_binary(input)),
            Self::BinaryToText => decode_binary_to_text(input.trim()),
            Self::IntToBinary => Ok(encode_int_to_binary(&parse_integer(input)?)),
            Self::BinaryToInt => Ok(decode_binary_to_int(input.trim())?.to_string()),
        }
    }
}

impl Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TextToBinary => "Text → Binary (8-bit UTF-8)",
            Self::BinaryToText => "Binary (8-bit UTF-8) → Text",
            Self::IntToBinary => "Integer → Binary",
            Self::BinaryToInt => "Binary → Integer",
        };

        write!(f, "{name}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keys_are_unique() {
        for conversion in Conversion::iter() {
            assert_eq!(Conversion::from_key(conversion.key()), Some(conversion));
        }

        assert_eq!(Conversion::from_key("0"), None);
        assert_eq!(Conversion::from_key("5"), None);
        assert_eq!(Conversion::from_key(""), None);
    }

    #[test]
    fn convert_user_input() {
        assert_eq!(Conversion::TextToBinary.convert("A").unwrap(), "01000001");
        assert_eq!(
            Conversion::TextToBinary.convert(" A").unwrap(),
            "00100000 01000001"
        );
        assert_eq!(
            Conversion::BinaryToText.convert(" 01100001 01100010 ").unwrap(),
            "ab"
        );
        assert_eq!(Conversion::IntToBinary.convert(" 13 ").unwrap(), "1101");
        assert_eq!(Conversion::IntToBinary.convert("-5").unwrap(), "-101");
        assert_eq!(Conversion::BinaryToInt.convert("1101\t").unwrap(), "13");
    }

    #[test]
    fn convert_invalid_input() {
        assert!(matches!(
            Conversion::IntToBinary.convert("twelve"),
            Err(Error::InvalidIntegerLiteral(_))
        ));
        assert!(matches!(
            Conversion::BinaryToInt.convert("12"),
            Err(Error::InvalidBinaryNumber(_))
        ));
        assert!(matches!(
            Conversion::BinaryToText.convert("2"),
            Err(Error::InvalidBinaryInput(_))
        ));
    }
}
