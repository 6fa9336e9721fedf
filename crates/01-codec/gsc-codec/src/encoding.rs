use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CodecError;

/// Conversion applied between a field's raw bytes and its typed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Single unsigned byte.
    U8,
    /// Unsigned 16-bit, least-significant byte first.
    U16Le,
    /// Unsigned 16-bit, most-significant byte first.
    U16Be,
    /// Unsigned 24-bit, least-significant byte first.
    U24Le,
    /// Six packed decimal digits in three bytes (money, coins).
    U24Bcd,
    /// Opaque fixed-length blob.
    Bytes,
    /// Fixed-length string in the game's character set, passed through raw.
    TextGsc,
}

impl Encoding {
    pub const ALL: [Encoding; 7] = [
        Encoding::U8,
        Encoding::U16Le,
        Encoding::U16Be,
        Encoding::U24Le,
        Encoding::U24Bcd,
        Encoding::Bytes,
        Encoding::TextGsc,
    ];

    /// Byte width implied by the encoding, or `None` for blob encodings whose
    /// width comes from the field declaration.
    pub const fn width(self) -> Option<usize> {
        match self {
            Encoding::U8 => Some(1),
            Encoding::U16Le | Encoding::U16Be => Some(2),
            Encoding::U24Le | Encoding::U24Bcd => Some(3),
            Encoding::Bytes | Encoding::TextGsc => None,
        }
    }

    /// True for encodings that decode to an integer.
    pub const fn is_integer(self) -> bool {
        self.width().is_some()
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Encoding::U8 => "u8",
            Encoding::U16Le => "u16_le",
            Encoding::U16Be => "u16_be",
            Encoding::U24Le => "u24_le",
            Encoding::U24Bcd => "u24_bcd",
            Encoding::Bytes => "bytes",
            Encoding::TextGsc => "text_gsc",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

impl FromStr for Encoding {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Encoding::ALL
            .into_iter()
            .find(|enc| enc.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CodecError::unknown_encoding(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_back_to_the_same_encoding() {
        for enc in Encoding::ALL {
            assert_eq!(enc.tag().parse::<Encoding>().unwrap(), enc);
        }
        assert_eq!("U16_BE".parse::<Encoding>().unwrap(), Encoding::U16Be);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "u32_le".parse::<Encoding>().unwrap_err();
        assert_eq!(err, CodecError::UnknownEncoding("u32_le".into()));
    }

    #[test]
    fn blob_encodings_have_no_fixed_width() {
        assert_eq!(Encoding::Bytes.width(), None);
        assert_eq!(Encoding::TextGsc.width(), None);
        assert!(!Encoding::TextGsc.is_integer());
        assert_eq!(Encoding::U24Bcd.width(), Some(3));
    }

    #[test]
    fn serializes_as_snake_case_tag() {
        let json = serde_json::to_string(&Encoding::U24Bcd).unwrap();
        assert_eq!(json, "\"u24_bcd\"");
    }
}
