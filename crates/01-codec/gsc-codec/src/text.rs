//! Best-effort conversion between Rust strings and the GSC character set.
//!
//! Only the printable subset used for names is covered: upper and lower case
//! Latin letters, digits and space. `0x50` terminates a string and pads the
//! remainder of a fixed-width buffer.

/// String terminator and padding byte.
pub const TERMINATOR: u8 = 0x50;
/// Space character.
pub const SPACE: u8 = 0x7F;

const UPPER_A: u8 = 0x80;
const LOWER_A: u8 = 0xA0;
const DIGIT_0: u8 = 0xF6;

/// Decodes up to the first terminator. Unmapped bytes render as `?`.
pub fn decode_gsc_text(raw: &[u8]) -> String {
    let text: String = raw
        .iter()
        .take_while(|&&b| b != TERMINATOR)
        .map(|&b| match b {
            0x00 | SPACE => ' ',
            0x80..=0x99 => char::from(b'A' + (b - UPPER_A)),
            0xA0..=0xB9 => char::from(b'a' + (b - LOWER_A)),
            0xF6..=0xFF => char::from(b'0' + (b - DIGIT_0)),
            _ => '?',
        })
        .collect();
    text.trim().to_owned()
}

/// Encodes `text` into exactly `size` bytes, truncating long input and
/// padding with the terminator. Unmapped characters become spaces.
pub fn encode_gsc_text(text: &str, size: usize) -> Vec<u8> {
    let mut out: Vec<u8> = text
        .chars()
        .take(size)
        .map(|ch| match ch {
            'A'..='Z' => UPPER_A + (ch as u8 - b'A'),
            'a'..='z' => LOWER_A + (ch as u8 - b'a'),
            '0'..='9' => DIGIT_0 + (ch as u8 - b'0'),
            _ => SPACE,
        })
        .collect();
    out.resize(size, TERMINATOR);
    out
}
