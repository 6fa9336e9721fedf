use smallvec::SmallVec;

use crate::{CodecError, CodecResult, Encoding, FieldValue};

/// Largest value representable by the three-byte BCD encoding.
pub const BCD_MAX: i64 = 999_999;

/// Encoded field bytes; inline for everything up to a name-table entry.
pub type Encoded = SmallVec<[u8; 16]>;

/// Decodes `raw` according to `enc`.
///
/// Integer encodings read their fixed width from the front of `raw`; blob
/// encodings return the bytes unchanged regardless of length.
pub fn decode(raw: &[u8], enc: Encoding) -> CodecResult<FieldValue> {
    if let Some(width) = enc.width() {
        if raw.len() < width {
            return Err(CodecError::ShortBuffer {
                enc,
                expected: width,
                actual: raw.len(),
            });
        }
    }

    let value = match enc {
        Encoding::U8 => FieldValue::Int(raw[0].into()),
        Encoding::U16Le => FieldValue::Int(u16::from_le_bytes([raw[0], raw[1]]).into()),
        Encoding::U16Be => FieldValue::Int(u16::from_be_bytes([raw[0], raw[1]]).into()),
        Encoding::U24Le => {
            FieldValue::Int(u32::from_le_bytes([raw[0], raw[1], raw[2], 0]).into())
        }
        Encoding::U24Bcd => FieldValue::Int(decode_bcd(&raw[..3])),
        Encoding::Bytes | Encoding::TextGsc => FieldValue::Bytes(raw.to_vec()),
    };
    Ok(value)
}

/// Encodes `value` according to `enc`.
///
/// `size` is the declared width of the target field and is only consulted by
/// blob encodings, which must match it exactly.
pub fn encode(value: &FieldValue, enc: Encoding, size: usize) -> CodecResult<Encoded> {
    let out = match (enc, value) {
        (Encoding::U8, FieldValue::Int(v)) => SmallVec::from_slice(&[*v as u8]),
        (Encoding::U16Le, FieldValue::Int(v)) => SmallVec::from_slice(&(*v as u16).to_le_bytes()),
        (Encoding::U16Be, FieldValue::Int(v)) => SmallVec::from_slice(&(*v as u16).to_be_bytes()),
        (Encoding::U24Le, FieldValue::Int(v)) => {
            SmallVec::from_slice(&(*v as u32).to_le_bytes()[..3])
        }
        (Encoding::U24Bcd, FieldValue::Int(v)) => SmallVec::from_slice(&encode_bcd(*v)),
        (Encoding::Bytes | Encoding::TextGsc, FieldValue::Bytes(bytes)) => {
            if bytes.len() != size {
                return Err(CodecError::LengthMismatch {
                    expected: size,
                    actual: bytes.len(),
                });
            }
            SmallVec::from_slice(bytes)
        }
        (enc, _) => return Err(CodecError::ValueKind { enc }),
    };
    Ok(out)
}

/// Reads packed decimal digits, high nibble first.
///
/// Nibbles above 9 are accumulated as-is rather than rejected.
pub fn decode_bcd(bytes: &[u8]) -> i64 {
    bytes
        .iter()
        .flat_map(|b| [i64::from(b >> 4), i64::from(b & 0x0F)])
        .fold(0i64, |acc, digit| acc.wrapping_mul(10).wrapping_add(digit))
}

/// Packs `value` as six decimal digits, clamped to `0..=BCD_MAX`.
pub fn encode_bcd(value: i64) -> [u8; 3] {
    let mut rest = value.clamp(0, BCD_MAX);
    let mut out = [0u8; 3];
    for byte in out.iter_mut().rev() {
        let pair = rest % 100;
        *byte = (((pair / 10) << 4) | (pair % 10)) as u8;
        rest /= 100;
    }
    out
}
