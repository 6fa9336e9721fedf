use serde::Serialize;

/// Typed value carried in and out of a memory field.
///
/// Integer encodings use `Int`; the value is signed so that out-of-range
/// input (negative money, say) reaches the encoder, which truncates or
/// clamps per encoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Bytes(Vec<u8>),
}

impl FieldValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            FieldValue::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Int(_) => None,
            FieldValue::Bytes(b) => Some(b),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<u8> for FieldValue {
    fn from(v: u8) -> Self {
        FieldValue::Int(v.into())
    }
}

impl From<u16> for FieldValue {
    fn from(v: u16) -> Self {
        FieldValue::Int(v.into())
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::Int(v.into())
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(b: Vec<u8>) -> Self {
        FieldValue::Bytes(b)
    }
}

impl From<&[u8]> for FieldValue {
    fn from(b: &[u8]) -> Self {
        FieldValue::Bytes(b.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        let money = FieldValue::from(3000u16);
        assert_eq!(money.as_int(), Some(3000));
        assert_eq!(money.as_bytes(), None);

        let moves = FieldValue::from(&[0x21u8, 0x2D][..]);
        assert_eq!(moves.as_int(), None);
        assert_eq!(moves.as_bytes(), Some(&[0x21, 0x2D][..]));
    }
}
