use std::borrow::Cow;

use gsc_codec::Encoding;
use serde::Serialize;

/// Immutable descriptor for one RAM field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemField {
    /// Unique catalog key, e.g. `money` or `party[0].hp`.
    pub key: Cow<'static, str>,
    /// Absolute address in the console's address space.
    pub addr: u16,
    /// Width of the field in bytes.
    pub size: usize,
    pub enc: Encoding,
    /// Human-readable description.
    pub doc: &'static str,
}

impl MemField {
    pub fn new(
        key: impl Into<Cow<'static, str>>,
        addr: u16,
        size: usize,
        enc: Encoding,
        doc: &'static str,
    ) -> Self {
        Self {
            key: key.into(),
            addr,
            size,
            enc,
            doc,
        }
    }

    /// Last address covered by the field.
    pub fn end_addr(&self) -> usize {
        usize::from(self.addr) + self.size.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_addr_is_inclusive() {
        let money = MemField::new("money", 0xD573, 3, Encoding::U24Bcd, "Money");
        assert_eq!(money.end_addr(), 0xD575);
        let flag = MemField::new("flag", 0xFFFF, 1, Encoding::U8, "");
        assert_eq!(flag.end_addr(), 0xFFFF);
    }
}
