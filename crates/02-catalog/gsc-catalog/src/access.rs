use gsc_codec::{decode, encode, FieldValue};
use log::trace;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{Catalog, CatalogError, CatalogResult, MemField, MemoryError, MemoryRead, MemoryWrite};

/// Reads `field` through `reader` and decodes it.
///
/// The reader must hand back exactly `field.size` bytes; anything else is a
/// [`MemoryError::ShortRead`]. Reader failures propagate unchanged.
pub fn read_field<R: MemoryRead + ?Sized>(
    reader: &R,
    field: &MemField,
) -> CatalogResult<FieldValue> {
    let raw = reader.read_mem(field.addr, field.size)?;
    if raw.len() != field.size {
        return Err(MemoryError::ShortRead {
            addr: field.addr,
            expected: field.size,
            actual: raw.len(),
        }
        .into());
    }
    trace!("read {} @{:04X}: {:02X?}", field.key, field.addr, raw);
    Ok(decode(&raw, field.enc)?)
}

/// Encodes `value` for `field` and hands the bytes to `writer`.
///
/// Encoding happens first, so a blob of the wrong length never reaches the
/// writer and neighbouring fields are left untouched.
pub fn write_field<W: MemoryWrite + ?Sized>(
    writer: &mut W,
    field: &MemField,
    value: &FieldValue,
) -> CatalogResult<()> {
    let bytes = encode(value, field.enc, field.size).map_err(|source| CatalogError::Encode {
        key: field.key.to_string(),
        source,
    })?;
    trace!("write {} @{:04X}: {:02X?}", field.key, field.addr, bytes.as_slice());
    writer.write_mem(field.addr, &bytes)?;
    Ok(())
}

/// Writes one raw byte, clamping `value` into `0..=255`.
pub fn poke_byte<W: MemoryWrite + ?Sized>(
    writer: &mut W,
    addr: u16,
    value: i64,
) -> CatalogResult<u8> {
    let byte = value.clamp(0, 0xFF) as u8;
    trace!("poke @{addr:04X}: {byte:02X}");
    writer.write_mem(addr, &[byte])?;
    Ok(byte)
}

/// Decoded values keyed by field, in request order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<(String, FieldValue)>,
}

impl Snapshot {
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Reads every field in `catalog`, one read per field.
pub fn snapshot<R: MemoryRead + ?Sized>(catalog: &Catalog, reader: &R) -> CatalogResult<Snapshot> {
    snapshot_keys(catalog, reader, catalog.keys())
}

/// Reads the named fields. The first unknown key or failed read aborts the
/// whole snapshot.
pub fn snapshot_keys<R, I>(catalog: &Catalog, reader: &R, keys: I) -> CatalogResult<Snapshot>
where
    R: MemoryRead + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let entries = keys
        .into_iter()
        .map(|key| -> CatalogResult<(String, FieldValue)> {
            let key = key.as_ref();
            let value = read_field(reader, catalog.field(key)?)?;
            Ok((key.to_owned(), value))
        })
        .collect::<CatalogResult<Vec<_>>>()?;
    Ok(Snapshot { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CatalogOptions, MemoryImage, MemoryResult};
    use gsc_codec::{CodecError, Encoding};

    fn image() -> MemoryImage {
        MemoryImage::full_address_space()
    }

    #[test]
    fn u16_be_roundtrip() {
        let field = MemField::new("hp", 0xDA4C, 2, Encoding::U16Be, "HP");
        let mut mem = image();
        write_field(&mut mem, &field, &FieldValue::Int(1234)).unwrap();
        assert_eq!(mem.as_bytes()[0xDA4C..0xDA4E], [0x04, 0xD2]);
        assert_eq!(read_field(&mem, &field).unwrap(), FieldValue::Int(1234));
    }

    #[test]
    fn short_blob_never_reaches_the_writer() {
        let field = MemField::new("party[0].moves", 0xDA2C, 4, Encoding::Bytes, "Moves");
        let mut mem = image();
        mem.write_mem(0xDA2C, &[1, 2, 3, 4]).unwrap();

        let err = write_field(&mut mem, &field, &FieldValue::Bytes(vec![9, 9, 9])).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Encode {
                source: CodecError::LengthMismatch { expected: 4, actual: 3 },
                ..
            }
        ));
        assert_eq!(read_field(&mem, &field).unwrap(), FieldValue::Bytes(vec![1, 2, 3, 4]));
    }

    #[test]
    fn short_reads_are_reported() {
        let field = MemField::new("money", 0xD573, 3, Encoding::U24Bcd, "Money");
        let reader = |_addr: u16, _size: usize| -> MemoryResult<Vec<u8>> { Ok(vec![0x12]) };
        assert!(matches!(
            read_field(&reader, &field),
            Err(CatalogError::Memory(MemoryError::ShortRead { expected: 3, actual: 1, .. }))
        ));
    }

    #[test]
    fn reader_errors_propagate() {
        let field = MemField::new("player_x", 0xD20D, 1, Encoding::U8, "Player X");
        let reader = |_addr: u16, _size: usize| -> MemoryResult<Vec<u8>> {
            Err(MemoryError::backend("emulator gone"))
        };
        let err = read_field(&reader, &field).unwrap_err();
        assert_eq!(err.to_string(), "memory error: memory backend error: emulator gone");
    }

    #[test]
    fn poke_clamps_value() {
        let mut mem = image();
        assert_eq!(poke_byte(&mut mem, 0xD20D, 300).unwrap(), 0xFF);
        assert_eq!(poke_byte(&mut mem, 0xD20E, -4).unwrap(), 0x00);
        assert_eq!(mem.as_bytes()[0xD20D], 0xFF);
    }

    #[test]
    fn snapshot_follows_requested_order() {
        let catalog = Catalog::build(CatalogOptions::default()).unwrap();
        let mut mem = image();
        catalog.write(&mut mem, "player_x", &FieldValue::Int(7)).unwrap();
        catalog.write(&mut mem, "money", &FieldValue::Int(3000)).unwrap();

        let snap = snapshot_keys(&catalog, &mem, ["money", "player_x"]).unwrap();
        let keys: Vec<_> = snap.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["money", "player_x"]);
        assert_eq!(snap.get("money"), Some(&FieldValue::Int(3000)));

        let json = serde_json::to_string(&snap).unwrap();
        assert_eq!(json, r#"{"money":3000,"player_x":7}"#);
    }

    #[test]
    fn snapshot_fails_on_unknown_key() {
        let catalog = Catalog::build(CatalogOptions::core_only()).unwrap();
        let err = snapshot_keys(&catalog, &image(), ["money", "party[0].hp"]).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownKey(_)));
    }

    #[test]
    fn full_snapshot_covers_catalog() {
        let catalog = Catalog::build(CatalogOptions::default()).unwrap();
        let snap = snapshot(&catalog, &image()).unwrap();
        assert_eq!(snap.len(), catalog.len());
    }
}
