//! Memory backend seams.
//!
//! The catalog reads and writes through two small traits so that any
//! emulator binding, a save-state view or a plain byte buffer can sit
//! underneath. Closures with the matching shape implement them directly.

use std::fs;
use std::ops::Range;
use std::path::Path;

use crate::{MemoryError, MemoryResult};

/// Size of the Game Boy CPU address space.
pub const ADDRESS_SPACE: usize = 0x1_0000;

/// Reads `size` bytes starting at `addr`. Implementations must return exactly
/// `size` bytes or fail.
pub trait MemoryRead {
    fn read_mem(&self, addr: u16, size: usize) -> MemoryResult<Vec<u8>>;
}

/// Writes all of `data` starting at `addr`.
pub trait MemoryWrite {
    fn write_mem(&mut self, addr: u16, data: &[u8]) -> MemoryResult<()>;
}

impl<F> MemoryRead for F
where
    F: Fn(u16, usize) -> MemoryResult<Vec<u8>>,
{
    fn read_mem(&self, addr: u16, size: usize) -> MemoryResult<Vec<u8>> {
        self(addr, size)
    }
}

impl<F> MemoryWrite for F
where
    F: FnMut(u16, &[u8]) -> MemoryResult<()>,
{
    fn write_mem(&mut self, addr: u16, data: &[u8]) -> MemoryResult<()> {
        self(addr, data)
    }
}

/// Flat byte buffer mapped at `base` in the address space.
///
/// Used for memory dumps on disk and as the backing store in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryImage {
    base: u16,
    bytes: Vec<u8>,
}

impl MemoryImage {
    /// Wraps `bytes` at `base`. Bytes past the end of the address space are
    /// kept but unreachable.
    pub fn new(base: u16, bytes: Vec<u8>) -> Self {
        Self { base, bytes }
    }

    /// Zero-filled image covering the whole address space.
    pub fn full_address_space() -> Self {
        Self::new(0, vec![0; ADDRESS_SPACE])
    }

    pub fn zeroed(base: u16, len: usize) -> Self {
        Self::new(base, vec![0; len])
    }

    pub fn load(path: &Path, base: u16) -> MemoryResult<Self> {
        Ok(Self::new(base, fs::read(path)?))
    }

    pub fn save(&self, path: &Path) -> MemoryResult<()> {
        fs::write(path, &self.bytes)?;
        Ok(())
    }

    pub fn base(&self) -> u16 {
        self.base
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn span(&self, addr: u16, len: usize) -> MemoryResult<Range<usize>> {
        let out_of_bounds = || MemoryError::OutOfBounds { addr, len };
        let start = usize::from(addr)
            .checked_sub(usize::from(self.base))
            .ok_or_else(out_of_bounds)?;
        let end = start.checked_add(len).ok_or_else(out_of_bounds)?;
        if end > self.bytes.len() || usize::from(addr).saturating_add(len) > ADDRESS_SPACE {
            return Err(out_of_bounds());
        }
        Ok(start..end)
    }
}

impl MemoryRead for MemoryImage {
    fn read_mem(&self, addr: u16, size: usize) -> MemoryResult<Vec<u8>> {
        let span = self.span(addr, size)?;
        Ok(self.bytes[span].to_vec())
    }
}

impl MemoryWrite for MemoryImage {
    fn write_mem(&mut self, addr: u16, data: &[u8]) -> MemoryResult<()> {
        let span = self.span(addr, data.len())?;
        self.bytes[span].copy_from_slice(data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_honours_base_address() {
        let mut wram = MemoryImage::zeroed(0xC000, 0x2000);
        wram.write_mem(0xD573, &[0x01, 0x23, 0x45]).unwrap();
        assert_eq!(wram.read_mem(0xD573, 3).unwrap(), vec![0x01, 0x23, 0x45]);
        assert_eq!(wram.as_bytes()[0x1573], 0x01);
    }

    #[test]
    fn reads_outside_image_fail() {
        let wram = MemoryImage::zeroed(0xC000, 0x2000);
        assert!(matches!(
            wram.read_mem(0xBFFF, 1),
            Err(MemoryError::OutOfBounds { addr: 0xBFFF, len: 1 })
        ));
        assert!(wram.read_mem(0xDFFF, 2).is_err());
        assert!(wram.read_mem(0xDFFF, 1).is_ok());
    }

    #[test]
    fn writes_past_address_space_fail() {
        let mut mem = MemoryImage::new(0, vec![0; ADDRESS_SPACE + 4]);
        assert!(mem.write_mem(0xFFFF, &[1, 2]).is_err());
        assert_eq!(mem.as_bytes()[0xFFFF], 0);
    }

    #[test]
    fn closures_act_as_backends() {
        let reader = |addr: u16, size: usize| -> MemoryResult<Vec<u8>> {
            Ok(vec![(addr & 0xFF) as u8; size])
        };
        assert_eq!(reader.read_mem(0x1234, 2).unwrap(), vec![0x34, 0x34]);

        let mut log = Vec::new();
        let mut writer = |addr: u16, data: &[u8]| -> MemoryResult<()> {
            log.push((addr, data.to_vec()));
            Ok(())
        };
        writer.write_mem(0xD20D, &[7]).unwrap();
        assert_eq!(log, vec![(0xD20D, vec![7])]);
    }
}
