use gsc_codec::CodecError;
use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

pub type MemoryResult<T> = Result<T, MemoryError>;

/// Failures raised by a memory backend.
#[derive(Debug, Error)]
pub enum MemoryError {
    #[error("{len} byte(s) at {addr:#06X} fall outside the memory space")]
    OutOfBounds { addr: u16, len: usize },

    #[error("short read at {addr:#06X}: expected {expected} byte(s), got {actual}")]
    ShortRead {
        addr: u16,
        expected: usize,
        actual: usize,
    },

    #[error("memory I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("memory backend error: {0}")]
    Backend(String),
}

impl MemoryError {
    pub fn backend(msg: impl Into<String>) -> Self {
        MemoryError::Backend(msg.into())
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("party slot {0} out of range (expected 0..=5)")]
    SlotOutOfRange(usize),

    #[error("offset {offset:#06X} in party slot {slot} overflows the address space")]
    AddressOverflow { slot: usize, offset: u16 },

    #[error("unknown field key: {0}")]
    UnknownKey(String),

    #[error("duplicate field key: {0}")]
    DuplicateKey(String),

    #[error("malformed hex range: {0:?}")]
    MalformedRange(String),

    #[error("address {addr:#06X} is not mapped by ROM bank {bank}")]
    BankAddr { bank: u16, addr: u16 },

    #[error("ROM range {start:#X}..{end:#X} exceeds image of {len:#X} bytes")]
    RomOutOfBounds { start: usize, end: usize, len: usize },

    #[error("{key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: CodecError,
    },

    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("memory error: {0}")]
    Memory(#[from] MemoryError),
}

impl CatalogError {
    pub fn unknown_key(key: impl Into<String>) -> Self {
        CatalogError::UnknownKey(key.into())
    }
}
