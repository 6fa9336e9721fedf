//! Typed field catalog for Pokémon Gold/Silver RAM and ROM.
//!
//! The catalog maps semantic keys (`money`, `party[2].hp`, `maps.primary_headers`)
//! to fixed addresses and encodings. Callers supply the memory backend through
//! [`MemoryRead`] and [`MemoryWrite`]; this crate never touches an emulator
//! directly.
//!
//! Addresses target one specific Gold/Silver revision (the international
//! release). Porting to another revision means revising [`map`] and the ROM
//! tables, nothing detects a mismatch at runtime.

#![allow(missing_docs)]

mod access;
mod catalog;
mod error;
mod field;
pub mod inventory;
pub mod map;
mod memory;
pub mod party;
pub mod rom;

pub use access::{poke_byte, read_field, snapshot, snapshot_keys, write_field, Snapshot};
pub use catalog::{Catalog, CatalogOptions};
pub use error::{CatalogError, CatalogResult, MemoryError, MemoryResult};
pub use field::MemField;
pub use gsc_codec::{Encoding, FieldValue};
pub use memory::{MemoryImage, MemoryRead, MemoryWrite, ADDRESS_SPACE};
pub use party::{
    party_mon_base, party_mon_field_addr, party_nickname_addr, party_ot_name_addr, PARTY_SLOTS,
};
pub use rom::{
    bankaddr_to_file_offset, parse_hex_range, read_rom_bankaddr, read_rom_field, read_rom_range,
    RomBankAddr, RomField, RomLocation, RomRange,
};
