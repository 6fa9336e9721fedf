//! ROM locations: banked addresses, file ranges and the static ROM table.
//!
//! Bank 0 (`0x0000..=0x3FFF`) maps straight onto the start of the file. Every
//! other bank is seen through the `0x4000..=0x7FFF` window, so a banked
//! address has to be translated with its bank index before it can index the
//! flat ROM image.

use serde::Serialize;

use crate::{CatalogError, CatalogResult};

/// Size of one switchable ROM bank.
pub const ROM_BANK_SIZE: usize = 0x4000;

/// ROM location in banked address space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RomBankAddr {
    pub bank: u16,
    pub addr: u16,
}

impl RomBankAddr {
    pub const fn new(bank: u16, addr: u16) -> Self {
        Self { bank, addr }
    }

    pub fn file_offset(self) -> CatalogResult<usize> {
        bankaddr_to_file_offset(self.bank, self.addr)
    }
}

/// Translates a banked address into an offset in the ROM file.
pub fn bankaddr_to_file_offset(bank: u16, addr: u16) -> CatalogResult<usize> {
    match (bank, addr) {
        (0, 0x0000..=0x3FFF) => Ok(usize::from(addr)),
        (bank, 0x4000..=0x7FFF) if bank >= 1 => {
            Ok(usize::from(bank) * ROM_BANK_SIZE + usize::from(addr - 0x4000))
        }
        _ => Err(CatalogError::BankAddr { bank, addr }),
    }
}

/// Half-open byte range `start..end` in the ROM file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RomRange {
    pub start: usize,
    pub end: usize,
    pub desc: &'static str,
}

impl RomRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Parses an inclusive `START-END` hex range (e.g. `2AB35-2B667`) into a
/// half-open [`RomRange`].
pub fn parse_hex_range(text: &str, desc: &'static str) -> CatalogResult<RomRange> {
    let malformed = || CatalogError::MalformedRange(text.to_owned());
    let parse = |part: &str| {
        let digits = part.trim();
        let digits = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
            .unwrap_or(digits);
        usize::from_str_radix(digits, 16).map_err(|_| malformed())
    };

    let (start, end) = text.split_once('-').ok_or_else(malformed)?;
    let start = parse(start)?;
    let end_inclusive = parse(end)?;
    if end_inclusive < start {
        return Err(malformed());
    }
    Ok(RomRange {
        start,
        end: end_inclusive + 1,
        desc,
    })
}

/// Where a ROM field lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RomLocation {
    FileRange(RomRange),
    BankAddr { at: RomBankAddr, size: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RomField {
    pub key: &'static str,
    pub desc: &'static str,
    pub location: RomLocation,
}

impl RomField {
    /// Start offset and byte length of the field within the ROM file.
    pub fn file_span(&self) -> CatalogResult<(usize, usize)> {
        match self.location {
            RomLocation::FileRange(range) => Ok((range.start, range.len())),
            RomLocation::BankAddr { at, size } => Ok((at.file_offset()?, size)),
        }
    }
}

fn slice(rom: &[u8], start: usize, len: usize) -> CatalogResult<&[u8]> {
    let end = start.saturating_add(len);
    rom.get(start..end).ok_or(CatalogError::RomOutOfBounds {
        start,
        end,
        len: rom.len(),
    })
}

pub fn read_rom_range<'a>(rom: &'a [u8], range: &RomRange) -> CatalogResult<&'a [u8]> {
    slice(rom, range.start, range.len())
}

pub fn read_rom_bankaddr(rom: &[u8], at: RomBankAddr, size: usize) -> CatalogResult<&[u8]> {
    slice(rom, at.file_offset()?, size)
}

pub fn read_rom_field<'a>(rom: &'a [u8], field: &RomField) -> CatalogResult<&'a [u8]> {
    match &field.location {
        RomLocation::FileRange(range) => read_rom_range(rom, range),
        RomLocation::BankAddr { at, size } => read_rom_bankaddr(rom, *at, *size),
    }
}

// Bank-0 pointers: (key, description, address, size).
#[rustfmt::skip]
const BANK0_POINTERS: &[(&str, &str, u16, usize)] = &[
    ("ptr.all_tileset_pointers", "Pointer to all tileset pointers (Bank 0)", 0x2DFD, 2),
    ("ptr.all_tileset_pointers_part2", "Pointer to all tileset pointers part 2 (Bank 0)", 0x2E0F, 2),
    ("ptr.colors_second_part", "Pointer to Colors (Second part) (Bank 0)", 0x2E50, 2),
    ("ptr.pokemon_stats", "Pointer to Pokémon stats (Bank 0)", 0x3A8E, 2),
];

// File ranges: (key, description, inclusive hex range).
#[rustfmt::skip]
const FILE_RANGES: &[(&str, &str, &str)] = &[
    ("wild.ptr_johto_land", "Pointer to Johto Pokemon (Land)", "2AA74-2AA75"),
    ("wild.johto_land", "Johto Wild Pokemon (Land)", "2AB35-2B667"),
    ("wild.johto_water", "Johto Wild Pokemon (Water)", "2B669-2B7BE"),
    ("wild.kanto_land", "Kanto Wild Pokemon (Land)", "2B7C0-2BD41"),
    ("wild.kanto_water", "Kanto Wild Pokemon (Water)", "2BD43-2BE1A"),
    ("trainers.battle_ptrs", "Pointers to Trainer Battles", "3993E-399C0"),
    ("trainers.pokemon_data", "Trainers Pokemon Data", "399C1-3B684"),
    ("pokedex.abc_order", "ABC Pokedex Order", "40C65-40D5F"),
    ("pokedex.new_order", "New Pokedex Order", "40D60-40E5B"),
    ("pokedex.types_text", "Types (POKEDEX)", "40FFE-41085"),
    ("moves.move_data", "Moves Data", "41AFE-421DB"),
    ("moves.ptr_table_pokemon_moves_evol", "Pointers to Pokemon Moves/Evolution Data", "427BD-429B2"),
    ("moves.pokemon_moves_evol_data", "Pokemon Moves/Evolution Data", "429B3-43E56"),
    ("pokepics.pointers", "Pointers to Pokepics", "48000-485DF"),
    ("pokepics.graphics", "Pokemon Graphics blob", "485E0-4BFFF"),
    ("maps.bank_pointers", "Map Bank Pointers", "940ED-94120"),
    ("maps.primary_headers", "Map Primary Headers", "94121-94E11"),
    ("maps.secondary_headers", "Map Secondary Headers", "94E12-965F8"),
];

/// Builds the static ROM field table.
pub(crate) fn rom_fields() -> CatalogResult<Vec<RomField>> {
    let pointers = BANK0_POINTERS
        .iter()
        .map(|&(key, desc, addr, size)| RomField {
            key,
            desc,
            location: RomLocation::BankAddr {
                at: RomBankAddr::new(0, addr),
                size,
            },
        });
    let ranges = FILE_RANGES
        .iter()
        .map(|&(key, desc, text)| -> CatalogResult<RomField> {
            Ok(RomField {
                key,
                desc,
                location: RomLocation::FileRange(parse_hex_range(text, desc)?),
            })
        });
    pointers.map(Ok).chain(ranges).collect()
}
