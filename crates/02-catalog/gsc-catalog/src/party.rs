//! Address arithmetic for the six party slots.
//!
//! Each slot owns one `PARTY_MON_STRUCT_SIZE` struct plus one entry in each
//! of the two name tables. Every per-slot address is derived here so that
//! catalog offsets stay consistent across slots.

use crate::map::{
    PARTY_MON_1_BASE, PARTY_MON_STRUCT_SIZE, PARTY_NAME_LEN, PARTY_NICKNAMES_START,
    PARTY_OT_NAMES_START,
};
use crate::{CatalogError, CatalogResult};

/// Number of party slots.
pub const PARTY_SLOTS: usize = 6;

fn check_slot(slot: usize) -> CatalogResult<u16> {
    if slot < PARTY_SLOTS {
        Ok(slot as u16)
    } else {
        Err(CatalogError::SlotOutOfRange(slot))
    }
}

/// Base address of the party struct for `slot` (0..=5).
pub fn party_mon_base(slot: usize) -> CatalogResult<u16> {
    Ok(PARTY_MON_1_BASE + check_slot(slot)? * PARTY_MON_STRUCT_SIZE)
}

/// Address of `offset` within the party struct for `slot`.
pub fn party_mon_field_addr(slot: usize, offset: u16) -> CatalogResult<u16> {
    party_mon_base(slot)?
        .checked_add(offset)
        .ok_or(CatalogError::AddressOverflow { slot, offset })
}

/// Address of the original-trainer name for `slot`.
pub fn party_ot_name_addr(slot: usize) -> CatalogResult<u16> {
    Ok(PARTY_OT_NAMES_START + check_slot(slot)? * PARTY_NAME_LEN)
}

/// Address of the nickname for `slot`.
pub fn party_nickname_addr(slot: usize) -> CatalogResult<u16> {
    Ok(PARTY_NICKNAMES_START + check_slot(slot)? * PARTY_NAME_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::PARTY_MON_HP_OFF;

    #[test]
    fn consecutive_slots_are_one_struct_apart() {
        for slot in 0..PARTY_SLOTS - 1 {
            let here = party_mon_base(slot).unwrap();
            let next = party_mon_base(slot + 1).unwrap();
            assert_eq!(next - here, 0x30);
        }
    }

    #[test]
    fn slot_six_is_rejected() {
        assert!(matches!(
            party_mon_base(6),
            Err(CatalogError::SlotOutOfRange(6))
        ));
        assert!(party_ot_name_addr(6).is_err());
        assert!(party_nickname_addr(usize::MAX).is_err());
        assert!(party_mon_field_addr(7, 0).is_err());
    }

    #[test]
    fn name_tables_use_eleven_byte_stride() {
        assert_eq!(party_ot_name_addr(0).unwrap(), PARTY_OT_NAMES_START);
        assert_eq!(party_nickname_addr(0).unwrap(), PARTY_NICKNAMES_START);
        assert_eq!(
            party_ot_name_addr(1).unwrap() - party_ot_name_addr(0).unwrap(),
            PARTY_NAME_LEN
        );
        assert_eq!(
            party_nickname_addr(5).unwrap() - party_nickname_addr(0).unwrap(),
            5 * PARTY_NAME_LEN
        );
    }

    #[test]
    fn field_addr_adds_offset() {
        assert_eq!(party_mon_field_addr(2, PARTY_MON_HP_OFF).unwrap(), 0xDA2A + 0x60 + 0x22);
    }

    #[test]
    fn field_addr_past_address_space_is_an_error() {
        assert!(matches!(
            party_mon_field_addr(5, 0xFFFF),
            Err(CatalogError::AddressOverflow {
                slot: 5,
                offset: 0xFFFF
            })
        ));
        let last = 0xFFFF - party_mon_base(0).unwrap();
        assert_eq!(party_mon_field_addr(0, last).unwrap(), 0xFFFF);
    }
}
