//! Bag pocket list: `(item id, quantity)` pairs terminated by `0xFF`, with a
//! separate count byte in front.

use log::debug;
use serde::Serialize;

use crate::map::{span, BAG_ITEMS_END_OF_LIST, BAG_ITEMS_START, BAG_ITEM_COUNT};
use crate::{CatalogResult, MemoryRead, MemoryWrite};

pub const BAG_ITEM_MAX_QTY: u8 = 99;

const LIST_TERMINATOR: u8 = 0xFF;
const BAG_REGION_LEN: usize = span(BAG_ITEMS_START, BAG_ITEMS_END_OF_LIST);

/// Pairs that fit in the region with room left for the terminator.
pub const BAG_MAX_SLOTS: usize = (BAG_REGION_LEN - 1) / 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BagItem {
    pub id: u8,
    pub qty: u8,
}

impl BagItem {
    pub const fn new(id: u8, qty: u8) -> Self {
        Self { id, qty }
    }
}

/// Decodes the bag list. Empty (`id == 0`) entries are skipped and a trailing
/// unpaired byte is ignored.
pub fn read_bag_items<R: MemoryRead + ?Sized>(reader: &R) -> CatalogResult<Vec<BagItem>> {
    let blob = reader.read_mem(BAG_ITEMS_START, BAG_REGION_LEN)?;
    let items = blob
        .chunks_exact(2)
        .take_while(|pair| pair[0] != LIST_TERMINATOR)
        .filter(|pair| pair[0] != 0)
        .map(|pair| BagItem::new(pair[0], pair[1]))
        .collect();
    Ok(items)
}

/// Rewrites the whole bag list and its count byte.
///
/// Ids `0x00` and `0xFF` are dropped, quantities clamp to `1..=99` and
/// anything past [`BAG_MAX_SLOTS`] is discarded. Returns the number of
/// entries written.
pub fn write_bag_items<W: MemoryWrite + ?Sized>(
    writer: &mut W,
    items: &[BagItem],
) -> CatalogResult<usize> {
    let kept: Vec<BagItem> = items
        .iter()
        .filter(|item| item.id != 0 && item.id != LIST_TERMINATOR)
        .map(|item| BagItem::new(item.id, item.qty.clamp(1, BAG_ITEM_MAX_QTY)))
        .take(BAG_MAX_SLOTS)
        .collect();

    let mut data = vec![0u8; BAG_REGION_LEN];
    for (pair, item) in data.chunks_exact_mut(2).zip(&kept) {
        pair[0] = item.id;
        pair[1] = item.qty;
    }
    data[kept.len() * 2] = LIST_TERMINATOR;

    debug!("writing {} bag item(s)", kept.len());
    writer.write_mem(BAG_ITEMS_START, &data)?;
    writer.write_mem(BAG_ITEM_COUNT, &[kept.len() as u8])?;
    Ok(kept.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryImage;

    #[test]
    fn region_holds_twenty_pairs() {
        assert_eq!(BAG_REGION_LEN, 41);
        assert_eq!(BAG_MAX_SLOTS, 20);
    }

    #[test]
    fn read_stops_at_terminator_and_skips_empty() {
        let mut mem = MemoryImage::full_address_space();
        mem.write_mem(BAG_ITEMS_START, &[0x12, 5, 0x00, 9, 0x26, 1, 0xFF, 0x30, 2])
            .unwrap();
        assert_eq!(
            read_bag_items(&mem).unwrap(),
            vec![BagItem::new(0x12, 5), BagItem::new(0x26, 1)]
        );
    }

    #[test]
    fn write_normalises_and_updates_count() {
        let mut mem = MemoryImage::full_address_space();
        mem.write_mem(BAG_ITEMS_START, &[0xAA; BAG_REGION_LEN]).unwrap();

        let written = write_bag_items(
            &mut mem,
            &[
                BagItem::new(0x12, 0),
                BagItem::new(0x00, 4),
                BagItem::new(0xFF, 4),
                BagItem::new(0x26, 250),
            ],
        )
        .unwrap();

        assert_eq!(written, 2);
        let start = usize::from(BAG_ITEMS_START);
        assert_eq!(mem.as_bytes()[start..start + 6], [0x12, 1, 0x26, 99, 0xFF, 0x00]);
        assert_eq!(mem.as_bytes()[usize::from(BAG_ITEM_COUNT)], 2);
        assert_eq!(
            read_bag_items(&mem).unwrap(),
            vec![BagItem::new(0x12, 1), BagItem::new(0x26, 99)]
        );
    }

    #[test]
    fn write_truncates_to_capacity() {
        let mut mem = MemoryImage::full_address_space();
        let items: Vec<_> = (1..=30).map(|id| BagItem::new(id, 1)).collect();
        assert_eq!(write_bag_items(&mut mem, &items).unwrap(), BAG_MAX_SLOTS);
        assert_eq!(mem.as_bytes()[usize::from(BAG_ITEMS_END_OF_LIST)], 0xFF);
        assert_eq!(read_bag_items(&mem).unwrap().len(), BAG_MAX_SLOTS);
    }
}
