use std::collections::HashMap;

use gsc_codec::{Encoding, FieldValue};
use log::debug;
use once_cell::sync::OnceCell;

use crate::map::{self, span};
use crate::party::{party_mon_base, party_nickname_addr, party_ot_name_addr, PARTY_SLOTS};
use crate::rom::{self, RomField};
use crate::{access, CatalogError, CatalogResult, MemField, MemoryRead, MemoryWrite};

/// Static description of a field; turned into a [`MemField`] at build time.
#[derive(Clone, Copy)]
struct FieldDef {
    key: &'static str,
    addr: u16,
    size: usize,
    enc: Encoding,
    doc: &'static str,
}

const fn def(
    key: &'static str,
    addr: u16,
    size: usize,
    enc: Encoding,
    doc: &'static str,
) -> FieldDef {
    FieldDef {
        key,
        addr,
        size,
        enc,
        doc,
    }
}

use Encoding::{Bytes, TextGsc, U16Be, U16Le, U24Bcd, U24Le, U8};

#[rustfmt::skip]
static CORE_FIELDS: &[FieldDef] = &[
    def("player_sprite_id", map::PLAYER_SPRITE_ID, 1, U8, "Player sprite ID"),
    def("player_clothes", map::PLAYER_CLOTHES, 1, U8, "Player clothes"),
    def("options", map::OPTIONS_BYTE, 1, U8, "Options byte"),
    def("trainer_id", map::TRAINER_ID_START, span(map::TRAINER_ID_START, map::TRAINER_ID_END), U16Le, "Trainer ID"),
    def("player_name", map::TRAINER_NAME_START, span(map::TRAINER_NAME_START, map::TRAINER_NAME_END), TextGsc, "Player name (GSC text)"),
    def("rival_name", map::RIVAL_NAME_START, span(map::RIVAL_NAME_START, map::RIVAL_NAME_END), TextGsc, "Rival name (GSC text)"),
    def("wild_battles_enabled", map::WILD_BATTLES_ENABLED, 1, U8, "Wild battles flag"),
    def("player_x", map::PLAYER_X_POS, 1, U8, "Player X"),
    def("player_y", map::PLAYER_Y_POS, 1, U8, "Player Y"),
    def("map_bank", map::MAP_BANK, 1, U8, "Map bank"),
    def("map_number", map::MAP_NUMBER, 1, U8, "Map number"),
    def("overworld_xy", map::OVERWORLD_XY, 2, Bytes, "Overworld X then Y"),
    def("money", map::MONEY_START, span(map::MONEY_START, map::MONEY_END), U24Bcd, "Money (3-byte BCD)"),
    def("mom_money", map::MOM_MONEY_START, span(map::MOM_MONEY_START, map::MOM_MONEY_END), U24Bcd, "Money held by Mom"),
    def("casino_coins", map::CASINO_COINS_START, span(map::CASINO_COINS_START, map::CASINO_COINS_END), U16Le, "Casino coins"),
    def("johto_badges", map::JOHTO_BADGES, 1, U8, "Johto badges bitfield"),
    def("kanto_badges", map::KANTO_BADGES, 1, U8, "Kanto badges bitfield"),
    def("tms", map::TMS_START, span(map::TMS_START, map::TMS_END), Bytes, "TM quantities"),
    def("hms", map::HMS_START, span(map::HMS_START, map::HMS_END), Bytes, "HM flags"),
    def("party_count", map::PARTY_COUNT, 1, U8, "Party count"),
    def("party_species", map::PARTY_SPECIES_LIST_START, span(map::PARTY_SPECIES_LIST_START, map::PARTY_SPECIES_LIST_END), Bytes, "Party species list"),
    def("bag_item_count", map::BAG_ITEM_COUNT, 1, U8, "Bag item count"),
    def("bag_items", map::BAG_ITEMS_START, span(map::BAG_ITEMS_START, map::BAG_ITEMS_END_OF_LIST), Bytes, "Bag item/quantity pairs"),
    def("key_item_count", map::KEY_ITEM_COUNT, 1, U8, "Key item count"),
    def("ball_count", map::BALL_COUNT, 1, U8, "Ball count"),
    def("pc_item_count", map::PC_STORED_ITEMS_COUNT, 1, U8, "PC item count"),
    def("repel_steps", map::REPEL_STEPS_LEFT, 1, U8, "Repel steps left"),
    def("on_bike_flag", map::ON_BIKE_FLAG, 1, U8, "On bike flag"),
    def("park_time", map::PARK_TIME, 1, U8, "National Park contest time"),
    def("bug_contest_species", map::BUG_CONTEST_CAUGHT_SPECIES, 1, U8, "Bug Contest caught species"),
    def("bug_contest_level", map::BUG_CONTEST_CAUGHT_LEVEL, 1, U8, "Bug Contest caught level"),
    def("mart_item_count", map::MART_NUM_ITEMS, 1, U8, "Mart item count"),
    def("low_hp_warning", map::LOW_HP_WARNING, 1, U8, "Low HP warning beep"),
    def("brightness", map::BRIGHTNESS, 1, U8, "Screen brightness"),
    def("battle_type", map::BATTLE_TYPE, 1, U8, "Battle type"),
    def("wild_species", map::WILD_POKEMON_SPECIES, 1, U8, "Wild species"),
    def("wild_level", map::WILD_POKEMON_LEVEL, 1, U8, "Wild/enemy level"),
    def("your_held_item", map::BATTLE_YOUR_HELD_ITEM, 1, U8, "Your held item in battle"),
    def("your_moves", map::BATTLE_YOUR_MOVES_START, span(map::BATTLE_YOUR_MOVES_START, map::BATTLE_YOUR_MOVES_END), Bytes, "Your moves in battle"),
    def("your_pp", map::BATTLE_YOUR_PP_START, span(map::BATTLE_YOUR_PP_START, map::BATTLE_YOUR_PP_END), Bytes, "Your PP in battle"),
    def("your_status", map::BATTLE_YOUR_STATUS, 1, U8, "Your status in battle"),
    def("your_hp_battle", map::BATTLE_YOUR_HP_IN_BATTLE, 2, U16Be, "Your HP in battle"),
    def("enemy_item", map::BATTLE_ENEMY_ITEM, 1, U8, "Enemy held item"),
    def("enemy_moves", map::BATTLE_ENEMY_MOVES_START, span(map::BATTLE_ENEMY_MOVES_START, map::BATTLE_ENEMY_MOVES_END), Bytes, "Enemy moves"),
    def("enemy_level", map::BATTLE_ENEMY_LEVEL, 1, U8, "Enemy level"),
    def("enemy_status", map::BATTLE_ENEMY_STATUS, 1, U8, "Enemy status"),
    def("enemy_sex", map::BATTLE_ENEMY_SEX, 1, U8, "Enemy sex"),
];

/// Per-slot field layout; `addr` is an offset into the party struct.
#[rustfmt::skip]
static PARTY_FIELDS: &[FieldDef] = &[
    def("species", map::PARTY_MON_SPECIES_OFF, 1, U8, "Species"),
    def("item", map::PARTY_MON_HELD_ITEM_OFF, 1, U8, "Held item"),
    def("moves", map::PARTY_MON_MOVES_OFF, 4, Bytes, "Moves"),
    def("id", map::PARTY_MON_ID_OFF, 2, U16Be, "OT/mon ID"),
    def("exp", map::PARTY_MON_EXP_OFF, 3, U24Le, "EXP"),
    def("hp_ev", map::PARTY_MON_HP_EV_OFF, 2, U16Be, "HP stat experience"),
    def("atk_ev", map::PARTY_MON_ATK_EV_OFF, 2, U16Be, "Attack stat experience"),
    def("def_ev", map::PARTY_MON_DEF_EV_OFF, 2, U16Be, "Defense stat experience"),
    def("spd_ev", map::PARTY_MON_SPD_EV_OFF, 2, U16Be, "Speed stat experience"),
    def("spc_ev", map::PARTY_MON_SPC_EV_OFF, 2, U16Be, "Special stat experience"),
    def("dvs", map::PARTY_MON_IV_AD_OFF, 2, Bytes, "DVs (Atk/Def, Spd/Spc)"),
    def("pp", map::PARTY_MON_PP_OFF, 4, Bytes, "PP"),
    def("happiness", map::PARTY_MON_HAPPINESS_OFF, 1, U8, "Happiness"),
    def("pokerus", map::PARTY_MON_POKERUS_OFF, 1, U8, "Pokerus"),
    def("caught_data", map::PARTY_MON_CAUGHT_DATA_OFF, 2, Bytes, "Caught time/level/location"),
    def("level", map::PARTY_MON_LEVEL_OFF, 1, U8, "Level"),
    def("status", map::PARTY_MON_STATUS_OFF, 2, U16Be, "Status"),
    def("hp", map::PARTY_MON_HP_OFF, 2, U16Be, "HP"),
    def("max_hp", map::PARTY_MON_MAX_HP_OFF, 2, U16Be, "Max HP"),
    def("atk", map::PARTY_MON_ATK_OFF, 2, U16Be, "Attack"),
    def("def", map::PARTY_MON_DEF_OFF, 2, U16Be, "Defense"),
    def("spd", map::PARTY_MON_SPD_OFF, 2, U16Be, "Speed"),
    def("spdef", map::PARTY_MON_SPDEF_OFF, 2, U16Be, "Sp Def"),
    def("spatk", map::PARTY_MON_SPATK_OFF, 2, U16Be, "Sp Atk"),
];

/// Which generated sections to include in a catalog build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Per-slot party struct fields (`party[N].species`, ...).
    pub include_party: bool,
    /// Party OT-name and nickname entries (`party[N].ot_name`, ...).
    pub include_party_names: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            include_party: true,
            include_party_names: true,
        }
    }
}

impl CatalogOptions {
    /// Static core fields only.
    pub fn core_only() -> Self {
        Self {
            include_party: false,
            include_party_names: false,
        }
    }
}

/// Keyed registry of RAM and ROM field descriptors.
///
/// Built once and read-only afterwards. Iteration follows build order: core
/// fields, box names, then party slots in ascending order.
#[derive(Debug)]
pub struct Catalog {
    ram: Vec<MemField>,
    by_key: HashMap<String, usize>,
    rom: Vec<RomField>,
    rom_by_key: HashMap<&'static str, usize>,
}

static GLOBAL: OnceCell<Catalog> = OnceCell::new();

impl Catalog {
    pub fn build(options: CatalogOptions) -> CatalogResult<Self> {
        let mut catalog = Catalog {
            ram: Vec::new(),
            by_key: HashMap::new(),
            rom: Vec::new(),
            rom_by_key: HashMap::new(),
        };

        for def in CORE_FIELDS {
            catalog.insert(MemField::new(def.key, def.addr, def.size, def.enc, def.doc))?;
        }
        for field in box_name_fields() {
            catalog.insert(field)?;
        }
        for slot in 0..PARTY_SLOTS {
            if options.include_party {
                for field in party_fields_for_slot(slot)? {
                    catalog.insert(field)?;
                }
            }
            if options.include_party_names {
                for field in party_name_fields_for_slot(slot)? {
                    catalog.insert(field)?;
                }
            }
        }
        for field in rom::rom_fields()? {
            catalog.insert_rom(field)?;
        }

        debug!(
            "built catalog: {} RAM fields, {} ROM fields ({options:?})",
            catalog.ram.len(),
            catalog.rom.len()
        );
        Ok(catalog)
    }

    /// Process-wide catalog with every section included.
    pub fn global() -> CatalogResult<&'static Catalog> {
        GLOBAL.get_or_try_init(|| Catalog::build(CatalogOptions::default()))
    }

    fn insert(&mut self, field: MemField) -> CatalogResult<()> {
        if self.by_key.contains_key(&*field.key) {
            return Err(CatalogError::DuplicateKey(field.key.into_owned()));
        }
        self.by_key.insert(field.key.to_string(), self.ram.len());
        self.ram.push(field);
        Ok(())
    }

    fn insert_rom(&mut self, field: RomField) -> CatalogResult<()> {
        if self.rom_by_key.contains_key(field.key) || self.by_key.contains_key(field.key) {
            return Err(CatalogError::DuplicateKey(field.key.to_owned()));
        }
        self.rom_by_key.insert(field.key, self.rom.len());
        self.rom.push(field);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&MemField> {
        self.by_key.get(key).map(|&idx| &self.ram[idx])
    }

    /// Looks up a RAM field, failing on unknown keys.
    pub fn field(&self, key: &str) -> CatalogResult<&MemField> {
        self.get(key).ok_or_else(|| CatalogError::unknown_key(key))
    }

    pub fn fields(&self) -> impl Iterator<Item = &MemField> {
        self.ram.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.ram.iter().map(|field| field.key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.ram.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ram.is_empty()
    }

    pub fn get_rom(&self, key: &str) -> Option<&RomField> {
        self.rom_by_key.get(key).map(|&idx| &self.rom[idx])
    }

    pub fn rom_field(&self, key: &str) -> CatalogResult<&RomField> {
        self.get_rom(key).ok_or_else(|| CatalogError::unknown_key(key))
    }

    pub fn rom_fields(&self) -> impl Iterator<Item = &RomField> {
        self.rom.iter()
    }

    /// Reads and decodes the RAM field named `key`.
    pub fn read<R: MemoryRead + ?Sized>(&self, reader: &R, key: &str) -> CatalogResult<FieldValue> {
        access::read_field(reader, self.field(key)?)
    }

    /// Encodes `value` and writes it to the RAM field named `key`.
    pub fn write<W: MemoryWrite + ?Sized>(
        &self,
        writer: &mut W,
        key: &str,
        value: &FieldValue,
    ) -> CatalogResult<()> {
        access::write_field(writer, self.field(key)?, value)
    }
}

/// Party struct fields for one slot, keyed `party[N].<name>`.
pub(crate) fn party_fields_for_slot(slot: usize) -> CatalogResult<Vec<MemField>> {
    let base = party_mon_base(slot)?;
    Ok(PARTY_FIELDS
        .iter()
        .map(|def| {
            MemField::new(
                format!("party[{slot}].{}", def.key),
                base + def.addr,
                def.size,
                def.enc,
                def.doc,
            )
        })
        .collect())
}

pub(crate) fn party_name_fields_for_slot(slot: usize) -> CatalogResult<[MemField; 2]> {
    let len = usize::from(map::PARTY_NAME_LEN);
    Ok([
        MemField::new(
            format!("party[{slot}].ot_name"),
            party_ot_name_addr(slot)?,
            len,
            TextGsc,
            "Original trainer name (GSC text)",
        ),
        MemField::new(
            format!("party[{slot}].nickname"),
            party_nickname_addr(slot)?,
            len,
            TextGsc,
            "Nickname (GSC text)",
        ),
    ])
}

/// PC box names, keyed `box_name[1]` through `box_name[14]` as numbered in game.
fn box_name_fields() -> impl Iterator<Item = MemField> {
    (0..map::BOX_COUNT).map(|idx| {
        MemField::new(
            format!("box_name[{}]", idx + 1),
            map::BOX_NAMES_START + idx * map::BOX_NAME_LEN,
            usize::from(map::BOX_NAME_LEN),
            TextGsc,
            "PC box name (GSC text)",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_build_has_every_section() {
        let catalog = Catalog::build(CatalogOptions::default()).unwrap();
        let per_slot = PARTY_FIELDS.len() + 2;
        assert_eq!(
            catalog.len(),
            CORE_FIELDS.len() + usize::from(map::BOX_COUNT) + PARTY_SLOTS * per_slot
        );
        assert!(catalog.get("party[5].spatk").is_some());
        assert!(catalog.get("party[5].nickname").is_some());
        assert!(catalog.get("party[6].hp").is_none());
    }

    #[test]
    fn core_only_build_skips_party_sections() {
        let catalog = Catalog::build(CatalogOptions::core_only()).unwrap();
        assert!(catalog.get("money").is_some());
        assert!(catalog.keys().all(|key| !key.starts_with("party[")));
    }

    #[test]
    fn fixed_width_fields_match_encoding_width() {
        let catalog = Catalog::build(CatalogOptions::default()).unwrap();
        for field in catalog.fields() {
            if let Some(width) = field.enc.width() {
                assert_eq!(field.size, width, "{} declares the wrong size", field.key);
            }
        }
    }

    #[test]
    fn party_fields_stay_inside_their_struct() {
        for slot in 0..PARTY_SLOTS {
            let base = usize::from(party_mon_base(slot).unwrap());
            let limit = base + usize::from(map::PARTY_MON_STRUCT_SIZE);
            for field in party_fields_for_slot(slot).unwrap() {
                assert!(field.end_addr() < limit, "{} overruns the party struct", field.key);
            }
        }
    }

    #[test]
    fn party_slot_fields_keep_offsets_across_slots() {
        let slot0 = party_fields_for_slot(0).unwrap();
        let slot3 = party_fields_for_slot(3).unwrap();
        for (a, b) in slot0.iter().zip(&slot3) {
            assert_eq!(b.addr - a.addr, 3 * map::PARTY_MON_STRUCT_SIZE);
            assert_eq!(a.enc, b.enc);
            assert_eq!(a.size, b.size);
        }
        assert!(party_fields_for_slot(6).is_err());
    }

    #[test]
    fn well_known_addresses() {
        let catalog = Catalog::build(CatalogOptions::default()).unwrap();
        let addr = |key: &str| catalog.field(key).unwrap().addr;
        assert_eq!(addr("money"), 0xD573);
        assert_eq!(addr("party[0].species"), 0xDA2A);
        assert_eq!(addr("party[1].level"), 0xDA2A + 0x30 + 0x1F);
        assert_eq!(addr("party[0].ot_name"), 0xDB4A);
        assert_eq!(addr("party[2].nickname"), 0xDB8C + 2 * 0x0B);
        assert_eq!(addr("box_name[14]"), 0xD934);
        assert_eq!(catalog.field("player_name").unwrap().size, 10);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let catalog = Catalog::build(CatalogOptions::core_only()).unwrap();
        assert!(matches!(
            catalog.field("party[0].hp"),
            Err(CatalogError::UnknownKey(key)) if key == "party[0].hp"
        ));
        assert!(catalog.rom_field("nope").is_err());
    }

    #[test]
    fn global_catalog_is_shared() {
        let a = Catalog::global().unwrap();
        let b = Catalog::global().unwrap();
        assert!(std::ptr::eq(a, b));
        assert!(a.get_rom("wild.johto_land").is_some());
    }
}
