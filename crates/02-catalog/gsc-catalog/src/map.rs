//! Gold/Silver RAM addresses.
//!
//! All addresses are in CPU address space, as exposed by an emulator's
//! system-memory view. Ranges are given as inclusive `_START`/`_END` pairs.
//! Multi-byte encodings vary per field (money is packed BCD, party stats are
//! big-endian).
//!
//! Reference: Data Crystal, "Pokémon Gold and Silver/RAM map".

// =============================================================================
// Miscellaneous
// =============================================================================

pub const LOW_HP_WARNING: u16 = 0xC1A6;
pub const BRIGHTNESS: u16 = 0xC1CF;

pub const MAP_BUFFER_START: u16 = 0xC700;
pub const MAP_BUFFER_END: u16 = 0xCAFF;

pub const RUINS_OF_ALPH_PUZZLE_START: u16 = 0xC5D0;
pub const RUINS_OF_ALPH_PUZZLE_END: u16 = 0xC5F3;

// =============================================================================
// Battle: player's active Pokémon
// =============================================================================

pub const BATTLE_YOUR_HELD_ITEM: u16 = 0xCB0D;
pub const BATTLE_YOUR_MOVES_START: u16 = 0xCB0E;
pub const BATTLE_YOUR_MOVES_END: u16 = 0xCB11;
pub const BATTLE_YOUR_PP_START: u16 = 0xCB14;
pub const BATTLE_YOUR_PP_END: u16 = 0xCB17;
pub const BATTLE_YOUR_STATUS: u16 = 0xCB1A;
pub const BATTLE_YOUR_HP_IN_BATTLE: u16 = 0xCB1C; // 2 bytes, big-endian
pub const BATTLE_YOUR_TYPES: u16 = 0xCB2A;
pub const BATTLE_YOUR_SUBSTITUTE: u16 = 0xCB49;
pub const BATTLE_YOUR_CURRENT_ATTACK: u16 = 0xCBC1;

pub const BATTLE_MONEY_EARNED: u16 = 0xCB65;
pub const BATTLE_EXP_GIVEN: u16 = 0xCF7E;

// =============================================================================
// Battle: opposing Pokémon
// =============================================================================

pub const BATTLE_CAUGHT_MOVES_START: u16 = 0xCC13;
pub const BATTLE_CAUGHT_MOVES_END: u16 = 0xCC16;

pub const BATTLE_ENEMY_ITEM: u16 = 0xD0F0;
pub const BATTLE_ENEMY_MOVES_START: u16 = 0xD0F1;
pub const BATTLE_ENEMY_MOVES_END: u16 = 0xD0F4;
pub const BATTLE_ENEMY_DVS_AD: u16 = 0xD0F5;
pub const BATTLE_ENEMY_DVS_SS: u16 = 0xD0F5;
pub const BATTLE_ENEMY_LEVEL: u16 = 0xD0FC;
pub const BATTLE_ENEMY_STATUS: u16 = 0xD0FD;
pub const BATTLE_ENEMY_STATS_START: u16 = 0xD0FF;
pub const BATTLE_ENEMY_STATS_END: u16 = 0xD10C;
pub const BATTLE_TYPE: u16 = 0xD116;
pub const BATTLE_ENEMY_SEX: u16 = 0xD119;
pub const BATTLE_ENEMY_TYPES: u16 = 0xD127;
pub const BATTLE_ENEMY_PENDING_DAMAGE: u16 = 0xD141;
pub const BATTLE_ENEMY_MAGNITUDE: u16 = 0xD151;
pub const BATTLE_ENEMY_MOVES_ALT_START: u16 = 0xD149;
pub const BATTLE_ENEMY_MOVES_ALT_END: u16 = 0xD14C;
pub const BATTLE_OPPONENT_PARTY_COUNT_START: u16 = 0xDD55;
pub const BATTLE_OPPONENT_PARTY_COUNT_END: u16 = 0xDD5B;

pub const WILD_POKEMON_SPECIES: u16 = 0xD0ED;
pub const WILD_POKEMON_LEVEL: u16 = 0xD0FC;

// =============================================================================
// Shop
// =============================================================================

pub const MART_SLOTS_START: u16 = 0xCFED;
pub const MART_SLOTS_END: u16 = 0xCFF1;
pub const MART_NUM_ITEMS: u16 = 0xD140;

// =============================================================================
// Overworld
// =============================================================================

pub const PLAYER_SPRITE_ID: u16 = 0xD1FF;
pub const PLAYER_CLOTHES: u16 = 0xD203;
pub const PLAYER_X_POS: u16 = 0xD20D;
pub const PLAYER_Y_POS: u16 = 0xD20E;

pub const MAP_BANK: u16 = 0xDA00;
pub const MAP_NUMBER: u16 = 0xDA01;
pub const OVERWORLD_XY: u16 = 0xDA02; // X then Y

pub const ON_BIKE_FLAG: u16 = 0xD682;
pub const REPEL_STEPS_LEFT: u16 = 0xD9EB;
pub const PARK_TIME: u16 = 0xD193;
pub const OPTIONS_BYTE: u16 = 0xD199;

pub const BUG_CONTEST_CAUGHT_SPECIES: u16 = 0xDCE7;
pub const BUG_CONTEST_CAUGHT_LEVEL: u16 = 0xDD06;
pub const BUG_CONTEST_CAUGHT_STATS_START: u16 = 0xDD09;
pub const BUG_CONTEST_CAUGHT_STATS_END: u16 = 0xDD16;

// =============================================================================
// Trainer identity, clock, money
// =============================================================================

pub const TRAINER_ID_START: u16 = 0xD1A1;
pub const TRAINER_ID_END: u16 = 0xD1A2;
pub const TRAINER_NAME_START: u16 = 0xD1A3;
pub const TRAINER_NAME_END: u16 = 0xD1AC;
pub const RIVAL_NAME_START: u16 = 0xD1BC;
pub const RIVAL_NAME_END: u16 = 0xD1C5;

pub const CLOCK_DAY_START: u16 = 0xD1DC;
pub const CLOCK_DAY_END: u16 = 0xD1E0;
pub const CLOCK_TIME_START: u16 = 0xD1EB;
pub const CLOCK_TIME_END: u16 = 0xD1EF;

pub const WILD_BATTLES_ENABLED: u16 = 0xD20B;

pub const MONEY_START: u16 = 0xD573;
pub const MONEY_END: u16 = 0xD575;
pub const MOM_MONEY_START: u16 = 0xD576;
pub const MOM_MONEY_END: u16 = 0xD578;
pub const CASINO_COINS_START: u16 = 0xD57A;
pub const CASINO_COINS_END: u16 = 0xD57B;

pub const JOHTO_BADGES: u16 = 0xD57C;
pub const KANTO_BADGES: u16 = 0xD57D;

/// Bits of the [`JOHTO_BADGES`] byte.
pub mod johto_badge {
    pub const FALKNER: u8 = 0x01;
    pub const BUGSY: u8 = 0x02;
    pub const WHITNEY: u8 = 0x04;
    pub const MORTY: u8 = 0x08;
    pub const JASMINE: u8 = 0x10;
    pub const CHUCK: u8 = 0x20;
    pub const PRYCE: u8 = 0x40;
    pub const CLAIR: u8 = 0x80;
}

pub const TMS_START: u16 = 0xD57E;
pub const TMS_END: u16 = 0xD5AF;
pub const HMS_START: u16 = 0xD5B0;
pub const HMS_END: u16 = 0xD5B6;

// =============================================================================
// Inventory
// =============================================================================

pub const BAG_ITEM_COUNT: u16 = 0xD5B7;
pub const BAG_ITEMS_START: u16 = 0xD5B8;
pub const BAG_ITEMS_END_OF_LIST: u16 = 0xD5E0;

pub const KEY_ITEM_COUNT: u16 = 0xD5E1;
pub const KEY_ITEMS_START: u16 = 0xD5E2;
pub const KEY_ITEMS_END: u16 = 0xD5FA;
pub const KEY_ITEMS_END_OF_LIST: u16 = 0xD5FB;

pub const BALL_COUNT: u16 = 0xD5FC;
pub const BALLS_START: u16 = 0xD5FD;
pub const BALLS_END_OF_LIST: u16 = 0xD615;

pub const PC_STORED_ITEMS_COUNT: u16 = 0xD616;
pub const PC_STORED_ITEMS_START: u16 = 0xD617;

// =============================================================================
// PC storage box names (14 boxes, 9 bytes each)
// =============================================================================

pub const BOX_NAMES_START: u16 = 0xD8BF;
pub const BOX_NAME_LEN: u16 = 9;
pub const BOX_COUNT: u16 = 14;

// =============================================================================
// Party
// =============================================================================

pub const PARTY_COUNT: u16 = 0xDA22;
pub const PARTY_SPECIES_LIST_START: u16 = 0xDA23;
pub const PARTY_SPECIES_LIST_END: u16 = 0xDA28;
pub const PARTY_SPECIES_LIST_TERMINATOR: u16 = 0xDA29;

pub const PARTY_MON_1_BASE: u16 = 0xDA2A;
pub const PARTY_MON_STRUCT_SIZE: u16 = 0x30;

// Offsets inside one 0x30-byte party struct.
pub const PARTY_MON_SPECIES_OFF: u16 = 0x00;
pub const PARTY_MON_HELD_ITEM_OFF: u16 = 0x01;
pub const PARTY_MON_MOVES_OFF: u16 = 0x02;
pub const PARTY_MON_ID_OFF: u16 = 0x06;
pub const PARTY_MON_EXP_OFF: u16 = 0x08;
pub const PARTY_MON_HP_EV_OFF: u16 = 0x0B;
pub const PARTY_MON_ATK_EV_OFF: u16 = 0x0D;
pub const PARTY_MON_DEF_EV_OFF: u16 = 0x0F;
pub const PARTY_MON_SPD_EV_OFF: u16 = 0x11;
pub const PARTY_MON_SPC_EV_OFF: u16 = 0x13;
pub const PARTY_MON_IV_AD_OFF: u16 = 0x15;
pub const PARTY_MON_IV_SS_OFF: u16 = 0x16;
pub const PARTY_MON_PP_OFF: u16 = 0x17;
pub const PARTY_MON_HAPPINESS_OFF: u16 = 0x1B;
pub const PARTY_MON_POKERUS_OFF: u16 = 0x1C;
pub const PARTY_MON_CAUGHT_DATA_OFF: u16 = 0x1D;
pub const PARTY_MON_LEVEL_OFF: u16 = 0x1F;
pub const PARTY_MON_STATUS_OFF: u16 = 0x20;
pub const PARTY_MON_HP_OFF: u16 = 0x22;
pub const PARTY_MON_MAX_HP_OFF: u16 = 0x24;
pub const PARTY_MON_ATK_OFF: u16 = 0x26;
pub const PARTY_MON_DEF_OFF: u16 = 0x28;
pub const PARTY_MON_SPD_OFF: u16 = 0x2A;
pub const PARTY_MON_SPDEF_OFF: u16 = 0x2C;
pub const PARTY_MON_SPATK_OFF: u16 = 0x2E;

/// 10 characters plus a `0x50` terminator.
pub const PARTY_NAME_LEN: u16 = 0x0B;
pub const PARTY_OT_NAMES_START: u16 = 0xDB4A;
pub const PARTY_NICKNAMES_START: u16 = 0xDB8C;

/// Width in bytes of an inclusive `start..=end` range.
pub const fn span(start: u16, end: u16) -> usize {
    (end - start) as usize + 1
}
