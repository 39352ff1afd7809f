// ===== Permutation record (input contract, u32 words) =====

/// Number of u32 words per permutation record.
pub const PERMUTATION_WIDTH: usize = 13;

/// First of the four armor piece item ids.
pub const PERM_ITEM_IDS: usize = 0;

/// First of the six raw stat values.
pub const PERM_STATS: usize = 4;

pub const PERM_EXOTIC_ID: usize = 10;

/// One bit per armor piece, set when the piece is masterworked.
pub const PERM_MASTERWORK: usize = 11;

/// Packed 3-bit element code per armor piece.
pub const PERM_AFFINITY: usize = 12;

// ===== Result record (output contract, u16 words) =====

/// Number of u16 words per accepted result.
pub const RESULT_WIDTH: usize = 8;

pub const RESULT_INDEX_LO: usize = 0;
pub const RESULT_INDEX_HI: usize = 1;

/// First of the mod id slots. Unused slots hold 0.
pub const RESULT_MODS: usize = 2;

/// How many mod ids a result record can carry.
pub const RESULT_MOD_SLOTS: usize = RESULT_WIDTH - RESULT_MODS;

// ===== Game rules =====

pub const ARMOR_PIECES: usize = 4;

/// Mod sockets available for elemental affinities (four pieces + class item).
pub const AFFINITY_SOCKETS: usize = 5;

pub const AFFINITY_BITS: u32 = 3;
pub const AFFINITY_MASK: u32 = 0x7;

pub const FULL_MASTERWORK_MASK: u32 = 0xF;

/// Every item carries +2 on each stat on top of its rolled value.
pub const BASE_STAT_BONUS: i32 = 2;

pub const MASTERWORK_BONUS_PER_PIECE: i32 = 2;

pub const ASSUMED_MASTERWORK_BONUS: i32 = MASTERWORK_BONUS_PER_PIECE * ARMOR_PIECES as i32;

pub const MAX_TIER: i32 = 10;

pub const STAT_CAP: i32 = 100;

pub const MINOR_MOD_VALUE: i32 = 5;
pub const MAJOR_MOD_VALUE: i32 = 10;

/// Default stat mod budget (one per armor piece plus the class item).
pub const DEFAULT_MAX_STAT_MODS: u8 = 5;
