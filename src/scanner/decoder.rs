use crate::consts::{
    AFFINITY_BITS, AFFINITY_MASK, ARMOR_PIECES, FULL_MASTERWORK_MASK, PERMUTATION_WIDTH,
    PERM_AFFINITY, PERM_EXOTIC_ID, PERM_ITEM_IDS, PERM_MASTERWORK, PERM_STATS,
};
use crate::error::{AfResult, ArmorForgeError};
use crate::scanner::types::STAT_COUNT;

/// One decoded permutation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Permutation {
    pub item_ids: [u32; ARMOR_PIECES],
    pub stats: [u32; STAT_COUNT],
    pub exotic_id: u32,
    pub masterwork_mask: u32,
    pub affinity_pack: u32,
}

impl Permutation {
    /// `words` must hold at least `PERMUTATION_WIDTH` entries.
    pub fn from_words(words: &[u32]) -> Self {
        let mut item_ids = [0; ARMOR_PIECES];
        item_ids.copy_from_slice(&words[PERM_ITEM_IDS..PERM_ITEM_IDS + ARMOR_PIECES]);
        let mut stats = [0; STAT_COUNT];
        stats.copy_from_slice(&words[PERM_STATS..PERM_STATS + STAT_COUNT]);

        Self {
            item_ids,
            stats,
            exotic_id: words[PERM_EXOTIC_ID],
            masterwork_mask: words[PERM_MASTERWORK],
            affinity_pack: words[PERM_AFFINITY],
        }
    }

    pub fn to_words(&self) -> [u32; PERMUTATION_WIDTH] {
        let mut words = [0; PERMUTATION_WIDTH];
        words[PERM_ITEM_IDS..PERM_ITEM_IDS + ARMOR_PIECES].copy_from_slice(&self.item_ids);
        words[PERM_STATS..PERM_STATS + STAT_COUNT].copy_from_slice(&self.stats);
        words[PERM_EXOTIC_ID] = self.exotic_id;
        words[PERM_MASTERWORK] = self.masterwork_mask;
        words[PERM_AFFINITY] = self.affinity_pack;
        words
    }

    pub fn is_piece_masterworked(&self, piece: usize) -> bool {
        self.masterwork_mask & (1 << piece) != 0
    }

    pub fn is_fully_masterworked(&self) -> bool {
        self.masterwork_mask == FULL_MASTERWORK_MASK
    }

    pub fn masterworked_pieces(&self) -> usize {
        (0..ARMOR_PIECES)
            .filter(|&n| self.is_piece_masterworked(n))
            .count()
    }

    pub fn piece_affinity(&self, piece: usize) -> u8 {
        ((self.affinity_pack >> (piece as u32 * AFFINITY_BITS)) & AFFINITY_MASK) as u8
    }

    /// Packs per-piece element codes into the affinity field.
    pub fn pack_affinities(codes: [u8; ARMOR_PIECES]) -> u32 {
        codes.iter().enumerate().fold(0, |acc, (n, &code)| {
            acc | ((code as u32 & AFFINITY_MASK) << (n as u32 * AFFINITY_BITS))
        })
    }
}

/// Checks that `buffer` holds whole records.
pub fn record_count(buffer: &[u32]) -> AfResult<usize> {
    if buffer.len() % PERMUTATION_WIDTH != 0 {
        return Err(ArmorForgeError::Input(format!(
            "Permutation buffer holds {} words, not a multiple of the record width {}",
            buffer.len(),
            PERMUTATION_WIDTH
        )));
    }
    Ok(buffer.len() / PERMUTATION_WIDTH)
}

/// Iterates the records of a shard buffer in order, yielding each record's
/// offset within the shard.
pub fn decode_records(buffer: &[u32]) -> AfResult<impl Iterator<Item = (usize, Permutation)> + '_> {
    record_count(buffer)?;
    Ok(buffer
        .chunks_exact(PERMUTATION_WIDTH)
        .map(Permutation::from_words)
        .enumerate())
}
