use crate::consts::{ARMOR_PIECES, PERMUTATION_WIDTH};
use crate::error::{AfResult, ArmorForgeError};
use crate::scanner::decoder::Permutation;
use crate::scanner::types::STAT_COUNT;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Reads a catalog stored as little-endian u32 words.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> AfResult<Vec<u32>> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let record_bytes = PERMUTATION_WIDTH * 4;
    if bytes.len() % record_bytes != 0 {
        return Err(ArmorForgeError::Input(format!(
            "Catalog {:?} is {} bytes, not a multiple of the {}-byte record",
            path,
            bytes.len(),
            record_bytes
        )));
    }

    let words: Vec<u32> = bytes
        .chunks_exact(4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();
    info!(
        "Loaded {} permutations from {:?}",
        words.len() / PERMUTATION_WIDTH,
        path
    );
    Ok(words)
}

pub fn write_catalog<P: AsRef<Path>>(path: P, words: &[u32]) -> AfResult<()> {
    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    fs::write(path, bytes)?;
    Ok(())
}

/// Known exotic ids used by the synthetic generator.
const SYNTH_EXOTICS: [u32; 3] = [1001, 1002, 1003];

/// Builds a random catalog of `count` permutations. Roughly a quarter carry
/// an exotic; stat rolls, masterwork bits and elements are uniform.
pub fn synthesize(count: usize, seed: Option<u64>) -> Vec<u32> {
    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    let mut words = Vec::with_capacity(count * PERMUTATION_WIDTH);
    for i in 0..count {
        let mut stats = [0u32; STAT_COUNT];
        for s in stats.iter_mut() {
            // Four pieces, each rolling 2..=16 per stat.
            *s = (0..ARMOR_PIECES).map(|_| rng.u32(2..=16)).sum();
        }
        let mut affinities = [0u8; ARMOR_PIECES];
        for a in affinities.iter_mut() {
            *a = rng.u8(0..=7);
        }
        let exotic_id = if rng.u8(0..4) == 0 {
            SYNTH_EXOTICS[rng.usize(0..SYNTH_EXOTICS.len())]
        } else {
            0
        };
        let base_id = (i * ARMOR_PIECES) as u32;

        let perm = Permutation {
            item_ids: [base_id, base_id + 1, base_id + 2, base_id + 3],
            stats,
            exotic_id,
            masterwork_mask: rng.u32(0..16),
            affinity_pack: Permutation::pack_affinities(affinities),
        };
        words.extend_from_slice(&perm.to_words());
    }

    debug!("Synthesized {} permutations (seed {:?})", count, seed);
    words
}
