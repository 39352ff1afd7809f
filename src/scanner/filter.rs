use super::decoder::Permutation;
use super::types::Rejection;
use crate::config::{ExoticFilter, ScanConfig};
use crate::consts::{AFFINITY_SOCKETS, ARMOR_PIECES};

/// Exotic and masterwork rules. Pure predicate over the raw record.
pub fn check_constraints(perm: &Permutation, config: &ScanConfig) -> Result<(), Rejection> {
    match config.exotic {
        ExoticFilter::Any => {}
        ExoticFilter::ForceNone => {
            if perm.exotic_id != 0 {
                return Err(Rejection::ForcedNoExotic);
            }
        }
        ExoticFilter::Exact(id) => {
            if perm.exotic_id != id {
                return Err(Rejection::ExoticMismatch);
            }
        }
    }

    if config.only_masterworked && !perm.is_fully_masterworked() {
        return Err(Rejection::NotMasterworked);
    }

    Ok(())
}

/// Masterworked pieces have a fixed element; every other socket can take
/// any element. Requirements are matched in order, earlier ones first.
pub fn check_affinities(perm: &Permutation, required: &[u8]) -> Result<(), Rejection> {
    let mut existing: Vec<u8> = (0..ARMOR_PIECES)
        .filter(|&n| perm.is_piece_masterworked(n))
        .map(|n| perm.piece_affinity(n))
        .collect();

    let mut free_slots = AFFINITY_SOCKETS as i32 - existing.len() as i32;
    for &affinity in required {
        if let Some(pos) = existing.iter().position(|&e| e == affinity) {
            existing.remove(pos);
        } else {
            free_slots -= 1;
        }
    }

    if free_slots < 0 {
        return Err(Rejection::AffinityCapacity);
    }
    Ok(())
}
