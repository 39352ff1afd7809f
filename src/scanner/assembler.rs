use super::decoder::Permutation;
use super::types::{StatArray, STAT_COUNT};
use crate::config::{BonusTarget, ScanConfig};
use crate::consts::{
    AFFINITY_SOCKETS, ASSUMED_MASTERWORK_BONUS, BASE_STAT_BONUS, MASTERWORK_BONUS_PER_PIECE,
};

/// Everything the enabled mods contribute. It depends only on the config,
/// so it is built once per scanner rather than once per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModLoadout {
    pub stat_bonus: StatArray,
    /// Mod affinities (last enabled mod first) followed by the configured
    /// armor affinities, trimmed to the socket count.
    pub required_affinities: Vec<u8>,
}

impl ModLoadout {
    pub fn from_config(config: &ScanConfig) -> Self {
        let mut stat_bonus: StatArray = [0; STAT_COUNT];
        let mut required: Vec<u8> = config.armor_affinities.clone();

        for m in &config.enabled_mods {
            required.insert(0, m.required_affinity);
            for bonus in &m.bonuses {
                let stat = match bonus.target {
                    BonusTarget::Stat(stat) => stat,
                    BonusTarget::ClassAbility => config.character_class.class_ability_stat(),
                };
                let slot = &mut stat_bonus[stat.index()];
                *slot = slot.saturating_add(bonus.value);
            }
        }

        required.truncate(AFFINITY_SOCKETS);

        Self {
            stat_bonus,
            required_affinities: required,
        }
    }
}

/// Builds the working stat array for one permutation.
pub fn assemble_stats(perm: &Permutation, config: &ScanConfig, loadout: &ModLoadout) -> StatArray {
    let masterwork_bonus = if config.assume_masterworked {
        ASSUMED_MASTERWORK_BONUS
    } else {
        perm.masterworked_pieces() as i32 * MASTERWORK_BONUS_PER_PIECE
    };

    let mut stats = [0; STAT_COUNT];
    for ((stat, &raw), &bonus) in stats.iter_mut().zip(&perm.stats).zip(&loadout.stat_bonus) {
        // Malformed words saturate instead of wrapping.
        *stat = i32::try_from(raw)
            .unwrap_or(i32::MAX)
            .saturating_add(BASE_STAT_BONUS + masterwork_bonus)
            .saturating_add(bonus);
    }
    stats
}
