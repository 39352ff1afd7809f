use super::types::{ArmorStat, Rejection, StatArray, StatModifier, STAT_COUNT};
use crate::consts::{MAJOR_MOD_VALUE, MAX_TIER, STAT_CAP};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::EnumCount;

/// Catalog-wide facts used to bound what the user can still ask for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStatistics {
    /// Best tier reachable per stat by any accepted permutation.
    pub max_tiers: [u8; STAT_COUNT],
    /// Stat bitmasks where exactly three stats can reach 100.
    pub combos_3x100: BTreeSet<u8>,
    /// Stat bitmasks where exactly four stats can reach 100.
    pub combos_4x100: BTreeSet<u8>,
}

impl ScanStatistics {
    /// Folds one accepted permutation in. `required` is the cost solver's
    /// list; budget spent on waste reduction is still counted as free here.
    /// Each required mod on a stat, minor or major, counts as one tier.
    pub fn record(&mut self, stats: &StatArray, required: &[StatModifier], max_mods: usize) {
        let unused = max_mods.saturating_sub(required.len()) as i32;

        for stat in ArmorStat::ALL {
            let n = stat.index();
            let spent = required.iter().filter(|m| m.stat == stat).count() as i32;
            let tier = (stats[n].div_euclid(10) + unused + spent).clamp(0, MAX_TIER) as u8;
            if tier > self.max_tiers[n] {
                self.max_tiers[n] = tier;
            }
        }

        let mask = hundred_stat_mask(stats, required, unused);
        match mask.count_ones() {
            3 => {
                self.combos_3x100.insert(mask);
            }
            4 => {
                self.combos_4x100.insert(mask);
            }
            _ => {}
        }
    }

    /// Element-wise max for tiers, union for the combination sets.
    pub fn merge(&mut self, other: &ScanStatistics) {
        for (mine, theirs) in self.max_tiers.iter_mut().zip(other.max_tiers) {
            *mine = (*mine).max(theirs);
        }
        self.combos_3x100.extend(other.combos_3x100.iter().copied());
        self.combos_4x100.extend(other.combos_4x100.iter().copied());
    }
}

/// Greedily spends `budget` major mods on the stats closest to 100 and
/// returns the bitmask of stats that get there.
pub fn hundred_stat_mask(stats: &StatArray, mods: &[StatModifier], budget: i32) -> u8 {
    let mut values = *stats;
    for m in mods {
        let v = &mut values[m.stat.index()];
        *v = v.saturating_add(m.value());
    }

    let mut todo: Vec<(i32, ArmorStat)> = ArmorStat::ALL
        .iter()
        .map(|&stat| {
            let missing = STAT_CAP.saturating_sub(values[stat.index()]).max(0);
            let steps = missing / MAJOR_MOD_VALUE + (missing % MAJOR_MOD_VALUE != 0) as i32;
            (steps, stat)
        })
        .collect();
    todo.sort_by_key(|&(steps, _)| steps);

    let mut budget = budget.max(0);
    for entry in todo.iter_mut() {
        let spent = entry.0.min(budget);
        entry.0 -= spent;
        budget -= spent;
    }

    todo.iter()
        .filter(|&&(steps, _)| steps == 0)
        .fold(0u8, |mask, &(_, stat)| mask | stat.bit())
}

/// How many records a scan saw, kept and dropped (by reason).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanCounters {
    pub scanned: usize,
    pub accepted: usize,
    pub rejected: [usize; Rejection::COUNT],
}

impl ScanCounters {
    pub fn reject(&mut self, reason: Rejection) {
        self.rejected[reason.index()] += 1;
    }

    pub fn rejected_by(&self, reason: Rejection) -> usize {
        self.rejected[reason.index()]
    }

    pub fn total_rejected(&self) -> usize {
        self.rejected.iter().sum()
    }

    pub fn merge(&mut self, other: &ScanCounters) {
        self.scanned += other.scanned;
        self.accepted += other.accepted;
        for (mine, theirs) in self.rejected.iter_mut().zip(other.rejected) {
            *mine += theirs;
        }
    }
}
