use super::types::{ArmorStat, Rejection, StatArray, StatModifier, STAT_COUNT};
use crate::consts::{MAJOR_MOD_VALUE, MINOR_MOD_VALUE, STAT_CAP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WasteEntry {
    /// Points above the last tier boundary.
    pub waste: i32,
    pub stat: ArmorStat,
    /// Stat value including a +5 already granted by a minor mod.
    pub value: i32,
}

/// Per-stat waste, highest first. Ties keep stat order.
pub fn waste_entries<'a, I>(stats: &StatArray, mods: I) -> Vec<WasteEntry>
where
    I: IntoIterator<Item = &'a StatModifier>,
{
    let mut has_minor = [false; STAT_COUNT];
    for m in mods {
        if m.is_minor() {
            has_minor[m.stat.index()] = true;
        }
    }

    let mut entries: Vec<WasteEntry> = ArmorStat::ALL
        .iter()
        .map(|&stat| {
            let bonus = if has_minor[stat.index()] { MINOR_MOD_VALUE } else { 0 };
            let value = stats[stat.index()].saturating_add(bonus);
            WasteEntry {
                waste: value.rem_euclid(MAJOR_MOD_VALUE),
                stat,
                value,
            }
        })
        .collect();
    entries.sort_by(|a, b| b.waste.cmp(&a.waste));
    entries
}

pub fn total_waste(entries: &[WasteEntry]) -> i32 {
    entries.iter().map(|e| e.waste).sum()
}

/// Spends leftover mod budget on minor mods that cut rounding waste.
///
/// First pass turns stats ending in 5 into round tiers. With `reject_waste`
/// the permutation fails if that pass leaves any waste behind. Second pass
/// takes whatever budget is left and pushes stats ending in 6..9 over the
/// next boundary, highest waste first.
///
/// Returns only the extra mods, in the order they were applied.
pub fn reduce_waste(
    stats: &StatArray,
    required: &[StatModifier],
    max_mods: usize,
    reject_waste: bool,
) -> Result<Vec<StatModifier>, Rejection> {
    let mut applied = Vec::new();

    let mut entries = waste_entries(stats, required);
    while required.len() + applied.len() < max_mods {
        let Some(entry) = entries
            .iter_mut()
            .find(|e| e.value < STAT_CAP && e.waste == MINOR_MOD_VALUE)
        else {
            break;
        };
        entry.waste -= MINOR_MOD_VALUE;
        applied.push(StatModifier::minor(entry.stat));
    }

    if reject_waste && total_waste(&entries) > 0 {
        return Err(Rejection::WastedStats);
    }

    let mut entries = waste_entries(stats, required.iter().chain(applied.iter()));
    while required.len() + applied.len() < max_mods {
        let Some(entry) = entries
            .iter_mut()
            .find(|e| e.value < STAT_CAP && e.waste > MINOR_MOD_VALUE)
        else {
            break;
        };
        entry.waste -= MINOR_MOD_VALUE;
        applied.push(StatModifier::minor(entry.stat));
    }

    Ok(applied)
}
