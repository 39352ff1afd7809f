use super::types::{ArmorStat, Rejection, StatArray, StatModifier, STAT_COUNT};
use crate::consts::{MAJOR_MOD_VALUE, MINOR_MOD_VALUE};

/// Mods needed to lift a single stat by `deficit` raw points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatCost {
    pub minor: bool,
    pub majors: u32,
}

impl StatCost {
    pub fn for_deficit(deficit: i32) -> Self {
        if deficit <= 0 {
            return Self::default();
        }
        let remainder = deficit % MAJOR_MOD_VALUE;
        let minor = remainder > 0 && remainder <= MINOR_MOD_VALUE;
        let covered = if minor { MINOR_MOD_VALUE } else { 0 };
        let rest = (deficit - covered).max(0);
        let majors = (rest / MAJOR_MOD_VALUE + (rest % MAJOR_MOD_VALUE != 0) as i32) as u32;
        Self { minor, majors }
    }

    pub fn mod_count(&self) -> usize {
        self.minor as usize + self.majors as usize
    }
}

pub fn stat_deficits(stats: &StatArray, minimum_tiers: &[u8; STAT_COUNT]) -> StatArray {
    let mut deficits = [0; STAT_COUNT];
    for ((deficit, &tier), &stat) in deficits.iter_mut().zip(minimum_tiers).zip(stats) {
        *deficit = (tier as i32 * 10).saturating_sub(stat).max(0);
    }
    deficits
}

/// The cheapest mod list that reaches every minimum tier: per stat, the minor
/// mod first, then its majors. Fails when the list is longer than `max_mods`.
pub fn solve_required_mods(
    stats: &StatArray,
    minimum_tiers: &[u8; STAT_COUNT],
    max_mods: usize,
) -> Result<Vec<StatModifier>, Rejection> {
    let costs = stat_deficits(stats, minimum_tiers).map(StatCost::for_deficit);
    let total: usize = costs.iter().map(StatCost::mod_count).sum();
    if total > max_mods {
        return Err(Rejection::ModBudget);
    }

    let mut mods = Vec::with_capacity(total);
    for (stat, cost) in ArmorStat::ALL.into_iter().zip(costs) {
        if cost.minor {
            mods.push(StatModifier::minor(stat));
        }
        for _ in 0..cost.majors {
            mods.push(StatModifier::major(stat));
        }
    }
    Ok(mods)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deficit_split() {
        assert_eq!(StatCost::for_deficit(0), StatCost::default());
        assert_eq!(StatCost::for_deficit(-7), StatCost::default());
        assert_eq!(StatCost::for_deficit(5), StatCost { minor: true, majors: 0 });
        assert_eq!(StatCost::for_deficit(3), StatCost { minor: true, majors: 0 });
        assert_eq!(StatCost::for_deficit(6), StatCost { minor: false, majors: 1 });
        assert_eq!(StatCost::for_deficit(10), StatCost { minor: false, majors: 1 });
        assert_eq!(StatCost::for_deficit(15), StatCost { minor: true, majors: 1 });
        assert_eq!(StatCost::for_deficit(40), StatCost { minor: false, majors: 4 });
    }
}
