use crate::consts::{MAJOR_MOD_VALUE, MINOR_MOD_VALUE};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

pub const STAT_COUNT: usize = 6;

/// Working stat values, indexed by `ArmorStat::index`.
pub type StatArray = [i32; STAT_COUNT];

/// The six armor attributes, in record order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCount,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ArmorStat {
    Mobility = 0,
    Resilience = 1,
    Recovery = 2,
    Discipline = 3,
    Intellect = 4,
    Strength = 5,
}

impl ArmorStat {
    pub const ALL: [ArmorStat; STAT_COUNT] = [
        ArmorStat::Mobility,
        ArmorStat::Resilience,
        ArmorStat::Recovery,
        ArmorStat::Discipline,
        ArmorStat::Intellect,
        ArmorStat::Strength,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Bit used for this stat in the 100-combination bitmasks.
    pub fn bit(self) -> u8 {
        1 << self.index()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ModMagnitude {
    /// +5
    Minor,
    /// +10
    Major,
}

impl ModMagnitude {
    pub fn value(self) -> i32 {
        match self {
            ModMagnitude::Minor => MINOR_MOD_VALUE,
            ModMagnitude::Major => MAJOR_MOD_VALUE,
        }
    }
}

/// A single stat mod: one unit of the mod budget spent on one attribute.
///
/// On the wire a modifier is a small integer id: minor mods on stat `i` are
/// `1 + 2i`, major mods are `2 + 2i`. Id 0 is the empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatModifier {
    pub stat: ArmorStat,
    pub magnitude: ModMagnitude,
}

impl StatModifier {
    pub fn minor(stat: ArmorStat) -> Self {
        Self {
            stat,
            magnitude: ModMagnitude::Minor,
        }
    }

    pub fn major(stat: ArmorStat) -> Self {
        Self {
            stat,
            magnitude: ModMagnitude::Major,
        }
    }

    pub fn is_minor(self) -> bool {
        self.magnitude == ModMagnitude::Minor
    }

    pub fn is_major(self) -> bool {
        self.magnitude == ModMagnitude::Major
    }

    pub fn value(self) -> i32 {
        self.magnitude.value()
    }

    pub fn id(self) -> u16 {
        let base = 1 + 2 * self.stat.index() as u16;
        match self.magnitude {
            ModMagnitude::Minor => base,
            ModMagnitude::Major => base + 1,
        }
    }

    pub fn from_id(id: u16) -> Option<Self> {
        if id == 0 {
            return None;
        }
        let stat = ArmorStat::from_index(((id - 1) / 2) as usize)?;
        let magnitude = if id % 2 == 1 {
            ModMagnitude::Minor
        } else {
            ModMagnitude::Major
        };
        Some(Self { stat, magnitude })
    }
}

/// Why a permutation was dropped from the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Rejection {
    ExoticMismatch,
    ForcedNoExotic,
    NotMasterworked,
    AffinityCapacity,
    ModBudget,
    WastedStats,
}

impl Rejection {
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_mod_ids_follow_parity_layout() {
        assert_eq!(StatModifier::minor(ArmorStat::Mobility).id(), 1);
        assert_eq!(StatModifier::major(ArmorStat::Mobility).id(), 2);
        assert_eq!(StatModifier::minor(ArmorStat::Strength).id(), 11);
        assert_eq!(StatModifier::major(ArmorStat::Strength).id(), 12);
    }

    #[test]
    fn test_mod_ids_round_trip_for_every_stat() {
        for stat in ArmorStat::iter() {
            let minor = StatModifier::from_id(StatModifier::minor(stat).id()).unwrap();
            assert_eq!((minor.stat, minor.value()), (stat, 5));

            let major = StatModifier::from_id(StatModifier::major(stat).id()).unwrap();
            assert_eq!((major.stat, major.value()), (stat, 10));
        }
    }

    #[test]
    fn test_out_of_range_ids_do_not_decode() {
        assert_eq!(StatModifier::from_id(0), None);
        assert_eq!(StatModifier::from_id(13), None);
    }
}
