use crate::consts::{AFFINITY_MASK, DEFAULT_MAX_STAT_MODS, MAX_TIER, RESULT_MOD_SLOTS};
use crate::error::{AfResult, ArmorForgeError};
use crate::scanner::types::{ArmorStat, STAT_COUNT};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use typed_builder::TypedBuilder;

/// Which exotic (if any) a permutation must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExoticFilter {
    /// No filter.
    #[default]
    Any,
    /// Only permutations without an exotic.
    ForceNone,
    /// Only permutations containing exactly this exotic.
    Exact(u32),
}

impl ExoticFilter {
    pub const LEGACY_NO_SELECTION: i64 = -1;
    pub const LEGACY_FORCE_NONE: i64 = -2;

    /// Converts the single-integer encoding used by older config files:
    /// -1 means no filter, -2 forces no exotic, anything else is an exotic id.
    pub fn from_legacy(value: i64) -> AfResult<Self> {
        match value {
            Self::LEGACY_NO_SELECTION => Ok(ExoticFilter::Any),
            Self::LEGACY_FORCE_NONE => Ok(ExoticFilter::ForceNone),
            v if (0..=u32::MAX as i64).contains(&v) => Ok(ExoticFilter::Exact(v as u32)),
            v => Err(ArmorForgeError::Config(format!(
                "Exotic selection {} is neither a sentinel nor a valid item id",
                v
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    #[default]
    Titan,
    Hunter,
    Warlock,
}

impl CharacterClass {
    /// The stat that feeds this class's class ability.
    pub fn class_ability_stat(self) -> ArmorStat {
        match self {
            CharacterClass::Titan => ArmorStat::Resilience,
            CharacterClass::Hunter => ArmorStat::Mobility,
            CharacterClass::Warlock => ArmorStat::Discipline,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusTarget {
    Stat(ArmorStat),
    /// Resolved through `CharacterClass::class_ability_stat`.
    ClassAbility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModBonus {
    pub target: BonusTarget,
    pub value: i32,
}

/// A combat-style mod the user has slotted. It needs a socket of a specific
/// element and shifts one or more stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModDefinition {
    pub name: String,
    pub required_affinity: u8,
    pub bonuses: Vec<ModBonus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct ScanConfig {
    #[builder(default)]
    pub character_class: CharacterClass,
    #[builder(default)]
    pub exotic: ExoticFilter,
    #[builder(default = false)]
    pub assume_masterworked: bool,
    #[builder(default = false)]
    pub only_masterworked: bool,
    #[builder(default)]
    pub armor_affinities: Vec<u8>,
    #[builder(default = false)]
    pub ignore_affinities: bool,
    #[builder(default)]
    pub minimum_tiers: [u8; STAT_COUNT],
    #[builder(default)]
    pub enabled_mods: Vec<ModDefinition>,
    #[builder(default = DEFAULT_MAX_STAT_MODS)]
    pub max_stat_mods: u8,
    #[builder(default = false)]
    pub limit_waste: bool,
    #[builder(default = false)]
    pub reject_waste: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ScanConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> AfResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: ScanConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AfResult<()> {
        for (stat, &tier) in ArmorStat::ALL.iter().zip(&self.minimum_tiers) {
            if tier as i32 > MAX_TIER {
                return Err(ArmorForgeError::Config(format!(
                    "Minimum tier for {} is {}, must be 0..={}",
                    stat, tier, MAX_TIER
                )));
            }
        }

        if self.max_stat_mods as usize > RESULT_MOD_SLOTS {
            return Err(ArmorForgeError::Config(format!(
                "max_stat_mods is {}, a result record holds at most {}",
                self.max_stat_mods, RESULT_MOD_SLOTS
            )));
        }

        let mod_affinities = self.enabled_mods.iter().map(|m| m.required_affinity);
        for affinity in self.armor_affinities.iter().copied().chain(mod_affinities) {
            if affinity as u32 > AFFINITY_MASK {
                return Err(ArmorForgeError::Config(format!(
                    "Affinity code {} does not fit in 3 bits",
                    affinity
                )));
            }
        }

        Ok(())
    }

    pub fn max_mods(&self) -> usize {
        self.max_stat_mods as usize
    }
}

/// Parses `"3,3,3,3,3,3"` style tier lists.
pub fn parse_tier_array(s: &str) -> AfResult<[u8; STAT_COUNT]> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != STAT_COUNT {
        return Err(ArmorForgeError::Config(format!(
            "Tier list '{}' needs {} values",
            s, STAT_COUNT
        )));
    }
    let mut arr = [0u8; STAT_COUNT];
    for (i, p) in parts.iter().enumerate() {
        arr[i] = p
            .trim()
            .parse()
            .map_err(|_| ArmorForgeError::Config(format!("Invalid tier '{}' in '{}'", p, s)))?;
    }
    Ok(arr)
}

/// Command-line tweaks applied on top of a config file. Flags only ever
/// switch options on.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOverrides {
    #[arg(long)]
    pub max_mods: Option<u8>,

    /// Comma separated minimum tiers, e.g. "3,3,3,3,3,3".
    #[arg(long)]
    pub min_tiers: Option<String>,

    /// Exotic id, or -1 for no filter and -2 to forbid exotics.
    #[arg(long, allow_hyphen_values = true)]
    pub exotic: Option<i64>,

    #[arg(long, default_value_t = false)]
    pub assume_masterworked: bool,

    #[arg(long, default_value_t = false)]
    pub only_masterworked: bool,

    #[arg(long, default_value_t = false)]
    pub ignore_affinities: bool,

    #[arg(long, default_value_t = false)]
    pub limit_waste: bool,

    #[arg(long, default_value_t = false)]
    pub reject_waste: bool,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut ScanConfig) -> AfResult<()> {
        if let Some(n) = self.max_mods {
            config.max_stat_mods = n;
        }
        if let Some(tiers) = &self.min_tiers {
            config.minimum_tiers = parse_tier_array(tiers)?;
        }
        if let Some(exotic) = self.exotic {
            config.exotic = ExoticFilter::from_legacy(exotic)?;
        }
        config.assume_masterworked |= self.assume_masterworked;
        config.only_masterworked |= self.only_masterworked;
        config.ignore_affinities |= self.ignore_affinities;
        config.limit_waste |= self.limit_waste;
        config.reject_waste |= self.reject_waste;
        config.validate()
    }
}
