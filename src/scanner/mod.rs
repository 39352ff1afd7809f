pub mod assembler;
pub mod costs;
pub mod decoder;
pub mod encoder;
pub mod filter;
pub mod statistics;
pub mod types;
pub mod waste;

pub use self::decoder::Permutation;
pub use self::encoder::AcceptedPermutation;
pub use self::statistics::{ScanCounters, ScanStatistics};
pub use self::types::{ArmorStat, ModMagnitude, Rejection, StatArray, StatModifier};

use self::assembler::ModLoadout;
use crate::config::ScanConfig;
use crate::error::{AfResult, ArmorForgeError};
use std::time::Instant;
use tracing::debug;

/// Everything one shard scan hands back to its caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShardOutput {
    /// Encoded accepted results, see `encoder` for the layout.
    pub buffer: Vec<u16>,
    pub statistics: ScanStatistics,
    pub counters: ScanCounters,
}

impl ShardOutput {
    pub fn results(&self) -> AfResult<Vec<AcceptedPermutation>> {
        encoder::decode_results(&self.buffer)
    }
}

/// Outcome of scoring one permutation that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub stats: StatArray,
    /// Mods the cost solver needs to reach the minimum tiers.
    pub required: Vec<StatModifier>,
    /// `required` followed by any waste reduction mods.
    pub mods: Vec<StatModifier>,
}

pub struct Scanner {
    config: ScanConfig,
    loadout: ModLoadout,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> AfResult<Self> {
        config.validate()?;
        let loadout = ModLoadout::from_config(&config);
        Ok(Self { config, loadout })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn loadout(&self) -> &ModLoadout {
        &self.loadout
    }

    /// Runs a single permutation through filter, assembler, affinity check,
    /// cost solver and waste reducer.
    pub fn evaluate(&self, perm: &Permutation) -> Result<Evaluation, Rejection> {
        let cfg = &self.config;

        filter::check_constraints(perm, cfg)?;

        let stats = assembler::assemble_stats(perm, cfg, &self.loadout);

        if !cfg.ignore_affinities {
            filter::check_affinities(perm, &self.loadout.required_affinities)?;
        }

        let required = costs::solve_required_mods(&stats, &cfg.minimum_tiers, cfg.max_mods())?;

        let mut mods = required.clone();
        if cfg.limit_waste {
            let extra = waste::reduce_waste(&stats, &required, cfg.max_mods(), cfg.reject_waste)?;
            mods.extend(extra);
        }

        Ok(Evaluation {
            stats,
            required,
            mods,
        })
    }

    /// Scans one shard. `start_position` is the catalog index of the shard's
    /// first record and only affects the reported indices.
    pub fn scan_shard(&self, buffer: &[u32], start_position: u32) -> AfResult<ShardOutput> {
        let started = Instant::now();
        let count = decoder::record_count(buffer)?;
        if start_position as u64 + count as u64 > u32::MAX as u64 + 1 {
            return Err(ArmorForgeError::Input(format!(
                "Shard at {} with {} records exceeds the 32-bit index space",
                start_position, count
            )));
        }

        let mut statistics = ScanStatistics::default();
        let mut counters = ScanCounters::default();
        let mut accepted = Vec::new();

        for (offset, perm) in decoder::decode_records(buffer)? {
            counters.scanned += 1;
            match self.evaluate(&perm) {
                Ok(eval) => {
                    statistics.record(&eval.stats, &eval.required, self.config.max_mods());
                    counters.accepted += 1;
                    accepted.push(AcceptedPermutation {
                        index: start_position + offset as u32,
                        mods: eval.mods,
                    });
                }
                Err(reason) => counters.reject(reason),
            }
        }

        debug!(
            "Shard {}: scanned {} records, accepted {} in {:?}",
            start_position,
            counters.scanned,
            counters.accepted,
            started.elapsed()
        );

        Ok(ShardOutput {
            buffer: encoder::encode_results(&accepted),
            statistics,
            counters,
        })
    }
}
