#![allow(dead_code)]

use armorforge::config::ScanConfig;
use armorforge::scanner::Permutation;

/// Builder for permutation records to keep tests readable.
pub struct PermBuilder {
    perm: Permutation,
}

impl PermBuilder {
    pub fn new(stats: [u32; 6]) -> Self {
        Self {
            perm: Permutation {
                item_ids: [11, 12, 13, 14],
                stats,
                exotic_id: 0,
                masterwork_mask: 0,
                affinity_pack: 0,
            },
        }
    }

    /// Raw values that land on `working` once the assumed masterwork (+8)
    /// and base (+2) bonuses are applied.
    pub fn assumed(working: [u32; 6]) -> Self {
        Self::new(working.map(|v| v - 10))
    }

    pub fn exotic(mut self, id: u32) -> Self {
        self.perm.exotic_id = id;
        self
    }

    pub fn masterwork(mut self, mask: u32) -> Self {
        self.perm.masterwork_mask = mask;
        self
    }

    pub fn affinities(mut self, codes: [u8; 4]) -> Self {
        self.perm.affinity_pack = Permutation::pack_affinities(codes);
        self
    }

    pub fn build(self) -> Permutation {
        self.perm
    }
}

pub fn to_words(perms: &[Permutation]) -> Vec<u32> {
    perms.iter().flat_map(|p| p.to_words()).collect()
}

/// Everything masterworked, no affinity bookkeeping, no tiers.
pub fn assumed_config() -> ScanConfig {
    ScanConfig::builder()
        .assume_masterworked(true)
        .ignore_affinities(true)
        .build()
}
