use crate::consts::PERMUTATION_WIDTH;
use crate::error::{AfResult, ArmorForgeError};
use crate::scanner::{decoder, AcceptedPermutation, ScanCounters, ScanStatistics, Scanner, ShardOutput};
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

pub const DEFAULT_SHARD_RECORDS: usize = 50_000;

pub struct RunnerOptions {
    /// Records per shard.
    pub shard_records: usize,
    /// Worker threads. `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            shard_records: DEFAULT_SHARD_RECORDS,
            threads: None,
        }
    }
}

/// Merged output of every shard in a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogScan {
    /// Shard result buffers concatenated in catalog order.
    pub buffer: Vec<u16>,
    pub statistics: ScanStatistics,
    pub counters: ScanCounters,
    pub shards: usize,
}

impl CatalogScan {
    pub fn absorb(&mut self, shard: ShardOutput) {
        self.buffer.extend_from_slice(&shard.buffer);
        self.statistics.merge(&shard.statistics);
        self.counters.merge(&shard.counters);
        self.shards += 1;
    }

    pub fn results(&self) -> AfResult<Vec<AcceptedPermutation>> {
        crate::scanner::encoder::decode_results(&self.buffer)
    }
}

pub struct CatalogRunner {
    scanner: Arc<Scanner>,
    options: RunnerOptions,
}

impl CatalogRunner {
    pub fn new(scanner: Arc<Scanner>, options: RunnerOptions) -> AfResult<Self> {
        if options.shard_records == 0 {
            return Err(ArmorForgeError::Config(
                "Shard size must be at least one record".to_string(),
            ));
        }
        if options.threads == Some(0) {
            return Err(ArmorForgeError::Config(
                "Thread count must be at least one".to_string(),
            ));
        }
        Ok(Self { scanner, options })
    }

    /// Splits `catalog` into shards, scans them in parallel and merges the
    /// outputs in shard order.
    pub fn run(&self, catalog: &[u32]) -> AfResult<CatalogScan> {
        let records = decoder::record_count(catalog)?;
        if records as u64 > u32::MAX as u64 {
            return Err(ArmorForgeError::Input(format!(
                "Catalog has {} records, more than a 32-bit index can address",
                records
            )));
        }

        let started = Instant::now();
        let outputs = match self.options.threads {
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
                pool.install(|| self.scan_shards(catalog))?
            }
            None => self.scan_shards(catalog)?,
        };

        let mut merged = CatalogScan::default();
        for shard in outputs {
            merged.absorb(shard);
        }

        info!(
            "Scanned {} permutations in {} shards: {} accepted ({:.2?})",
            merged.counters.scanned,
            merged.shards,
            merged.counters.accepted,
            started.elapsed()
        );

        Ok(merged)
    }

    fn scan_shards(&self, catalog: &[u32]) -> AfResult<Vec<ShardOutput>> {
        let shard_words = self.options.shard_records * PERMUTATION_WIDTH;
        catalog
            .par_chunks(shard_words)
            .enumerate()
            .map(|(i, chunk)| {
                let start = (i * self.options.shard_records) as u32;
                self.scanner.scan_shard(chunk, start)
            })
            .collect()
    }
}
