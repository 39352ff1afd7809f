mod common;

use armorforge::catalog::synthesize;
use armorforge::config::{ExoticFilter, ScanConfig};
use armorforge::consts::PERMUTATION_WIDTH;
use armorforge::runner::{CatalogRunner, RunnerOptions};
use armorforge::scanner::Scanner;
use std::sync::Arc;

fn busy_config() -> ScanConfig {
    ScanConfig::builder()
        .minimum_tiers([6, 4, 3, 0, 4, 0])
        .max_stat_mods(5)
        .limit_waste(true)
        .armor_affinities(vec![1, 2])
        .build()
}

fn runner(shard_records: usize, threads: Option<usize>) -> CatalogRunner {
    let scanner = Arc::new(Scanner::new(busy_config()).unwrap());
    CatalogRunner::new(
        scanner,
        RunnerOptions {
            shard_records,
            threads,
        },
    )
    .unwrap()
}

#[test]
fn test_sharding_does_not_change_results() {
    let catalog = synthesize(2_000, Some(42));

    let single = Scanner::new(busy_config())
        .unwrap()
        .scan_shard(&catalog, 0)
        .unwrap();
    let sharded = runner(97, Some(3)).run(&catalog).unwrap();

    assert_eq!(sharded.shards, 21);
    assert_eq!(sharded.buffer, single.buffer);
    assert_eq!(sharded.statistics, single.statistics);
    assert_eq!(sharded.counters, single.counters);
    assert!(sharded.counters.accepted > 0, "fixture should accept something");
}

#[test]
fn test_global_pool_matches_dedicated_pool() {
    let catalog = synthesize(500, Some(7));
    let a = runner(64, None).run(&catalog).unwrap();
    let b = runner(64, Some(2)).run(&catalog).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_indices_are_absolute_and_ordered() {
    let catalog = synthesize(1_000, Some(3));
    let scan = runner(100, Some(2)).run(&catalog).unwrap();
    let results = scan.results().unwrap();

    assert_eq!(results.len(), scan.counters.accepted);
    assert!(results.windows(2).all(|w| w[0].index < w[1].index));
    assert!(results.iter().all(|r| (r.index as usize) < 1_000));
}

#[test]
fn test_exotic_filter_across_shards() {
    let catalog = synthesize(1_000, Some(11));
    let config = ScanConfig::builder()
        .exotic(ExoticFilter::Exact(1002))
        .ignore_affinities(true)
        .build();
    let scanner = Arc::new(Scanner::new(config).unwrap());
    let scan = CatalogRunner::new(
        scanner,
        RunnerOptions {
            shard_records: 128,
            threads: Some(2),
        },
    )
    .unwrap()
    .run(&catalog)
    .unwrap();

    for r in scan.results().unwrap() {
        let offset = r.index as usize * PERMUTATION_WIDTH;
        assert_eq!(catalog[offset + 10], 1002);
    }
}

#[test]
fn test_empty_catalog() {
    let scan = runner(10, None).run(&[]).unwrap();
    assert_eq!(scan.shards, 0);
    assert!(scan.buffer.is_empty());
}

#[test]
fn test_bad_options_rejected() {
    let scanner = Arc::new(Scanner::new(ScanConfig::default()).unwrap());
    assert!(CatalogRunner::new(
        scanner.clone(),
        RunnerOptions {
            shard_records: 0,
            threads: None
        }
    )
    .is_err());
    assert!(CatalogRunner::new(
        scanner,
        RunnerOptions {
            shard_records: 10,
            threads: Some(0)
        }
    )
    .is_err());
}

#[test]
fn test_truncated_catalog_rejected() {
    let mut catalog = synthesize(10, Some(1));
    catalog.truncate(catalog.len() - 3);
    assert!(runner(4, None).run(&catalog).is_err());
}
