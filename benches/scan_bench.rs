use armorforge::catalog;
use armorforge::config::ScanConfig;
use armorforge::runner::{CatalogRunner, RunnerOptions};
use armorforge::scanner::Scanner;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;

fn bench_config() -> ScanConfig {
    ScanConfig::builder()
        .assume_masterworked(true)
        .armor_affinities(vec![1, 2, 3])
        .minimum_tiers([5, 4, 4, 0, 3, 0])
        .limit_waste(true)
        .build()
}

fn criterion_benchmark(c: &mut Criterion) {
    let words = catalog::synthesize(20_000, Some(42));
    let scanner = Scanner::new(bench_config()).expect("Failed to build scanner");

    c.bench_function("scan_shard (20k permutations)", |b| {
        b.iter(|| scanner.scan_shard(black_box(&words), black_box(0)))
    });

    let runner = CatalogRunner::new(
        Arc::new(Scanner::new(bench_config()).expect("Failed to build scanner")),
        RunnerOptions {
            shard_records: 2_500,
            threads: None,
        },
    )
    .expect("Failed to build runner");

    c.bench_function("catalog run (20k permutations, 8 shards)", |b| {
        b.iter(|| runner.run(black_box(&words)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
