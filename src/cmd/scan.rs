use crate::reports;
use armorforge::catalog;
use armorforge::config::{ConfigOverrides, ScanConfig};
use armorforge::export;
use armorforge::runner::{CatalogRunner, RunnerOptions, DEFAULT_SHARD_RECORDS};
use armorforge::scanner::Scanner;
use armorforge::AfResult;
use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Catalog of packed permutation records.
    #[arg(short = 'p', long)]
    pub catalog: PathBuf,

    /// JSON scan configuration. Defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: ConfigOverrides,

    #[arg(long, default_value_t = DEFAULT_SHARD_RECORDS)]
    pub shard_size: usize,

    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Write accepted results as CSV.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write catalog statistics as JSON.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

pub fn run(args: ScanArgs) -> AfResult<()> {
    let mut config = match &args.config {
        Some(path) => {
            info!("📂 Loading config: {:?}", path);
            ScanConfig::load_from_file(path)?
        }
        None => ScanConfig::default(),
    };
    args.overrides.apply(&mut config)?;

    let words = catalog::load_catalog(&args.catalog)?;

    let scanner = Arc::new(Scanner::new(config)?);
    let runner = CatalogRunner::new(
        scanner,
        RunnerOptions {
            shard_records: args.shard_size,
            threads: args.threads,
        },
    )?;
    let scan = runner.run(&words)?;

    reports::print_counters(&scan.counters);
    reports::print_statistics(&scan.statistics);

    if let Some(path) = &args.csv {
        let results = scan.results()?;
        export::write_results_csv(BufWriter::new(File::create(path)?), &results)?;
        info!("💾 Wrote {} results to {:?}", results.len(), path);
    }

    if let Some(path) = &args.json {
        export::write_statistics_json(BufWriter::new(File::create(path)?), &scan.statistics)?;
        info!("💾 Wrote statistics to {:?}", path);
    }

    Ok(())
}
