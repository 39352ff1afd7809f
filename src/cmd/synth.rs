use armorforge::catalog;
use armorforge::AfResult;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SynthArgs {
    #[arg(short = 'n', long, default_value_t = 100_000)]
    pub count: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(short, long)]
    pub out: PathBuf,
}

pub fn run(args: SynthArgs) -> AfResult<()> {
    let words = catalog::synthesize(args.count, args.seed);
    catalog::write_catalog(&args.out, &words)?;
    info!("💾 Wrote {} permutations to {:?}", args.count, args.out);
    Ok(())
}
