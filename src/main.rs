use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a permutation catalog against a configuration.
    Scan(cmd::scan::ScanArgs),
    /// Write a random catalog for benchmarking.
    Synth(cmd::synth::SynthArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let outcome = match cli.command {
        Commands::Scan(args) => cmd::scan::run(args),
        Commands::Synth(args) => cmd::synth::run(args),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
