//! Command line entry point for the propval comparison benchmark

use anyhow::{Context, Result};
use clap::Parser;
use propval_bench::config::{DEFAULT_MAX_LIST_LEN, DEFAULT_PAIRS};
use propval_bench::{run, BenchConfig, Pairing, Population};
use tracing_subscriber::EnvFilter;

/// Generate two populations of property values and time their comparison
#[derive(Debug, Parser)]
#[command(name = "propval-bench", version, about)]
struct Args {
    /// Number of compared pairs
    #[arg(long, default_value_t = DEFAULT_PAIRS)]
    pairs: usize,

    /// Seed for the population generator
    #[arg(long)]
    seed: Option<u64>,

    /// Kinds placed on each side of a pair
    #[arg(long, value_enum, default_value_t = Pairing::Mixed)]
    pairing: Pairing,

    /// Longest generated list (any-kind pairing only)
    #[arg(long, default_value_t = DEFAULT_MAX_LIST_LEN)]
    max_list_len: usize,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl From<&Args> for BenchConfig {
    fn from(args: &Args) -> Self {
        BenchConfig {
            pairs: args.pairs,
            seed: args.seed,
            pairing: args.pairing,
            max_list_len: args.max_list_len,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = BenchConfig::from(&args);
    let population = Population::seeded(&config).context("failed to generate population")?;
    let report = run(&population);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
