//! CLI command definitions and handlers

mod clean;
mod sample;

use anyhow::Result;
use clap::{Parser, Subcommand};
use graph_sampler::{load_config, SamplerConfig};
use std::path::PathBuf;

/// Parse a sampling budget (at least 1)
fn parse_budget(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

/// graph-sampler - Reproducible subgraph sampling
#[derive(Parser, Debug)]
#[command(name = "graph-sampler")]
#[command(
    version,
    about = "Draw reproducible, seed-anchored subgraph samples from node/edge datasets",
    after_help = "\
Examples:
  graph-sampler sample --dataset movielens --base user -n 10 -m 5
  graph-sampler sample --dataset movielens --base user -n 10 -m 5 --format text
  graph-sampler --storage /srv/datasets clean --dataset movielens --dry-run"
)]
pub struct Cli {
    /// Config file (default: sampler.toml, .samplerrc.json or config.yml in the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset storage root (overrides config)
    #[arg(long, global = true, env = "SAMPLER_STORAGE_PATH")]
    pub storage: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sample a subgraph around randomly drawn seeds (cached per base/N/M)
    Sample {
        /// Dataset id (directory under the storage root)
        #[arg(long, short = 'd')]
        dataset: String,

        /// Base node type without the `_id` suffix (e.g. `user`)
        #[arg(long, short = 'b')]
        base: String,

        /// Maximum number of seeds
        #[arg(short = 'n', value_parser = parse_budget)]
        n: usize,

        /// Exclusive upper bound on a seed's interaction count
        #[arg(short = 'm', value_parser = parse_budget)]
        m: usize,

        /// Output format: json, text
        #[arg(long, short = 'f', default_value = "json", value_parser = ["json", "text"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Neither read nor write the sample cache
        #[arg(long)]
        no_cache: bool,
    },

    /// Remove cached samples of a dataset
    Clean {
        /// Dataset id (directory under the storage root)
        #[arg(long, short = 'd')]
        dataset: String,

        /// Only list what would be removed
        #[arg(long)]
        dry_run: bool,
    },
}

/// Resolve the effective config: explicit file, discovered file or defaults,
/// then CLI overrides.
fn resolve_config(cli: &Cli) -> Result<SamplerConfig> {
    let mut config = match &cli.config {
        Some(path) => SamplerConfig::from_file(path)?,
        None => load_config(&std::env::current_dir()?)?,
    };
    if let Some(storage) = &cli.storage {
        config = config.with_storage_path(storage);
    }
    Ok(config)
}

pub fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::Sample {
            dataset,
            base,
            n,
            m,
            format,
            output,
            no_cache,
        } => {
            let config = if no_cache { config.without_cache() } else { config };
            sample::run(&config, &dataset, &base, n, m, &format, output.as_deref())
        }
        Commands::Clean { dataset, dry_run } => clean::run(&config, &dataset, dry_run),
    }
}
