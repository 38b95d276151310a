//! graph-sampler CLI

mod cli;

use clap::Parser;
use graph_sampler::SamplerError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let cli = cli::Cli::parse();

    // RUST_LOG wins over --log-level; logs go to stderr so stdout stays parseable
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<SamplerError>()
            .map(|err| err.class().exit_code())
            .unwrap_or(1);
        std::process::exit(code);
    }
}
