//! Cstress CLI - climate stress testing for loan portfolios.
//!
//! # Usage
//!
//! ```bash
//! # Run the full stress test
//! cstress run --portfolio portfolio.csv --uplifts scenario_uplifts.csv \
//!     --alpha 0.95 --outdir results/
//!
//! # Evaluate climate indicators
//! cstress indicators --portfolio portfolio.csv --show-missing
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod io;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                if cli.quiet {
                    EnvFilter::new("warn")
                } else {
                    EnvFilter::new("info")
                }
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let format = cli.format;

    match cli.command {
        Commands::Run(args) => commands::run::execute(args, format, cli.quiet)?,
        Commands::Indicators(args) => commands::indicators::execute(args, format, cli.quiet)?,
    }

    Ok(())
}
