//! Indicators command implementation.
//!
//! Evaluates every registered climate indicator over the portfolio and
//! reports declared-but-unimplemented names.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::warn;

use cstress_engine::IndicatorRegistry;

use crate::cli::OutputFormat;
use crate::io;
use crate::output::print_output;

/// Arguments for the indicators command.
#[derive(Args, Debug)]
pub struct IndicatorsArgs {
    /// Path to the portfolio CSV (loan-level data)
    #[arg(short, long)]
    pub portfolio: PathBuf,

    /// Also list indicators that are declared but not implemented
    #[arg(long)]
    pub show_missing: bool,
}

/// One evaluated indicator.
#[derive(Debug, Serialize, Tabled)]
pub struct IndicatorRow {
    /// Stable indicator name.
    #[tabled(rename = "Indicator")]
    pub name: String,
    /// Computed value.
    #[tabled(rename = "Value")]
    pub value: String,
}

/// Execute the indicators command.
pub fn execute(args: IndicatorsArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let loans = io::load_portfolio(&args.portfolio)?;
    let registry = IndicatorRegistry::standard();

    let rows: Vec<IndicatorRow> = registry
        .evaluate_all(&loans)
        .into_iter()
        .map(|(name, value)| IndicatorRow {
            name: name.to_string(),
            value: format!("{value:.4}"),
        })
        .collect();

    if !quiet {
        print_output(&rows, format)?;
    }

    let missing = registry.missing();
    if args.show_missing && !missing.is_empty() {
        for name in &missing {
            warn!(indicator = %name, "indicator declared but not implemented");
        }
        if !quiet {
            eprintln!("Missing indicators ({}):", missing.len());
            for name in &missing {
                eprintln!("  - {name}");
            }
        }
    }

    Ok(())
}
