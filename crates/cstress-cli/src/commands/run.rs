//! Run command implementation.
//!
//! Runs the full stress pipeline and writes one loan-level result file
//! plus three dimension summaries per scenario, and the cross-scenario
//! Climate VaR summary.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use cstress_core::{total_ead, StressConfig};
use cstress_engine::{run_pipeline, Dimension};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::io;
use crate::output::{format_eur, print_output};

/// Arguments for the run command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the portfolio CSV (loan-level data)
    #[arg(short, long)]
    pub portfolio: PathBuf,

    /// Path to the scenario uplifts CSV (sector x scenario)
    #[arg(short, long)]
    pub uplifts: PathBuf,

    /// VaR confidence level, e.g. 0.95
    #[arg(short, long, default_value = "0.95")]
    pub alpha: f64,

    /// Ceiling applied to stressed PD
    #[arg(long, default_value = "1.0")]
    pub cap_pd: f64,

    /// Output directory for CSV results
    #[arg(short, long, default_value = ".")]
    pub outdir: PathBuf,
}

/// One row of the terminal summary.
#[derive(Debug, Serialize, Tabled)]
pub struct RunSummaryRow {
    /// Scenario name or the VaR label.
    #[tabled(rename = "Scenario")]
    pub scenario: String,
    /// Total projected loss, EUR.
    #[tabled(rename = "Total loss projected")]
    pub total_loss_projected: String,
}

/// Execute the run command.
pub fn execute(args: RunArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    if !(0.0..=1.0).contains(&args.alpha) {
        return Err(CliError::InvalidAlpha(args.alpha).into());
    }
    if !(0.0..=1.0).contains(&args.cap_pd) {
        return Err(CliError::InvalidCapPd(args.cap_pd).into());
    }
    let config = StressConfig::new()
        .with_alpha(args.alpha)
        .with_cap_pd(args.cap_pd);

    let loans = io::load_portfolio(&args.portfolio)?;
    let uplifts = io::load_uplifts(&args.uplifts)?;
    info!(
        loans = loans.len(),
        total_ead = total_ead(&loans),
        "loaded portfolio"
    );

    let run = run_pipeline(&loans, &uplifts, &config)?;

    std::fs::create_dir_all(&args.outdir)?;
    for output in &run.scenarios {
        io::write_results(&args.outdir, &output.result)?;
        for dim in Dimension::ALL {
            io::write_summary(&args.outdir, output.summary(dim))?;
        }
    }
    io::write_var_summary(&args.outdir, &run.var_summary)?;
    info!(outdir = %args.outdir.display(), "outputs written");

    if !quiet {
        let rows: Vec<RunSummaryRow> = run
            .var_summary
            .rows()
            .into_iter()
            .map(|(scenario, loss)| RunSummaryRow {
                scenario,
                total_loss_projected: format_eur(loss),
            })
            .collect();
        print_output(&rows, format)?;
    }

    Ok(())
}
