//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{IndicatorsArgs, RunArgs};

/// Cstress - climate stress testing for loan portfolios
#[derive(Parser)]
#[command(name = "cstress")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format for terminal summaries
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the full scenario stress test and write CSV outputs
    Run(RunArgs),

    /// Evaluate registered climate indicators over a portfolio
    Indicators(IndicatorsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
