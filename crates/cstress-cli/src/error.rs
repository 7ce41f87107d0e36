//! CLI error types.

use cstress_core::StressError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A stress-test input or computation error.
    #[error(transparent)]
    Stress(#[from] StressError),

    /// Invalid confidence level.
    #[error("Invalid alpha: {0}. Must be between 0 and 1.")]
    InvalidAlpha(f64),

    /// Invalid PD ceiling.
    #[error("Invalid cap-pd: {0}. Must be between 0 and 1.")]
    InvalidCapPd(f64),

    /// CSV read/write error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
