//! Core data types for the stress test.
//!
//! - [`Loan`]: one portfolio row
//! - [`SectorUplift`] / [`UpliftPair`]: per-sector scenario adjustments
//! - [`Scenario`]: the fixed three-scenario enumeration
//! - [`StressConfig`]: run configuration

mod config;
mod loan;
mod scenario;
mod uplift;

pub use config::StressConfig;
pub use loan::{total_ead, Loan};
pub use scenario::Scenario;
pub use uplift::{SectorUplift, UpliftPair};
