//! # Cstress Core
//!
//! Data model for climate stress testing of loan portfolios.
//!
//! This crate defines the typed records the stress engine consumes:
//! loan-level portfolio rows, per-sector scenario uplifts, the fixed
//! scenario enumeration, and the run configuration. It also owns the
//! error taxonomy and the input table schemas.
//!
//! ## Design Philosophy
//!
//! - **Plain data**: records are immutable after load; the engine derives
//!   new tables instead of mutating inputs
//! - **Permissive baselines**: PD/LGD bounds are not validated at load;
//!   they are enforced by clipping during stress application
//! - **Explicit configuration**: [`StressConfig`] is passed as a parameter,
//!   never read from global state

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod schema;
pub mod types;

pub use error::{StressError, StressResult};
pub use types::{total_ead, Loan, Scenario, SectorUplift, StressConfig, UpliftPair};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{StressError, StressResult};
    pub use crate::types::{total_ead, Loan, Scenario, SectorUplift, StressConfig, UpliftPair};
}
