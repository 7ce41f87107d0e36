//! # Cstress Engine
//!
//! Climate scenario stress engine for loan portfolios.
//!
//! Given baseline per-loan PD/LGD and per-sector scenario uplifts, the
//! engine produces stressed risk parameters, projected credit losses,
//! dimension-level aggregates, and a cross-scenario loss quantile
//! ("Climate VaR").
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every computation is a function of its explicit
//!   inputs; no I/O, no caching, no shared mutable state
//! - **Fail whole**: either a scenario's full result set is produced or
//!   the run aborts with nothing; errors are never partially recovered
//! - **Fixed scenarios**: the three-scenario enumeration is closed and
//!   always evaluated in the same order
//!
//! ## Quick Start
//!
//! ```rust
//! use cstress_core::prelude::*;
//! use cstress_engine::run_pipeline;
//!
//! let loans = vec![Loan::new("L1", "Energy", "FR", "EU", 1000.0, 0.02, 0.45, 5.0)];
//! let uplifts = vec![SectorUplift::new(
//!     "Energy",
//!     UpliftPair::new(-0.05, 0.0),
//!     UpliftPair::new(0.20, 0.05),
//!     UpliftPair::new(0.50, 0.10),
//! )];
//!
//! let result = run_pipeline(&loans, &uplifts, &StressConfig::default())?;
//! println!("Climate VaR: {:.2} EUR", result.var_summary.climate_var);
//! # Ok::<(), StressError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`apply`] - per-scenario uplift application and loss computation
//! - [`aggregate`] - dimension-level summaries
//! - [`var`] - cross-scenario loss quantile
//! - [`pipeline`] - fixed-order orchestration
//! - [`indicators`] - green proxy indicators and the indicator registry

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod apply;
pub mod indicators;
pub mod pipeline;
pub mod var;

pub use aggregate::{summarize, Dimension, DimensionSummary, GroupMetrics};
pub use apply::{apply_scenario, ScenarioResult, StressedLoan};
pub use indicators::{IndicatorFn, IndicatorRegistry};
pub use pipeline::{run_pipeline, PipelineResult, ScenarioOutput};
pub use var::{climate_var, ClimateVarSummary, ScenarioLoss};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::aggregate::{summarize, Dimension, DimensionSummary, GroupMetrics};
    pub use crate::apply::{apply_scenario, ScenarioResult, StressedLoan};
    pub use crate::indicators::{IndicatorFn, IndicatorRegistry};
    pub use crate::pipeline::{run_pipeline, PipelineResult, ScenarioOutput};
    pub use crate::var::{climate_var, ClimateVarSummary, ScenarioLoss};
    pub use cstress_core::prelude::*;
}
