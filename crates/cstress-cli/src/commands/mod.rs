//! Command implementations.

pub mod indicators;
pub mod run;

pub use indicators::IndicatorsArgs;
pub use run::RunArgs;
