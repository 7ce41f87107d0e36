//! Scenario pipeline orchestration.
//!
//! Runs the fixed scenario enumeration in order, summarizes each result
//! along every dimension, and fans the per-scenario totals into the
//! cross-scenario Climate VaR summary. All tables are produced in memory;
//! persistence belongs to the caller.

use crate::aggregate::{summarize, Dimension, DimensionSummary};
use crate::apply::{apply_scenario, ScenarioResult};
use crate::var::{ClimateVarSummary, ScenarioLoss};
use cstress_core::{Loan, Scenario, SectorUplift, StressConfig, StressResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// All tables produced for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutput {
    /// Loan-level stressed result.
    pub result: ScenarioResult,
    /// Summary by sector.
    pub by_sector: DimensionSummary,
    /// Summary by country.
    pub by_country: DimensionSummary,
    /// Summary by region.
    pub by_region: DimensionSummary,
}

impl ScenarioOutput {
    /// The scenario these tables belong to.
    #[must_use]
    pub fn scenario(&self) -> Scenario {
        self.result.scenario
    }

    /// Returns the summary along the given dimension.
    #[must_use]
    pub fn summary(&self, dimension: Dimension) -> &DimensionSummary {
        match dimension {
            Dimension::Sector => &self.by_sector,
            Dimension::Country => &self.by_country,
            Dimension::Region => &self.by_region,
        }
    }
}

/// Result of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Per-scenario outputs, in the fixed scenario order.
    pub scenarios: Vec<ScenarioOutput>,
    /// Cross-scenario totals and the loss quantile.
    pub var_summary: ClimateVarSummary,
}

/// Runs the complete stress pipeline over the portfolio.
///
/// The three scenario runs are mutually independent (same immutable
/// inputs, disjoint outputs); only the final quantile waits on all of
/// them. A failure in any scenario aborts the run with nothing produced.
///
/// # Errors
///
/// Propagates [`cstress_core::StressError::MissingUplift`] from scenario
/// application.
pub fn run_pipeline(
    loans: &[Loan],
    uplifts: &[SectorUplift],
    config: &StressConfig,
) -> StressResult<PipelineResult> {
    info!(
        loans = loans.len(),
        total_ead = cstress_core::total_ead(loans),
        "starting stress pipeline"
    );

    let mut scenarios = Vec::with_capacity(Scenario::ALL.len());
    let mut losses = Vec::with_capacity(Scenario::ALL.len());

    for scenario in Scenario::ALL {
        let result = apply_scenario(loans, uplifts, scenario, config)?;
        let total_loss = result.total_loss();
        info!(%scenario, total_loss, "scenario complete");

        losses.push(ScenarioLoss {
            scenario,
            total_loss_projected: total_loss,
        });
        scenarios.push(ScenarioOutput {
            by_sector: summarize(&result, Dimension::Sector),
            by_country: summarize(&result, Dimension::Country),
            by_region: summarize(&result, Dimension::Region),
            result,
        });
    }

    let var_summary = ClimateVarSummary::from_losses(losses, config);
    info!(
        alpha = config.alpha,
        climate_var = var_summary.climate_var,
        "pipeline complete"
    );

    Ok(PipelineResult {
        scenarios,
        var_summary,
    })
}
