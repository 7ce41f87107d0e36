//! Scenario application.
//!
//! Joins sector uplifts onto the loan set and computes stressed PD/LGD
//! and projected losses for one scenario.

use cstress_core::{Loan, Scenario, SectorUplift, StressConfig, StressError, StressResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One loan after stress application.
///
/// Carries the loan's identity columns, the uplifts that were applied,
/// and the derived stress columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressedLoan {
    /// Loan identifier.
    pub loan_id: String,
    /// Borrower sector.
    pub sector: String,
    /// Borrower country.
    pub country: String,
    /// Borrower region.
    pub region: String,
    /// Exposure at default, EUR.
    pub ead_eur: f64,
    /// Baseline annual PD.
    pub pd_base: f64,
    /// Stressed PD, clipped to `[0, cap_pd]`.
    pub pd_stress: f64,
    /// Climate-attributable PD increase, floored at zero.
    pub d_pd: f64,
    /// Baseline LGD.
    pub lgd: f64,
    /// Stressed LGD, clipped to `[0, 1]`.
    pub lgd_stress: f64,
    /// Remaining maturity in years.
    pub maturity_years: f64,
    /// Relative PD uplift that was applied.
    pub pd_uplift: f64,
    /// Relative LGD uplift that was applied.
    pub lgd_uplift: f64,
    /// Projected loss: `ead_eur * d_pd * lgd_stress`.
    pub loss_projected: f64,
}

/// Result of applying one scenario to the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// The scenario that was applied.
    pub scenario: Scenario,
    /// One row per loan, in portfolio order.
    pub rows: Vec<StressedLoan>,
}

impl ScenarioResult {
    /// Total projected loss across all loans.
    #[must_use]
    pub fn total_loss(&self) -> f64 {
        self.rows.iter().map(|r| r.loss_projected).sum()
    }

    /// Total exposure across all loans.
    #[must_use]
    pub fn total_ead(&self) -> f64 {
        self.rows.iter().map(|r| r.ead_eur).sum()
    }
}

/// Applies one scenario's sector uplifts to the portfolio.
///
/// This is a left join of loans onto uplifts keyed by sector, followed by
/// the per-loan stress transform:
///
/// ```text
/// PD_stress  = clip(PD_base * (1 + pd_uplift), 0, cap_pd)
/// LGD_stress = clip(LGD * (1 + lgd_uplift), 0, 1)
/// dPD        = max(PD_stress - PD_base, 0)
/// loss       = EAD * dPD * LGD_stress
/// ```
///
/// Pure function: the inputs are never mutated and the same inputs always
/// produce an identical result.
///
/// # Errors
///
/// Returns [`StressError::MissingUplift`] if any portfolio sector has no
/// uplift entry; the check runs after the join and the error enumerates
/// every distinct unmatched sector, not just the first.
pub fn apply_scenario(
    loans: &[Loan],
    uplifts: &[SectorUplift],
    scenario: Scenario,
    config: &StressConfig,
) -> StressResult<ScenarioResult> {
    let by_sector: HashMap<&str, &SectorUplift> =
        uplifts.iter().map(|u| (u.sector.as_str(), u)).collect();

    // Aggregate coverage check so the error names every offending sector.
    let mut unmatched: Vec<String> = Vec::new();
    for loan in loans {
        if !by_sector.contains_key(loan.sector.as_str())
            && !unmatched.contains(&loan.sector)
        {
            unmatched.push(loan.sector.clone());
        }
    }
    if !unmatched.is_empty() {
        return Err(StressError::missing_uplift(scenario.as_str(), unmatched));
    }

    let rows = loans
        .iter()
        .map(|loan| {
            let pair = by_sector[loan.sector.as_str()].for_scenario(scenario);

            let pd_stress = (loan.pd_base * (1.0 + pair.pd)).max(0.0).min(config.cap_pd);
            let lgd_stress = (loan.lgd * (1.0 + pair.lgd)).max(0.0).min(1.0);
            // Only the climate-driven increase contributes to loss;
            // favorable scenarios floor at zero rather than going negative.
            let d_pd = (pd_stress - loan.pd_base).max(0.0);
            let loss_projected = loan.ead_eur * d_pd * lgd_stress;

            StressedLoan {
                loan_id: loan.loan_id.clone(),
                sector: loan.sector.clone(),
                country: loan.country.clone(),
                region: loan.region.clone(),
                ead_eur: loan.ead_eur,
                pd_base: loan.pd_base,
                pd_stress,
                d_pd,
                lgd: loan.lgd,
                lgd_stress,
                maturity_years: loan.maturity_years,
                pd_uplift: pair.pd,
                lgd_uplift: pair.lgd,
                loss_projected,
            }
        })
        .collect();

    Ok(ScenarioResult { scenario, rows })
}
