//! Cross-scenario risk summary ("Climate VaR").
//!
//! The quantile is taken across the named scenario-level total losses,
//! not over a loss distribution of random draws.

use cstress_core::{Scenario, StressConfig};
use serde::{Deserialize, Serialize};

/// Total projected loss for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioLoss {
    /// The scenario.
    pub scenario: Scenario,
    /// Total projected loss across the portfolio, EUR.
    pub total_loss_projected: f64,
}

/// Cross-scenario summary: per-scenario totals plus the loss quantile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateVarSummary {
    /// One entry per scenario, in evaluation order.
    pub scenario_losses: Vec<ScenarioLoss>,
    /// Confidence level of the quantile.
    pub alpha: f64,
    /// The alpha-quantile of the scenario totals.
    pub climate_var: f64,
}

impl ClimateVarSummary {
    /// Computes the summary from per-scenario totals.
    #[must_use]
    pub fn from_losses(scenario_losses: Vec<ScenarioLoss>, config: &StressConfig) -> Self {
        let totals: Vec<f64> = scenario_losses
            .iter()
            .map(|s| s.total_loss_projected)
            .collect();
        Self {
            scenario_losses,
            alpha: config.alpha,
            climate_var: climate_var(&totals, config.alpha),
        }
    }

    /// Label of the synthetic quantile row, e.g. `ClimateVaR_95%`.
    #[must_use]
    pub fn var_label(&self) -> String {
        format!("ClimateVaR_{}%", (self.alpha * 100.0).round() as i64)
    }

    /// Flattens the summary into `(label, value)` output rows: one per
    /// scenario plus the quantile row.
    #[must_use]
    pub fn rows(&self) -> Vec<(String, f64)> {
        let mut rows: Vec<(String, f64)> = self
            .scenario_losses
            .iter()
            .map(|s| (s.scenario.to_string(), s.total_loss_projected))
            .collect();
        rows.push((self.var_label(), self.climate_var));
        rows
    }
}

/// Alpha-quantile of a loss sequence, with linear interpolation between
/// order statistics.
///
/// For a sorted sequence of `n` values the quantile at fraction `p` is
/// interpolated between the two nearest ranks at position `p * (n - 1)`.
/// Any numeric input is accepted, including all-equal or negative values;
/// an empty slice yields 0.0.
#[must_use]
pub fn climate_var(losses: &[f64], alpha: f64) -> f64 {
    if losses.is_empty() {
        return 0.0;
    }

    let mut sorted = losses.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = alpha.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_spec_percentile_example() {
        // rank = 0.95 * 2 = 1.9 => 200 + 0.9 * (300 - 200) = 290
        assert_relative_eq!(climate_var(&[100.0, 200.0, 300.0], 0.95), 290.0);
    }

    #[test]
    fn test_unsorted_input() {
        assert_relative_eq!(climate_var(&[300.0, 100.0, 200.0], 0.95), 290.0);
    }

    #[test]
    fn test_median() {
        assert_relative_eq!(climate_var(&[100.0, 200.0, 300.0], 0.5), 200.0);
    }

    #[test]
    fn test_extremes() {
        let losses = [100.0, 200.0, 300.0];
        assert_relative_eq!(climate_var(&losses, 0.0), 100.0);
        assert_relative_eq!(climate_var(&losses, 1.0), 300.0);
    }

    #[test]
    fn test_all_equal_and_negative_accepted() {
        assert_relative_eq!(climate_var(&[5.0, 5.0, 5.0], 0.95), 5.0);
        assert_relative_eq!(climate_var(&[-10.0, -20.0, -30.0], 0.5), -20.0);
    }

    #[test]
    fn test_single_value() {
        assert_relative_eq!(climate_var(&[42.0], 0.95), 42.0);
    }

    #[test]
    fn test_empty_slice() {
        assert_eq!(climate_var(&[], 0.95), 0.0);
    }

    #[test]
    fn test_summary_rows_include_quantile_label() {
        let losses = vec![
            ScenarioLoss {
                scenario: Scenario::Optimistic,
                total_loss_projected: 100.0,
            },
            ScenarioLoss {
                scenario: Scenario::Neutral,
                total_loss_projected: 200.0,
            },
            ScenarioLoss {
                scenario: Scenario::Pessimistic,
                total_loss_projected: 300.0,
            },
        ];
        let summary = ClimateVarSummary::from_losses(losses, &StressConfig::default());
        let rows = summary.rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].0, "Optimistic");
        assert_eq!(rows[3].0, "ClimateVaR_95%");
        assert_relative_eq!(rows[3].1, 290.0);
    }
}
