//! Dimension-level aggregation of scenario results.

use crate::apply::{ScenarioResult, StressedLoan};
use cstress_core::Scenario;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A grouping dimension for scenario summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Group by borrower sector.
    Sector,
    /// Group by borrower country.
    Country,
    /// Group by borrower region.
    Region,
}

impl Dimension {
    /// All grouping dimensions, in output order.
    pub const ALL: [Dimension; 3] = [Self::Sector, Self::Country, Self::Region];

    /// Returns the lowercase dimension name used in output file names.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sector => "sector",
            Self::Country => "country",
            Self::Region => "region",
        }
    }

    fn key<'a>(&self, row: &'a StressedLoan) -> &'a str {
        match self {
            Self::Sector => &row.sector,
            Self::Country => &row.country,
            Self::Region => &row.region,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated metrics for one group of loans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMetrics {
    /// Value of the grouping dimension (empty string is its own group).
    pub key: String,
    /// Number of loans in the group.
    pub n_loans: usize,
    /// Summed exposure, EUR.
    pub ead_eur: f64,
    /// Summed projected loss, EUR.
    pub loss_projected: f64,
    /// Unweighted mean baseline PD.
    pub avg_pd_base: f64,
    /// Unweighted mean stressed PD.
    pub avg_pd_stress: f64,
    /// Unweighted mean baseline LGD.
    pub avg_lgd: f64,
    /// Unweighted mean stressed LGD.
    pub avg_lgd_stress: f64,
    /// Loss as a fraction of exposure; 0.0 when the group has no exposure.
    pub loss_rate_on_ead: f64,
}

/// Summary of one scenario result along one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionSummary {
    /// The scenario the rows were derived from.
    pub scenario: Scenario,
    /// The grouping dimension.
    pub dimension: Dimension,
    /// One row per distinct dimension value, sorted by loss descending
    /// (ties broken by key ascending).
    pub groups: Vec<GroupMetrics>,
}

impl DimensionSummary {
    /// Returns the metrics for a specific group key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&GroupMetrics> {
        self.groups.iter().find(|g| g.key == key)
    }
}

/// Groups a scenario result by a dimension and computes summary statistics.
///
/// Grouping keys are the raw dimension strings; an empty or unknown
/// category forms its own group rather than being dropped. Per group the
/// summary carries the loan count, summed exposure and loss, unweighted
/// means of the baseline and stressed risk parameters, and the loss rate
/// on exposure (zero for zero-exposure groups, never a division fault).
#[must_use]
pub fn summarize(result: &ScenarioResult, dimension: Dimension) -> DimensionSummary {
    let mut grouped: HashMap<&str, Vec<&StressedLoan>> = HashMap::new();
    for row in &result.rows {
        grouped.entry(dimension.key(row)).or_default().push(row);
    }

    let mut groups: Vec<GroupMetrics> = grouped
        .into_iter()
        .map(|(key, rows)| {
            let n = rows.len();
            let n_f = n as f64;
            let ead_eur: f64 = rows.iter().map(|r| r.ead_eur).sum();
            let loss_projected: f64 = rows.iter().map(|r| r.loss_projected).sum();

            GroupMetrics {
                key: key.to_string(),
                n_loans: n,
                ead_eur,
                loss_projected,
                avg_pd_base: rows.iter().map(|r| r.pd_base).sum::<f64>() / n_f,
                avg_pd_stress: rows.iter().map(|r| r.pd_stress).sum::<f64>() / n_f,
                avg_lgd: rows.iter().map(|r| r.lgd).sum::<f64>() / n_f,
                avg_lgd_stress: rows.iter().map(|r| r.lgd_stress).sum::<f64>() / n_f,
                loss_rate_on_ead: if ead_eur > 0.0 {
                    loss_projected / ead_eur
                } else {
                    0.0
                },
            }
        })
        .collect();

    // Deterministic order: loss descending, then key ascending.
    groups.sort_by(|a, b| {
        b.loss_projected
            .partial_cmp(&a.loss_projected)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.key.cmp(&b.key))
    });

    DimensionSummary {
        scenario: result.scenario,
        dimension,
        groups,
    }
}
