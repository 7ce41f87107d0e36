//! Sector-level scenario uplifts.

use super::Scenario;
use serde::{Deserialize, Serialize};

/// A relative PD/LGD adjustment pair for one sector under one scenario.
///
/// Both values are fractional deltas: +0.20 means "+20% relative to the
/// baseline". Negative values are allowed and model favorable scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpliftPair {
    /// Relative PD uplift.
    pub pd: f64,
    /// Relative LGD uplift.
    pub lgd: f64,
}

impl UpliftPair {
    /// Creates an uplift pair.
    #[must_use]
    pub fn new(pd: f64, lgd: f64) -> Self {
        Self { pd, lgd }
    }
}

/// Scenario uplifts for one sector.
///
/// Keyed by `sector`; loaded once, immutable, looked up during scenario
/// application. Every sector present in the loan set must have an entry,
/// checked in aggregate by the scenario applier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorUplift {
    /// Sector name; the join key against [`super::Loan::sector`].
    pub sector: String,

    /// Uplifts under the optimistic scenario.
    pub optimistic: UpliftPair,

    /// Uplifts under the neutral scenario.
    pub neutral: UpliftPair,

    /// Uplifts under the pessimistic scenario.
    pub pessimistic: UpliftPair,
}

impl SectorUplift {
    /// Creates a sector uplift row.
    #[must_use]
    pub fn new(
        sector: impl Into<String>,
        optimistic: UpliftPair,
        neutral: UpliftPair,
        pessimistic: UpliftPair,
    ) -> Self {
        Self {
            sector: sector.into(),
            optimistic,
            neutral,
            pessimistic,
        }
    }

    /// Returns the uplift pair for the given scenario.
    #[must_use]
    pub fn for_scenario(&self, scenario: Scenario) -> UpliftPair {
        match scenario {
            Scenario::Optimistic => self.optimistic,
            Scenario::Neutral => self.neutral,
            Scenario::Pessimistic => self.pessimistic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn energy() -> SectorUplift {
        SectorUplift::new(
            "Energy",
            UpliftPair::new(-0.05, 0.0),
            UpliftPair::new(0.20, 0.05),
            UpliftPair::new(0.50, 0.10),
        )
    }

    #[test]
    fn test_lookup_by_scenario() {
        let u = energy();
        assert_eq!(u.for_scenario(Scenario::Optimistic).pd, -0.05);
        assert_eq!(u.for_scenario(Scenario::Pessimistic).lgd, 0.10);
    }

    #[test]
    fn test_negative_uplifts_allowed() {
        let u = energy();
        assert!(u.for_scenario(Scenario::Optimistic).pd < 0.0);
    }
}
