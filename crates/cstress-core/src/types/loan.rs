//! Loan-level portfolio records.

use serde::{Deserialize, Serialize};

/// One loan of the portfolio.
///
/// Loaded once, immutable thereafter; every scenario run reads the same
/// loan set and produces a derived copy. `loan_id` uniqueness is not
/// enforced - duplicate ids simply aggregate together.
///
/// Baseline `pd_base` and `lgd` are conceptually in [0, 1] but are not
/// validated at load time; bounds are enforced later by clipping the
/// stressed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    /// Opaque loan identifier.
    pub loan_id: String,

    /// Borrower sector; the join key for scenario uplifts.
    pub sector: String,

    /// Borrower country.
    pub country: String,

    /// Borrower region.
    pub region: String,

    /// Exposure at default, EUR.
    pub ead_eur: f64,

    /// Baseline annual probability of default (fraction).
    pub pd_base: f64,

    /// Baseline loss given default (fraction).
    pub lgd: f64,

    /// Remaining maturity in years.
    pub maturity_years: f64,
}

impl Loan {
    /// Creates a loan record.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        loan_id: impl Into<String>,
        sector: impl Into<String>,
        country: impl Into<String>,
        region: impl Into<String>,
        ead_eur: f64,
        pd_base: f64,
        lgd: f64,
        maturity_years: f64,
    ) -> Self {
        Self {
            loan_id: loan_id.into(),
            sector: sector.into(),
            country: country.into(),
            region: region.into(),
            ead_eur,
            pd_base,
            lgd,
            maturity_years,
        }
    }
}

/// Sums exposure over a loan slice.
#[must_use]
pub fn total_ead(loans: &[Loan]) -> f64 {
    loans.iter().map(|l| l.ead_eur).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_construction() {
        let loan = Loan::new("L1", "Energy", "FR", "EU", 1000.0, 0.02, 0.45, 5.0);
        assert_eq!(loan.sector, "Energy");
        assert_eq!(loan.ead_eur, 1000.0);
    }

    #[test]
    fn test_total_ead() {
        let loans = vec![
            Loan::new("L1", "Energy", "FR", "EU", 1000.0, 0.02, 0.45, 5.0),
            Loan::new("L2", "Utilities", "DE", "EU", 500.0, 0.01, 0.40, 3.0),
        ];
        assert_eq!(total_ead(&loans), 1500.0);
    }

    #[test]
    fn test_out_of_range_baselines_accepted() {
        // Permissive by contract: bounds are only enforced when stressing.
        let loan = Loan::new("L1", "Energy", "FR", "EU", 1000.0, 1.4, -0.1, 5.0);
        assert_eq!(loan.pd_base, 1.4);
        assert_eq!(loan.lgd, -0.1);
    }
}
