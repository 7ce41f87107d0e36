//! Green / strategic proxy indicators.
//!
//! Simple ratio computations over the loan table, used as pedagogical
//! proxies rather than real taxonomy alignment measures.

use cstress_core::Loan;

/// Share of exposure lent to renewable sectors.
///
/// Proxy: sectors whose name contains "renewable" (case-insensitive).
/// Returns 0.0 for an empty or zero-exposure portfolio.
#[must_use]
pub fn green_financing_share(loans: &[Loan]) -> f64 {
    let total: f64 = loans.iter().map(|l| l.ead_eur).sum();
    if total == 0.0 {
        return 0.0;
    }

    let green: f64 = loans
        .iter()
        .filter(|l| l.sector.to_lowercase().contains("renewable"))
        .map(|l| l.ead_eur)
        .sum();

    green / total
}

/// Share of exposure in long-dated loans.
///
/// Proxy: maturity above 10 years stands in for green bond financing.
#[must_use]
pub fn green_bond_share(loans: &[Loan]) -> f64 {
    let total: f64 = loans.iter().map(|l| l.ead_eur).sum();
    if total == 0.0 {
        return 0.0;
    }

    let long_dated: f64 = loans
        .iter()
        .filter(|l| l.maturity_years > 10.0)
        .map(|l| l.ead_eur)
        .sum();

    long_dated / total
}

/// Share of clients proxied as SBTi-aligned.
///
/// Proxy: baseline PD below 2%. Counts clients, not exposure.
#[must_use]
pub fn sbti_client_share(loans: &[Loan]) -> f64 {
    if loans.is_empty() {
        return 0.0;
    }

    let aligned = loans.iter().filter(|l| l.pd_base < 0.02).count();
    aligned as f64 / loans.len() as f64
}
