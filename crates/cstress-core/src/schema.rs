//! Input table schemas.
//!
//! The engine consumes already-typed tables; the file boundary uses these
//! definitions to verify headers before parsing any row. A missing-column
//! check reports every absent column in one error.

use crate::error::{StressError, StressResult};
use crate::types::Scenario;

/// Name of the portfolio input table.
pub const PORTFOLIO_TABLE: &str = "Portfolio";

/// Name of the uplift input table.
pub const UPLIFTS_TABLE: &str = "Scenario_Uplifts";

/// Required columns of the portfolio table, in canonical order.
pub const PORTFOLIO_COLUMNS: [&str; 8] = [
    "loan_id",
    "sector",
    "country",
    "region",
    "EAD_EUR",
    "PD_base",
    "LGD",
    "maturity_years",
];

/// Required columns of the uplift table, in canonical order:
/// `sector`, then a PD and an LGD uplift column per scenario.
#[must_use]
pub fn uplift_columns() -> Vec<String> {
    let mut cols = vec!["sector".to_string()];
    cols.extend(Scenario::ALL.iter().map(|s| s.pd_uplift_column()));
    cols.extend(Scenario::ALL.iter().map(|s| s.lgd_uplift_column()));
    cols
}

/// Verifies that `header` contains every column in `required`.
///
/// # Errors
///
/// Returns [`StressError::Schema`] naming all missing columns at once.
pub fn check_columns(table: &str, header: &[String], required: &[String]) -> StressResult<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|c| !header.iter().any(|h| h == *c))
        .cloned()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(StressError::schema(table, missing))
    }
}
