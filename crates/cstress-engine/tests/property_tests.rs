//! Property tests for stress-engine invariants.
//!
//! These tests verify key properties that should always hold:
//! - Stressed parameters stay within their clipping bounds
//! - dPD is never negative
//! - The loss identity holds row by row
//! - Group sums conserve loan-level totals
//! - The quantile matches the linear-interpolation definition

use approx::assert_relative_eq;
use cstress_engine::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Deterministic pseudo-random portfolio spanning uplift signs and
/// out-of-range baselines.
fn generate_loans(n: usize) -> Vec<Loan> {
    let sectors = ["Energy", "Utilities", "Agriculture", "Transport"];
    let countries = ["FR", "DE", "ES", "US", ""];
    let regions = ["Europe", "NorthAm"];

    (0..n)
        .map(|i| {
            // Simple LCG so the fixture is reproducible without rand.
            let x = (i as u64).wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let u = |shift: u32| ((x >> shift) % 1000) as f64 / 1000.0;

            Loan::new(
                format!("LN-{i:04}"),
                sectors[i % sectors.len()],
                countries[i % countries.len()],
                regions[i % regions.len()],
                u(5) * 10_000_000.0,
                u(17) * 1.5,  // deliberately allows PD_base > 1
                u(29) * 1.2,  // deliberately allows LGD > 1
                u(41) * 20.0,
            )
        })
        .collect()
}

fn generate_uplifts() -> Vec<SectorUplift> {
    vec![
        SectorUplift::new(
            "Energy",
            UpliftPair::new(-0.80, -0.50),
            UpliftPair::new(0.25, 0.05),
            UpliftPair::new(3.00, 0.90),
        ),
        SectorUplift::new(
            "Utilities",
            UpliftPair::new(-1.50, 0.00), // uplift below -100%
            UpliftPair::new(0.15, 0.03),
            UpliftPair::new(0.35, 0.08),
        ),
        SectorUplift::new(
            "Agriculture",
            UpliftPair::new(0.00, 0.00),
            UpliftPair::new(0.20, 0.04),
            UpliftPair::new(0.45, 2.00),
        ),
        SectorUplift::new(
            "Transport",
            UpliftPair::new(0.00, -2.00),
            UpliftPair::new(0.18, 0.04),
            UpliftPair::new(0.40, 0.09),
        ),
    ]
}

// =============================================================================
// CLIPPING AND FLOOR INVARIANTS
// =============================================================================

#[test]
fn test_stressed_parameters_within_bounds() {
    let loans = generate_loans(200);
    let uplifts = generate_uplifts();
    let config = StressConfig::default();

    for scenario in Scenario::ALL {
        let result = apply_scenario(&loans, &uplifts, scenario, &config).unwrap();
        for row in &result.rows {
            assert!(row.pd_stress >= 0.0, "pd_stress below zero: {}", row.pd_stress);
            assert!(
                row.pd_stress <= config.cap_pd,
                "pd_stress above cap: {}",
                row.pd_stress
            );
            assert!((0.0..=1.0).contains(&row.lgd_stress));
        }
    }
}

#[test]
fn test_d_pd_never_negative() {
    let loans = generate_loans(200);
    let uplifts = generate_uplifts();

    for scenario in Scenario::ALL {
        let result =
            apply_scenario(&loans, &uplifts, scenario, &StressConfig::default()).unwrap();
        assert!(result.rows.iter().all(|r| r.d_pd >= 0.0));
    }
}

#[test]
fn test_loss_identity_holds_per_row() {
    let loans = generate_loans(200);
    let uplifts = generate_uplifts();

    for scenario in Scenario::ALL {
        let result =
            apply_scenario(&loans, &uplifts, scenario, &StressConfig::default()).unwrap();
        for row in &result.rows {
            assert_eq!(row.loss_projected, row.ead_eur * row.d_pd * row.lgd_stress);
        }
    }
}

#[test]
fn test_tight_cap_respected() {
    let loans = generate_loans(100);
    let uplifts = generate_uplifts();
    let config = StressConfig::new().with_cap_pd(0.10);

    let result = apply_scenario(&loans, &uplifts, Scenario::Pessimistic, &config).unwrap();
    assert!(result.rows.iter().all(|r| r.pd_stress <= 0.10));
}

// =============================================================================
// AGGREGATION INVARIANTS
// =============================================================================

#[test]
fn test_group_sums_conserve_totals() {
    let loans = generate_loans(200);
    let uplifts = generate_uplifts();
    let result =
        apply_scenario(&loans, &uplifts, Scenario::Pessimistic, &StressConfig::default())
            .unwrap();

    for dim in Dimension::ALL {
        let summary = summarize(&result, dim);

        let n: usize = summary.groups.iter().map(|g| g.n_loans).sum();
        assert_eq!(n, result.rows.len());

        let loss: f64 = summary.groups.iter().map(|g| g.loss_projected).sum();
        assert_relative_eq!(loss, result.total_loss(), epsilon = 1e-6);

        let ead: f64 = summary.groups.iter().map(|g| g.ead_eur).sum();
        assert_relative_eq!(ead, result.total_ead(), epsilon = 1e-6);
    }
}

#[test]
fn test_loss_rates_always_finite() {
    let mut loans = generate_loans(50);
    // Force a zero-exposure group.
    loans.push(Loan::new("Z1", "Energy", "ZZ", "Europe", 0.0, 0.5, 0.5, 1.0));

    let result =
        apply_scenario(&loans, &generate_uplifts(), Scenario::Pessimistic, &StressConfig::default())
            .unwrap();
    for dim in Dimension::ALL {
        for group in &summarize(&result, dim).groups {
            assert!(group.loss_rate_on_ead.is_finite());
            if group.ead_eur == 0.0 {
                assert_eq!(group.loss_rate_on_ead, 0.0);
            }
        }
    }
}

// =============================================================================
// DETERMINISM
// =============================================================================

#[test]
fn test_repeated_runs_identical() {
    let loans = generate_loans(100);
    let uplifts = generate_uplifts();
    let config = StressConfig::default();

    let first = run_pipeline(&loans, &uplifts, &config).unwrap();
    let second = run_pipeline(&loans, &uplifts, &config).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// QUANTILE DEFINITION
// =============================================================================

#[test]
fn test_quantile_matches_linear_interpolation() {
    let losses = [100.0, 200.0, 300.0];
    assert_relative_eq!(climate_var(&losses, 0.95), 290.0, epsilon = 1e-12);
    assert_relative_eq!(climate_var(&losses, 0.25), 150.0, epsilon = 1e-12);
    assert_relative_eq!(climate_var(&losses, 0.75), 250.0, epsilon = 1e-12);
}

#[test]
fn test_quantile_monotone_in_alpha() {
    let losses = [12.0, 7.5, 0.0, 42.0, 3.3];
    let mut prev = f64::MIN;
    for i in 0..=20 {
        let alpha = f64::from(i) / 20.0;
        let q = climate_var(&losses, alpha);
        assert!(q >= prev);
        prev = q;
    }
}

#[test]
fn test_quantile_bounded_by_order_statistics() {
    let losses = [5.0, -3.0, 12.0, 9.0];
    for i in 0..=10 {
        let alpha = f64::from(i) / 10.0;
        let q = climate_var(&losses, alpha);
        assert!(q >= -3.0);
        assert!(q <= 12.0);
    }
}
