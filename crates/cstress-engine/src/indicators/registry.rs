//! Indicator registry.
//!
//! A catalog of stable indicator names mapped to statically-typed
//! portfolio functions. The catalog declares more names than are
//! implemented; unimplemented names are recorded as missing instead of
//! failing lookups at a distance. The registry is constructed once by
//! the caller and passed to whatever needs indicator lookup - there is
//! no ambient global state.

use super::green;
use cstress_core::Loan;

/// A portfolio-level scalar indicator.
pub type IndicatorFn = fn(&[Loan]) -> f64;

/// An entry of the indicator catalog.
#[derive(Debug, Clone)]
pub struct IndicatorEntry {
    /// Stable indicator name, e.g. `green_financing_share`.
    pub name: &'static str,
    /// Indicator group, e.g. `green`.
    pub group: &'static str,
    /// The function, if implemented.
    pub func: Option<IndicatorFn>,
}

/// Explicit name-to-function indicator registry.
#[derive(Debug, Clone, Default)]
pub struct IndicatorRegistry {
    entries: Vec<IndicatorEntry>,
}

impl IndicatorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the standard catalog.
    ///
    /// Declares the full indicator name set across the emissions,
    /// transition-risk, physical-risk, climate-financial-risk, and green
    /// groups; registers the implemented green trio and records the rest
    /// as missing.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();

        // Emissions (1-4)
        registry.declare_missing("emissions", "financed_emissions");
        registry.declare_missing("emissions", "portfolio_carbon_intensity");
        registry.declare_missing("emissions", "high_emitter_counterparty_share");
        registry.declare_missing("emissions", "portfolio_alignment_itr");

        // Transition risk (5-8)
        registry.declare_missing("transition_risk", "sensitive_sector_exposure");
        registry.declare_missing("transition_risk", "non_aligned_loan_share");
        registry.declare_missing("transition_risk", "carbon_price_sensitivity");
        registry.declare_missing("transition_risk", "transition_risk_score");

        // Physical risk (9-11)
        registry.declare_missing("physical_risk", "physical_risk_geo_exposure");
        registry.declare_missing("physical_risk", "high_physical_risk_asset_value");
        registry.declare_missing("physical_risk", "counterparty_climate_resilience_index");

        // Climate-related financial risk (12-14): computed by the stress
        // pipeline over (loans, uplifts, config), so they do not fit the
        // portfolio-scalar signature and stay unregistered here.
        registry.declare_missing("climate_financial_risk", "projected_losses_climate_stress");
        registry.declare_missing("climate_financial_risk", "climate_adjusted_pd");
        registry.declare_missing("climate_financial_risk", "climate_var");

        // Green / strategic (15-17)
        registry.register("green", "green_financing_share", green::green_financing_share);
        registry.register("green", "green_bond_share", green::green_bond_share);
        registry.register("green", "sbti_client_share", green::sbti_client_share);

        registry
    }

    /// Registers an implemented indicator under a stable name.
    pub fn register(&mut self, group: &'static str, name: &'static str, func: IndicatorFn) {
        self.entries.push(IndicatorEntry {
            name,
            group,
            func: Some(func),
        });
    }

    /// Declares a cataloged indicator without an implementation.
    pub fn declare_missing(&mut self, group: &'static str, name: &'static str) {
        self.entries.push(IndicatorEntry {
            name,
            group,
            func: None,
        });
    }

    /// Looks up an implemented indicator by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<IndicatorFn> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .and_then(|e| e.func)
    }

    /// All cataloged entries, in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[IndicatorEntry] {
        &self.entries
    }

    /// Names of implemented indicators.
    #[must_use]
    pub fn available(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|e| e.func.is_some())
            .map(|e| e.name)
            .collect()
    }

    /// Names of declared-but-unimplemented indicators, as
    /// `group:name` keys.
    #[must_use]
    pub fn missing(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.func.is_none())
            .map(|e| format!("{}:{}", e.group, e.name))
            .collect()
    }

    /// Evaluates every implemented indicator over the portfolio.
    #[must_use]
    pub fn evaluate_all(&self, loans: &[Loan]) -> Vec<(&'static str, f64)> {
        self.entries
            .iter()
            .filter_map(|e| e.func.map(|f| (e.name, f(loans))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_catalog_size() {
        let registry = IndicatorRegistry::standard();
        assert_eq!(registry.entries().len(), 17);
        assert_eq!(registry.available().len(), 3);
        assert_eq!(registry.missing().len(), 14);
    }

    #[test]
    fn test_lookup_implemented() {
        let registry = IndicatorRegistry::standard();
        let f = registry.get("sbti_client_share").unwrap();
        let loans = vec![Loan::new("L1", "Energy", "FR", "EU", 100.0, 0.01, 0.4, 5.0)];
        assert_relative_eq!(f(&loans), 1.0);
    }

    #[test]
    fn test_lookup_missing_is_none_not_error() {
        let registry = IndicatorRegistry::standard();
        assert!(registry.get("financed_emissions").is_none());
        assert!(registry.get("no_such_indicator").is_none());
    }

    #[test]
    fn test_missing_keys_carry_group() {
        let registry = IndicatorRegistry::standard();
        assert!(registry
            .missing()
            .contains(&"emissions:financed_emissions".to_string()));
    }

    #[test]
    fn test_evaluate_all_runs_only_implemented() {
        let registry = IndicatorRegistry::standard();
        let values = registry.evaluate_all(&[]);
        assert_eq!(values.len(), 3);
        assert!(values.iter().all(|(_, v)| *v == 0.0));
    }
}
