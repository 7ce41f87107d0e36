//! The fixed climate scenario enumeration.

use crate::error::StressError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named climate narrative scenario.
///
/// The set is closed: every run evaluates exactly these three scenarios,
/// in this order. Uplift tables carry one PD/LGD uplift pair per scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// Orderly transition; mild or favorable uplifts.
    Optimistic,
    /// Middle-of-the-road transition.
    Neutral,
    /// Disorderly transition; the severe stress case.
    Pessimistic,
}

impl Scenario {
    /// All scenarios in their fixed evaluation order.
    pub const ALL: [Scenario; 3] = [Self::Optimistic, Self::Neutral, Self::Pessimistic];

    /// Returns the scenario name used in column headers and output labels.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Optimistic => "Optimistic",
            Self::Neutral => "Neutral",
            Self::Pessimistic => "Pessimistic",
        }
    }

    /// Column name carrying this scenario's PD uplift in the uplift table.
    #[must_use]
    pub fn pd_uplift_column(&self) -> String {
        format!("pd_uplift_{}", self.as_str())
    }

    /// Column name carrying this scenario's LGD uplift in the uplift table.
    #[must_use]
    pub fn lgd_uplift_column(&self) -> String {
        format!("lgd_uplift_{}", self.as_str())
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = StressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Optimistic" => Ok(Self::Optimistic),
            "Neutral" => Ok(Self::Neutral),
            "Pessimistic" => Ok(Self::Pessimistic),
            other => Err(StressError::unknown_scenario(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order() {
        assert_eq!(
            Scenario::ALL,
            [
                Scenario::Optimistic,
                Scenario::Neutral,
                Scenario::Pessimistic
            ]
        );
    }

    #[test]
    fn test_roundtrip_names() {
        for sc in Scenario::ALL {
            assert_eq!(sc.as_str().parse::<Scenario>().unwrap(), sc);
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = "Severe".parse::<Scenario>().unwrap_err();
        assert!(err.to_string().contains("Severe"));
    }

    #[test]
    fn test_uplift_column_names() {
        assert_eq!(
            Scenario::Pessimistic.pd_uplift_column(),
            "pd_uplift_Pessimistic"
        );
        assert_eq!(Scenario::Neutral.lgd_uplift_column(), "lgd_uplift_Neutral");
    }
}
