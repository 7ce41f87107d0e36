//! Error types for the stress-test data model.
//!
//! All errors are fatal: the pipeline either produces a scenario's full
//! result set or aborts before writing anything for it. There is no retry
//! and no partial-success mode.

use thiserror::Error;

/// Result type for stress-test operations.
pub type StressResult<T> = Result<T, StressError>;

/// Errors that can occur while loading inputs or applying scenarios.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StressError {
    /// Required columns absent from an input table.
    #[error("Missing columns in {table}: {columns:?}")]
    Schema {
        /// The input table name (e.g. "Portfolio").
        table: String,
        /// Every required column that was absent.
        columns: Vec<String>,
    },

    /// A column value could not be coerced to its required type.
    #[error("Cannot parse {table}.{column} at row {row}: '{value}' is not numeric")]
    TypeConversion {
        /// The input table name.
        table: String,
        /// The column whose value failed to parse.
        column: String,
        /// One-based data row index (excluding the header).
        row: usize,
        /// The offending raw value.
        value: String,
    },

    /// A requested scenario name is outside the fixed enumeration.
    #[error("Unknown scenario '{name}'. Must be one of: Optimistic, Neutral, Pessimistic")]
    UnknownScenario {
        /// The unrecognized scenario name.
        name: String,
    },

    /// Sectors present in the portfolio have no uplift for the scenario.
    #[error("Missing uplifts for sectors: {sectors:?} (scenario {scenario})")]
    MissingUplift {
        /// The scenario being applied.
        scenario: String,
        /// Every distinct portfolio sector without an uplift entry.
        sectors: Vec<String>,
    },
}

impl StressError {
    /// Create a schema error for a table with missing columns.
    #[must_use]
    pub fn schema(table: impl Into<String>, columns: Vec<String>) -> Self {
        Self::Schema {
            table: table.into(),
            columns,
        }
    }

    /// Create a type conversion error with full cell context.
    #[must_use]
    pub fn type_conversion(
        table: impl Into<String>,
        column: impl Into<String>,
        row: usize,
        value: impl Into<String>,
    ) -> Self {
        Self::TypeConversion {
            table: table.into(),
            column: column.into(),
            row,
            value: value.into(),
        }
    }

    /// Create an unknown scenario error.
    #[must_use]
    pub fn unknown_scenario(name: impl Into<String>) -> Self {
        Self::UnknownScenario { name: name.into() }
    }

    /// Create a missing uplift error listing every offending sector.
    #[must_use]
    pub fn missing_uplift(scenario: impl Into<String>, sectors: Vec<String>) -> Self {
        Self::MissingUplift {
            scenario: scenario.into(),
            sectors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_names_all_columns() {
        let err = StressError::schema(
            "Portfolio",
            vec!["EAD_EUR".to_string(), "PD_base".to_string()],
        );
        let msg = err.to_string();
        assert!(msg.contains("Portfolio"));
        assert!(msg.contains("EAD_EUR"));
        assert!(msg.contains("PD_base"));
    }

    #[test]
    fn test_type_conversion_carries_cell_context() {
        let err = StressError::type_conversion("Portfolio", "LGD", 7, "n/a");
        let msg = err.to_string();
        assert!(msg.contains("LGD"));
        assert!(msg.contains("row 7"));
        assert!(msg.contains("n/a"));
    }

    #[test]
    fn test_missing_uplift_enumerates_sectors() {
        let err = StressError::missing_uplift(
            "Pessimistic",
            vec!["Agriculture".to_string(), "Shipping".to_string()],
        );
        let msg = err.to_string();
        assert!(msg.contains("Agriculture"));
        assert!(msg.contains("Shipping"));
        assert!(msg.contains("Pessimistic"));
    }

    #[test]
    fn test_error_clone_eq() {
        let err = StressError::unknown_scenario("Severe");
        assert_eq!(err, err.clone());
    }
}
