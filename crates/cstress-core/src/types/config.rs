//! Configuration for stress-test computation.

use serde::{Deserialize, Serialize};

/// Configuration for a stress-test run.
///
/// Passed explicitly wherever it is needed - never global state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressConfig {
    /// Confidence level of the cross-scenario loss quantile (e.g. 0.95).
    pub alpha: f64,

    /// Ceiling applied to stressed PD.
    pub cap_pd: f64,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            alpha: 0.95,
            cap_pd: 1.0,
        }
    }
}

impl StressConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quantile confidence level.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the stressed-PD ceiling.
    #[must_use]
    pub fn with_cap_pd(mut self, cap_pd: f64) -> Self {
        self.cap_pd = cap_pd;
        self
    }
}
