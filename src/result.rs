//! Test result types.

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::distribution::Distribution;
use crate::statistic::StatisticFactors;
use crate::types::{Probability, Statistic};

/// Statistic computed from the real (non-permuted) attribution.
///
/// A p-value can only be looked up through one of these, so the observed
/// value is always captured before the tail query runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Integer-scaled statistic of the observed attribution.
    pub statistic: Statistic,
}

/// Result of the exact permutation test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExactTestResult {
    /// Integer-scaled statistic of the observed attribution.
    pub observed_statistic: Statistic,

    /// Exact p-value `P(T >= observed)` over all meshings.
    pub p_value: Probability,

    /// Number of meshings enumerated, C(n, sample_size_y).
    pub total_meshings: u64,

    /// Scaling constants for this pair of sample sizes.
    pub factors: StatisticFactors,

    /// Full finalized distribution of the statistic.
    pub distribution: Distribution,
}

impl ExactTestResult {
    /// The p-value as a float.
    pub fn p_value_f64(&self) -> f64 {
        self.p_value.to_f64().unwrap_or(f64::NAN)
    }

    /// Whether the null is rejected at level `alpha`.
    pub fn rejects_at(&self, alpha: f64) -> bool {
        self.p_value_f64() <= alpha
    }
}

/// Result of the normal-approximation test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproximateTestResult {
    /// Integer-scaled statistic of the observed attribution.
    pub observed_statistic: Statistic,

    /// Statistic rescaled by `gcd(x, y) / sqrt(x * y * n)`.
    pub approximate_statistic: f64,

    /// Asymptotic critical value for a 5% rejection region (always 1.358).
    pub critical_value: f64,

    /// Whether `approximate_statistic` exceeds `critical_value`.
    pub rejects_null: bool,
}
