//! Integer-scaled two-sample KS statistic for a single meshing.
//!
//! For one attribution the pipeline is:
//! 1. Count X and Y at every pooled position
//! 2. Divide by the class sizes to get exact empirical CDFs
//! 3. Take the largest absolute CDF difference
//! 4. Scale by `x * y / gcd(x, y)` and truncate to an integer
//!
//! With `D = |cx/x - cy/y| = |cx*y - cy*x| / (x*y)`, the scaled value is
//! `|cx*y - cy*x| / gcd(x, y)`, which is always a whole number.

use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::counting::CountAlgorithm;
use crate::types::{Source, Statistic};

/// Scaling constants derived from the two sample sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticFactors {
    /// Size of sample X.
    pub sample_size_x: u64,
    /// Size of sample Y.
    pub sample_size_y: u64,
    /// `gcd(x, y)`.
    pub gcd: u64,
    /// `x * y / gcd(x, y)`: makes the scaled statistic an exact integer.
    pub factor: u64,
    /// `gcd(x, y) / sqrt(x * y * (x + y))`: rescales the integer statistic
    /// onto the asymptotic KS scale.
    pub approx_factor: f64,
}

impl StatisticFactors {
    /// Derive the factors for sizes `x` and `y`.
    ///
    /// Both sizes must be strictly positive; `CombinedSample` guarantees this.
    pub fn new(sample_size_x: u64, sample_size_y: u64) -> Self {
        debug_assert!(sample_size_x > 0 && sample_size_y > 0);

        let gcd = sample_size_x.gcd(&sample_size_y);
        let factor = sample_size_x / gcd * sample_size_y;
        let n = sample_size_x + sample_size_y;
        let approx_factor =
            gcd as f64 / (sample_size_x as f64 * sample_size_y as f64 * n as f64).sqrt();

        Self {
            sample_size_x,
            sample_size_y,
            gcd,
            factor,
            approx_factor,
        }
    }

    /// Scale an exact maximum CDF difference to the integer statistic.
    ///
    /// Truncates toward zero; the product is non-negative.
    pub fn scale(&self, max_cumulative_difference: Ratio<u64>) -> Statistic {
        (max_cumulative_difference * self.factor).to_integer()
    }

    /// Rescale an integer statistic onto the asymptotic KS scale.
    pub fn approximate(&self, statistic: Statistic) -> f64 {
        statistic as f64 * self.approx_factor
    }
}

/// Exact empirical CDF from running counts of a class of size `size`.
pub fn empirical_cdf(counts: &[u64], size: u64) -> Vec<Ratio<u64>> {
    counts.iter().map(|&c| Ratio::new(c, size)).collect()
}

/// `max_i |cdf_x[i] - cdf_y[i]|`, exactly.
///
/// Returns zero for empty input.
pub fn max_cumulative_difference(cdf_x: &[Ratio<u64>], cdf_y: &[Ratio<u64>]) -> Ratio<u64> {
    cdf_x
        .iter()
        .zip(cdf_y)
        .map(|(&a, &b)| if a >= b { a - b } else { b - a })
        .max()
        .unwrap_or_else(Ratio::zero)
}

/// Compute the integer statistic for one attribution of the pooled values.
pub fn test_statistic(
    values: &[f64],
    attributions: &[Source],
    factors: &StatisticFactors,
    counter: &dyn CountAlgorithm,
) -> Statistic {
    let counts_x = counter.counts(values, attributions, Source::SampleX);
    let cdf_x = empirical_cdf(&counts_x, factors.sample_size_x);

    let counts_y = counter.counts(values, attributions, Source::SampleY);
    let cdf_y = empirical_cdf(&counts_y, factors.sample_size_y);

    factors.scale(max_cumulative_difference(&cdf_x, &cdf_y))
}

/// The unscaled KS distance `D = statistic / factor` as a float.
pub fn ks_distance(statistic: Statistic, factors: &StatisticFactors) -> f64 {
    Ratio::new(statistic, factors.factor).to_f64().unwrap_or(f64::NAN)
}
