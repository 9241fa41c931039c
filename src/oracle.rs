//! Main `KsTest` entry point and builder.

use std::time::Instant;

use crate::config::{Config, TieHandling};
use crate::constants::CRITICAL_VALUE_5_PERCENT;
use crate::distribution::Distribution;
use crate::error::{Error, Result};
use crate::meshing::{attributions_for, binomial, Meshings};
use crate::progress::{LogProgress, NoProgress, ProgressObserver};
use crate::result::{ApproximateTestResult, ExactTestResult, Observation};
use crate::sample::CombinedSample;
use crate::statistic::{test_statistic, StatisticFactors};
use crate::types::{Probability, Source};

/// Exact two-sample KS test over a pooled sample.
///
/// Use the builder methods to configure, then run either the exact test
/// (full enumeration of meshings) or the normal-approximation test.
///
/// # Example
///
/// ```ignore
/// use exact_ks::{CombinedSample, KsTest};
///
/// let sample = CombinedSample::from_samples(&[11.0, 12.0, 13.0, 14.0], &[5.0, 6.0, 7.0])?;
/// let result = KsTest::new(&sample).progress_interval(0).perform_test()?;
/// println!("p = {}", result.p_value);
/// ```
///
/// # Attribution handling
///
/// The sample is borrowed immutably. Each meshing is written into a private
/// attribution buffer and counted from there, so the caller's attribution is
/// the same after a run as before it, whether the run succeeds or fails.
#[derive(Debug, Clone)]
pub struct KsTest<'a> {
    sample: &'a CombinedSample,
    config: Config,
    factors: StatisticFactors,
}

impl<'a> KsTest<'a> {
    /// Create with default configuration.
    pub fn new(sample: &'a CombinedSample) -> Self {
        Self::with_config(sample, Config::default())
    }

    /// Create with an explicit configuration.
    pub fn with_config(sample: &'a CombinedSample, config: Config) -> Self {
        let factors =
            StatisticFactors::new(sample.sample_size_x() as u64, sample.sample_size_y() as u64);
        Self {
            sample,
            config,
            factors,
        }
    }

    /// Set meshings between progress notifications (0 disables them).
    pub fn progress_interval(mut self, n: usize) -> Self {
        self.config.progress_interval = n;
        self
    }

    /// Refuse to enumerate more than `limit` meshings.
    pub fn max_meshings(mut self, limit: u64) -> Self {
        self.config.max_meshings = Some(limit);
        self
    }

    /// Set how tied values are counted.
    pub fn ties(mut self, ties: TieHandling) -> Self {
        self.config.ties = ties;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scaling constants for this sample.
    pub fn factors(&self) -> &StatisticFactors {
        &self.factors
    }

    /// The pooled sample under test.
    pub fn sample(&self) -> &CombinedSample {
        self.sample
    }

    /// Statistic of the sample's current (real) attribution.
    pub fn observe(&self) -> Observation {
        Observation {
            statistic: self.statistic_for(self.sample.attributions()),
        }
    }

    /// Number of meshings a full enumeration visits, C(n, sample_size_y).
    ///
    /// # Errors
    ///
    /// Fails on overflow or if the configured `max_meshings` is exceeded.
    pub fn total_meshings(&self) -> Result<u64> {
        let meshings = binomial(self.sample.len(), self.sample.sample_size_y())?;
        match self.config.max_meshings {
            Some(limit) if meshings > limit => Err(Error::TooManyMeshings { meshings, limit }),
            _ => Ok(meshings),
        }
    }

    /// Enumerate every meshing and build the finalized distribution.
    ///
    /// # Errors
    ///
    /// Fails before enumeration if the meshing count is out of bounds.
    pub fn distribution(&self) -> Result<Distribution> {
        self.distribution_with(&mut NoProgress)
    }

    /// [`distribution`](Self::distribution), reporting to `observer`.
    pub fn distribution_with(&self, observer: &mut dyn ProgressObserver) -> Result<Distribution> {
        let total = self.total_meshings()?;
        let n = self.sample.len();
        let interval = self.config.progress_interval as u64;

        let mut buffer = vec![Source::SampleX; n];
        let mut distribution = Distribution::new();

        for (index, y_positions) in (0u64..).zip(Meshings::new(n, self.sample.sample_size_y())) {
            if interval > 0 && index % interval == 0 {
                observer.on_progress(index, total);
            }
            attributions_for(&y_positions, &mut buffer);
            distribution.add_test_statistic(self.statistic_for(&buffer))?;
        }
        observer.on_finish(total);

        distribution.calculate_probabilities()?;
        Ok(distribution)
    }

    /// Exact p-value of `observation` under `distribution`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotFinalized`] if `distribution` is not finalized.
    pub fn p_value_for(distribution: &Distribution, observation: &Observation) -> Result<Probability> {
        distribution.tail_probability(observation.statistic)
    }

    /// Run the exact test, logging progress through `tracing`.
    ///
    /// # Errors
    ///
    /// Fails if the meshing count overflows or exceeds `max_meshings`.
    pub fn perform_test(&self) -> Result<ExactTestResult> {
        self.perform_test_with(&mut LogProgress)
    }

    /// Run the exact test, reporting progress to `observer`.
    ///
    /// 1. Compute the observed statistic from the real attribution
    /// 2. Enumerate all meshings into a distribution
    /// 3. Sum the upper tail at the observed statistic
    pub fn perform_test_with(&self, observer: &mut dyn ProgressObserver) -> Result<ExactTestResult> {
        let span = tracing::info_span!(
            "exact_test",
            sample_size_x = self.factors.sample_size_x,
            sample_size_y = self.factors.sample_size_y
        );
        let _enter = span.enter();
        let start_time = Instant::now();

        let observation = self.observe();
        tracing::debug!(statistic = observation.statistic, "observed test statistic");

        let distribution = self.distribution_with(observer)?;
        let p_value = Self::p_value_for(&distribution, &observation)?;

        tracing::info!(
            observed = observation.statistic,
            p_value = %p_value,
            meshings = distribution.total_trials(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "exact test complete"
        );

        Ok(ExactTestResult {
            observed_statistic: observation.statistic,
            p_value,
            total_meshings: distribution.total_trials(),
            factors: self.factors,
            distribution,
        })
    }

    /// Run the normal-approximation test on the observed attribution.
    ///
    /// No enumeration happens; the rescaled statistic is compared against the
    /// fixed asymptotic critical value 1.358.
    pub fn perform_test_approximate(&self) -> ApproximateTestResult {
        let observation = self.observe();
        let approximate_statistic = self.factors.approximate(observation.statistic);
        tracing::debug!(
            statistic = observation.statistic,
            approximate_statistic,
            "approximate test statistic"
        );

        ApproximateTestResult {
            observed_statistic: observation.statistic,
            approximate_statistic,
            critical_value: CRITICAL_VALUE_5_PERCENT,
            rejects_null: approximate_statistic > CRITICAL_VALUE_5_PERCENT,
        }
    }

    fn statistic_for(&self, attributions: &[Source]) -> u64 {
        test_statistic(
            self.sample.values(),
            attributions,
            &self.factors,
            self.config.ties.algorithm(),
        )
    }
}
