//! Empirical distribution of the test statistic over all meshings.

use std::collections::BTreeMap;

use num_rational::Ratio;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Probability, Statistic};

/// Occurrence counts of each statistic value, and their exact probabilities
/// once finalized.
///
/// Counts are added with [`add_test_statistic`](Self::add_test_statistic);
/// [`calculate_probabilities`](Self::calculate_probabilities) then fixes the
/// distribution. Reads before that point fail with [`Error::NotFinalized`].
///
/// Deserialization rebuilds the distribution from its counts and rejects
/// input whose totals or probabilities disagree with them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDistribution")]
pub struct Distribution {
    counts: BTreeMap<Statistic, u64>,
    total_trials: u64,
    probabilities: Option<BTreeMap<Statistic, Probability>>,
}

/// Serialized form of [`Distribution`], checked on the way in.
#[derive(Deserialize)]
struct RawDistribution {
    counts: BTreeMap<Statistic, u64>,
    total_trials: u64,
    probabilities: Option<BTreeMap<Statistic, Probability>>,
}

impl TryFrom<RawDistribution> for Distribution {
    type Error = Error;

    fn try_from(raw: RawDistribution) -> Result<Self> {
        let counted = raw
            .counts
            .values()
            .try_fold(0u64, |acc, &c| acc.checked_add(c))
            .ok_or(Error::Overflow)?;
        if counted != raw.total_trials {
            return Err(Error::InconsistentDistribution {
                counted,
                total_trials: raw.total_trials,
            });
        }

        let mut distribution = Self {
            counts: raw.counts,
            total_trials: raw.total_trials,
            probabilities: None,
        };
        if let Some(stored) = raw.probabilities {
            distribution.calculate_probabilities()?;
            if distribution.probabilities.as_ref() != Some(&stored) {
                return Err(Error::ProbabilityMismatch);
            }
        }
        Ok(distribution)
    }
}

impl Distribution {
    /// Empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `statistic`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::AlreadyFinalized`] after probabilities were calculated.
    pub fn add_test_statistic(&mut self, statistic: Statistic) -> Result<()> {
        if self.probabilities.is_some() {
            return Err(Error::AlreadyFinalized);
        }
        *self.counts.entry(statistic).or_insert(0) += 1;
        self.total_trials += 1;
        Ok(())
    }

    /// Convert every count to `count / total_trials`.
    ///
    /// # Errors
    ///
    /// Fails if called twice or if nothing was recorded.
    pub fn calculate_probabilities(&mut self) -> Result<()> {
        if self.probabilities.is_some() {
            return Err(Error::AlreadyFinalized);
        }
        if self.total_trials == 0 {
            return Err(Error::EmptyDistribution);
        }
        let total = self.total_trials;
        self.probabilities = Some(
            self.counts
                .iter()
                .map(|(&statistic, &count)| (statistic, Ratio::new(count, total)))
                .collect(),
        );
        Ok(())
    }

    /// Whether probabilities have been calculated.
    pub fn is_finalized(&self) -> bool {
        self.probabilities.is_some()
    }

    /// Exact probability of each observed statistic value, keyed ascending.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotFinalized`] before `calculate_probabilities`.
    pub fn probabilities(&self) -> Result<&BTreeMap<Statistic, Probability>> {
        self.probabilities.as_ref().ok_or(Error::NotFinalized)
    }

    /// `P(T >= statistic)`: sum of probabilities over all keys `>= statistic`.
    ///
    /// `statistic` need not be a key; the sum is zero if no key qualifies.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotFinalized`] before `calculate_probabilities`.
    pub fn tail_probability(&self, statistic: Statistic) -> Result<Probability> {
        // Same as summing the tail probabilities.
        self.probabilities()?;
        let tail: u64 = self.counts.range(statistic..).map(|(_, &count)| count).sum();
        Ok(Ratio::new(tail, self.total_trials))
    }

    /// Smallest statistic `s` with `P(T >= s) <= alpha`.
    ///
    /// This is the exact critical value for a level-`alpha` test; the
    /// comparison is done on integers, without rounding. Returns `None` if
    /// even the largest observed statistic has a tail above `alpha`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotFinalized`] before `calculate_probabilities`.
    pub fn critical_value(&self, alpha: Probability) -> Result<Option<Statistic>> {
        self.probabilities()?;
        let total = u128::from(self.total_trials);
        let (numer, denom) = (u128::from(*alpha.numer()), u128::from(*alpha.denom()));
        let mut tail = 0u128;
        let mut critical = None;
        for (&statistic, &count) in self.counts.iter().rev() {
            tail += u128::from(count);
            // tail / total > numer / denom
            if tail * denom > numer * total {
                break;
            }
            critical = Some(statistic);
        }
        Ok(critical)
    }

    /// Raw occurrence counts, keyed ascending.
    pub fn counts(&self) -> &BTreeMap<Statistic, u64> {
        &self.counts
    }

    /// Number of statistics recorded.
    pub fn total_trials(&self) -> u64 {
        self.total_trials
    }

    /// Sum of all probabilities; exactly one once finalized.
    pub fn total_probability(&self) -> Result<Probability> {
        Ok(self
            .probabilities()?
            .values()
            .fold(Ratio::zero(), |acc, &p| acc + p))
    }
}
