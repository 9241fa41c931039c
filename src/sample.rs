//! Pooled sample with per-position attribution.
//!
//! A [`CombinedSample`] holds the values of both samples sorted into one
//! sequence, plus a label per position recording which sample the value is
//! attributed to. The exact test reads the values and swaps in candidate
//! attributions; the values never change.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Source;

/// Values of samples X and Y pooled and sorted, each tagged with its source.
///
/// Deserialization goes through [`CombinedSample::new`], so a loaded sample
/// satisfies the same invariants as a constructed one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCombinedSample")]
pub struct CombinedSample {
    values: Vec<f64>,
    attributions: Vec<Source>,
    sample_size_y: usize,
}

/// Serialized form of [`CombinedSample`], checked on the way in.
#[derive(Deserialize)]
struct RawCombinedSample {
    values: Vec<f64>,
    attributions: Vec<Source>,
    #[serde(default)]
    sample_size_y: Option<usize>,
}

impl TryFrom<RawCombinedSample> for CombinedSample {
    type Error = Error;

    fn try_from(raw: RawCombinedSample) -> Result<Self> {
        let sample = Self::new(raw.values, raw.attributions)?;
        match raw.sample_size_y {
            Some(stored) if stored != sample.sample_size_y => Err(Error::AttributionCount {
                expected: stored,
                found: sample.sample_size_y,
            }),
            _ => Ok(sample),
        }
    }
}

impl CombinedSample {
    /// Pool two samples into one ascending sequence.
    ///
    /// Sorting is stable, and X values are laid down before Y values, so a
    /// value present in both samples keeps its X copies first.
    ///
    /// # Errors
    ///
    /// Fails if either sample is empty or contains a non-finite value.
    pub fn from_samples(sample_x: &[f64], sample_y: &[f64]) -> Result<Self> {
        check_finite(sample_x)?;
        check_finite(sample_y)?;

        let mut pooled: Vec<(f64, Source)> = sample_x
            .iter()
            .map(|&v| (v, Source::SampleX))
            .chain(sample_y.iter().map(|&v| (v, Source::SampleY)))
            .collect();
        pooled.sort_by(|a, b| a.0.total_cmp(&b.0));

        let (values, attributions) = pooled.into_iter().unzip();
        Self::new(values, attributions)
    }

    /// Build from already pooled values and their attribution.
    ///
    /// The counting step treats position order as value order, and tie
    /// grouping needs equal values to be adjacent, so `values` must be
    /// finite and ascending.
    ///
    /// # Errors
    ///
    /// Fails if the sequences differ in length, either class is absent, or
    /// a value is non-finite or out of order.
    pub fn new(values: Vec<f64>, attributions: Vec<Source>) -> Result<Self> {
        check_finite(&values)?;
        if let Some(i) = values.windows(2).position(|w| w[1] < w[0]) {
            return Err(Error::Unsorted { index: i + 1 });
        }
        if values.len() != attributions.len() {
            return Err(Error::LengthMismatch {
                values: values.len(),
                attributions: attributions.len(),
            });
        }

        let sample_size_y = count_source(&attributions, Source::SampleY);
        if sample_size_y == 0 {
            return Err(Error::EmptySample {
                sample: Source::SampleY,
            });
        }
        if sample_size_y == attributions.len() {
            return Err(Error::EmptySample {
                sample: Source::SampleX,
            });
        }

        Ok(Self {
            values,
            attributions,
            sample_size_y,
        })
    }

    /// Pooled values in ascending order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Current attribution of each pooled position.
    pub fn attributions(&self) -> &[Source] {
        &self.attributions
    }

    /// Owned copy of the current attribution.
    pub fn attributions_copy(&self) -> Vec<Source> {
        self.attributions.clone()
    }

    /// Replace the attribution.
    ///
    /// # Errors
    ///
    /// The new attribution must have one label per value and exactly
    /// `sample_size_y` Y labels; otherwise the sample is left untouched.
    pub fn set_attributions(&mut self, attributions: Vec<Source>) -> Result<()> {
        if attributions.len() != self.values.len() {
            return Err(Error::LengthMismatch {
                values: self.values.len(),
                attributions: attributions.len(),
            });
        }
        let found = count_source(&attributions, Source::SampleY);
        if found != self.sample_size_y {
            return Err(Error::AttributionCount {
                expected: self.sample_size_y,
                found,
            });
        }
        self.attributions = attributions;
        Ok(())
    }

    /// Total number of pooled values, `sample_size_x + sample_size_y`.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; both samples are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of values attributed to X.
    pub fn sample_size_x(&self) -> usize {
        self.values.len() - self.sample_size_y
    }

    /// Number of values attributed to Y.
    pub fn sample_size_y(&self) -> usize {
        self.sample_size_y
    }
}

fn count_source(attributions: &[Source], source: Source) -> usize {
    attributions.iter().filter(|&&s| s == source).count()
}

fn check_finite(sample: &[f64]) -> Result<()> {
    match sample.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(Error::NonFiniteValue { index }),
        None => Ok(()),
    }
}
