//! Error type for test construction and distribution queries.

use thiserror::Error;

use crate::types::Source;

/// Errors raised while building or querying a test.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// One of the two samples has no values.
    #[error("sample {sample} is empty")]
    EmptySample {
        /// The empty sample.
        sample: Source,
    },

    /// Value and attribution sequences disagree in length.
    #[error("combined sample has {values} values but {attributions} attributions")]
    LengthMismatch {
        /// Number of pooled values.
        values: usize,
        /// Number of attribution labels.
        attributions: usize,
    },

    /// An attribution does not carry the expected number of Y labels.
    #[error("attribution has {found} Y labels, expected {expected}")]
    AttributionCount {
        /// Y sample size of the combined sample.
        expected: usize,
        /// Y labels in the rejected attribution.
        found: usize,
    },

    /// A pooled value is NaN or infinite.
    #[error("value at index {index} is not finite")]
    NonFiniteValue {
        /// Position of the value in its input sample.
        index: usize,
    },

    /// Pooled values are not in ascending order.
    #[error("pooled value at index {index} is smaller than its predecessor")]
    Unsorted {
        /// First position that breaks the ordering.
        index: usize,
    },

    /// Stored counts do not add up to the recorded total.
    #[error("distribution counts sum to {counted} but total_trials is {total_trials}")]
    InconsistentDistribution {
        /// Sum of the per-statistic counts.
        counted: u64,
        /// Recorded number of trials.
        total_trials: u64,
    },

    /// Stored probabilities do not match `count / total_trials`.
    #[error("stored probabilities disagree with the recorded counts")]
    ProbabilityMismatch,

    /// Probabilities were read before they were calculated.
    #[error("probabilities have not been calculated yet")]
    NotFinalized,

    /// The distribution was modified or finalized after finalization.
    #[error("probabilities have already been calculated")]
    AlreadyFinalized,

    /// Finalization was attempted with no recorded statistics.
    #[error("distribution has no recorded test statistics")]
    EmptyDistribution,

    /// Enumeration would exceed the configured meshing limit.
    #[error("{meshings} meshings exceed the configured limit of {limit}")]
    TooManyMeshings {
        /// Number of meshings the full distribution needs.
        meshings: u64,
        /// Configured limit.
        limit: u64,
    },

    /// The number of meshings does not fit in 64 bits.
    #[error("number of meshings overflows u64")]
    Overflow,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
