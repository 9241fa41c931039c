//! Type aliases and common types.

use num_rational::Ratio;
use serde::{Deserialize, Serialize};

/// Integer-scaled test statistic.
pub type Statistic = u64;

/// Exact probability (count over total meshings).
pub type Probability = Ratio<u64>;

/// Which sample a pooled value is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// The value belongs to sample X.
    SampleX,
    /// The value belongs to sample Y.
    SampleY,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::SampleX => write!(f, "X"),
            Source::SampleY => write!(f, "Y"),
        }
    }
}
