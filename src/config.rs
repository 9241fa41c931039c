//! Configuration for exact test runs.

use std::env;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PROGRESS_INTERVAL;
use crate::counting::{CountAlgorithm, GroupedCount, PositionalCount};

/// Configuration options for `KsTest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Meshings between progress notifications (default: 1,000).
    ///
    /// Set to 0 to only receive the completion notification.
    pub progress_interval: usize,

    /// Optional guardrail on the number of meshings a full enumeration may visit.
    ///
    /// The count is C(n, sample_size_y), which grows quickly; a test whose
    /// count exceeds this limit fails before enumeration starts.
    pub max_meshings: Option<u64>,

    /// How tied values are counted when building empirical CDFs.
    pub ties: TieHandling,
}

/// Counting strategy for tied pooled values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieHandling {
    /// Count per pooled position, ignoring ties.
    #[default]
    Positional,

    /// Evaluate the CDFs only at distinct values: every position in a run of
    /// equal values reports the count at the end of the run.
    Grouped,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            max_meshings: None,
            ties: TieHandling::Positional,
        }
    }
}

impl TieHandling {
    /// The counting collaborator for this strategy.
    pub fn algorithm(self) -> &'static dyn CountAlgorithm {
        match self {
            Self::Positional => &PositionalCount,
            Self::Grouped => &GroupedCount,
        }
    }
}

impl Config {
    /// Configuration with periodic progress disabled and a small meshing cap.
    ///
    /// Suited to unit tests and interactive exploration.
    pub fn quick() -> Self {
        Self {
            progress_interval: 0,
            max_meshings: Some(1_000_000),
            ..Self::default()
        }
    }

    /// Merge configuration from environment variables.
    ///
    /// Reads `EXACT_KS_PROGRESS_INTERVAL`, `EXACT_KS_MAX_MESHINGS` and
    /// `EXACT_KS_TIES` (`positional` or `grouped`). Unparsable values are
    /// logged and ignored.
    pub fn from_env(mut self) -> Self {
        if let Some(interval) = parse_env("EXACT_KS_PROGRESS_INTERVAL") {
            self.progress_interval = interval;
        }
        if let Some(limit) = parse_env("EXACT_KS_MAX_MESHINGS") {
            self.max_meshings = Some(limit);
        }
        if let Some(ties) = parse_ties_env("EXACT_KS_TIES") {
            self.ties = ties;
        }
        self
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment override");
            None
        }
    }
}

fn parse_ties_env(key: &str) -> Option<TieHandling> {
    let raw = env::var(key).ok()?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "positional" => Some(TieHandling::Positional),
        "grouped" => Some(TieHandling::Grouped),
        _ => {
            tracing::warn!(key, value = %raw, "ignoring unknown tie handling");
            None
        }
    }
}
