//! Fixed constants used across the test.

/// Asymptotic Kolmogorov-Smirnov critical value for a 5% rejection region.
///
/// This is c(0.05) from the limiting distribution of the scaled two-sample
/// statistic. It does not depend on the data.
pub const CRITICAL_VALUE_5_PERCENT: f64 = 1.358;

/// Default number of meshings between progress notifications.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 1000;
