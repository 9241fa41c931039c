//! Running counts of one class over the pooled order.
//!
//! A count sequence is the raw ingredient of an empirical CDF: entry `i`
//! holds how many values of the requested class sit at or before pooled
//! position `i`. The class is an explicit argument, so the two calls made
//! per meshing share no state.

use crate::types::Source;

/// Counting collaborator used by the statistic pipeline.
pub trait CountAlgorithm {
    /// Cumulative counts of `class` for every pooled position.
    ///
    /// `values` and `attributions` have equal length; `values` is ascending.
    /// The returned vector has the same length.
    fn counts(&self, values: &[f64], attributions: &[Source], class: Source) -> Vec<u64>;
}

/// Counts per position, treating tied values as distinct observations.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalCount;

impl CountAlgorithm for PositionalCount {
    fn counts(&self, _values: &[f64], attributions: &[Source], class: Source) -> Vec<u64> {
        attributions
            .iter()
            .scan(0u64, |running, &source| {
                if source == class {
                    *running += 1;
                }
                Some(*running)
            })
            .collect()
    }
}

/// Counts per distinct value.
///
/// Each position inside a run of equal values reports the count at the end
/// of the run, which is the empirical CDF evaluated at that value.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupedCount;

impl CountAlgorithm for GroupedCount {
    fn counts(&self, values: &[f64], attributions: &[Source], class: Source) -> Vec<u64> {
        let mut counts = PositionalCount.counts(values, attributions, class);

        // Walk backwards, carrying the run-end count over equal neighbours.
        for i in (0..counts.len().saturating_sub(1)).rev() {
            if values[i] == values[i + 1] {
                counts[i] = counts[i + 1];
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Source::{SampleX as X, SampleY as Y};

    #[test]
    fn test_positional_counts() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let attributions = [Y, X, Y, Y, X];
        assert_eq!(PositionalCount.counts(&values, &attributions, X), vec![0, 1, 1, 1, 2]);
        assert_eq!(PositionalCount.counts(&values, &attributions, Y), vec![1, 1, 2, 3, 3]);
    }

    #[test]
    fn test_counts_end_at_class_size() {
        let values = [0.0; 6];
        let attributions = [X, Y, Y, X, Y, X];
        let x = PositionalCount.counts(&values, &attributions, X);
        let y = PositionalCount.counts(&values, &attributions, Y);
        assert_eq!(x.last(), Some(&3));
        assert_eq!(y.last(), Some(&3));
    }

    #[test]
    fn test_grouped_counts_carry_run_end() {
        let values = [2.0, 2.0, 5.0, 10.0, 10.0];
        let attributions = [Y, Y, X, X, Y];
        assert_eq!(GroupedCount.counts(&values, &attributions, X), vec![0, 0, 1, 2, 2]);
        assert_eq!(GroupedCount.counts(&values, &attributions, Y), vec![2, 2, 2, 3, 3]);
    }

    #[test]
    fn test_grouped_matches_positional_without_ties() {
        let values = [1.0, 2.0, 3.0, 4.0];
        let attributions = [X, Y, X, Y];
        for class in [X, Y] {
            assert_eq!(
                GroupedCount.counts(&values, &attributions, class),
                PositionalCount.counts(&values, &attributions, class)
            );
        }
    }

    /// Counter with interior state, to check one statistic makes one call per class.
    struct Recording {
        calls: std::cell::RefCell<Vec<Source>>,
    }

    impl CountAlgorithm for Recording {
        fn counts(&self, values: &[f64], attributions: &[Source], class: Source) -> Vec<u64> {
            self.calls.borrow_mut().push(class);
            PositionalCount.counts(values, attributions, class)
        }
    }

    #[test]
    fn test_stateful_counter_in_pipeline() {
        use crate::statistic::{test_statistic, StatisticFactors};

        let counter = Recording {
            calls: std::cell::RefCell::new(Vec::new()),
        };
        let values = [1.0, 2.0, 3.0, 4.0];
        let attributions = [X, X, Y, Y];
        let statistic = test_statistic(&values, &attributions, &StatisticFactors::new(2, 2), &counter);

        assert_eq!(statistic, 2);
        assert_eq!(counter.calls.into_inner(), vec![X, Y]);
    }

    #[test]
    fn test_empty_input() {
        assert!(PositionalCount.counts(&[], &[], X).is_empty());
        assert!(GroupedCount.counts(&[], &[], Y).is_empty());
    }
}
