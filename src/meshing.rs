//! Enumeration of meshings.
//!
//! A meshing picks which `k` of the `n` pooled positions are attributed to
//! Y; every other position is attributed to X. [`Meshings`] yields all
//! C(n, k) of them lazily in lexicographic order.

use crate::error::{Error, Result};
use crate::types::Source;

/// Binomial coefficient C(n, k), computed in closed form.
///
/// # Errors
///
/// Returns [`Error::Overflow`] if the result does not fit in `u64`.
pub fn binomial(n: usize, k: usize) -> Result<u64> {
    if k > n {
        return Ok(0);
    }
    let k = k.min(n - k) as u128;
    let n = n as u128;

    // After step i the accumulator equals C(n - k + i, i), so each division is exact.
    let mut acc: u128 = 1;
    for i in 1..=k {
        acc = acc.checked_mul(n - k + i).ok_or(Error::Overflow)? / i;
    }
    u64::try_from(acc).map_err(|_| Error::Overflow)
}

/// Lexicographic iterator over all size-`k` subsets of `0..n`.
///
/// Cloning yields an independent iterator from the same point, and
/// [`Meshings::new`] is cheap, so a second pass is just a new value.
#[derive(Debug, Clone)]
pub struct Meshings {
    n: usize,
    indices: Vec<usize>,
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    First,
    Running,
    Done,
}

impl Meshings {
    /// Enumerate subsets of size `k` drawn from `0..n`.
    ///
    /// `k == 0` yields the single empty subset; `k > n` yields nothing.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            state: if k > n { State::Done } else { State::First },
        }
    }

    /// Advance `indices` to the next combination in lexicographic order.
    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        // Rightmost index that can still move right.
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            return false;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl Iterator for Meshings {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Done => return None,
            State::First => self.state = State::Running,
            State::Running => {
                if !self.advance() {
                    self.state = State::Done;
                    return None;
                }
            }
        }
        Some(self.indices.clone())
    }
}

impl std::iter::FusedIterator for Meshings {}

/// Write the attribution described by `y_positions` into `out`.
///
/// Every position is set to X, then the listed positions to Y. `out` keeps
/// its length, so one buffer can be reused across meshings.
pub fn attributions_for(y_positions: &[usize], out: &mut [Source]) {
    out.fill(Source::SampleX);
    for &index in y_positions {
        out[index] = Source::SampleY;
    }
}
