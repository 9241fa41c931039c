//! Progress notifications during full enumeration.
//!
//! Enumeration calls [`ProgressObserver::on_progress`] every
//! `Config::progress_interval` meshings (counting from zero) and
//! [`ProgressObserver::on_finish`] once at the end. Observers only watch;
//! nothing they do changes the distribution.

use std::io::Write;

/// Receives enumeration progress.
pub trait ProgressObserver {
    /// `done` meshings of `total` have been started.
    fn on_progress(&mut self, done: u64, total: u64);

    /// All `total` meshings are finished.
    fn on_finish(&mut self, _total: u64) {}
}

/// Ignores all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _done: u64, _total: u64) {}
}

/// Emits notifications as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn on_progress(&mut self, done: u64, total: u64) {
        tracing::info!(done, total, "calculating meshings");
    }

    fn on_finish(&mut self, total: u64) {
        tracing::info!(total, "calculating meshings done");
    }
}

/// Rewrites a single status line on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalProgress;

impl ProgressObserver for TerminalProgress {
    fn on_progress(&mut self, done: u64, total: u64) {
        let mut stderr = std::io::stderr().lock();
        // Progress output is best effort.
        let _ = write!(stderr, "\rCalculating meshings... {}/{} ", done, total);
        let _ = stderr.flush();
    }

    fn on_finish(&mut self, _total: u64) {
        eprintln!("\rCalculating meshings... Done");
    }
}

impl<F> ProgressObserver for F
where
    F: FnMut(u64, u64),
{
    fn on_progress(&mut self, done: u64, total: u64) {
        self(done, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |done: u64, total: u64| seen.push((done, total));
            observer.on_progress(0, 10);
            observer.on_progress(5, 10);
            observer.on_finish(10);
        }
        assert_eq!(seen, vec![(0, 10), (5, 10)]);
    }
}
