//! Progress sampling and cooperative cancellation.
//!
//! Every solver owns one [`SearchMonitor`] per invocation. The monitor counts
//! expansions (a node is expanded the moment it is popped from the frontier and
//! goal-tested), invokes the progress callback every [`PROGRESS_INTERVAL`]
//! expansions and once when the final status is determined, and yields the
//! thread after each sampled emission so a cooperative host can interleave
//! other work. Cancellation is a read-only poll of an external flag at the top
//! of every expansion iteration, so it is observed within O(1) expansions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::search::report::Metrics;

/// Expansions between two progress emissions.
pub const PROGRESS_INTERVAL: u64 = 150;

/// A shared boolean flag the caller asserts to abort a running search.
///
/// Clones share the flag. The solver only ever reads it.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assert the token. Every search polling it terminates with `Aborted`.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// One sample of search telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    /// Nodes expanded so far.
    pub explored: u64,
    /// Frontier size at the time of the sample.
    pub frontier: usize,
    /// Depth of the most recently expanded node (final sample: solution depth).
    pub depth: u32,
    /// Elapsed wall-clock milliseconds, rounded.
    pub time_ms: u64,
}

/// Per-invocation expansion counter, sampler and cancellation observer.
pub struct SearchMonitor<'a> {
    cancel: Option<&'a CancelToken>,
    on_progress: Option<&'a mut dyn FnMut(ProgressSnapshot)>,
    started: Instant,
    explored: u64,
}

impl<'a> SearchMonitor<'a> {
    pub fn new(
        cancel: Option<&'a CancelToken>,
        on_progress: Option<&'a mut dyn FnMut(ProgressSnapshot)>,
    ) -> Self {
        Self {
            cancel,
            on_progress,
            started: Instant::now(),
            explored: 0,
        }
    }

    /// Poll the cancellation token.
    #[inline]
    pub fn cancelled(&self) -> bool {
        self.cancel.is_some_and(CancelToken::is_cancelled)
    }

    #[inline]
    pub fn explored(&self) -> u64 {
        self.explored
    }

    /// Elapsed wall-clock time, rounded to milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        (self.started.elapsed().as_secs_f64() * 1000.0).round() as u64
    }

    /// Record one expansion. Emits a sample every `PROGRESS_INTERVAL`
    /// expansions, then yields once so a host scheduler can run.
    pub fn expanded(&mut self, frontier: usize, depth: u32) {
        self.explored += 1;
        if self.explored % PROGRESS_INTERVAL == 0 {
            self.emit(frontier, depth);
            std::thread::yield_now();
        }
    }

    /// Emit the terminal sample and convert it into the report metrics.
    ///
    /// `depth` is the solution depth on success and 0 otherwise.
    pub fn finish(&mut self, frontier: usize, depth: u32) -> Metrics {
        self.emit(frontier, depth);
        Metrics {
            explored: self.explored,
            frontier,
            depth,
            time_ms: self.elapsed_ms(),
        }
    }

    fn emit(&mut self, frontier: usize, depth: u32) {
        let snapshot = ProgressSnapshot {
            explored: self.explored,
            frontier,
            depth,
            time_ms: self.elapsed_ms(),
        };
        if let Some(cb) = self.on_progress.as_mut() {
            cb(snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_starts_clear_and_latches() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        let shared = token.clone();
        shared.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn monitor_samples_on_the_interval() {
        let mut samples: Vec<u64> = Vec::new();
        let mut record = |s: ProgressSnapshot| samples.push(s.explored);
        let mut monitor = SearchMonitor::new(None, Some(&mut record));
        for _ in 0..(PROGRESS_INTERVAL * 2 + 10) {
            monitor.expanded(0, 0);
        }
        let metrics = monitor.finish(0, 0);
        assert_eq!(
            samples,
            vec![
                PROGRESS_INTERVAL,
                PROGRESS_INTERVAL * 2,
                PROGRESS_INTERVAL * 2 + 10
            ]
        );
        assert_eq!(metrics.explored, PROGRESS_INTERVAL * 2 + 10);
    }
}
