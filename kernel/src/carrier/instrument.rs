//! `Instrumentation`: the per-run counter and trace recorder.
//!
//! Every algorithm receives an `&mut Instrumentation<T>` and routes all of
//! its comparisons and swaps through it, so operation counts are comparable
//! across algorithms with very different mechanics.
//!
//! # Trace granularity
//!
//! Swap-based algorithms grow the trace once per [`Instrumentation::record_swap`].
//! Algorithms whose unit of progress is not a physical swap (insertion shifts,
//! merge runs, counting placements, radix passes, bucket concatenation) append
//! snapshots with [`Instrumentation::record_step`] instead. The two are not
//! unified: each reflects that algorithm's actual unit of progress.
//!
//! # Lifecycle
//!
//! Counters are cumulative. One instance belongs to one sort call at a time;
//! call [`Instrumentation::reset`] before reusing it for an independent call.

use crate::carrier::element::Element;

/// Counter and trace state for a single sort invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Instrumentation<T> {
    comparisons: u64,
    swaps: u64,
    trace: Vec<Vec<T>>,
}

impl<T> Default for Instrumentation<T> {
    fn default() -> Self {
        Self {
            comparisons: 0,
            swaps: 0,
            trace: Vec::new(),
        }
    }
}

impl<T: Element> Instrumentation<T> {
    /// Fresh state: zero counters, empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear both counters and the trace.
    pub fn reset(&mut self) {
        self.comparisons = 0;
        self.swaps = 0;
        self.trace.clear();
    }

    /// Evaluate `a > b`, counting exactly one comparison.
    ///
    /// Equal elements are never "greater", so ties never trigger a swap or
    /// a placement from the right-hand side.
    pub fn compare(&mut self, a: T, b: T) -> bool {
        self.comparisons += 1;
        a > b
    }

    /// Exchange `seq[i]` and `seq[j]`, count one swap, and append a snapshot.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds (algorithm bug).
    pub fn record_swap(&mut self, seq: &mut [T], i: usize, j: usize) {
        self.swaps += 1;
        seq.swap(i, j);
        self.trace.push(seq.to_vec());
    }

    /// Append a snapshot without touching the counters.
    pub fn record_step(&mut self, seq: &[T]) {
        self.trace.push(seq.to_vec());
    }

    /// Number of `compare` calls since creation or the last reset.
    #[must_use]
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Number of `record_swap` calls since creation or the last reset.
    #[must_use]
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Recorded snapshots in execution order.
    #[must_use]
    pub fn trace(&self) -> &[Vec<T>] {
        &self.trace
    }

    /// `true` if nothing has been recorded.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.comparisons == 0 && self.swaps == 0 && self.trace.is_empty()
    }

    /// Counts and trace length as a plain value.
    #[must_use]
    pub fn counts(&self) -> OperationCounts {
        OperationCounts {
            comparisons: self.comparisons,
            swaps: self.swaps,
            trace_len: self.trace.len(),
        }
    }
}

/// Snapshot of an [`Instrumentation`]'s counters after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperationCounts {
    pub comparisons: u64,
    pub swaps: u64,
    pub trace_len: usize,
}
