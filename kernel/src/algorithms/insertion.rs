//! Insertion sort: shift larger elements right while scanning backward.
//!
//! Stable, in place. Shifts are moves, not swaps: each shift and each final
//! key placement records one trace step, and the swap counter stays at zero.

use crate::carrier::element::Element;
use crate::carrier::instrument::Instrumentation;
use crate::error::SortError;

use super::is_trivial;

/// Sort a copy of `input` with insertion sort.
///
/// # Errors
///
/// Never fails; the `Result` matches [`super::SortFn`].
pub fn insertion_sort<T: Element>(
    input: &[T],
    instr: &mut Instrumentation<T>,
) -> Result<Vec<T>, SortError> {
    let mut seq = input.to_vec();
    if is_trivial(&seq) {
        return Ok(seq);
    }
    insert_run(&mut seq, instr, true);
    Ok(seq)
}

/// In-place instrumented insertion pass over the whole slice.
///
/// Shared with bucket sort, which records its own per-bucket steps and so
/// passes `snapshots = false`.
pub(crate) fn insert_run<T: Element>(
    seq: &mut [T],
    instr: &mut Instrumentation<T>,
    snapshots: bool,
) {
    for i in 1..seq.len() {
        let key = seq[i];
        let mut hole = i;
        while hole > 0 && instr.compare(seq[hole - 1], key) {
            seq[hole] = seq[hole - 1];
            hole -= 1;
            if snapshots {
                instr.record_step(seq);
            }
        }
        seq[hole] = key;
        if snapshots {
            instr.record_step(seq);
        }
    }
}
