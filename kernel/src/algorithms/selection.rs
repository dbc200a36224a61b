//! Selection sort: place the minimum of the unsorted suffix at its front.
//!
//! Unstable, in place, at most one swap per outer iteration. The running
//! minimum is only replaced when it compares strictly greater than the
//! candidate, so equal elements never trigger a swap.

use crate::carrier::element::Element;
use crate::carrier::instrument::Instrumentation;
use crate::error::SortError;

use super::is_trivial;

/// Sort a copy of `input` with selection sort.
///
/// # Errors
///
/// Never fails; the `Result` matches [`super::SortFn`].
pub fn selection_sort<T: Element>(
    input: &[T],
    instr: &mut Instrumentation<T>,
) -> Result<Vec<T>, SortError> {
    let mut seq = input.to_vec();
    if is_trivial(&seq) {
        return Ok(seq);
    }

    let n = seq.len();
    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            if instr.compare(seq[min_idx], seq[j]) {
                min_idx = j;
            }
        }
        if min_idx != i {
            instr.record_swap(&mut seq, i, min_idx);
        }
    }
    Ok(seq)
}
