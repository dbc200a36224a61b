//! Bubble sort: repeated adjacent compare-and-swap passes.
//!
//! Stable, in place. A pass that makes no swap ends the sort, giving the
//! O(n) best case on already-sorted input.

use crate::carrier::element::Element;
use crate::carrier::instrument::Instrumentation;
use crate::error::SortError;

use super::is_trivial;

/// Sort a copy of `input` with bubble sort.
///
/// # Errors
///
/// Never fails; the `Result` matches [`super::SortFn`].
pub fn bubble_sort<T: Element>(
    input: &[T],
    instr: &mut Instrumentation<T>,
) -> Result<Vec<T>, SortError> {
    let mut seq = input.to_vec();
    if is_trivial(&seq) {
        return Ok(seq);
    }

    let n = seq.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if instr.compare(seq[j], seq[j + 1]) {
                instr.record_swap(&mut seq, j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    Ok(seq)
}
