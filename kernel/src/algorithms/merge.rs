//! Merge sort: recursive midpoint split with a linear merge.
//!
//! Stable, not in place. The merge takes from the left run unless its head
//! compares strictly greater than the right head, so equal elements keep
//! their original order. Each completed merge appends one snapshot of the
//! merged run (a reconstruction step, not a swap); the swap counter stays
//! at zero.

use crate::carrier::element::Element;
use crate::carrier::instrument::Instrumentation;
use crate::error::SortError;

use super::is_trivial;

/// Sort a copy of `input` with top-down merge sort.
///
/// Recursion depth is `ceil(log2(n))`.
///
/// # Errors
///
/// Never fails; the `Result` matches [`super::SortFn`].
pub fn merge_sort<T: Element>(
    input: &[T],
    instr: &mut Instrumentation<T>,
) -> Result<Vec<T>, SortError> {
    if is_trivial(input) {
        return Ok(input.to_vec());
    }
    Ok(sort_run(input, instr))
}

fn sort_run<T: Element>(run: &[T], instr: &mut Instrumentation<T>) -> Vec<T> {
    if run.len() <= 1 {
        return run.to_vec();
    }
    let mid = run.len() / 2;
    let left = sort_run(&run[..mid], instr);
    let right = sort_run(&run[mid..], instr);
    merge(&left, &right, instr)
}

fn merge<T: Element>(left: &[T], right: &[T], instr: &mut Instrumentation<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if instr.compare(left[i], right[j]) {
            out.push(right[j]);
            j += 1;
        } else {
            out.push(left[i]);
            i += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);

    instr.record_step(&out);
    out
}
