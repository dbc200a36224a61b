//! Heap sort: build a max-heap, then repeatedly move the root to the end.
//!
//! Unstable, in place. Heap invariant: no child compares strictly greater
//! than its parent. Sift-down is iterative.

use crate::carrier::element::Element;
use crate::carrier::instrument::Instrumentation;
use crate::error::SortError;

use super::is_trivial;

/// Sort a copy of `input` with heap sort.
///
/// # Errors
///
/// Never fails; the `Result` matches [`super::SortFn`].
pub fn heap_sort<T: Element>(
    input: &[T],
    instr: &mut Instrumentation<T>,
) -> Result<Vec<T>, SortError> {
    let mut seq = input.to_vec();
    if is_trivial(&seq) {
        return Ok(seq);
    }

    let n = seq.len();
    for root in (0..n / 2).rev() {
        sift_down(&mut seq, n, root, instr);
    }
    for end in (1..n).rev() {
        instr.record_swap(&mut seq, 0, end);
        sift_down(&mut seq, end, 0, instr);
    }
    Ok(seq)
}

/// Restore the heap invariant for the subtree at `root` within `seq[..len]`.
fn sift_down<T: Element>(
    seq: &mut [T],
    len: usize,
    mut root: usize,
    instr: &mut Instrumentation<T>,
) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;

        if left < len && instr.compare(seq[left], seq[largest]) {
            largest = left;
        }
        if right < len && instr.compare(seq[right], seq[largest]) {
            largest = right;
        }
        if largest == root {
            return;
        }
        instr.record_swap(seq, root, largest);
        root = largest;
    }
}
