//! Quick sort: Lomuto partition around the last element.
//!
//! Unstable, in place within the working copy. With the last-element pivot
//! the worst case is O(n^2) on sorted or reverse-sorted input; that pivot
//! choice is kept as the default so benchmark counts stay reproducible.
//! [`randomized_quick_sort`] is offered as a separately named variant.
//!
//! Partitions are processed from an explicit work stack instead of
//! recursion, left partition first, so the swap order (and the trace) is
//! identical to the recursive formulation while stack depth stays bounded
//! on adversarial input.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::carrier::element::Element;
use crate::carrier::instrument::Instrumentation;
use crate::error::SortError;

use super::is_trivial;

/// Fixed seed for the randomized-pivot variant. Runs are reproducible.
pub const RANDOMIZED_PIVOT_SEED: u64 = 0x5EED_0F_5047;

/// Sort a copy of `input` with last-element-pivot quick sort.
///
/// # Errors
///
/// Never fails; the `Result` matches [`super::SortFn`].
pub fn quick_sort<T: Element>(
    input: &[T],
    instr: &mut Instrumentation<T>,
) -> Result<Vec<T>, SortError> {
    let mut seq = input.to_vec();
    if is_trivial(&seq) {
        return Ok(seq);
    }
    sort_ranges(&mut seq, instr, None);
    Ok(seq)
}

/// Sort a copy of `input` with quick sort using a pseudo-random pivot.
///
/// The pivot index is drawn from a [`StdRng`] seeded with
/// [`RANDOMIZED_PIVOT_SEED`] and moved to the end of the range with a
/// counted swap (when it is not already there) before the Lomuto partition.
///
/// # Errors
///
/// Never fails; the `Result` matches [`super::SortFn`].
pub fn randomized_quick_sort<T: Element>(
    input: &[T],
    instr: &mut Instrumentation<T>,
) -> Result<Vec<T>, SortError> {
    let mut seq = input.to_vec();
    if is_trivial(&seq) {
        return Ok(seq);
    }
    let mut rng = StdRng::seed_from_u64(RANDOMIZED_PIVOT_SEED);
    sort_ranges(&mut seq, instr, Some(&mut rng));
    Ok(seq)
}

fn sort_ranges<T: Element>(
    seq: &mut [T],
    instr: &mut Instrumentation<T>,
    mut rng: Option<&mut StdRng>,
) {
    // Inclusive (low, high) ranges still to partition.
    let mut stack = vec![(0usize, seq.len() - 1)];
    while let Some((low, high)) = stack.pop() {
        if low >= high {
            continue;
        }
        if let Some(rng) = rng.as_deref_mut() {
            let pivot = rng.gen_range(low..=high);
            if pivot != high {
                instr.record_swap(seq, pivot, high);
            }
        }
        let p = partition(seq, low, high, instr);
        // Right pushed first so the left partition is processed first.
        stack.push((p + 1, high));
        if p > low {
            stack.push((low, p - 1));
        }
    }
}

/// Lomuto partition of `seq[low..=high]` around `seq[high]`.
///
/// Returns the pivot's final index. Swaps are skipped when source and
/// destination coincide.
fn partition<T: Element>(
    seq: &mut [T],
    low: usize,
    high: usize,
    instr: &mut Instrumentation<T>,
) -> usize {
    let pivot = seq[high];
    // Next slot for an element not greater than the pivot.
    let mut store = low;
    for j in low..high {
        if !instr.compare(seq[j], pivot) {
            if store != j {
                instr.record_swap(seq, store, j);
            }
            store += 1;
        }
    }
    if store != high {
        instr.record_swap(seq, store, high);
    }
    store
}
