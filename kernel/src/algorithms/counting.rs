//! Counting sort over integer-valued elements.
//!
//! Stable, not in place. Counts are offset by the minimum value, prefix
//! summed, and elements are placed back-to-front so equal keys keep their
//! order. Space is O(max - min), so the range is checked against
//! [`SortLimits::max_counting_range`] before anything is allocated.
//!
//! No element comparisons are made; the counters stay at zero. Each
//! placement into the output array records one trace step. The output starts
//! filled with `T::default()`, so early snapshots show the unfilled slots
//! as zero.

use crate::carrier::element::Element;
use crate::carrier::instrument::Instrumentation;
use crate::error::SortError;

use super::{integer_keys, is_trivial, SortLimits};

const NAME: &str = "Counting Sort";

/// Sort a copy of `input` with counting sort under default [`SortLimits`].
///
/// # Errors
///
/// See [`counting_sort_with`].
pub fn counting_sort<T: Element>(
    input: &[T],
    instr: &mut Instrumentation<T>,
) -> Result<Vec<T>, SortError> {
    counting_sort_with(input, instr, &SortLimits::default())
}

/// Sort a copy of `input` with counting sort under explicit limits.
///
/// # Errors
///
/// - [`SortError::UnsupportedInput`] if any element is not integer-valued.
/// - [`SortError::InvalidRange`] if `max - min + 1` exceeds
///   `limits.max_counting_range`.
pub fn counting_sort_with<T: Element>(
    input: &[T],
    instr: &mut Instrumentation<T>,
    limits: &SortLimits,
) -> Result<Vec<T>, SortError> {
    let keys = integer_keys(input, NAME)?;
    if is_trivial(input) {
        return Ok(input.to_vec());
    }

    let (Some(&min), Some(&max)) = (keys.iter().min(), keys.iter().max()) else {
        return Ok(input.to_vec());
    };
    let range = max - min + 1;
    if range > i128::from(limits.max_counting_range) {
        return Err(SortError::InvalidRange {
            algorithm: NAME,
            detail: format!(
                "value range {range} exceeds limit {}",
                limits.max_counting_range
            ),
        });
    }
    let slot = |key: i128| -> usize {
        // Bounded by `range`, which fits the configured u64 limit.
        usize::try_from(key - min).unwrap_or(usize::MAX)
    };

    let mut count = vec![0usize; slot(max) + 1];
    for &key in &keys {
        count[slot(key)] += 1;
    }
    for i in 1..count.len() {
        count[i] += count[i - 1];
    }

    let mut output = vec![T::default(); input.len()];
    for (value, &key) in input.iter().zip(&keys).rev() {
        let bucket = &mut count[slot(key)];
        *bucket -= 1;
        output[*bucket] = *value;
        instr.record_step(&output);
    }
    Ok(output)
}
