//! Bucket sort: equal-width buckets over `[min, max]`, insertion-sorted.
//!
//! Stable (conditionally: stability comes from the stable per-bucket
//! insertion sort and from distribution preserving input order). Not in
//! place. If every element collides into one bucket this degrades to
//! insertion sort, O(n^2).
//!
//! The bucket count is a caller-supplied constant, independent of `n`.
//! The maximum element is placed in the last bucket explicitly, and any
//! computed index is clamped to the last bucket so float rounding can
//! never index past the end.
//!
//! Per-bucket insertion comparisons go through the instrumentation. One
//! trace step is recorded per non-empty bucket, holding the concatenated
//! output so far.

use std::cmp::Ordering;

use crate::carrier::element::Element;
use crate::carrier::instrument::Instrumentation;
use crate::error::SortError;

use super::insertion::insert_run;
use super::is_trivial;

const NAME: &str = "Bucket Sort";

/// Bucket count used by [`bucket_sort`].
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// Sort a copy of `input` with [`DEFAULT_BUCKET_COUNT`] buckets.
///
/// # Errors
///
/// Never fails with the default bucket count; see [`bucket_sort_with`].
pub fn bucket_sort<T: Element>(
    input: &[T],
    instr: &mut Instrumentation<T>,
) -> Result<Vec<T>, SortError> {
    bucket_sort_with(input, instr, DEFAULT_BUCKET_COUNT)
}

/// Sort a copy of `input` with `bucket_count` equal-width buckets.
///
/// # Errors
///
/// Returns [`SortError::InvalidRange`] if `bucket_count` is zero.
pub fn bucket_sort_with<T: Element>(
    input: &[T],
    instr: &mut Instrumentation<T>,
    bucket_count: usize,
) -> Result<Vec<T>, SortError> {
    if bucket_count == 0 {
        return Err(SortError::InvalidRange {
            algorithm: NAME,
            detail: "bucket count must be at least 1".into(),
        });
    }
    if is_trivial(input) {
        return Ok(input.to_vec());
    }

    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); bucket_count];
    let (min, max) = value_bounds(input);
    #[allow(clippy::cast_precision_loss)]
    let width = (max.to_f64() - min.to_f64()) / bucket_count as f64;
    let last = bucket_count - 1;

    for &value in input {
        let index = if max.partial_cmp(&value) != Some(Ordering::Greater) {
            last
        } else {
            bucket_index(value.to_f64(), min.to_f64(), width).min(last)
        };
        buckets[index].push(value);
    }

    let mut output = Vec::with_capacity(input.len());
    for bucket in &mut buckets {
        if bucket.is_empty() {
            continue;
        }
        insert_run(bucket, instr, false);
        output.extend_from_slice(bucket);
        instr.record_step(&output);
    }
    Ok(output)
}

/// Smallest and largest element under `>`, first occurrence wins on ties.
///
/// Uncounted: bounds are setup, not ordering work.
fn value_bounds<T: Element>(input: &[T]) -> (T, T) {
    let mut min = input[0];
    let mut max = input[0];
    for &value in &input[1..] {
        if min > value {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    (min, max)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bucket_index(value: f64, min: f64, width: f64) -> usize {
    if width <= 0.0 || !width.is_finite() {
        return 0;
    }
    // Saturating float-to-int cast: NaN maps to 0, overflow to usize::MAX.
    ((value - min) / width).floor().max(0.0) as usize
}
