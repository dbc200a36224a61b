//! LSD radix sort, base 10, over non-negative integer-valued elements.
//!
//! Stable, not in place. Each pass is a stable counting sort keyed on one
//! decimal digit, least significant first, and records one trace step with
//! the array after the pass. Passes continue while `max / exp > 0`.
//!
//! Memory is O(n + 10) per pass regardless of the value range, so no range
//! limit applies. Negative input has no meaningful digit decomposition
//! here and is rejected up front.

use crate::carrier::element::Element;
use crate::carrier::instrument::Instrumentation;
use crate::error::SortError;

use super::{integer_keys, is_trivial};

const NAME: &str = "Radix Sort";
const RADIX: u128 = 10;

/// Sort a copy of `input` with base-10 LSD radix sort.
///
/// # Errors
///
/// - [`SortError::UnsupportedInput`] if any element is not integer-valued
///   or is negative.
pub fn radix_sort<T: Element>(
    input: &[T],
    instr: &mut Instrumentation<T>,
) -> Result<Vec<T>, SortError> {
    let keys = non_negative_keys(input)?;
    if is_trivial(input) {
        return Ok(input.to_vec());
    }

    let max = keys.iter().copied().max().unwrap_or(0);
    let mut items: Vec<(u128, T)> = keys.into_iter().zip(input.iter().copied()).collect();
    let mut exp: u128 = 1;
    while max / exp > 0 {
        items = digit_pass(&items, exp);
        let snapshot: Vec<T> = items.iter().map(|&(_, value)| value).collect();
        instr.record_step(&snapshot);
        match exp.checked_mul(RADIX) {
            Some(next) => exp = next,
            None => break,
        }
    }
    Ok(items.into_iter().map(|(_, value)| value).collect())
}

fn non_negative_keys<T: Element>(input: &[T]) -> Result<Vec<u128>, SortError> {
    integer_keys(input, NAME)?
        .into_iter()
        .enumerate()
        .map(|(index, key)| {
            u128::try_from(key).map_err(|_| SortError::UnsupportedInput {
                algorithm: NAME,
                detail: format!("negative value {key} at index {index}"),
            })
        })
        .collect()
}

/// Stable counting sort of `items` by the decimal digit at `exp`.
fn digit_pass<T: Copy>(items: &[(u128, T)], exp: u128) -> Vec<(u128, T)> {
    let digit = |key: u128| -> usize {
        // Always < RADIX.
        usize::try_from((key / exp) % RADIX).unwrap_or(0)
    };

    let mut count = [0usize; 10];
    for &(key, _) in items {
        count[digit(key)] += 1;
    }
    for d in 1..count.len() {
        count[d] += count[d - 1];
    }

    let mut output = items.to_vec();
    for &item in items.iter().rev() {
        let slot = &mut count[digit(item.0)];
        *slot -= 1;
        output[*slot] = item;
    }
    output
}
