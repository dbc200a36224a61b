//! Algorithms module: the instrumented sort implementations.
//!
//! Depends on `carrier`. Does not import from `proof`.
//!
//! Every algorithm has the same shape, [`SortFn`]: it borrows the caller's
//! sequence, sorts a private copy, and returns it. The caller's slice is
//! never mutated. Empty and single-element inputs return immediately with
//! the instrumentation untouched.

pub mod bubble;
pub mod bucket;
pub mod counting;
pub mod descriptor;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;

use crate::carrier::element::Element;
use crate::carrier::instrument::Instrumentation;
use crate::error::SortError;

pub use bubble::bubble_sort;
pub use bucket::{bucket_sort, bucket_sort_with, DEFAULT_BUCKET_COUNT};
pub use counting::{counting_sort, counting_sort_with};
pub use descriptor::{Algorithm, Stability};
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::{quick_sort, randomized_quick_sort};
pub use radix::radix_sort;
pub use selection::selection_sort;

/// Signature shared by every algorithm.
pub type SortFn<T> = fn(&[T], &mut Instrumentation<T>) -> Result<Vec<T>, SortError>;

/// Default bound on `max - min + 1` for counting sort (16M count slots).
pub const DEFAULT_MAX_COUNTING_RANGE: u64 = 1 << 24;

/// Memory bounds for range-proportional algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortLimits {
    /// Largest `max - min + 1` counting sort will allocate a count array for.
    pub max_counting_range: u64,
}

impl Default for SortLimits {
    fn default() -> Self {
        Self {
            max_counting_range: DEFAULT_MAX_COUNTING_RANGE,
        }
    }
}

/// `true` when `input` is already trivially sorted (length 0 or 1).
pub(crate) fn is_trivial<T>(input: &[T]) -> bool {
    input.len() <= 1
}

/// Integer keys for counting-based algorithms, rejecting non-integers.
///
/// Runs before any instrumentation mutation.
pub(crate) fn integer_keys<T: Element>(
    input: &[T],
    algorithm: &'static str,
) -> Result<Vec<i128>, SortError> {
    input
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value
                .as_integer()
                .ok_or_else(|| SortError::UnsupportedInput {
                    algorithm,
                    detail: format!("non-integer value {value:?} at index {index}"),
                })
        })
        .collect()
}
