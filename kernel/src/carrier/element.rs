//! `Element`: the orderable numeric values every algorithm sorts.
//!
//! # Ordering planes
//!
//! An element carries two orderings that are deliberately kept apart:
//!
//! - The *instrumented* ordering is `PartialOrd::gt`. It is the only predicate
//!   [`crate::carrier::instrument::Instrumentation::compare`] evaluates, and
//!   its "strictly greater" semantics are what make ties never swap.
//! - The *reference* ordering is [`Element::total_cmp`]. It is used only to
//!   build trusted expected outputs, never inside an algorithm.
//!
//! Counting and radix sort additionally need an exact integer view
//! ([`Element::as_integer`]); bucket sort needs a float view
//! ([`Element::to_f64`]) for its bucket index.

use std::cmp::Ordering;
use std::fmt::Debug;

/// A value the kernel can sort, count, bucket, and digest.
pub trait Element: Copy + Debug + Default + PartialOrd {
    /// Total order used for reference sorting outside the instrumented path.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Exact integer value, or `None` if the element is not integer-valued
    /// (fractional or non-finite floats).
    fn as_integer(&self) -> Option<i128>;

    /// Lossy float view for distribution-based placement.
    fn to_f64(&self) -> f64;

    /// Fixed-width little-endian bytes for trace digests.
    ///
    /// Integers widen to `i128` (16 bytes); floats encode `to_bits()` of the
    /// `f64` view (8 bytes). The width is fixed per type so concatenated
    /// snapshots are unambiguous.
    fn canonical_bytes(&self) -> Vec<u8>;
}

macro_rules! impl_integer_element {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Element for $ty {
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                fn as_integer(&self) -> Option<i128> {
                    Some(i128::from(*self))
                }

                #[allow(clippy::cast_precision_loss)]
                fn to_f64(&self) -> f64 {
                    *self as f64
                }

                fn canonical_bytes(&self) -> Vec<u8> {
                    i128::from(*self).to_le_bytes().to_vec()
                }
            }
        )+
    };
}

impl_integer_element!(i32, i64, u32, u64);

/// Largest magnitude at which every `f64` is still an exact integer in `i128`.
const F64_EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53

fn float_as_integer(value: f64) -> Option<i128> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > F64_EXACT_INTEGER_LIMIT {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    Some(value as i128)
}

impl Element for f64 {
    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }

    fn as_integer(&self) -> Option<i128> {
        float_as_integer(*self)
    }

    fn to_f64(&self) -> f64 {
        *self
    }

    fn canonical_bytes(&self) -> Vec<u8> {
        self.to_bits().to_le_bytes().to_vec()
    }
}

impl Element for f32 {
    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }

    fn as_integer(&self) -> Option<i128> {
        float_as_integer(f64::from(*self))
    }

    fn to_f64(&self) -> f64 {
        f64::from(*self)
    }

    fn canonical_bytes(&self) -> Vec<u8> {
        f64::from(*self).to_bits().to_le_bytes().to_vec()
    }
}

/// Sort a copy of `input` with the reference total order.
///
/// This is the trusted oracle for correctness checks. It never touches an
/// [`crate::carrier::instrument::Instrumentation`].
#[must_use]
pub fn reference_sorted<T: Element>(input: &[T]) -> Vec<T> {
    let mut out = input.to_vec();
    out.sort_by(Element::total_cmp);
    out
}

/// `true` if `seq` is non-decreasing under the instrumented predicate.
#[must_use]
pub fn is_non_decreasing<T: Element>(seq: &[T]) -> bool {
    seq.windows(2)
        .all(|w| w[0].partial_cmp(&w[1]) != Some(Ordering::Greater))
}
