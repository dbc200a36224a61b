//! `Algorithm`: the algorithm catalog.
//!
//! Each variant carries fixed metadata (display name, stability, in-place
//! flag, complexity). The metadata is declared, not measured: it is the
//! contract the lock tests check the implementations against.
//!
//! The catalog is also the dispatch table: [`Algorithm::sort_fn`] maps a
//! variant to its [`SortFn`], and [`registry`] builds the name-keyed map the
//! harness consumes.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::carrier::element::Element;

use super::{
    bubble_sort, bucket_sort, counting_sort, heap_sort, insertion_sort, merge_sort, quick_sort,
    radix_sort, randomized_quick_sort, selection_sort, SortFn,
};

/// Whether equal elements keep their input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stability {
    Stable,
    Unstable,
    /// Stable only because the per-bucket sort is stable.
    Conditional,
}

impl Stability {
    /// `true` for `Stable` and `Conditional`.
    #[must_use]
    pub const fn preserves_ties(self) -> bool {
        matches!(self, Self::Stable | Self::Conditional)
    }
}

/// Asymptotic cost, as documentation strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
}

/// One entry of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Counting,
    Radix,
    Bucket,
    /// Quick sort with a seeded random pivot. Not part of [`Algorithm::CLASSIC`].
    RandomizedQuick,
}

impl Algorithm {
    /// The nine classical algorithms, in catalog order.
    pub const CLASSIC: [Algorithm; 9] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
        Self::Heap,
        Self::Counting,
        Self::Radix,
        Self::Bucket,
    ];

    /// Every algorithm, including additional variants.
    pub const ALL: [Algorithm; 10] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
        Self::Heap,
        Self::Counting,
        Self::Radix,
        Self::Bucket,
        Self::RandomizedQuick,
    ];

    /// Display name, used as the key in registries and reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
            Self::Heap => "Heap Sort",
            Self::Counting => "Counting Sort",
            Self::Radix => "Radix Sort",
            Self::Bucket => "Bucket Sort",
            Self::RandomizedQuick => "Randomized Quick Sort",
        }
    }

    #[must_use]
    pub const fn stability(self) -> Stability {
        match self {
            Self::Bubble | Self::Insertion | Self::Merge | Self::Counting | Self::Radix => {
                Stability::Stable
            }
            Self::Selection | Self::Quick | Self::Heap | Self::RandomizedQuick => {
                Stability::Unstable
            }
            Self::Bucket => Stability::Conditional,
        }
    }

    /// `true` if the algorithm needs no auxiliary array of size n.
    #[must_use]
    pub const fn in_place(self) -> bool {
        matches!(
            self,
            Self::Bubble
                | Self::Selection
                | Self::Insertion
                | Self::Quick
                | Self::Heap
                | Self::RandomizedQuick
        )
    }

    /// `true` if the algorithm orders elements with `compare` at all.
    ///
    /// Counting and radix sort place by key and never compare.
    #[must_use]
    pub const fn is_comparison_based(self) -> bool {
        !matches!(self, Self::Counting | Self::Radix)
    }

    /// `true` if the algorithm rejects some numeric inputs.
    #[must_use]
    pub const fn requires_integers(self) -> bool {
        matches!(self, Self::Counting | Self::Radix)
    }

    #[must_use]
    pub const fn complexity(self) -> Complexity {
        const fn c(
            best: &'static str,
            average: &'static str,
            worst: &'static str,
            space: &'static str,
        ) -> Complexity {
            Complexity {
                best,
                average,
                worst,
                space,
            }
        }
        match self {
            Self::Bubble => c("O(n)", "O(n^2)", "O(n^2)", "O(1)"),
            Self::Selection => c("O(n^2)", "O(n^2)", "O(n^2)", "O(1)"),
            Self::Insertion => c("O(n)", "O(n^2)", "O(n^2)", "O(1)"),
            Self::Merge => c("O(n log n)", "O(n log n)", "O(n log n)", "O(n)"),
            Self::Quick | Self::RandomizedQuick => {
                c("O(n log n)", "O(n log n)", "O(n^2)", "O(log n)")
            }
            Self::Heap => c("O(n log n)", "O(n log n)", "O(n log n)", "O(1)"),
            Self::Counting => c("O(n + k)", "O(n + k)", "O(n + k)", "O(k)"),
            Self::Radix => c("O(d(n + b))", "O(d(n + b))", "O(d(n + b))", "O(n + b)"),
            Self::Bucket => c("O(n + k)", "O(n + k)", "O(n^2)", "O(n + k)"),
        }
    }

    /// The implementation for element type `T`.
    #[must_use]
    pub fn sort_fn<T: Element>(self) -> SortFn<T> {
        match self {
            Self::Bubble => bubble_sort,
            Self::Selection => selection_sort,
            Self::Insertion => insertion_sort,
            Self::Merge => merge_sort,
            Self::Quick => quick_sort,
            Self::Heap => heap_sort,
            Self::Counting => counting_sort,
            Self::Radix => radix_sort,
            Self::Bucket => bucket_sort,
            Self::RandomizedQuick => randomized_quick_sort,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm: {0}")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Name-keyed map of the given algorithms.
#[must_use]
pub fn registry_of<T: Element>(algorithms: &[Algorithm]) -> BTreeMap<String, SortFn<T>> {
    algorithms
        .iter()
        .map(|algorithm| (algorithm.name().to_string(), algorithm.sort_fn::<T>()))
        .collect()
}

/// Name-keyed map of the nine classical algorithms.
#[must_use]
pub fn registry<T: Element>() -> BTreeMap<String, SortFn<T>> {
    registry_of(&Algorithm::CLASSIC)
}
