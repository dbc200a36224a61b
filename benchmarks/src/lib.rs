//! Shared helpers for sortlab benchmark suites.

use sortlab_harness::runner::derive_seed;
use sortlab_harness::{generate_test_data, Distribution};
use sortlab_kernel::algorithms::Algorithm;

/// Base seed for every bench input, so criterion compares like with like.
pub const BENCH_SEED: u64 = 0xBE7C_0000;

/// Sizes for the quadratic algorithms.
pub const SMALL_SIZES: [usize; 3] = [64, 256, 1024];

/// Sizes for the n log n and linear-time algorithms.
pub const LARGE_SIZES: [usize; 3] = [1024, 4096, 16384];

/// Seeded input for one (size, distribution) cell.
///
/// # Panics
///
/// Panics if `size` is zero. Benchmark setup failures are fatal.
#[must_use]
pub fn bench_input(size: usize, distribution: Distribution) -> Vec<i64> {
    generate_test_data(size, distribution, Some(derive_seed(BENCH_SEED, size, distribution)))
        .expect("bench sizes are non-zero")
}

/// `true` for algorithms whose worst or typical case is quadratic.
#[must_use]
pub fn is_quadratic(algorithm: Algorithm) -> bool {
    matches!(
        algorithm,
        Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion
    )
}

/// Sizes appropriate for `algorithm`.
#[must_use]
pub fn sizes_for(algorithm: Algorithm) -> &'static [usize] {
    if is_quadratic(algorithm) {
        &SMALL_SIZES
    } else {
        &LARGE_SIZES
    }
}
