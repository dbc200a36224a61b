//! Synthetic input generation under named distributions.
//!
//! Every distribution yields `i64` values so the same input can be fed to
//! all algorithms, including the integer-only ones. With `seed = Some(s)`
//! the output is a pure function of `(size, distribution, s, config)`.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sortlab_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use sortlab_kernel::proof::trace_hash::snapshot_bytes;

use crate::config::GeneratorConfig;
use crate::error::HarnessError;

/// Shape of a generated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    /// Uniform in `[1, random_max]`.
    Random,
    /// `1..=n`.
    Sorted,
    /// `n..=1`.
    Reverse,
    /// `1..=n` with `n / nearly_sorted_divisor` random pairwise swaps.
    NearlySorted,
    /// Uniform in `[1, max(1, n / duplicates_divisor)]`.
    Duplicates,
}

impl Distribution {
    /// All distributions, in declaration order.
    pub const ALL: [Distribution; 5] = [
        Self::Random,
        Self::Sorted,
        Self::Reverse,
        Self::NearlySorted,
        Self::Duplicates,
    ];

    /// Stable lowercase name (also the serde name).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::Reverse => "reverse",
            Self::NearlySorted => "nearly_sorted",
            Self::Duplicates => "duplicates",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Distribution {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|distribution| distribution.as_str() == s)
            .ok_or_else(|| HarnessError::InvalidDistribution {
                name: s.to_string(),
            })
    }
}

/// Generate `size` values with the default [`GeneratorConfig`].
///
/// # Errors
///
/// Returns [`HarnessError::InvalidRange`] if `size` is zero.
pub fn generate_test_data(
    size: usize,
    distribution: Distribution,
    seed: Option<u64>,
) -> Result<Vec<i64>, HarnessError> {
    generate_test_data_with(size, distribution, seed, &GeneratorConfig::default())
}

/// Generate `size` values with explicit generator parameters.
///
/// `seed = None` draws from OS entropy; the output is then not reproducible.
///
/// # Errors
///
/// Returns [`HarnessError::InvalidRange`] if `size` is zero or does not fit
/// in `i64`, and [`HarnessError::Config`] if `config` fails validation.
pub fn generate_test_data_with(
    size: usize,
    distribution: Distribution,
    seed: Option<u64>,
    config: &GeneratorConfig,
) -> Result<Vec<i64>, HarnessError> {
    if size == 0 {
        return Err(HarnessError::InvalidRange {
            detail: "size must be at least 1".into(),
        });
    }
    config.validate()?;
    let n = i64::try_from(size).map_err(|_| HarnessError::InvalidRange {
        detail: format!("size {size} does not fit in i64"),
    })?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let data = match distribution {
        Distribution::Random => uniform(&mut rng, size, config.random_max),
        Distribution::Sorted => (1..=n).collect(),
        Distribution::Reverse => (1..=n).rev().collect(),
        Distribution::NearlySorted => {
            let mut data: Vec<i64> = (1..=n).collect();
            // Indices are drawn independently and may coincide.
            for _ in 0..size / config.nearly_sorted_divisor {
                let i = rng.gen_range(0..size);
                let j = rng.gen_range(0..size);
                data.swap(i, j);
            }
            data
        }
        Distribution::Duplicates => {
            // Saturates; an oversized divisor falls to the `max(1)` floor.
            let divisor = i64::try_from(config.duplicates_divisor).unwrap_or(i64::MAX);
            uniform(&mut rng, size, (n / divisor).max(1))
        }
    };
    Ok(data)
}

/// Content digest of a generated input, for reproducibility checks.
#[must_use]
pub fn input_digest(data: &[i64]) -> ContentHash {
    canonical_hash(HashDomain::GeneratedInput, &snapshot_bytes(data))
}

fn uniform(rng: &mut StdRng, size: usize, max: i64) -> Vec<i64> {
    (0..size).map(|_| rng.gen_range(1..=max)).collect()
}
