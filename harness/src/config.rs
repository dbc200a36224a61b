//! Harness configuration.
//!
//! All sections deserialize with `#[serde(default)]`, so an empty JSON
//! object is a valid config that reproduces the built-in defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sortlab_kernel::algorithms::{Algorithm, SortFn};

use crate::error::HarnessError;
use crate::generator::Distribution;

/// Parameters for [`crate::generator::generate_test_data_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Upper bound (inclusive) for `random` values.
    pub random_max: i64,
    /// `nearly_sorted` performs `n / nearly_sorted_divisor` swaps.
    pub nearly_sorted_divisor: usize,
    /// `duplicates` draws from `[1, max(1, n / duplicates_divisor)]`.
    pub duplicates_divisor: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            random_max: 1000,
            nearly_sorted_divisor: 10,
            duplicates_divisor: 3,
        }
    }
}

impl GeneratorConfig {
    /// Check bounds the generator relies on.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] if `random_max < 1` or a divisor is zero.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.random_max < 1 {
            return Err(HarnessError::Config {
                detail: format!("random_max must be >= 1, got {}", self.random_max),
            });
        }
        if self.nearly_sorted_divisor == 0 || self.duplicates_divisor == 0 {
            return Err(HarnessError::Config {
                detail: "divisors must be non-zero".into(),
            });
        }
        Ok(())
    }
}

/// Parameters for [`crate::runner::benchmark_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Base seed. `None` generates each input from entropy.
    pub seed: Option<u64>,
    pub generator: GeneratorConfig,
}

/// A complete benchmark plan, as loaded from JSON.
///
/// Distribution and algorithm names are kept as strings and resolved on
/// demand so that an unknown name surfaces as a typed error rather than a
/// deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub sizes: Vec<usize>,
    pub distributions: Vec<String>,
    pub algorithms: Vec<String>,
    pub benchmark: BenchmarkConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 1000],
            distributions: Distribution::ALL
                .iter()
                .map(|d| d.as_str().to_string())
                .collect(),
            algorithms: Algorithm::CLASSIC
                .iter()
                .map(|a| a.name().to_string())
                .collect(),
            benchmark: BenchmarkConfig::default(),
        }
    }
}

impl HarnessConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] on malformed JSON or invalid
    /// generator parameters.
    pub fn from_json_str(json: &str) -> Result<Self, HarnessError> {
        let config: Self = serde_json::from_str(json).map_err(|e| HarnessError::Config {
            detail: e.to_string(),
        })?;
        config.benchmark.generator.validate()?;
        Ok(config)
    }

    /// Resolve `distributions` to typed values.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidDistribution`] for the first unknown name.
    pub fn distributions(&self) -> Result<Vec<Distribution>, HarnessError> {
        self.distributions.iter().map(|name| name.parse()).collect()
    }

    /// Resolve `algorithms` to a name-keyed registry.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] for the first unknown algorithm name.
    pub fn registry(&self) -> Result<BTreeMap<String, SortFn<i64>>, HarnessError> {
        self.algorithms
            .iter()
            .map(|name| {
                let algorithm = name
                    .parse::<Algorithm>()
                    .map_err(|e| HarnessError::Config {
                        detail: e.to_string(),
                    })?;
                Ok((algorithm.name().to_string(), algorithm.sort_fn::<i64>()))
            })
            .collect()
    }
}
