//! Benchmark results and their aggregation.
//!
//! The report is a nested `BTreeMap`, so iteration order (and therefore the
//! JSON rendering) is fixed: size ascending, distribution in declaration
//! order, algorithm name ascending.

use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::{json, Map, Value};
use sortlab_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::generator::Distribution;

/// Measurements for one (algorithm, size, distribution) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkResult {
    /// Wall time of the single timed call.
    pub elapsed: Duration,
    pub comparisons: u64,
    pub swaps: u64,
    /// Number of recorded snapshots.
    pub trace_len: usize,
    /// Output matched the reference sort.
    pub is_correct: bool,
    /// Rejection or panic message, if the call produced no output.
    pub error: Option<String>,
}

impl BenchmarkResult {
    /// Wall time in whole nanoseconds, saturating at `u64::MAX`.
    #[must_use]
    pub fn elapsed_nanos(&self) -> u64 {
        u64::try_from(self.elapsed.as_nanos()).unwrap_or(u64::MAX)
    }

    /// JSON form of the deterministic fields only.
    fn counts_json(&self) -> Value {
        json!({
            "comparisons": self.comparisons,
            "swaps": self.swaps,
            "trace_len": self.trace_len,
            "is_correct": self.is_correct,
            "error": self.error,
        })
    }

    /// Full JSON form, including wall time as integer nanoseconds.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let mut value = self.counts_json();
        if let Value::Object(map) = &mut value {
            map.insert("elapsed_nanos".into(), json!(self.elapsed_nanos()));
        }
        value
    }
}

/// size → distribution → algorithm name → `R`.
pub type Grid<R> = BTreeMap<usize, BTreeMap<Distribution, BTreeMap<String, R>>>;

/// algorithm name → distribution → size → result.
pub type ByAlgorithm<'a> =
    BTreeMap<&'a str, BTreeMap<Distribution, BTreeMap<usize, &'a BenchmarkResult>>>;

/// All results of one benchmark run, keyed size → distribution → algorithm.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchmarkReport {
    results: Grid<BenchmarkResult>,
}

impl BenchmarkReport {
    pub(crate) fn insert(
        &mut self,
        size: usize,
        distribution: Distribution,
        algorithm: String,
        result: BenchmarkResult,
    ) {
        self.results
            .entry(size)
            .or_default()
            .entry(distribution)
            .or_default()
            .insert(algorithm, result);
    }

    /// The nested result map.
    #[must_use]
    pub fn results(&self) -> &Grid<BenchmarkResult> {
        &self.results
    }

    #[must_use]
    pub fn get(
        &self,
        size: usize,
        distribution: Distribution,
        algorithm: &str,
    ) -> Option<&BenchmarkResult> {
        self.results.get(&size)?.get(&distribution)?.get(algorithm)
    }

    /// Number of recorded triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results
            .values()
            .flat_map(BTreeMap::values)
            .map(BTreeMap::len)
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every recorded result is correct. Vacuously true when empty.
    #[must_use]
    pub fn all_correct(&self) -> bool {
        self.entries().all(|(_, _, _, result)| result.is_correct)
    }

    /// Flat iteration in report order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, Distribution, &str, &BenchmarkResult)> {
        self.results.iter().flat_map(|(&size, by_distribution)| {
            by_distribution
                .iter()
                .flat_map(move |(&distribution, by_name)| {
                    by_name
                        .iter()
                        .map(move |(name, result)| (size, distribution, name.as_str(), result))
                })
        })
    }

    /// Regroup as algorithm → distribution → size.
    #[must_use]
    pub fn by_algorithm(&self) -> ByAlgorithm<'_> {
        let mut grouped = ByAlgorithm::new();
        for (size, distribution, name, result) in self.entries() {
            grouped
                .entry(name)
                .or_default()
                .entry(distribution)
                .or_default()
                .insert(size, result);
        }
        grouped
    }

    /// JSON object `{size: {distribution: {algorithm: result}}}`.
    ///
    /// Sizes become decimal string keys; all numbers are integers.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        self.render(BenchmarkResult::to_json_value)
    }

    /// Compact JSON bytes with sorted keys.
    #[must_use]
    pub fn to_canonical_json_bytes(&self) -> Vec<u8> {
        self.to_json_value().to_string().into_bytes()
    }

    /// Digest of counts and correctness, excluding wall time.
    ///
    /// Two seeded runs with the same plan produce the same digest.
    #[must_use]
    pub fn counts_digest(&self) -> ContentHash {
        let bytes = self.render(BenchmarkResult::counts_json).to_string();
        canonical_hash(HashDomain::BenchmarkCounts, bytes.as_bytes())
    }

    fn render(&self, leaf: impl Fn(&BenchmarkResult) -> Value) -> Value {
        let mut root = Map::new();
        for (size, by_distribution) in &self.results {
            let mut distributions = Map::new();
            for (distribution, by_name) in by_distribution {
                let names: Map<String, Value> = by_name
                    .iter()
                    .map(|(name, result)| (name.clone(), leaf(result)))
                    .collect();
                distributions.insert(distribution.as_str().to_string(), Value::Object(names));
            }
            root.insert(size.to_string(), Value::Object(distributions));
        }
        Value::Object(root)
    }
}
