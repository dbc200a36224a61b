//! Benchmark runner: time and count every algorithm over a grid of inputs.
//!
//! # Pipeline
//!
//! ```text
//! validate sizes + generator config
//!   → for each (size, distribution): generate input, reference-sort it
//!     → for each algorithm: fresh Instrumentation → one timed call → compare
//!   → BenchmarkReport
//! ```
//!
//! Input generation happens once per (size, distribution), so every
//! algorithm is measured on the same sequence. With a base seed the input
//! seed is derived from `(seed, size, distribution)`, which makes counts and
//! correctness reproducible across runs and processes. Wall time is not.
//!
//! There is no warm-up and no repetition: each triple is one call.

use std::collections::BTreeMap;
use std::time::Instant;

use sortlab_kernel::algorithms::SortFn;
use sortlab_kernel::carrier::element::reference_sorted;
use sortlab_kernel::carrier::instrument::Instrumentation;
use tracing::{debug, info, warn};

use crate::config::BenchmarkConfig;
use crate::error::HarnessError;
use crate::generator::{generate_test_data_with, Distribution};
use crate::guard::run_guarded;
use crate::report::{BenchmarkReport, BenchmarkResult};

/// Benchmark with the default config (entropy-seeded inputs).
///
/// # Errors
///
/// See [`benchmark_with`].
pub fn benchmark(
    sizes: &[usize],
    distributions: &[Distribution],
    algorithms: &BTreeMap<String, SortFn<i64>>,
) -> Result<BenchmarkReport, HarnessError> {
    benchmark_with(sizes, distributions, algorithms, &BenchmarkConfig::default())
}

/// Benchmark every (size, distribution, algorithm) triple serially.
///
/// Inputs are generated per (size, distribution), not per triple: every
/// algorithm in a cell sorts the same sequence, so their counts compare
/// directly.
///
/// An algorithm that rejects its input or panics gets a result with
/// `is_correct = false` and `error` set; the run continues.
///
/// # Errors
///
/// Returns [`HarnessError::InvalidRange`] if any size is zero and
/// [`HarnessError::Config`] if the generator config is invalid. Both are
/// detected before anything is measured.
pub fn benchmark_with(
    sizes: &[usize],
    distributions: &[Distribution],
    algorithms: &BTreeMap<String, SortFn<i64>>,
    config: &BenchmarkConfig,
) -> Result<BenchmarkReport, HarnessError> {
    preflight(sizes, config)?;
    let started = Instant::now();
    let mut report = BenchmarkReport::default();

    for input in plan_inputs(sizes, distributions, config)? {
        for (name, &sort) in algorithms {
            let result = measure(name, sort, &input.data, &input.expected);
            log_triple(name, &input, &result);
            report.insert(input.size, input.distribution, name.clone(), result);
        }
    }

    info!(
        triples = report.len(),
        all_correct = report.all_correct(),
        elapsed = ?started.elapsed(),
        "benchmark run complete"
    );
    Ok(report)
}

/// Same triples as [`benchmark_with`], executed on the rayon pool.
///
/// Inputs are generated up front on the calling thread, so a seeded run
/// yields the same counts and correctness as the serial runner. Wall times
/// differ because triples contend for cores.
///
/// # Errors
///
/// See [`benchmark_with`].
#[cfg(feature = "parallel")]
pub fn benchmark_parallel(
    sizes: &[usize],
    distributions: &[Distribution],
    algorithms: &BTreeMap<String, SortFn<i64>>,
    config: &BenchmarkConfig,
) -> Result<BenchmarkReport, HarnessError> {
    use rayon::prelude::*;

    preflight(sizes, config)?;
    let started = Instant::now();
    let inputs = plan_inputs(sizes, distributions, config)?;

    let triples: Vec<(&PlannedInput, &String, SortFn<i64>)> = inputs
        .iter()
        .flat_map(|input| {
            algorithms
                .iter()
                .map(move |(name, &sort)| (input, name, sort))
        })
        .collect();

    let measured: Vec<(&PlannedInput, &String, BenchmarkResult)> = triples
        .into_par_iter()
        .map(|(input, name, sort)| {
            let result = measure(name, sort, &input.data, &input.expected);
            log_triple(name, input, &result);
            (input, name, result)
        })
        .collect();

    let mut report = BenchmarkReport::default();
    for (input, name, result) in measured {
        report.insert(input.size, input.distribution, name.clone(), result);
    }

    info!(
        triples = report.len(),
        all_correct = report.all_correct(),
        threads = rayon::current_num_threads(),
        elapsed = ?started.elapsed(),
        "parallel benchmark run complete"
    );
    Ok(report)
}

/// Seed for one (size, distribution) cell, mixed from the base seed.
#[must_use]
pub fn derive_seed(base: u64, size: usize, distribution: Distribution) -> u64 {
    let tag = distribution as u64;
    splitmix64(base ^ splitmix64(size as u64) ^ splitmix64(tag.wrapping_add(0x5EED)))
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

struct PlannedInput {
    size: usize,
    distribution: Distribution,
    data: Vec<i64>,
    expected: Vec<i64>,
}

fn preflight(sizes: &[usize], config: &BenchmarkConfig) -> Result<(), HarnessError> {
    if let Some(position) = sizes.iter().position(|&size| size == 0) {
        return Err(HarnessError::InvalidRange {
            detail: format!("sizes[{position}] is zero"),
        });
    }
    config.generator.validate()
}

fn plan_inputs(
    sizes: &[usize],
    distributions: &[Distribution],
    config: &BenchmarkConfig,
) -> Result<Vec<PlannedInput>, HarnessError> {
    let mut inputs = Vec::with_capacity(sizes.len() * distributions.len());
    for &size in sizes {
        for &distribution in distributions {
            let seed = config
                .seed
                .map(|base| derive_seed(base, size, distribution));
            let data = generate_test_data_with(size, distribution, seed, &config.generator)?;
            let expected = reference_sorted(&data);
            inputs.push(PlannedInput {
                size,
                distribution,
                data,
                expected,
            });
        }
    }
    Ok(inputs)
}

fn measure(name: &str, sort: SortFn<i64>, data: &[i64], expected: &[i64]) -> BenchmarkResult {
    let mut instr = Instrumentation::new();
    let start = Instant::now();
    let outcome = run_guarded(sort, data, &mut instr);
    let elapsed = start.elapsed();
    let counts = instr.counts();

    let (is_correct, error) = match outcome {
        Ok(output) => (output == expected, None),
        Err(failure) => {
            warn!(algorithm = name, size = data.len(), %failure, "benchmark call failed");
            (false, Some(failure.to_string()))
        }
    };

    BenchmarkResult {
        elapsed,
        comparisons: counts.comparisons,
        swaps: counts.swaps,
        trace_len: counts.trace_len,
        is_correct,
        error,
    }
}

fn log_triple(name: &str, input: &PlannedInput, result: &BenchmarkResult) {
    debug!(
        algorithm = name,
        size = input.size,
        distribution = %input.distribution,
        comparisons = result.comparisons,
        swaps = result.swaps,
        elapsed_ns = result.elapsed_nanos(),
        is_correct = result.is_correct,
        "measured"
    );
}
