//! Sortlab Harness: input generation, correctness checking, benchmarking.
//!
//! The harness drives the kernel's algorithms through [`SortFn`] pointers
//! only. It never reaches into an algorithm's internals; every count it
//! reports comes from the kernel's `Instrumentation`.
//!
//! - [`generator::generate_test_data`] -- seeded inputs under a [`generator::Distribution`]
//! - [`correctness::test_correctness`] -- pass/fail per algorithm against the reference sort
//! - [`runner::benchmark`] -- one timed, counted call per (size, distribution, algorithm)
//! - [`report::BenchmarkReport`] -- aggregation, JSON rendering, counts digest
//!
//! A panicking algorithm is contained with `catch_unwind` and reported as a
//! failure; the release profile must keep `panic = "unwind"`.
//!
//! [`SortFn`]: sortlab_kernel::algorithms::SortFn

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod correctness;
pub mod error;
pub mod generator;
mod guard;
pub mod report;
pub mod runner;

pub use config::{BenchmarkConfig, GeneratorConfig, HarnessConfig};
pub use correctness::{standard_cases, test_correctness, TestCase};
pub use error::HarnessError;
pub use generator::{generate_test_data, generate_test_data_with, input_digest, Distribution};
pub use report::{BenchmarkReport, BenchmarkResult};
#[cfg(feature = "parallel")]
pub use runner::benchmark_parallel;
pub use runner::{benchmark, benchmark_with};
