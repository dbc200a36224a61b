//! Sortlab Kernel: instrumented sorting algorithms.
//!
//! # API Surface
//!
//! - [`carrier::instrument::Instrumentation`] -- per-run comparison/swap counters and step trace
//! - [`algorithms`] -- one `fn(&[T], &mut Instrumentation<T>) -> Result<Vec<T>, SortError>` per algorithm
//! - [`algorithms::descriptor::Algorithm`] -- fixed metadata (stability, in-place, complexity)
//! - [`proof::trace_hash::trace_digest`] -- content digest of a recorded trace
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `algorithms` ← `proof`
//!
//! One-way only. No cycles. `carrier` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod carrier;
pub mod error;
pub mod proof;
