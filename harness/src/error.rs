//! Typed harness errors.
//!
//! Harness errors fail a whole call before any algorithm runs. A single
//! algorithm's [`SortError`] or panic is recorded in its result instead.
//!
//! [`SortError`]: sortlab_kernel::error::SortError

use thiserror::Error;

/// Error from the generator, runner, or config loader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    /// Distribution name is not one of [`crate::generator::Distribution::ALL`].
    #[error("invalid distribution: {name:?}")]
    InvalidDistribution { name: String },
    /// A size or divisor is outside the supported bounds.
    #[error("invalid range: {detail}")]
    InvalidRange { detail: String },
    /// Configuration could not be parsed or is inconsistent.
    #[error("config error: {detail}")]
    Config { detail: String },
}
