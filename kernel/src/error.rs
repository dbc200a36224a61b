//! Typed sort errors.
//!
//! `SortError` represents precondition failures only. Every variant is
//! detected before the algorithm touches its [`Instrumentation`], so a
//! rejected call leaves no partial counters or trace behind.
//!
//! [`Instrumentation`]: crate::carrier::instrument::Instrumentation

use thiserror::Error;

/// Typed failure for algorithm precondition validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The input contains values the algorithm cannot key on
    /// (non-integer for counting/radix, negative for radix).
    #[error("{algorithm}: unsupported input: {detail}")]
    UnsupportedInput {
        algorithm: &'static str,
        detail: String,
    },
    /// A size parameter is outside the supported bounds
    /// (counting range above the configured limit, zero buckets).
    #[error("{algorithm}: invalid range: {detail}")]
    InvalidRange {
        algorithm: &'static str,
        detail: String,
    },
}

impl SortError {
    /// Name of the algorithm that rejected its input.
    #[must_use]
    pub fn algorithm(&self) -> &'static str {
        match self {
            Self::UnsupportedInput { algorithm, .. } | Self::InvalidRange { algorithm, .. } => {
                algorithm
            }
        }
    }
}
