//! Trace hashing: whole-trace digest and per-snapshot step chain.
//!
//! Two independent claim surfaces over the same recorded trace:
//!
//! - **Trace digest**: one SHA-256 over the snapshot count followed by every
//!   snapshot's bytes. Equal digests mean two runs recorded identical traces.
//! - **Step chain**: per-snapshot hash chain. Comparing two chains localizes
//!   the first snapshot where two runs diverge in O(1) per step.
//!
//! # Snapshot encoding
//!
//! ```text
//! [len:u64le][element_0 canonical bytes]...[element_{len-1} canonical bytes]
//! ```
//!
//! Element bytes come from [`Element::canonical_bytes`], which is fixed-width
//! per type, so the encoding is unambiguous.

use thiserror::Error;

use crate::carrier::element::Element;
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Error during trace hashing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceHashError {
    /// Trace has no snapshots (step chain requires at least one).
    #[error("trace has no snapshots")]
    EmptyTrace,
}

/// Canonical bytes of one snapshot.
#[must_use]
pub fn snapshot_bytes<T: Element>(snapshot: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + snapshot.len() * 16);
    out.extend_from_slice(&(snapshot.len() as u64).to_le_bytes());
    for value in snapshot {
        out.extend_from_slice(&value.canonical_bytes());
    }
    out
}

/// Digest of a whole trace.
///
/// Formula: `sha256(DOMAIN_TRACE_DIGEST || count:u64le || snapshot_0 || ... )`.
/// An empty trace has a well-defined digest.
#[must_use]
pub fn trace_digest<T: Element>(trace: &[Vec<T>]) -> ContentHash {
    let mut payload = Vec::new();
    payload.extend_from_slice(&(trace.len() as u64).to_le_bytes());
    for snapshot in trace {
        payload.extend_from_slice(&snapshot_bytes(snapshot));
    }
    canonical_hash(HashDomain::TraceDigest, &payload)
}

/// Digest of a single sequence, e.g. a sort output.
#[must_use]
pub fn sequence_digest<T: Element>(seq: &[T]) -> ContentHash {
    canonical_hash(HashDomain::SortedOutput, &snapshot_bytes(seq))
}

/// Compute the step hash chain of a trace.
///
/// Formula:
/// - `chain_0 = sha256(DOMAIN_TRACE_STEP || snapshot_0)`
/// - `chain_i = sha256(DOMAIN_TRACE_STEP_CHAIN || chain_{i-1} || snapshot_i)`
///
/// # Errors
///
/// Returns [`TraceHashError::EmptyTrace`] if the trace has no snapshots.
pub fn step_chain<T: Element>(trace: &[Vec<T>]) -> Result<StepChainResult, TraceHashError> {
    let Some((first, rest)) = trace.split_first() else {
        return Err(TraceHashError::EmptyTrace);
    };

    let mut chain: Vec<ContentHash> = Vec::with_capacity(trace.len());
    let mut prev = canonical_hash(HashDomain::TraceStep, &snapshot_bytes(first));
    chain.push(prev.clone());

    for snapshot in rest {
        let mut input = prev.digest_bytes().to_vec();
        input.extend_from_slice(&snapshot_bytes(snapshot));
        prev = canonical_hash(HashDomain::TraceStepChain, &input);
        chain.push(prev.clone());
    }

    Ok(StepChainResult {
        digest: prev,
        chain,
    })
}

/// Result of computing the step hash chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepChainResult {
    /// The final chain digest (last element of `chain`).
    pub digest: ContentHash,
    /// One digest per snapshot, in order.
    pub chain: Vec<ContentHash>,
}

impl StepChainResult {
    /// Index of the first step where `self` and `other` differ.
    ///
    /// Returns `None` if the chains are identical. If one chain is a strict
    /// prefix of the other, the divergence is at the shorter length.
    #[must_use]
    pub fn first_divergence(&self, other: &StepChainResult) -> Option<usize> {
        let shared = self.chain.len().min(other.chain.len());
        (0..shared)
            .find(|&i| self.chain[i] != other.chain[i])
            .or((self.chain.len() != other.chain.len()).then_some(shared))
    }
}
