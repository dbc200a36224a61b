//! Domain prefixes for [`canonical_hash`](super::hash::canonical_hash).
//!
//! The byte strings live here and nowhere else; a lock test greps the
//! kernel and harness sources to keep it that way.

/// What kind of artifact a digest covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashDomain {
    /// Every snapshot of one sort run, with the snapshot count.
    TraceDigest,
    /// First link of the per-step chain.
    TraceStep,
    /// Every later link: previous link digest, then the snapshot.
    TraceStepChain,
    /// A single sequence, usually a sort's output.
    SortedOutput,
    /// A sequence produced by the harness generator.
    GeneratedInput,
    /// Counts and correctness of a benchmark report.
    BenchmarkCounts,
}

impl HashDomain {
    pub const ALL: [HashDomain; 6] = [
        Self::TraceDigest,
        Self::TraceStep,
        Self::TraceStepChain,
        Self::SortedOutput,
        Self::GeneratedInput,
        Self::BenchmarkCounts,
    ];

    /// NUL-terminated prefix fed to the hasher ahead of the payload.
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::TraceDigest => b"SORTLAB::TRACE_DIGEST::V1\0",
            Self::TraceStep => b"SORTLAB::TRACE_STEP::V1\0",
            Self::TraceStepChain => b"SORTLAB::TRACE_STEP_CHAIN::V1\0",
            Self::SortedOutput => b"SORTLAB::SORTED_OUTPUT::V1\0",
            Self::GeneratedInput => b"SORTLAB::GENERATED_INPUT::V1\0",
            Self::BenchmarkCounts => b"SORTLAB::BENCHMARK_COUNTS::V1\0",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TraceDigest => "TraceDigest",
            Self::TraceStep => "TraceStep",
            Self::TraceStepChain => "TraceStepChain",
            Self::SortedOutput => "SortedOutput",
            Self::GeneratedInput => "GeneratedInput",
            Self::BenchmarkCounts => "BenchmarkCounts",
        }
    }
}

impl std::fmt::Display for HashDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
