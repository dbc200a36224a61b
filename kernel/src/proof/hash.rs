//! SHA-256 content hashes with domain separation.
//!
//! [`canonical_hash`] is the only place bytes are hashed. The domain prefix
//! goes in first, so a trace digest and an output digest over identical
//! bytes still differ.

use std::fmt;

use sha2::{Digest, Sha256};

pub use crate::proof::hash_domain::HashDomain;

const PREFIX: &str = "sha256:";

/// A SHA-256 digest, rendered as `"sha256:<64 lowercase hex>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    bytes: [u8; 32],
    rendered: String,
}

impl ContentHash {
    fn from_bytes(bytes: [u8; 32]) -> Self {
        let rendered = format!("{PREFIX}{}", hex::encode(bytes));
        Self { bytes, rendered }
    }

    /// Parse the rendered form. Anything but `sha256:` plus 64 hex digits is `None`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let hex_part = s.strip_prefix(PREFIX)?;
        let mut bytes = [0_u8; 32];
        hex::decode_to_slice(hex_part, &mut bytes).ok()?;
        Some(Self::from_bytes(bytes))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// The hex part, without the `sha256:` prefix.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.rendered[PREFIX.len()..]
    }

    #[must_use]
    pub fn digest_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// `sha256(domain || data)`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    ContentHash::from_bytes(hasher.finalize().into())
}
