//! Proof module: canonical hashing and trace digests.
//!
//! Depends on `carrier`. Nothing depends on `proof` within the kernel.

pub mod hash;
pub mod hash_domain;
pub mod trace_hash;
