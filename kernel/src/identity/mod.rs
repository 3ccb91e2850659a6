//! Identity: domain-separated content hashing and state fingerprints.
//!
//! **Exactly one place defines canonical hashing** ([`hash::canonical_hash`]).

pub mod fingerprint;
pub mod hash;
