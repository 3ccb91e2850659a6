//! Canonical hashing types and domain separation.
//!
//! Algorithm: SHA-256 over `domain_prefix || data`. Every prefix is
//! null-terminated and unique, so equal data hashed under different domains
//! never collides.

use std::fmt;

use sha2::{Digest, Sha256};

/// Typed domain separator for [`canonical_hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// `WorldState` identity bytes (visited set, expansion cache).
    WorldState,
    /// Serialized search audit graph.
    SearchGraph,
    /// Serialized plan report.
    PlanReport,
}

impl HashDomain {
    /// All domains in declaration order.
    pub const ALL: &'static [HashDomain] = &[Self::WorldState, Self::SearchGraph, Self::PlanReport];

    /// The raw prefix bytes (null-terminated).
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::WorldState => b"ROOMPLAN::WORLD_STATE::V1\0",
            Self::SearchGraph => b"ROOMPLAN::SEARCH_GRAPH::V1\0",
            Self::PlanReport => b"ROOMPLAN::PLAN_REPORT::V1\0",
        }
    }
}

/// A SHA-256 content hash.
///
/// Displays as `sha256:<64 hex chars>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    digest: [u8; 32],
}

impl ContentHash {
    /// Algorithm label used in the string form.
    pub const ALGORITHM: &'static str = "sha256";

    /// Parse the `sha256:<hex>` string form.
    ///
    /// Returns `None` for any other algorithm, bad hex, or wrong length.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let hex_part = s.strip_prefix("sha256:")?;
        let bytes = hex::decode(hex_part).ok()?;
        let digest: [u8; 32] = bytes.try_into().ok()?;
        Some(Self { digest })
    }

    /// Raw digest bytes.
    #[must_use]
    pub const fn digest(&self) -> &[u8; 32] {
        &self.digest
    }

    /// Lowercase hex digest without the algorithm prefix.
    #[must_use]
    pub fn hex_digest(&self) -> String {
        hex::encode(self.digest)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", Self::ALGORITHM, self.hex_digest())
    }
}

/// Hash `data` under `domain`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    ContentHash {
        digest: hasher.finalize().into(),
    }
}
