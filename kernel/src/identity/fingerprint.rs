//! State fingerprints: the canonical key of a `WorldState`.

use crate::model::state::WorldState;

use super::hash::{canonical_hash, ContentHash, HashDomain};

/// `canonical_hash(WorldState, state.identity_bytes())`.
///
/// Equal for `states_equal` states; distinct otherwise (up to SHA-256
/// collisions, which callers may rule out with `states_equal`).
#[must_use]
pub fn state_fingerprint(state: &WorldState) -> ContentHash {
    canonical_hash(HashDomain::WorldState, &state.identity_bytes())
}
