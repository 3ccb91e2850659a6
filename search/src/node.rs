//! Path nodes and the frontier ordering key.
//!
//! A partial path is represented by its last node; the rest of the path is
//! recovered through `parent_id` links.

use roomplan_kernel::identity::hash::ContentHash;
use roomplan_kernel::transition::cost::Cost;

/// The last step of a partial path.
///
/// Nodes live in an arena indexed by `node_id`; node 0 is the start state.
#[derive(Debug, Clone)]
pub struct PathNodeV1<S, L> {
    /// Arena index.
    pub node_id: u64,
    /// Previous node on the path (`None` for the start).
    pub parent_id: Option<u64>,
    /// State reached by this path.
    pub state: S,
    /// Canonical fingerprint of `state`.
    pub state_key: ContentHash,
    /// Step that produced this node (`None` for the start).
    pub label: Option<L>,
    /// Cost of that step alone.
    pub step_cost: Cost,
    /// Total path cost: sum of every step cost from the start.
    pub g_cost: Cost,
    /// Number of steps from the start.
    pub depth: u32,
    /// Global push counter for stable tie-breaking.
    pub creation_order: u64,
}

impl<S, L> PathNodeV1<S, L> {
    /// The key this node is ordered by in the frontier.
    #[must_use]
    pub fn frontier_key(&self) -> FrontierKey {
        FrontierKey {
            g_cost: self.g_cost,
            creation_order: self.creation_order,
        }
    }
}

/// The frontier ordering key: `(g_cost, creation_order)`.
///
/// Lower total cost first; among equal costs, whichever was pushed first.
/// This is exactly the order of a list kept stably sorted by cost after every
/// insertion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub g_cost: Cost,
    pub creation_order: u64,
}
