//! `SearchGraphV1`: expansion-event audit log.
//!
//! The ordered list of `ExpandEventV1` entries records every decision the
//! search made. Node summaries are a derived index for path reconstruction.
//! Costs are written as integer millis so the JSON form has no floats.

use roomplan_kernel::identity::hash::{canonical_hash, ContentHash, HashDomain};
use roomplan_kernel::transition::cost::Cost;

/// The complete search audit trail.
#[derive(Debug, Clone)]
pub struct SearchGraphV1 {
    /// Ordered expansion events.
    pub expansions: Vec<ExpandEventV1>,
    /// Derived node index sorted by `node_id` ascending.
    pub node_summaries: Vec<SearchGraphNodeSummaryV1>,
    /// Aggregate counters and termination.
    pub metadata: SearchGraphMetadata,
}

/// One frontier pop followed by the expansion of the popped path.
#[derive(Debug, Clone)]
pub struct ExpandEventV1 {
    /// Total order of expansions (the root is 0).
    pub expansion_order: u64,
    /// The node being expanded.
    pub node_id: u64,
    /// Hex fingerprint of the expanded node's state.
    pub state_fingerprint: String,
    /// The frontier key at time of pop.
    pub pop_key: PopKeyV1,
    /// Successor list reused from an earlier expansion of an equal state.
    pub served_from_cache: bool,
    /// The state had already been expanded along another path.
    pub revisit: bool,
    /// Ordered successor decision log.
    pub successors: Vec<SuccessorRecordV1>,
    /// No successor was pushed.
    pub dead_end: bool,
}

/// The frontier ordering key recorded at pop time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopKeyV1 {
    pub g_cost: Cost,
    pub creation_order: u64,
}

/// A successor with its outcome.
#[derive(Debug, Clone)]
pub struct SuccessorRecordV1 {
    /// Position in the world's successor list.
    pub index: u64,
    /// Rendered step label.
    pub label: String,
    /// Step cost.
    pub cost: Cost,
    pub outcome: SuccessorOutcomeV1,
}

/// What happened to a successor during expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuccessorOutcomeV1 {
    /// Extended path pushed onto the frontier as a new node.
    Pushed { to_node: u64 },
    /// Destination already expanded; not pushed.
    VisitedSuppressed { fingerprint: String },
}

/// Derived node summary.
#[derive(Debug, Clone)]
pub struct SearchGraphNodeSummaryV1 {
    pub node_id: u64,
    pub parent_id: Option<u64>,
    pub state_fingerprint: String,
    pub depth: u32,
    pub g_cost: Cost,
    pub is_goal: bool,
    /// First expansion of this node, if it was ever popped.
    pub expansion_order: Option<u64>,
}

/// Aggregate metadata.
#[derive(Debug, Clone)]
pub struct SearchGraphMetadata {
    pub world_id: String,
    pub root_state_fingerprint: String,

    // Counters
    pub total_expansions: u64,
    pub total_cache_hits: u64,
    pub total_successors_generated: u64,
    pub total_visited_suppressed: u64,
    pub total_revisits: u64,
    pub frontier_high_water: u64,

    // Policy echo
    pub max_expansions: u64,

    pub termination_reason: TerminationReasonV1,
}

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// The start state already matched the goal; nothing was expanded.
    AlreadyAtGoal,
    /// A popped path ended in a goal state.
    GoalReached { node_id: u64 },
    /// Frontier emptied without finding a goal.
    FrontierExhausted,
    /// `max_expansions` budget was hit.
    ExpansionBudgetExceeded,
}

impl TerminationReasonV1 {
    /// Stable snake-case name used in JSON and fixture output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlreadyAtGoal => "already_at_goal",
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

// ---------------------------------------------------------------------------
// JSON serialization
// ---------------------------------------------------------------------------

impl SearchGraphV1 {
    /// Serialize the graph to compact JSON bytes with sorted keys.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json_value())
    }

    /// Content hash of [`Self::to_json_bytes`].
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, serde_json::Error> {
        let bytes = self.to_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchGraph, &bytes))
    }

    /// The graph as a JSON value. Object keys are sorted.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
            "node_summaries": self.node_summaries.iter().map(node_summary_to_json).collect::<Vec<_>>(),
        })
    }
}

fn expand_event_to_json(e: &ExpandEventV1) -> serde_json::Value {
    serde_json::json!({
        "dead_end": e.dead_end,
        "expansion_order": e.expansion_order,
        "node_id": e.node_id,
        "pop_key": {
            "creation_order": e.pop_key.creation_order,
            "g_cost_millis": e.pop_key.g_cost.millis(),
        },
        "revisit": e.revisit,
        "served_from_cache": e.served_from_cache,
        "state_fingerprint": e.state_fingerprint,
        "successors": e.successors.iter().map(successor_record_to_json).collect::<Vec<_>>(),
    })
}

fn successor_record_to_json(r: &SuccessorRecordV1) -> serde_json::Value {
    serde_json::json!({
        "cost_millis": r.cost.millis(),
        "index": r.index,
        "label": r.label,
        "outcome": outcome_to_json(&r.outcome),
    })
}

fn outcome_to_json(o: &SuccessorOutcomeV1) -> serde_json::Value {
    match o {
        SuccessorOutcomeV1::Pushed { to_node } => {
            serde_json::json!({"to_node": to_node, "type": "pushed"})
        }
        SuccessorOutcomeV1::VisitedSuppressed { fingerprint } => {
            serde_json::json!({"fingerprint": fingerprint, "type": "visited_suppressed"})
        }
    }
}

fn node_summary_to_json(n: &SearchGraphNodeSummaryV1) -> serde_json::Value {
    serde_json::json!({
        "depth": n.depth,
        "expansion_order": n.expansion_order,
        "g_cost_millis": n.g_cost.millis(),
        "is_goal": n.is_goal,
        "node_id": n.node_id,
        "parent_id": n.parent_id,
        "state_fingerprint": n.state_fingerprint,
    })
}

fn termination_to_json(t: TerminationReasonV1) -> serde_json::Value {
    match t {
        TerminationReasonV1::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": t.as_str()})
        }
        _ => serde_json::json!({"type": t.as_str()}),
    }
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "frontier_high_water": m.frontier_high_water,
        "max_expansions": m.max_expansions,
        "root_state_fingerprint": m.root_state_fingerprint,
        "termination_reason": termination_to_json(m.termination_reason),
        "total_cache_hits": m.total_cache_hits,
        "total_expansions": m.total_expansions,
        "total_revisits": m.total_revisits,
        "total_successors_generated": m.total_successors_generated,
        "total_visited_suppressed": m.total_visited_suppressed,
        "world_id": m.world_id,
    })
}
