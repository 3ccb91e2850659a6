//! Search entry point and expansion loop.
//!
//! Uniform-cost search over partial paths. The start state is tested first;
//! if it already satisfies the goal the result is an empty path. Otherwise the
//! start is expanded, and the loop repeatedly pops the cheapest path (oldest
//! on ties), returns it if its last state matches the goal, and expands it
//! otherwise. The goal test happens at pop time, so the first goal popped is
//! a cheapest one.

use roomplan_kernel::identity::hash::ContentHash;
use roomplan_kernel::transition::cost::Cost;

use crate::contract::SearchWorldV1;
use crate::error::SearchError;
use crate::expansion::{ExpansionCache, VisitedSet};
use crate::frontier::BestFirstFrontier;
use crate::graph::{
    ExpandEventV1, PopKeyV1, SearchGraphMetadata, SearchGraphNodeSummaryV1, SearchGraphV1,
    SuccessorOutcomeV1, SuccessorRecordV1, TerminationReasonV1,
};
use crate::node::{FrontierKey, PathNodeV1};
use crate::policy::SearchPolicyV1;

/// One step of a finished path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStepV1<S, L> {
    pub from: S,
    pub to: S,
    pub label: L,
    pub cost: Cost,
}

/// Sum of the step costs of `path`.
#[must_use]
pub fn path_cost<S, L>(path: &[PathStepV1<S, L>]) -> Cost {
    path.iter().map(|step| step.cost).sum()
}

/// Result of a search execution.
///
/// Always contains the complete `SearchGraphV1` audit trail regardless of
/// how the search terminated.
#[derive(Debug)]
pub struct SearchResult<S, L> {
    /// The path found (empty if the start already matched the goal).
    pub path: Option<Vec<PathStepV1<S, L>>>,
    /// The complete search graph audit trail.
    pub graph: SearchGraphV1,
}

impl<S, L> SearchResult<S, L> {
    #[must_use]
    pub fn termination(&self) -> TerminationReasonV1 {
        self.graph.metadata.termination_reason
    }

    /// Returns `true` if a path was found (including the empty one).
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.termination(),
            TerminationReasonV1::GoalReached { .. } | TerminationReasonV1::AlreadyAtGoal
        )
    }

    /// Total cost of the path found, if any.
    #[must_use]
    pub fn total_cost(&self) -> Option<Cost> {
        self.path.as_deref().map(path_cost)
    }

    /// The typed failure matching the termination reason, if the goal was
    /// not reached.
    #[must_use]
    pub fn failure(&self) -> Option<SearchError> {
        let metadata = &self.graph.metadata;
        match metadata.termination_reason {
            TerminationReasonV1::AlreadyAtGoal | TerminationReasonV1::GoalReached { .. } => None,
            TerminationReasonV1::FrontierExhausted => Some(SearchError::NoPathFound {
                expansions: metadata.total_expansions,
            }),
            TerminationReasonV1::ExpansionBudgetExceeded => {
                Some(SearchError::ExpansionBudgetExceeded {
                    max_expansions: metadata.max_expansions,
                })
            }
        }
    }

    /// The path, or the typed failure the graph recorded.
    ///
    /// # Errors
    ///
    /// [`SearchError::NoPathFound`] if the frontier was exhausted and
    /// [`SearchError::ExpansionBudgetExceeded`] if the budget ran out.
    pub fn into_path(self) -> Result<Vec<PathStepV1<S, L>>, SearchError> {
        match self.failure() {
            Some(err) => Err(err),
            None => Ok(self.path.unwrap_or_default()),
        }
    }
}

/// Find a cheapest path and discard the audit graph.
///
/// # Errors
///
/// See [`search`] and [`SearchResult::into_path`].
pub fn find_path<W: SearchWorldV1>(
    world: &W,
    start: W::State,
    goal: &W::Goal,
    policy: &SearchPolicyV1,
) -> Result<Vec<PathStepV1<W::State, W::Label>>, SearchError> {
    search(world, start, goal, policy)?.into_path()
}

/// Run a best-first search from `start` to any state matching `goal`.
///
/// A finished search is always `Ok`: failures to reach the goal are recorded
/// in the graph's termination reason.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
pub fn search<W: SearchWorldV1>(
    world: &W,
    start: W::State,
    goal: &W::Goal,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<W::State, W::Label>, SearchError> {
    policy.validate()?;

    let start_key = world.state_key(&start);
    let mut run = SearchRun::new(world, policy, start, start_key);

    if world.matches(&run.nodes[0].state, goal) {
        log::debug!("{}: start already matches goal", world.world_id());
        return Ok(run.finish(TerminationReasonV1::AlreadyAtGoal));
    }

    run.visited.insert(world, start_key, &run.nodes[0].state);
    run.expand(0, FrontierKey::default(), false);

    let termination = loop {
        let Some((key, node_id)) = run.frontier.pop() else {
            break TerminationReasonV1::FrontierExhausted;
        };
        let node = &run.nodes[slot(node_id)];
        if world.matches(&node.state, goal) {
            break TerminationReasonV1::GoalReached { node_id };
        }
        if run.total_expansions >= policy.max_expansions {
            log::warn!(
                "{}: expansion budget of {} exhausted",
                world.world_id(),
                policy.max_expansions
            );
            break TerminationReasonV1::ExpansionBudgetExceeded;
        }
        let revisit = !run.visited.insert(world, node.state_key, &node.state);
        run.expand(node_id, key, revisit);
    };

    Ok(run.finish(termination))
}

/// Node ids are arena indices created from `Vec::len`.
#[allow(clippy::cast_possible_truncation)]
fn slot(node_id: u64) -> usize {
    node_id as usize
}

/// Mutable state of one search.
struct SearchRun<'w, W: SearchWorldV1> {
    world: &'w W,
    max_expansions: u64,
    nodes: Vec<PathNodeV1<W::State, W::Label>>,
    /// First expansion order of each node, parallel to `nodes`.
    expanded_at: Vec<Option<u64>>,
    frontier: BestFirstFrontier,
    visited: VisitedSet<W::State>,
    cache: ExpansionCache<W::State, W::Label>,
    events: Vec<ExpandEventV1>,
    next_creation_order: u64,
    total_expansions: u64,
    total_successors_generated: u64,
    total_visited_suppressed: u64,
    total_revisits: u64,
}

impl<'w, W: SearchWorldV1> SearchRun<'w, W> {
    fn new(world: &'w W, policy: &SearchPolicyV1, start: W::State, start_key: ContentHash) -> Self {
        let root = PathNodeV1 {
            node_id: 0,
            parent_id: None,
            state: start,
            state_key: start_key,
            label: None,
            step_cost: Cost::ZERO,
            g_cost: Cost::ZERO,
            depth: 0,
            creation_order: 0,
        };
        Self {
            world,
            max_expansions: policy.max_expansions,
            nodes: vec![root],
            expanded_at: vec![None],
            frontier: BestFirstFrontier::new(),
            visited: VisitedSet::new(),
            cache: ExpansionCache::new(),
            events: Vec::new(),
            next_creation_order: 1,
            total_expansions: 0,
            total_successors_generated: 0,
            total_visited_suppressed: 0,
            total_revisits: 0,
        }
    }

    /// Expand the path ending at `node_id`, pushing every successor whose
    /// destination has not been expanded yet.
    fn expand(&mut self, node_id: u64, pop_key: FrontierKey, revisit: bool) {
        let world = self.world;
        let parent = &self.nodes[slot(node_id)];
        let state = parent.state.clone();
        let state_key = parent.state_key;
        let parent_g = parent.g_cost;
        let parent_depth = parent.depth;

        let expansion = self.cache.expand(world, &state, state_key);
        let expansion_order = self.total_expansions;
        self.total_expansions += 1;
        if revisit {
            self.total_revisits += 1;
        }

        let mut records = Vec::with_capacity(expansion.transitions.len());
        for (index, transition) in expansion.transitions.iter().enumerate() {
            self.total_successors_generated += 1;
            let to_key = world.state_key(&transition.to);
            let outcome = if self.visited.contains(world, &to_key, &transition.to) {
                self.total_visited_suppressed += 1;
                SuccessorOutcomeV1::VisitedSuppressed {
                    fingerprint: to_key.hex_digest(),
                }
            } else {
                let child_id = self.nodes.len() as u64;
                let child = PathNodeV1 {
                    node_id: child_id,
                    parent_id: Some(node_id),
                    state: transition.to.clone(),
                    state_key: to_key,
                    label: Some(transition.label.clone()),
                    step_cost: transition.cost,
                    g_cost: parent_g.saturating_add(transition.cost),
                    depth: parent_depth.saturating_add(1),
                    creation_order: self.next_creation_order,
                };
                self.next_creation_order += 1;
                self.frontier.push(child.frontier_key(), child_id);
                self.nodes.push(child);
                self.expanded_at.push(None);
                SuccessorOutcomeV1::Pushed { to_node: child_id }
            };
            records.push(SuccessorRecordV1 {
                index: index as u64,
                label: transition.label.to_string(),
                cost: transition.cost,
                outcome,
            });
        }

        let dead_end = !records
            .iter()
            .any(|r| matches!(r.outcome, SuccessorOutcomeV1::Pushed { .. }));
        log::debug!(
            "{}: expand #{expansion_order} node {node_id} g={} successors={} cached={} revisit={revisit}",
            world.world_id(),
            pop_key.g_cost,
            records.len(),
            expansion.from_cache,
        );

        self.expanded_at[slot(node_id)].get_or_insert(expansion_order);
        self.events.push(ExpandEventV1 {
            expansion_order,
            node_id,
            state_fingerprint: state_key.hex_digest(),
            pop_key: PopKeyV1 {
                g_cost: pop_key.g_cost,
                creation_order: pop_key.creation_order,
            },
            served_from_cache: expansion.from_cache,
            revisit,
            successors: records,
            dead_end,
        });
    }

    fn finish(self, termination: TerminationReasonV1) -> SearchResult<W::State, W::Label> {
        let goal_id = match termination {
            TerminationReasonV1::GoalReached { node_id } => Some(node_id),
            TerminationReasonV1::AlreadyAtGoal => Some(0),
            _ => None,
        };
        let path = goal_id.map(|id| reconstruct_path(&self.nodes, id));

        match &path {
            Some(steps) => log::info!(
                "{}: {} after {} expansions, {} steps, cost {}",
                self.world.world_id(),
                termination.as_str(),
                self.total_expansions,
                steps.len(),
                path_cost(steps),
            ),
            None => log::info!(
                "{}: {} after {} expansions",
                self.world.world_id(),
                termination.as_str(),
                self.total_expansions,
            ),
        }

        let node_summaries = self
            .nodes
            .iter()
            .zip(&self.expanded_at)
            .map(|(n, expanded_at)| SearchGraphNodeSummaryV1 {
                node_id: n.node_id,
                parent_id: n.parent_id,
                state_fingerprint: n.state_key.hex_digest(),
                depth: n.depth,
                g_cost: n.g_cost,
                is_goal: goal_id == Some(n.node_id),
                expansion_order: *expanded_at,
            })
            .collect();

        let graph = SearchGraphV1 {
            expansions: self.events,
            node_summaries,
            metadata: SearchGraphMetadata {
                world_id: self.world.world_id().to_string(),
                root_state_fingerprint: self.nodes[0].state_key.hex_digest(),
                total_expansions: self.total_expansions,
                total_cache_hits: self.cache.hits(),
                total_successors_generated: self.total_successors_generated,
                total_visited_suppressed: self.total_visited_suppressed,
                total_revisits: self.total_revisits,
                frontier_high_water: self.frontier.high_water(),
                max_expansions: self.max_expansions,
                termination_reason: termination,
            },
        };

        SearchResult { path, graph }
    }
}

/// Rebuild the steps from the root to `goal_id` by following parent links.
fn reconstruct_path<S: Clone, L: Clone>(
    nodes: &[PathNodeV1<S, L>],
    goal_id: u64,
) -> Vec<PathStepV1<S, L>> {
    let mut steps = Vec::new();
    let mut current = &nodes[slot(goal_id)];
    while let (Some(parent_id), Some(label)) = (current.parent_id, &current.label) {
        let parent = &nodes[slot(parent_id)];
        steps.push(PathStepV1 {
            from: parent.state.clone(),
            to: current.state.clone(),
            label: label.clone(),
            cost: current.step_cost,
        });
        current = parent;
    }
    steps.reverse();
    steps
}
