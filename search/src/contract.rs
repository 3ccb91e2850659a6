//! Search world contract trait.

use std::fmt;

use roomplan_kernel::identity::hash::ContentHash;
use roomplan_kernel::transition::cost::Cost;

/// One outgoing edge of the implicit graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<S, L> {
    /// What the step does (world-defined).
    pub label: L,
    /// Non-negative step cost.
    pub cost: Cost,
    /// Destination state.
    pub to: S,
}

/// Trait for worlds that support search.
///
/// # Contract
///
/// - `successors` must be a pure function of `state`: the engine calls it at
///   most once per distinct state and reuses the result.
/// - `states_equal` is strict equality for cycle avoidance. It must not be
///   implemented with `matches`.
/// - `state_key` must agree with `states_equal`: equal states have equal
///   keys. Unequal states should have unequal keys; the engine confirms
///   key hits with `states_equal`.
/// - Enumeration must be deterministic: same state → same transitions in the
///   same order.
pub trait SearchWorldV1 {
    /// Concrete state type.
    type State: Clone;
    /// Goal pattern type (possibly partial).
    type Goal: ?Sized;
    /// Step label carried on each transition.
    type Label: Clone + fmt::Display;

    /// Unique world identifier, echoed into the audit graph.
    fn world_id(&self) -> &str;

    /// Every legal one-step transition out of `state`.
    fn successors(&self, state: &Self::State) -> Vec<Transition<Self::State, Self::Label>>;

    /// Partial goal test.
    fn matches(&self, state: &Self::State, goal: &Self::Goal) -> bool;

    /// Strict state equality.
    fn states_equal(&self, a: &Self::State, b: &Self::State) -> bool;

    /// Canonical fingerprint of a state.
    fn state_key(&self, state: &Self::State) -> ContentHash;
}
