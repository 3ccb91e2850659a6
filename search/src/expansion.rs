//! Lazy expansion and revisit detection.
//!
//! Both tables bucket states by their canonical key and confirm membership
//! with strict `states_equal`, so a key collision can never merge two
//! different states. Uses `BTreeMap` (not `HashMap`) for deterministic
//! iteration order.

use std::collections::BTreeMap;
use std::rc::Rc;

use roomplan_kernel::identity::hash::ContentHash;

use crate::contract::{SearchWorldV1, Transition};

/// Successor list for one state, shared between every path that reaches it.
pub type Successors<S, L> = Rc<[Transition<S, L>]>;

/// Result of asking the cache for a state's successors.
#[derive(Debug)]
pub struct Expansion<S, L> {
    pub transitions: Successors<S, L>,
    /// `true` if the list was computed earlier and reused.
    pub from_cache: bool,
}

/// Memoization layer for `SearchWorldV1::successors`.
///
/// Successors of a state are generated on first request and reused on every
/// later request for an equal state. The states themselves stay plain values.
#[derive(Debug)]
pub struct ExpansionCache<S, L> {
    entries: BTreeMap<ContentHash, Vec<(S, Successors<S, L>)>>,
    computed: u64,
    hits: u64,
}

impl<S: Clone, L> ExpansionCache<S, L> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            computed: 0,
            hits: 0,
        }
    }

    /// Successors of `state`, computing them only the first time.
    ///
    /// `key` must be `world.state_key(state)`.
    pub fn expand<W>(&mut self, world: &W, state: &S, key: ContentHash) -> Expansion<S, L>
    where
        W: SearchWorldV1<State = S, Label = L>,
    {
        let bucket = self.entries.entry(key).or_default();
        if let Some((_, transitions)) = bucket.iter().find(|(s, _)| world.states_equal(s, state)) {
            self.hits += 1;
            return Expansion {
                transitions: Rc::clone(transitions),
                from_cache: true,
            };
        }
        let transitions: Successors<S, L> = world.successors(state).into();
        bucket.push((state.clone(), Rc::clone(&transitions)));
        self.computed += 1;
        Expansion {
            transitions,
            from_cache: false,
        }
    }

    /// Number of states whose successors were actually generated.
    #[must_use]
    pub fn computed(&self) -> u64 {
        self.computed
    }

    /// Number of requests answered from the cache.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }
}

impl<S: Clone, L> Default for ExpansionCache<S, L> {
    fn default() -> Self {
        Self::new()
    }
}

/// States that have already been expanded.
///
/// A successor equal to any member is never pushed onto the frontier.
#[derive(Debug)]
pub struct VisitedSet<S> {
    buckets: BTreeMap<ContentHash, Vec<S>>,
    len: usize,
}

impl<S: Clone> VisitedSet<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
            len: 0,
        }
    }

    /// `true` if a `states_equal` state has been inserted.
    pub fn contains<W>(&self, world: &W, key: &ContentHash, state: &S) -> bool
    where
        W: SearchWorldV1<State = S>,
    {
        self.buckets
            .get(key)
            .is_some_and(|bucket| bucket.iter().any(|s| world.states_equal(s, state)))
    }

    /// Record `state` as visited.
    ///
    /// Returns `false` if it was already present (nothing is added).
    pub fn insert<W>(&mut self, world: &W, key: ContentHash, state: &S) -> bool
    where
        W: SearchWorldV1<State = S>,
    {
        let bucket = self.buckets.entry(key).or_default();
        if bucket.iter().any(|s| world.states_equal(s, state)) {
            return false;
        }
        bucket.push(state.clone());
        self.len += 1;
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: Clone> Default for VisitedSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
