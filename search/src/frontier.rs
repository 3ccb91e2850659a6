//! Best-first frontier of partial paths.
//!
//! Holds node ids keyed by [`FrontierKey`]. A binary heap replaces the
//! "append then stable-sort" list: pops come out in the same order, because
//! `creation_order` makes every key unique and increases with insertion.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::FrontierKey;

/// `BinaryHeap` is a max-heap, so entries are wrapped in `Reverse` to pop the
/// lowest key first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    key: FrontierKey,
    node_id: u64,
}

/// Best-first frontier manager.
#[derive(Debug, Default)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    high_water: u64,
}

impl BestFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the path ending at `node_id`.
    pub fn push(&mut self, key: FrontierKey, node_id: u64) {
        self.heap.push(Reverse(FrontierEntry { key, node_id }));
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Remove the cheapest path (oldest on ties).
    pub fn pop(&mut self) -> Option<(FrontierKey, u64)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.key, entry.node_id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier ever reached.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
