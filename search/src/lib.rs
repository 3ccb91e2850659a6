//! Roomplan Search: lazy best-first search over implicit graphs, with an
//! auditable expansion log.
//!
//! This crate depends only on `roomplan_kernel` (for `Cost` and
//! `ContentHash`). It does NOT depend on `roomplan_harness`; the room world is
//! plugged in through [`contract::SearchWorldV1`].
//!
//! # Crate dependency graph
//!
//! ```text
//! roomplan_kernel  ←  roomplan_search  ←  roomplan_harness
//! (world model)       (frontier, cache)    (adapters, runner, worlds)
//! ```
//!
//! # Key types
//!
//! - [`SearchWorldV1`]: successors, goal matching, strict equality, state key
//! - [`BestFirstFrontier`]: cost-ordered frontier with stable ties
//! - [`ExpansionCache`]: memoized (lazy) successor lists
//! - [`VisitedSet`]: exact-state revisit detection
//! - [`SearchGraphV1`]: expansion-event audit log
//! - [`SearchPolicyV1`]: expansion budget

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod expansion;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod policy;
pub mod search;

pub use contract::{SearchWorldV1, Transition};
pub use error::SearchError;
pub use expansion::{ExpansionCache, VisitedSet};
pub use frontier::BestFirstFrontier;
pub use graph::SearchGraphV1;
pub use policy::SearchPolicyV1;
pub use search::{find_path, search, PathStepV1, SearchResult};
