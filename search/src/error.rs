//! Typed search errors.
//!
//! `InvalidPolicy` is a pre-flight failure: no search steps were taken and no
//! audit graph exists. The other variants are produced by
//! [`crate::search::SearchResult::into_path`] from a finished search whose
//! graph recorded the matching [`crate::graph::TerminationReasonV1`].

/// Typed failure for search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The search policy is unusable.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
    /// Every reachable state was explored without matching the goal.
    #[error("no path to goal (explored {expansions} states)")]
    NoPathFound { expansions: u64 },
    /// The expansion budget ran out before the goal was reached.
    #[error("expansion budget of {max_expansions} exhausted before reaching the goal")]
    ExpansionBudgetExceeded { max_expansions: u64 },
}
