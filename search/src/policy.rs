//! Search policy types.

use serde::Serialize;

use crate::error::SearchError;

/// Default cap on node expansions.
pub const DEFAULT_MAX_EXPANSIONS: u64 = 100_000;

/// Search budget configuration.
///
/// The search itself is exhaustive; the budget only guards against maps far
/// larger than the hand-authored ones this engine is meant for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPolicyV1 {
    /// Hard cap on node expansions (the root counts as one).
    pub max_expansions: u64,
}

impl SearchPolicyV1 {
    /// Reject policies that could never expand anything.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}
