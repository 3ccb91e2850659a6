//! Harness error types.
//!
//! Kernel and search errors pass through unchanged inside [`RunError`], so
//! callers can still match on `MapError`, `GoalError` or `SearchError`.

use std::path::PathBuf;

use roomplan_kernel::model::compile::MapError;
use roomplan_kernel::model::goal::GoalError;
use roomplan_kernel::model::object::ParseEnumError;
use roomplan_kernel::transition::cost::CostError;
use roomplan_search::error::SearchError;

/// Malformed text input: a connection token or a goal command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nothing but whitespace.
    #[error("empty input")]
    Empty,
    /// The first word is not `goto`, `get` or `put`.
    #[error("unknown command {verb:?}")]
    UnknownCommand { verb: String },
    /// A required argument is missing.
    #[error("{command} needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    /// More words than the form accepts.
    #[error("unexpected trailing input {rest:?}")]
    TrailingInput { rest: String },
    /// A connection token is not `<direction> <H|D> <room>`.
    #[error("bad connection {token:?}: {detail}")]
    BadConnection { token: String, detail: String },
    /// Unknown object, direction or connection type.
    #[error(transparent)]
    Enum(#[from] ParseEnumError),
}

/// Unusable planner configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The bytes are not a valid config document.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// `preset` names no known cost table.
    #[error("unknown cost preset {name:?}")]
    UnknownPreset { name: String },
    /// A cost override is not a usable cost.
    #[error(transparent)]
    Cost(#[from] CostError),
    /// The search policy is unusable.
    #[error(transparent)]
    Policy(#[from] SearchError),
}

/// Any failure while loading a map or answering a goal.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("malformed map: {0}")]
    Map(#[from] MapError),
    #[error("invalid goal: {0}")]
    Goal(#[from] GoalError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A map file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A report directory does not verify.
    #[error("report digest mismatch: stored {stored}, recomputed {recomputed}")]
    DigestMismatch { stored: String, recomputed: String },
}

impl RunError {
    /// `true` if the goal was valid but unreachable.
    #[must_use]
    pub fn is_no_path(&self) -> bool {
        matches!(self, Self::Search(SearchError::NoPathFound { .. }))
    }
}
