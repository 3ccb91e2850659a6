//! Plan reports and their on-disk form.
//!
//! A report is what a user sees of a plan: one summary per step (what the
//! robot did, where it ended up, what it holds, what it cost) and the total.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   plan_report.json     compact JSON, sorted keys
//!   search_graph.json    compact JSON, sorted keys
//!   report_digest.txt    "sha256:..." over plan_report.json
//! ```
//!
//! The report embeds the digest of the graph, so verifying the report digest
//! and the graph digest binds both files.

use std::path::Path;

use serde::Serialize;

use roomplan_kernel::identity::hash::{canonical_hash, ContentHash, HashDomain};
use roomplan_kernel::model::object::ObjectType;
use roomplan_kernel::model::state::WorldState;
use roomplan_kernel::transition::action::ActionKind;
use roomplan_search::graph::SearchGraphV1;
use roomplan_search::search::{path_cost, PathStepV1};

use crate::error::RunError;

pub const REPORT_FILENAME: &str = "plan_report.json";
pub const GRAPH_FILENAME: &str = "search_graph.json";
pub const DIGEST_FILENAME: &str = "report_digest.txt";

/// A path step in the room world.
pub type RoomStep = PathStepV1<WorldState, ActionKind>;

/// One executed step as shown to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSummaryV1 {
    /// 1-based position in the plan.
    pub index: usize,
    /// Short verb (`"walk"`, `"force_door"`, ...).
    pub action: String,
    /// Readable sentence, e.g. `"force door north to c"`.
    pub description: String,
    /// Room the robot is in after the step.
    pub room: String,
    /// That room's contents after the step.
    pub contents: ObjectType,
    /// What the robot holds after the step.
    pub holding: ObjectType,
    pub cost_millis: u64,
}

impl StepSummaryV1 {
    #[must_use]
    pub fn from_step(index: usize, step: &RoomStep) -> Self {
        let room = step.to.current_room();
        Self {
            index,
            action: step.label.verb().to_string(),
            description: step.label.describe(&step.from),
            room: room.name.clone(),
            contents: room.contents,
            holding: step.to.holding(),
            cost_millis: step.cost.millis(),
        }
    }
}

/// Summary of one planning request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanReportV1 {
    pub world_id: String,
    /// Goal as text.
    pub goal: String,
    /// Termination reason name (`"goal_reached"`, `"already_at_goal"`).
    pub outcome: String,
    pub start_room: String,
    pub final_room: String,
    pub final_holding: ObjectType,
    pub steps: Vec<StepSummaryV1>,
    pub total_cost_millis: u64,
    /// Total cost in units, e.g. `"11.25"`.
    pub total_cost: String,
    /// One-line route, e.g. `"a -10-> b -0.25-> b"`.
    pub path_summary: String,
    pub expansions: u64,
    pub cache_hits: u64,
    /// `sha256:` digest of the search graph JSON.
    pub search_graph_digest: String,
}

impl PlanReportV1 {
    /// Build the report for a found path.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the graph cannot be serialized for
    /// its digest.
    pub fn build(
        goal: &str,
        start: &WorldState,
        path: &[RoomStep],
        graph: &SearchGraphV1,
    ) -> Result<Self, serde_json::Error> {
        let last = path.last().map_or(start, |step| &step.to);
        let total = path_cost(path);
        Ok(Self {
            world_id: graph.metadata.world_id.clone(),
            goal: goal.to_string(),
            outcome: graph.metadata.termination_reason.as_str().to_string(),
            start_room: start.current_room().name.clone(),
            final_room: last.current_room().name.clone(),
            final_holding: last.holding(),
            steps: path
                .iter()
                .enumerate()
                .map(|(i, step)| StepSummaryV1::from_step(i + 1, step))
                .collect(),
            total_cost_millis: total.millis(),
            total_cost: total.to_string(),
            path_summary: path_summary(start, path),
            expansions: graph.metadata.total_expansions,
            cache_hits: graph.metadata.total_cache_hits,
            search_graph_digest: graph.digest()?.to_string(),
        })
    }

    /// Compact JSON bytes with sorted keys.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        // Round-trip through `Value` so object keys come out sorted.
        serde_json::to_vec(&serde_json::to_value(self)?)
    }

    /// Content hash of [`Self::to_json_bytes`].
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, serde_json::Error> {
        Ok(canonical_hash(HashDomain::PlanReport, &self.to_json_bytes()?))
    }
}

/// `"a -1-> b -0.25-> b"`: the start room, then each step's cost and the
/// room the robot is in afterwards.
#[must_use]
pub fn path_summary(start: &WorldState, path: &[RoomStep]) -> String {
    let mut out = start.current_room().name.clone();
    for step in path {
        out.push_str(&format!(" -{}-> {}", step.cost, step.to.current_room().name));
    }
    out
}

/// Write a report and its search graph to `dir` (created if missing).
///
/// Returns the report digest.
///
/// # Errors
///
/// Returns [`RunError::Io`] on any filesystem failure and
/// [`RunError::Json`] if serialization fails.
pub fn write_report_dir(
    dir: &Path,
    report: &PlanReportV1,
    graph: &SearchGraphV1,
) -> Result<ContentHash, RunError> {
    std::fs::create_dir_all(dir).map_err(io_error(dir))?;

    let report_bytes = report.to_json_bytes()?;
    let digest = canonical_hash(HashDomain::PlanReport, &report_bytes);
    let files = [
        (REPORT_FILENAME, report_bytes),
        (GRAPH_FILENAME, graph.to_json_bytes()?),
        (DIGEST_FILENAME, digest.to_string().into_bytes()),
    ];
    for (name, bytes) in files {
        let path = dir.join(name);
        std::fs::write(&path, bytes).map_err(io_error(&path))?;
    }
    log::info!("wrote plan report {digest} to {}", dir.display());
    Ok(digest)
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> RunError {
    let path = path.to_path_buf();
    move |source| RunError::Io { path, source }
}

/// Re-hash a report directory and check both digests.
///
/// Returns the verified report digest.
///
/// # Errors
///
/// Returns [`RunError::Io`] for a missing file, [`RunError::Json`] for a
/// report that does not parse, and [`RunError::DigestMismatch`] if either
/// file was altered.
pub fn verify_report_dir(dir: &Path) -> Result<ContentHash, RunError> {
    let read = |name: &str| {
        let path = dir.join(name);
        std::fs::read(&path).map_err(|source| RunError::Io { path, source })
    };
    let report_bytes = read(REPORT_FILENAME)?;
    let graph_bytes = read(GRAPH_FILENAME)?;
    let stored = String::from_utf8_lossy(&read(DIGEST_FILENAME)?)
        .trim()
        .to_string();

    let recomputed = canonical_hash(HashDomain::PlanReport, &report_bytes);
    if stored != recomputed.to_string() {
        return Err(RunError::DigestMismatch {
            stored,
            recomputed: recomputed.to_string(),
        });
    }

    let report: serde_json::Value = serde_json::from_slice(&report_bytes)?;
    let declared = report["search_graph_digest"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    let graph_digest = canonical_hash(HashDomain::SearchGraph, &graph_bytes);
    if declared != graph_digest.to_string() {
        return Err(RunError::DigestMismatch {
            stored: declared,
            recomputed: graph_digest.to_string(),
        });
    }
    Ok(recomputed)
}
