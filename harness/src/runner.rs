//! Planning entry points.
//!
//! [`plan`] answers one goal from one state. [`PlannerSession`] keeps the
//! robot's current state between goals: each successful plan moves the robot
//! to the plan's final state, as if the plan had been played back.

use roomplan_kernel::model::compile::{compile_map, MapSpecV1};
use roomplan_kernel::model::goal::GoalSpecV1;
use roomplan_kernel::model::state::WorldState;
use roomplan_kernel::transition::cost::Cost;
use roomplan_search::graph::{SearchGraphV1, TerminationReasonV1};
use roomplan_search::policy::SearchPolicyV1;
use roomplan_search::search::{path_cost, search};

use crate::command::GoalCommand;
use crate::config::ResolvedConfig;
use crate::error::RunError;
use crate::report::{PlanReportV1, RoomStep};
use crate::world::RoomWorld;

/// A successful planning request.
#[derive(Debug)]
pub struct PlanRun {
    /// Steps in execution order (empty if the start already matched).
    pub path: Vec<RoomStep>,
    pub graph: SearchGraphV1,
    pub report: PlanReportV1,
}

impl PlanRun {
    #[must_use]
    pub fn outcome(&self) -> TerminationReasonV1 {
        self.graph.metadata.termination_reason
    }

    #[must_use]
    pub fn total_cost(&self) -> Cost {
        path_cost(&self.path)
    }

    /// State after the last step, `None` for an empty plan.
    #[must_use]
    pub fn final_state(&self) -> Option<&WorldState> {
        self.path.last().map(|step| &step.to)
    }
}

/// Plan a cheapest route from `start` to `goal`.
///
/// # Errors
///
/// Returns [`RunError::Goal`] if the goal names an unknown room,
/// [`RunError::Search`] if no path exists or the budget runs out, and
/// [`RunError::Json`] if the report cannot be serialized.
pub fn plan(
    world: &RoomWorld,
    policy: &SearchPolicyV1,
    start: &WorldState,
    goal: &GoalSpecV1,
) -> Result<PlanRun, RunError> {
    let pattern = goal.resolve(start)?;
    let result = search(world, start.clone(), &pattern, policy)?;
    if let Some(err) = result.failure() {
        log::info!("goal \"{goal}\": {err}");
        return Err(err.into());
    }
    let path = result.path.unwrap_or_default();
    let report = PlanReportV1::build(&goal.to_string(), start, &path, &result.graph)?;
    log::info!(
        "goal \"{goal}\": {} steps, cost {} ({})",
        path.len(),
        report.total_cost,
        report.path_summary
    );
    Ok(PlanRun {
        path,
        graph: result.graph,
        report,
    })
}

/// User-facing one-line result, e.g. `"Already at goal"`.
#[must_use]
pub fn feedback(result: &Result<PlanRun, RunError>) -> String {
    match result {
        Ok(run) if run.path.is_empty() => "Already at goal".to_string(),
        Ok(run) => format!(
            "Reached goal in {} steps, cost {}",
            run.path.len(),
            run.report.total_cost
        ),
        Err(err) if err.is_no_path() => "No path to goal".to_string(),
        Err(RunError::Parse(err)) => format!("Bad command: {err}"),
        Err(err) => err.to_string(),
    }
}

/// A robot on a map, answering goals one after another.
#[derive(Debug, Clone)]
pub struct PlannerSession {
    world: RoomWorld,
    policy: SearchPolicyV1,
    state: WorldState,
}

impl PlannerSession {
    /// Compile `map` and place the robot at its start.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Map`] if the map is malformed.
    pub fn new(
        world_id: &str,
        map: &MapSpecV1,
        config: &ResolvedConfig,
    ) -> Result<Self, RunError> {
        let state = compile_map(map)?;
        Ok(Self::from_state(
            RoomWorld::new(world_id, config.costs),
            config.policy.clone(),
            state,
        ))
    }

    #[must_use]
    pub fn from_state(world: RoomWorld, policy: SearchPolicyV1, state: WorldState) -> Self {
        Self {
            world,
            policy,
            state,
        }
    }

    /// Where the robot is now.
    #[must_use]
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    #[must_use]
    pub fn world(&self) -> &RoomWorld {
        &self.world
    }

    /// Plan towards `goal` and, on success, advance to the plan's end.
    ///
    /// A failed plan leaves the robot where it was.
    ///
    /// # Errors
    ///
    /// See [`plan`].
    pub fn plan_goal(&mut self, goal: &GoalSpecV1) -> Result<PlanRun, RunError> {
        let run = plan(&self.world, &self.policy, &self.state, goal)?;
        if let Some(end) = run.final_state() {
            self.state = end.clone();
        }
        Ok(run)
    }

    /// Parse a `goto`/`get`/`put` command and plan it.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Parse`] for a bad command, otherwise as
    /// [`Self::plan_goal`].
    pub fn run_command(&mut self, line: &str) -> Result<PlanRun, RunError> {
        let command: GoalCommand = line.parse()?;
        log::debug!("command: {command}");
        self.plan_goal(&command.goal_spec())
    }
}
