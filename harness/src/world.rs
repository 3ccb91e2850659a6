//! `RoomWorld`: the robot puzzle plugged into the search engine.

use roomplan_kernel::identity::fingerprint::state_fingerprint;
use roomplan_kernel::identity::hash::ContentHash;
use roomplan_kernel::model::goal::GoalPattern;
use roomplan_kernel::model::state::WorldState;
use roomplan_kernel::transition::action::ActionKind;
use roomplan_kernel::transition::cost::CostTableV1;
use roomplan_kernel::transition::successors::generate_successors;

use roomplan_search::contract::{SearchWorldV1, Transition};

/// Search adapter over kernel world states.
///
/// Holds only the cost table; every state carries its own room arena.
#[derive(Debug, Clone)]
pub struct RoomWorld {
    world_id: String,
    costs: CostTableV1,
}

impl RoomWorld {
    #[must_use]
    pub fn new(world_id: impl Into<String>, costs: CostTableV1) -> Self {
        Self {
            world_id: world_id.into(),
            costs,
        }
    }

    #[must_use]
    pub fn costs(&self) -> &CostTableV1 {
        &self.costs
    }
}

impl SearchWorldV1 for RoomWorld {
    type State = WorldState;
    type Goal = GoalPattern;
    type Label = ActionKind;

    fn world_id(&self) -> &str {
        &self.world_id
    }

    fn successors(&self, state: &WorldState) -> Vec<Transition<WorldState, ActionKind>> {
        generate_successors(state, &self.costs)
            .into_iter()
            .map(|action| Transition {
                label: action.kind,
                cost: action.cost,
                to: action.next,
            })
            .collect()
    }

    fn matches(&self, state: &WorldState, goal: &GoalPattern) -> bool {
        goal.matches(state)
    }

    fn states_equal(&self, a: &WorldState, b: &WorldState) -> bool {
        a.states_equal(b)
    }

    fn state_key(&self, state: &WorldState) -> ContentHash {
        state_fingerprint(state)
    }
}
