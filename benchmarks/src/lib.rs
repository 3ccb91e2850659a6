//! Shared helpers for roomplan benchmark suites.

use roomplan_harness::world::RoomWorld;
use roomplan_harness::worlds::builtin_map;
use roomplan_kernel::model::compile::{compile_map, MapSpecV1, RoomSpecV1};
use roomplan_kernel::model::goal::{GoalPattern, GoalSpecV1};
use roomplan_kernel::model::object::{ConnectionType, Direction, ObjectType};
use roomplan_kernel::model::state::WorldState;
use roomplan_kernel::transition::action::ActionKind;
use roomplan_kernel::transition::cost::CostTableV1;
use roomplan_search::policy::SearchPolicyV1;
use roomplan_search::search::{search, SearchResult};

/// A compiled search problem: world, start state, resolved goal, budget.
pub struct Regime {
    pub name: String,
    pub world: RoomWorld,
    pub start: WorldState,
    pub goal: GoalPattern,
    pub policy: SearchPolicyV1,
}

impl Regime {
    /// Compile `map` and resolve `goal` against it.
    ///
    /// # Panics
    ///
    /// Panics if the map does not compile or the goal names an unknown room.
    /// Benchmark setup failures are fatal.
    #[must_use]
    pub fn new(name: &str, map: &MapSpecV1, goal: &GoalSpecV1, policy: SearchPolicyV1) -> Self {
        let start = compile_map(map).expect("benchmark map compiles");
        let goal = goal.resolve(&start).expect("benchmark goal resolves");
        Self {
            name: name.to_string(),
            world: RoomWorld::new(name, CostTableV1::default()),
            start,
            goal,
            policy,
        }
    }
}

fn goto(room: &str) -> GoalSpecV1 {
    GoalSpecV1 {
        room: Some(room.to_string()),
        ..GoalSpecV1::default()
    }
}

fn holding(object: ObjectType) -> GoalSpecV1 {
    GoalSpecV1 {
        holding: Some(object),
        ..GoalSpecV1::default()
    }
}

/// Built-in map by name.
///
/// # Panics
///
/// Panics if `name` is not a built-in map.
#[must_use]
pub fn builtin(name: &str) -> MapSpecV1 {
    builtin_map(name).expect("builtin map exists")
}

/// The standard benchmark regimes, each stressing a different search shape.
///
/// - `manor_far_door`: two key detours, deep path
/// - `manor_nearest_orb`: holding-only goal
/// - `long_way_round`: a cheap long route against an expensive short one
/// - `unreachable`: frontier exhaustion
/// - `budget_limited`: expansion budget hit before the goal
/// - `grid_6`: synthetic 6x6 grid with doors and a key
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        Regime::new(
            "manor_far_door",
            &builtin("manor"),
            &goto("l"),
            SearchPolicyV1::default(),
        ),
        Regime::new(
            "manor_nearest_orb",
            &builtin("manor"),
            &holding(ObjectType::Orb),
            SearchPolicyV1::default(),
        ),
        Regime::new(
            "long_way_round",
            &builtin("long_way_round"),
            &goto("j"),
            SearchPolicyV1::default(),
        ),
        Regime::new(
            "unreachable",
            &builtin("unreachable"),
            &goto("c"),
            SearchPolicyV1::default(),
        ),
        Regime::new(
            "budget_limited",
            &builtin("manor"),
            &goto("l"),
            SearchPolicyV1 { max_expansions: 25 },
        ),
        Regime::new(
            "grid_6",
            &grid_map(6),
            &holding(ObjectType::Orb),
            SearchPolicyV1::default(),
        ),
    ]
}

/// Run only `search()` on a prepared regime.
///
/// # Panics
///
/// Panics if the regime's policy is invalid.
#[must_use]
pub fn run_search_only(regime: &Regime) -> SearchResult<WorldState, ActionKind> {
    search(&regime.world, regime.start.clone(), &regime.goal, &regime.policy)
        .expect("benchmark policy is valid")
}

/// An `n` x `n` grid of rooms named `r<x>_<y>`, start `r0_0`.
///
/// Every third column boundary is a door, the rest hallways. A key lies in
/// `r1_1` and an orb in the far corner.
#[must_use]
pub fn grid_map(n: usize) -> MapSpecV1 {
    let name = |x: usize, y: usize| format!("r{x}_{y}");
    let mut rooms = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let contents = if n > 1 && (x, y) == (1, 1) {
                ObjectType::Key
            } else if (x, y) == (n - 1, n - 1) {
                ObjectType::Orb
            } else {
                ObjectType::Nothing
            };
            let door_east = x % 3 == 2;
            let door_west = x > 0 && (x - 1) % 3 == 2;
            let kind = |door: bool| {
                if door {
                    ConnectionType::Door
                } else {
                    ConnectionType::Hallway
                }
            };
            let mut room = RoomSpecV1::new(name(x, y), contents);
            if x + 1 < n {
                room = room.connect(Direction::East, kind(door_east), name(x + 1, y));
            }
            if x > 0 {
                room = room.connect(Direction::West, kind(door_west), name(x - 1, y));
            }
            if y + 1 < n {
                room = room.connect(Direction::South, ConnectionType::Hallway, name(x, y + 1));
            }
            if y > 0 {
                room = room.connect(Direction::North, ConnectionType::Hallway, name(x, y - 1));
            }
            rooms.push(room);
        }
    }
    MapSpecV1 {
        rooms,
        start_index: 0,
        holding: ObjectType::Nothing,
    }
}
