//! Structural properties of the transition function and the planner.
//!
//! The exhaustive checks walk every state reachable from a map (capped) and
//! test each generated action:
//!
//! - every action cost is positive,
//! - opened doors read as hallways from both rooms in every descendant,
//! - objects are conserved, except a key consumed by unlocking,
//! - pick-up and drop respect the one-object capacity of hands and rooms.

use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;

use roomplan_harness::config::{PlannerConfig, ResolvedConfig};
use roomplan_harness::error::{ParseError, RunError};
use roomplan_harness::map_text::MapFileV1;
use roomplan_harness::runner::{feedback, PlannerSession};
use roomplan_harness::world::RoomWorld;
use roomplan_harness::worlds::{builtin_map, demos, manor::manor, scenarios};
use roomplan_kernel::model::compile::{compile_map, MapError, MapSpecV1, RoomSpecV1};
use roomplan_kernel::model::goal::{GoalError, GoalSpecV1};
use roomplan_kernel::model::object::{ConnectionType, Direction, ObjectType};
use roomplan_kernel::model::room::RoomId;
use roomplan_kernel::model::state::WorldState;
use roomplan_kernel::transition::action::ActionKind;
use roomplan_kernel::transition::cost::{Cost, CostTableV1};
use roomplan_kernel::transition::successors::generate_successors;
use roomplan_search::contract::SearchWorldV1;
use roomplan_search::error::SearchError;
use roomplan_search::expansion::ExpansionCache;
use roomplan_search::graph::TerminationReasonV1;
use roomplan_search::policy::SearchPolicyV1;
use roomplan_search::search::find_path;

const STATE_CAP: usize = 5_000;

fn default_session(map: &MapSpecV1) -> PlannerSession {
    PlannerSession::new("props", map, &ResolvedConfig::default()).expect("map compiles")
}

fn count(state: &WorldState, object: ObjectType) -> usize {
    let in_rooms = state.rooms().iter().filter(|r| r.contents == object).count();
    in_rooms + usize::from(state.holding() == object)
}

fn is_open_between(state: &WorldState, x: RoomId, y: RoomId) -> bool {
    let all_hallways = |from: RoomId, to: RoomId| {
        state.room(from).is_some_and(|room| {
            room.connections_to(to)
                .all(|c| c.connection_type == ConnectionType::Hallway)
        })
    };
    all_hallways(x, y) && all_hallways(y, x)
}

/// Breadth-first walk over reachable states, calling `check` on every
/// generated action together with the doors opened on the way to its
/// source state. Returns the number of distinct states visited.
fn walk_reachable<F>(map: &MapSpecV1, costs: &CostTableV1, mut check: F) -> usize
where
    F: FnMut(&WorldState, &ActionKind, Cost, &WorldState, &[(RoomId, RoomId)]),
{
    let start = compile_map(map).expect("map compiles");
    let mut seen: BTreeSet<Vec<u8>> = BTreeSet::new();
    seen.insert(start.identity_bytes());
    let mut queue = VecDeque::from([(start, Vec::new())]);

    while let Some((state, opened)) = queue.pop_front() {
        for action in generate_successors(&state, costs) {
            let mut next_opened: Vec<(RoomId, RoomId)> = opened.clone();
            if let ActionKind::ForceDoor { to, .. } | ActionKind::UnlockDoor { to, .. } =
                action.kind
            {
                next_opened.push((state.location(), to));
            }
            check(&state, &action.kind, action.cost, &action.next, &next_opened);
            if seen.len() < STATE_CAP && seen.insert(action.next.identity_bytes()) {
                queue.push_back((action.next, next_opened));
            }
        }
    }
    seen.len()
}

fn property_maps() -> Vec<MapSpecV1> {
    vec![
        scenarios::key_then_door(),
        scenarios::door_with_key_detour(),
        demos::first_test(),
        demos::key_fetch(),
        manor(),
    ]
}

// --- Costs ---

#[test]
fn every_action_costs_more_than_zero() {
    for costs in [
        CostTableV1::default(),
        CostTableV1::unit_handling(),
        CostTableV1::slow_corridors(),
    ] {
        for map in property_maps() {
            walk_reachable(&map, &costs, |_, kind, cost, _, _| {
                assert!(!cost.is_zero(), "{kind} costs zero");
            });
        }
    }
}

#[test]
fn path_total_is_sum_of_step_costs() {
    let mut session = default_session(&manor());
    for command in ["goto g", "get orb", "put orb a", "goto l", "goto c"] {
        let run = session.run_command(command).expect("manor goal reachable");
        let sum: u64 = run.path.iter().map(|s| s.cost.millis()).sum();
        assert_eq!(run.report.total_cost_millis, sum, "{command}");
        assert_eq!(run.total_cost().millis(), sum, "{command}");
        let step_sum: u64 = run.report.steps.iter().map(|s| s.cost_millis).sum();
        assert_eq!(step_sum, sum, "{command}");
        for pair in run.path.windows(2) {
            assert!(pair[0].to.states_equal(&pair[1].from), "{command}: broken chain");
        }
    }
}

// --- Already at goal ---

#[test]
fn already_at_goal_is_an_empty_plan() {
    let mut session = default_session(&manor());
    let before = session.state().clone();
    let result = session.run_command("goto a");
    assert_eq!(feedback(&result), "Already at goal");
    let run = result.expect("trivial goal");
    assert!(run.path.is_empty());
    assert_eq!(run.total_cost(), Cost::ZERO);
    assert_eq!(run.outcome(), TerminationReasonV1::AlreadyAtGoal);
    assert_eq!(run.report.outcome, "already_at_goal");
    assert_eq!(run.graph.metadata.total_expansions, 0);
    assert!(session.state().states_equal(&before));

    let world = RoomWorld::new("manor", CostTableV1::default());
    let goal = GoalSpecV1 {
        holding: Some(ObjectType::Nothing),
        ..GoalSpecV1::default()
    }
    .resolve(&before)
    .expect("goal resolves");
    let path = find_path(&world, before.clone(), &goal, &SearchPolicyV1::default())
        .expect("trivial path");
    assert!(path.is_empty());
}

// --- Forcing symmetry ---

#[test]
fn opened_doors_stay_open_from_both_sides() {
    for map in property_maps() {
        let states = walk_reachable(&map, &CostTableV1::default(), |_, kind, _, next, opened| {
            for &(x, y) in opened {
                assert!(is_open_between(next, x, y), "after {kind}: {x}/{y} not open");
            }
        });
        assert!(states > 1);
    }
}

// --- Capacity and conservation ---

#[test]
fn objects_are_conserved_and_capacity_holds() {
    for map in property_maps() {
        walk_reachable(&map, &CostTableV1::default(), |from, kind, _, next, _| {
            assert_eq!(count(from, ObjectType::Orb), count(next, ObjectType::Orb), "{kind}");

            let keys_before = count(from, ObjectType::Key);
            let keys_after = count(next, ObjectType::Key);
            match kind {
                ActionKind::UnlockDoor { .. } => {
                    assert_eq!(from.holding(), ObjectType::Key);
                    assert_eq!(next.holding(), ObjectType::Nothing);
                    assert_eq!(keys_after + 1, keys_before);
                }
                ActionKind::PickUp { object } => {
                    assert_eq!(from.holding(), ObjectType::Nothing);
                    assert_eq!(from.current_room().contents, *object);
                    assert_eq!(next.holding(), *object);
                    assert_eq!(next.current_room().contents, ObjectType::Nothing);
                    assert_eq!(keys_after, keys_before);
                }
                ActionKind::Drop { object } => {
                    assert_eq!(from.holding(), *object);
                    assert_eq!(from.current_room().contents, ObjectType::Nothing);
                    assert_eq!(next.holding(), ObjectType::Nothing);
                    assert_eq!(next.current_room().contents, *object);
                    assert_eq!(keys_after, keys_before);
                }
                ActionKind::Walk { .. } | ActionKind::ForceDoor { .. } => {
                    assert_eq!(from.holding(), next.holding());
                    assert_eq!(keys_after, keys_before);
                }
            }
        });
    }
}

#[test]
fn successor_generation_leaves_the_source_untouched() {
    let start = compile_map(&demos::first_test()).expect("map compiles");
    let snapshot = start.clone();
    let actions = generate_successors(&start, &CostTableV1::default());
    assert!(!actions.is_empty());
    assert!(start.states_equal(&snapshot));
    assert_eq!(start.identity_bytes(), snapshot.identity_bytes());
}

// --- Idempotent expansion ---

#[test]
fn second_expansion_is_served_from_cache() {
    let world = RoomWorld::new("first_test", CostTableV1::default());
    let start = compile_map(&demos::first_test()).expect("map compiles");
    let key = world.state_key(&start);
    let mut cache = ExpansionCache::new();

    let first = cache.expand(&world, &start, key);
    let second = cache.expand(&world, &start.clone(), key);
    assert!(!first.from_cache);
    assert!(second.from_cache);
    assert!(Rc::ptr_eq(&first.transitions, &second.transitions));
    assert_eq!(cache.computed(), 1);
    assert_eq!(cache.hits(), 1);

    let fresh = world.successors(&start);
    assert_eq!(fresh.len(), second.transitions.len());
    for (a, b) in fresh.iter().zip(second.transitions.iter()) {
        assert_eq!(a.label, b.label);
        assert_eq!(a.cost, b.cost);
        assert!(a.to.states_equal(&b.to));
    }
}

// --- Budget ---

#[test]
fn tiny_budget_stops_the_search() {
    let config = PlannerConfig::from_bytes(br#"{"max_expansions": 3}"#)
        .expect("config parses")
        .resolve()
        .expect("config valid");
    let mut session =
        PlannerSession::new("manor", &builtin_map("manor").expect("manor"), &config)
            .expect("map compiles");
    let err = session.run_command("goto l").expect_err("budget too small");
    assert!(
        matches!(
            err,
            RunError::Search(SearchError::ExpansionBudgetExceeded { max_expansions: 3 })
        ),
        "{err:?}"
    );
}

// --- Invalid input ---

#[test]
fn goals_naming_unknown_rooms_are_rejected() {
    let mut session = default_session(&manor());
    let err = session.run_command("put orb cellar").expect_err("no cellar");
    assert!(
        matches!(err, RunError::Goal(GoalError::UnknownRoom { ref name }) if name == "cellar"),
        "{err:?}"
    );

    let contents_only = GoalSpecV1 {
        contents: Some(ObjectType::Orb),
        ..GoalSpecV1::default()
    };
    assert_eq!(
        contents_only.resolve(session.state()).unwrap_err(),
        GoalError::ContentsWithoutRoom
    );
}

#[test]
fn malformed_maps_are_rejected() {
    let empty = MapSpecV1 {
        rooms: vec![],
        start_index: 0,
        holding: ObjectType::Nothing,
    };
    assert_eq!(compile_map(&empty).unwrap_err(), MapError::Empty);

    let duplicate = MapSpecV1 {
        rooms: vec![
            RoomSpecV1::new("Hall", ObjectType::Nothing),
            RoomSpecV1::new("hall", ObjectType::Nothing),
        ],
        start_index: 0,
        holding: ObjectType::Nothing,
    };
    assert!(matches!(
        compile_map(&duplicate).unwrap_err(),
        MapError::DuplicateRoom { .. }
    ));

    let dangling = MapSpecV1 {
        rooms: vec![RoomSpecV1::new("a", ObjectType::Nothing).connect(
            Direction::East,
            ConnectionType::Hallway,
            "nowhere",
        )],
        start_index: 0,
        holding: ObjectType::Nothing,
    };
    assert!(matches!(
        compile_map(&dangling).unwrap_err(),
        MapError::UnknownNeighbor { ref neighbor, .. } if neighbor == "nowhere"
    ));

    let unknown_start = MapFileV1::from_json_bytes(br#"{"rooms": [{"name": "a"}], "start": "z"}"#)
        .expect("document parses")
        .to_spec()
        .unwrap_err();
    assert!(matches!(
        unknown_start,
        RunError::Map(MapError::UnknownStartRoom { .. })
    ));

    let bad_token = MapFileV1::from_json_bytes(
        br#"{"rooms": [{"name": "a", "connections": ["up D b"]}], "start": "a"}"#,
    )
    .expect("document parses")
    .to_spec()
    .unwrap_err();
    assert!(matches!(
        bad_token,
        RunError::Parse(ParseError::BadConnection { .. })
    ));
}
