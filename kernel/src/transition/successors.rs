//! Successor generation.
//!
//! [`generate_successors`] is a pure function of `(state, costs)`: the same
//! inputs always give the same actions in the same order. Memoization is the
//! search engine's job, not the state's.

use crate::model::object::{ConnectionType, ObjectType};
use crate::model::room::RoomId;
use crate::model::state::WorldState;

use super::action::{Action, ActionKind};
use super::cost::CostTableV1;

/// Enumerate every legal one-step action from `state`.
///
/// Order: one movement action per connection of the current room, in
/// declaration order, then at most one of pick-up / drop.
///
/// - hallway: move, cost `hallway`;
/// - door, not holding the key: force it, cost `forced_door`;
/// - door, holding the key: unlock it, key consumed, cost `keyed_door`;
/// - empty hands in a room with an object: pick it up, cost `pickup`;
/// - holding something in an empty room: drop it, cost `drop`.
///
/// Forcing or unlocking turns the door into a hallway on both sides in the
/// successor's arena. `state` itself is never modified.
#[must_use]
pub fn generate_successors(state: &WorldState, costs: &CostTableV1) -> Vec<Action> {
    let here = state.location();
    let room = state.current_room();
    let mut actions = Vec::with_capacity(room.connections.len() + 1);

    for connection in &room.connections {
        let to = connection.target;
        let direction = connection.direction;
        let action = match (connection.connection_type, state.holding()) {
            (ConnectionType::Hallway, _) => {
                let mut next = state.clone();
                next.set_location(to);
                Action {
                    kind: ActionKind::Walk { to, direction },
                    cost: costs.hallway,
                    next,
                }
            }
            (ConnectionType::Door, ObjectType::Key) => {
                let mut next = with_door_opened(state, here, to);
                next.set_holding(ObjectType::Nothing);
                next.set_location(to);
                Action {
                    kind: ActionKind::UnlockDoor { to, direction },
                    cost: costs.keyed_door,
                    next,
                }
            }
            (ConnectionType::Door, _) => {
                let mut next = with_door_opened(state, here, to);
                next.set_location(to);
                Action {
                    kind: ActionKind::ForceDoor { to, direction },
                    cost: costs.forced_door,
                    next,
                }
            }
        };
        actions.push(action);
    }

    // Pick-up and drop share the "is the room empty" guard, so at most one
    // of them applies.
    match (state.holding(), room.contents) {
        (ObjectType::Nothing, object) if object.is_something() => {
            let mut next = state.clone();
            if let Some(r) = next.room_mut(here) {
                r.contents = ObjectType::Nothing;
            }
            next.set_holding(object);
            actions.push(Action {
                kind: ActionKind::PickUp { object },
                cost: costs.pickup,
                next,
            });
        }
        (object, ObjectType::Nothing) if object.is_something() => {
            let mut next = state.clone();
            if let Some(r) = next.room_mut(here) {
                r.contents = object;
            }
            next.set_holding(ObjectType::Nothing);
            actions.push(Action {
                kind: ActionKind::Drop { object },
                cost: costs.drop,
                next,
            });
        }
        _ => {}
    }

    actions
}

/// Copy `state` with every door between `a` and `b` turned into a hallway,
/// on both rooms.
fn with_door_opened(state: &WorldState, a: RoomId, b: RoomId) -> WorldState {
    let mut next = state.clone();
    let mut changed = 0;
    if let Some(room) = next.room_mut(a) {
        changed += room.set_connection_type(b, ConnectionType::Hallway);
    }
    if a != b {
        if let Some(room) = next.room_mut(b) {
            changed += room.set_connection_type(a, ConnectionType::Hallway);
        }
    }
    log::trace!("opened door {a} <-> {b} ({changed} connections changed)");
    next
}
