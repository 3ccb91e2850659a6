//! Action kinds and the `Action` value produced by successor generation.

use std::fmt;

use crate::model::object::{Direction, ObjectType};
use crate::model::room::RoomId;
use crate::model::state::WorldState;

use super::cost::Cost;

/// What a single atomic step does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Walk through an open hallway.
    Walk { to: RoomId, direction: Direction },
    /// Force a closed door without the key; the door becomes a hallway.
    ForceDoor { to: RoomId, direction: Direction },
    /// Open a closed door with the key; the key is used up and the door
    /// becomes a hallway.
    UnlockDoor { to: RoomId, direction: Direction },
    /// Take the object lying in the current room.
    PickUp { object: ObjectType },
    /// Put the held object into the (empty) current room.
    Drop { object: ObjectType },
}

impl ActionKind {
    /// Short verb used in reports (`"walk"`, `"force_door"`, ...).
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Walk { .. } => "walk",
            Self::ForceDoor { .. } => "force_door",
            Self::UnlockDoor { .. } => "unlock_door",
            Self::PickUp { .. } => "pick_up",
            Self::Drop { .. } => "drop",
        }
    }

    /// Human-readable description using room names from `state`.
    ///
    /// Unknown room ids fall back to the `#n` form.
    #[must_use]
    pub fn describe(&self, state: &WorldState) -> String {
        let name = |id: RoomId| {
            state
                .room(id)
                .map_or_else(|| id.to_string(), |r| r.name.clone())
        };
        match self {
            Self::Walk { to, direction } => format!("walk {direction} to {}", name(*to)),
            Self::ForceDoor { to, direction } => {
                format!("force door {direction} to {}", name(*to))
            }
            Self::UnlockDoor { to, direction } => {
                format!("unlock door {direction} to {}", name(*to))
            }
            Self::PickUp { object } => format!("pick up {object}"),
            Self::Drop { object } => format!("drop {object}"),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Walk { to, direction }
            | Self::ForceDoor { to, direction }
            | Self::UnlockDoor { to, direction } => {
                write!(f, "{} {direction} {to}", self.verb())
            }
            Self::PickUp { object } | Self::Drop { object } => {
                write!(f, "{} {object}", self.verb())
            }
        }
    }
}

/// One legal step out of a state: what it does, what it costs, and the
/// resulting state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub cost: Cost,
    /// The successor state. Owns its own copy of the room arena.
    pub next: WorldState,
}
