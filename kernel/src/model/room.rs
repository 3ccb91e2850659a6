//! Rooms and connections stored in a per-state arena.

use std::fmt;

use serde::Serialize;

use super::object::{ConnectionType, Direction, ObjectType};

/// Case-folded form of a room name, used as a lookup key.
///
/// Folds full Unicode lowercase, not just ASCII.
#[must_use]
pub fn fold_name(name: &str) -> String {
    name.chars().flat_map(char::to_lowercase).collect()
}

/// Whether two room names are equal under [`fold_name`].
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Index of a room inside one `WorldState`'s arena.
///
/// Room order is fixed at map compilation, so the same `RoomId` names the same
/// room in every state derived from that map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RoomId(pub u32);

impl RoomId {
    /// Arena position as a `usize`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An outgoing passage from one room to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    /// Neighbouring room in the same arena.
    pub target: RoomId,
    pub direction: Direction,
    pub connection_type: ConnectionType,
}

/// One room of the map as it exists in a particular state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Room {
    /// Display name. Lookups by name are case-insensitive.
    pub name: String,
    /// At most one object.
    pub contents: ObjectType,
    /// Outgoing connections in declaration order.
    pub connections: Vec<Connection>,
}

impl Room {
    /// Case-insensitive name comparison.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    /// Iterate connections leading to `target`.
    pub fn connections_to(&self, target: RoomId) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(move |c| c.target == target)
    }

    /// Set every connection towards `target` to `connection_type`.
    ///
    /// Returns the number of connections whose type changed.
    pub fn set_connection_type(&mut self, target: RoomId, connection_type: ConnectionType) -> usize {
        let mut changed = 0;
        for connection in self.connections.iter_mut().filter(|c| c.target == target) {
            if connection.connection_type != connection_type {
                connection.connection_type = connection_type;
                changed += 1;
            }
        }
        changed
    }
}
