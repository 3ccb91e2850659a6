//! Map compilation: static room descriptions → initial `WorldState`.
//!
//! Neighbours are named in the description and resolved to arena indices
//! here, once. Any inconsistency is a [`MapError`] and the whole map load
//! fails.

use std::collections::BTreeMap;

use super::object::{ConnectionType, Direction, ObjectType};
use super::room::{fold_name, Connection, Room, RoomId};
use super::state::WorldState;

/// Malformed map data. Fatal to the map load that produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// The map has no rooms.
    #[error("map has no rooms")]
    Empty,
    /// A room name is empty or whitespace.
    #[error("room {index} has a blank name")]
    BlankRoomName { index: usize },
    /// Two rooms share a name (compared case-insensitively).
    #[error("duplicate room name {name:?}")]
    DuplicateRoom { name: String },
    /// A connection names a room that does not exist.
    #[error("room {room:?} connects to unknown room {neighbor:?}")]
    UnknownNeighbor { room: String, neighbor: String },
    /// The start room is named but no room has that name.
    #[error("unknown start room {name:?}")]
    UnknownStartRoom { name: String },
    /// The start index does not address a room.
    #[error("start room index {index} out of range for {room_count} rooms")]
    StartOutOfRange { index: u32, room_count: usize },
    /// A linked connection points outside the arena.
    #[error("room {room:?} has a connection to missing index {target}")]
    DanglingConnection { room: String, target: u32 },
    /// More rooms than a `RoomId` can address.
    #[error("map has too many rooms ({count})")]
    TooManyRooms { count: usize },
}

/// One connection as written in a map: direction, type, neighbour name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSpecV1 {
    pub direction: Direction,
    pub connection_type: ConnectionType,
    pub neighbor: String,
}

/// One room as written in a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSpecV1 {
    pub name: String,
    pub contents: ObjectType,
    pub connections: Vec<ConnectionSpecV1>,
}

impl RoomSpecV1 {
    #[must_use]
    pub fn new(name: impl Into<String>, contents: ObjectType) -> Self {
        Self {
            name: name.into(),
            contents,
            connections: Vec::new(),
        }
    }

    /// Append a connection (builder style).
    #[must_use]
    pub fn connect(
        mut self,
        direction: Direction,
        connection_type: ConnectionType,
        neighbor: impl Into<String>,
    ) -> Self {
        self.connections.push(ConnectionSpecV1 {
            direction,
            connection_type,
            neighbor: neighbor.into(),
        });
        self
    }
}

/// A complete static map plus the robot's starting situation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSpecV1 {
    pub rooms: Vec<RoomSpecV1>,
    /// Index into `rooms` of the starting room.
    pub start_index: usize,
    /// Object the robot starts with.
    pub holding: ObjectType,
}

/// Compile a map description into the initial world state.
///
/// Room order is preserved, so `RoomId(i)` is `spec.rooms[i]`.
///
/// # Errors
///
/// Returns a [`MapError`] if the map is empty, a name is blank or repeated,
/// a connection names an unknown room, or the start index is out of range.
pub fn compile_map(spec: &MapSpecV1) -> Result<WorldState, MapError> {
    if spec.rooms.is_empty() {
        return Err(MapError::Empty);
    }
    if u32::try_from(spec.rooms.len()).is_err() {
        return Err(MapError::TooManyRooms {
            count: spec.rooms.len(),
        });
    }

    let mut index_by_name: BTreeMap<String, RoomId> = BTreeMap::new();
    for (i, room) in spec.rooms.iter().enumerate() {
        if room.name.trim().is_empty() {
            return Err(MapError::BlankRoomName { index: i });
        }
        let id = RoomId(u32::try_from(i).map_err(|_| MapError::TooManyRooms {
            count: spec.rooms.len(),
        })?);
        if index_by_name
            .insert(fold_name(&room.name), id)
            .is_some()
        {
            return Err(MapError::DuplicateRoom {
                name: room.name.clone(),
            });
        }
    }

    let mut rooms = Vec::with_capacity(spec.rooms.len());
    for room in &spec.rooms {
        let mut connections = Vec::with_capacity(room.connections.len());
        for c in &room.connections {
            let Some(&target) = index_by_name.get(&fold_name(&c.neighbor)) else {
                return Err(MapError::UnknownNeighbor {
                    room: room.name.clone(),
                    neighbor: c.neighbor.clone(),
                });
            };
            connections.push(Connection {
                target,
                direction: c.direction,
                connection_type: c.connection_type,
            });
        }
        rooms.push(Room {
            name: room.name.clone(),
            contents: room.contents,
            connections,
        });
    }

    let start = u32::try_from(spec.start_index).map_err(|_| MapError::StartOutOfRange {
        index: u32::MAX,
        room_count: spec.rooms.len(),
    })?;

    log::debug!(
        "compiled map: {} rooms, start {:?}, holding {}",
        rooms.len(),
        spec.rooms.get(spec.start_index).map(|r| r.name.as_str()),
        spec.holding
    );

    WorldState::new(spec.holding, RoomId(start), rooms)
}
