//! `WorldState`: one immutable snapshot of the puzzle.

use super::compile::MapError;
use super::object::ObjectType;
use super::room::{Room, RoomId};

/// Complete snapshot of robot position, held object and every room.
///
/// A state owns its room arena outright. Successors are built by cloning the
/// arena and changing one thing, so two states never observe each other's
/// changes.
///
/// Invariants (checked by [`WorldState::new`]):
/// - `location` indexes into `rooms`,
/// - every connection target indexes into `rooms`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorldState {
    holding: ObjectType,
    location: RoomId,
    rooms: Vec<Room>,
}

impl WorldState {
    /// Build a state from an already-linked room arena.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Empty`] for an empty arena,
    /// [`MapError::StartOutOfRange`] if `location` is not a valid index and
    /// [`MapError::DanglingConnection`] if any connection points outside the
    /// arena.
    pub fn new(holding: ObjectType, location: RoomId, rooms: Vec<Room>) -> Result<Self, MapError> {
        if rooms.is_empty() {
            return Err(MapError::Empty);
        }
        if location.index() >= rooms.len() {
            return Err(MapError::StartOutOfRange {
                index: location.0,
                room_count: rooms.len(),
            });
        }
        for room in &rooms {
            if let Some(bad) = room
                .connections
                .iter()
                .find(|c| c.target.index() >= rooms.len())
            {
                return Err(MapError::DanglingConnection {
                    room: room.name.clone(),
                    target: bad.target.0,
                });
            }
        }
        Ok(Self {
            holding,
            location,
            rooms,
        })
    }

    /// The object currently carried.
    #[must_use]
    pub fn holding(&self) -> ObjectType {
        self.holding
    }

    /// The room the robot is in.
    #[must_use]
    pub fn location(&self) -> RoomId {
        self.location
    }

    /// The full room arena.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[must_use]
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    /// The room at `location`.
    #[must_use]
    pub fn current_room(&self) -> &Room {
        &self.rooms[self.location.index()]
    }

    /// Case-insensitive lookup of a room by name.
    #[must_use]
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.rooms
            .iter()
            .position(|r| r.is_named(name))
            .and_then(|i| u32::try_from(i).ok())
            .map(RoomId)
    }

    /// Strict state equality used for cycle avoidance.
    ///
    /// Location, holding and every room's name, contents and connection list
    /// must agree element-wise. This is deliberately stricter than goal
    /// matching (see `GoalPattern::matches`).
    #[must_use]
    pub fn states_equal(&self, other: &Self) -> bool {
        self.location == other.location
            && self.holding == other.holding
            && self.rooms.len() == other.rooms.len()
            && self.rooms.iter().zip(&other.rooms).all(|(a, b)| {
                a.name == b.name && a.contents == b.contents && a.connections == b.connections
            })
    }

    /// Canonical byte encoding of everything `states_equal` compares.
    ///
    /// Two states have equal identity bytes iff they are `states_equal`.
    /// Layout (all integers little-endian):
    ///
    /// ```text
    /// location:u32 holding:u8 room_count:u32
    ///   per room: name_len:u32 name_bytes contents:u8 conn_count:u32
    ///     per connection: target:u32 direction:u8 type:u8
    /// ```
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(16 + self.rooms.len() * 32);
        out.extend_from_slice(&self.location.0.to_le_bytes());
        out.push(self.holding.code());
        push_len(&mut out, self.rooms.len());
        for room in &self.rooms {
            push_len(&mut out, room.name.len());
            out.extend_from_slice(room.name.as_bytes());
            out.push(room.contents.code());
            push_len(&mut out, room.connections.len());
            for c in &room.connections {
                out.extend_from_slice(&c.target.0.to_le_bytes());
                out.push(c.direction.code());
                out.push(c.connection_type.code());
            }
        }
        out
    }

    pub(crate) fn set_holding(&mut self, holding: ObjectType) {
        self.holding = holding;
    }

    pub(crate) fn set_location(&mut self, location: RoomId) {
        self.location = location;
    }

    pub(crate) fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.index())
    }
}

fn push_len(out: &mut Vec<u8>, len: usize) {
    // Maps are hand-authored; lengths never approach u32::MAX.
    let len = u32::try_from(len).unwrap_or(u32::MAX);
    out.extend_from_slice(&len.to_le_bytes());
}
