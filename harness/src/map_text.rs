//! Text and JSON map formats.
//!
//! A connection is written as `"<direction> <type> <room>"`, e.g. `"E D b"`
//! or `"north hallway cellar"`. A map file is JSON:
//!
//! ```json
//! {
//!   "rooms": [
//!     {"name": "a", "connections": ["E D b"]},
//!     {"name": "b", "contents": "Key", "connections": ["W D a"]}
//!   ],
//!   "start": "a",
//!   "holding": "Nothing"
//! }
//! ```
//!
//! `contents` and `holding` default to `Nothing`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use roomplan_kernel::model::compile::{
    compile_map, ConnectionSpecV1, MapError, MapSpecV1, RoomSpecV1,
};
use roomplan_kernel::model::object::{ConnectionType, Direction, ObjectType};
use roomplan_kernel::model::room::names_match;
use roomplan_kernel::model::state::WorldState;

use crate::error::{ParseError, RunError};

/// Parse one connection token.
///
/// # Errors
///
/// Returns [`ParseError::BadConnection`] unless the token is exactly three
/// words: a direction, a connection type, and a room name.
pub fn parse_connection(token: &str) -> Result<ConnectionSpecV1, ParseError> {
    let bad = |detail: String| ParseError::BadConnection {
        token: token.to_string(),
        detail,
    };
    let words: Vec<&str> = token.split_whitespace().collect();
    let [direction, connection_type, neighbor] = words.as_slice() else {
        return Err(bad(format!("expected 3 words, found {}", words.len())));
    };
    let direction: Direction = direction.parse().map_err(|e| bad(format!("{e}")))?;
    let connection_type: ConnectionType =
        connection_type.parse().map_err(|e| bad(format!("{e}")))?;
    Ok(ConnectionSpecV1 {
        direction,
        connection_type,
        neighbor: (*neighbor).to_string(),
    })
}

/// Render a connection in the short token form (`"E D b"`).
#[must_use]
pub fn format_connection(connection: &ConnectionSpecV1) -> String {
    let direction = match connection.direction {
        Direction::North => 'N',
        Direction::South => 'S',
        Direction::East => 'E',
        Direction::West => 'W',
    };
    let connection_type = match connection.connection_type {
        ConnectionType::Door => 'D',
        ConnectionType::Hallway => 'H',
    };
    format!("{direction} {connection_type} {}", connection.neighbor)
}

fn nothing() -> ObjectType {
    ObjectType::Nothing
}

/// One room in a map file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomFileV1 {
    pub name: String,
    #[serde(default = "nothing")]
    pub contents: ObjectType,
    #[serde(default)]
    pub connections: Vec<String>,
}

/// A map file: rooms, start room name, held object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapFileV1 {
    pub rooms: Vec<RoomFileV1>,
    pub start: String,
    #[serde(default = "nothing")]
    pub holding: ObjectType,
}

impl MapFileV1 {
    /// Parse a map file from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Json`] if the bytes are not a valid map document.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, RunError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Read and parse a map file.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Io`] if the file cannot be read and
    /// [`RunError::Json`] if it does not parse.
    pub fn from_path(path: &Path) -> Result<Self, RunError> {
        let bytes = std::fs::read(path).map_err(|source| RunError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_bytes(&bytes)
    }

    /// Convert to a map description, resolving the start room by name.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Parse`] for a malformed connection token and
    /// [`MapError::UnknownStartRoom`] if no room has the start name.
    pub fn to_spec(&self) -> Result<MapSpecV1, RunError> {
        let mut rooms = Vec::with_capacity(self.rooms.len());
        for room in &self.rooms {
            let connections = room
                .connections
                .iter()
                .map(|token| parse_connection(token))
                .collect::<Result<Vec<_>, _>>()?;
            rooms.push(RoomSpecV1 {
                name: room.name.clone(),
                contents: room.contents,
                connections,
            });
        }
        let start_index = self
            .rooms
            .iter()
            .position(|r| names_match(&r.name, &self.start))
            .ok_or_else(|| MapError::UnknownStartRoom {
                name: self.start.clone(),
            })?;
        Ok(MapSpecV1 {
            rooms,
            start_index,
            holding: self.holding,
        })
    }

    /// The file form of a map description.
    ///
    /// Returns `None` if `start_index` does not address a room.
    #[must_use]
    pub fn from_spec(spec: &MapSpecV1) -> Option<Self> {
        let start = spec.rooms.get(spec.start_index)?.name.clone();
        let rooms = spec
            .rooms
            .iter()
            .map(|r| RoomFileV1 {
                name: r.name.clone(),
                contents: r.contents,
                connections: r.connections.iter().map(format_connection).collect(),
            })
            .collect();
        Some(Self {
            rooms,
            start,
            holding: spec.holding,
        })
    }

    /// Pretty JSON, for writing map files.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, RunError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Read a map file and compile it into the initial world state.
///
/// # Errors
///
/// Any read, parse, or map compilation failure.
pub fn load_map(path: &Path) -> Result<WorldState, RunError> {
    let spec = MapFileV1::from_path(path)?.to_spec()?;
    let state = compile_map(&spec)?;
    log::info!(
        "loaded {} rooms from {}",
        state.rooms().len(),
        path.display()
    );
    Ok(state)
}
