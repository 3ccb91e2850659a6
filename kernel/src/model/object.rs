//! Small value enums shared by rooms, states and goals.
//!
//! All three parse case-insensitively from their full names; `Direction` and
//! `ConnectionType` also accept the single-letter forms used in map files
//! (`N`/`S`/`E`/`W`, `H`/`D`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Failure to parse one of the kernel's value enums from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {token:?}")]
pub struct ParseEnumError {
    /// Which enum was being parsed (e.g. `"object"`).
    pub kind: &'static str,
    /// The rejected input.
    pub token: String,
}

/// An object that can lie in a room or be held by the robot.
///
/// `Nothing` is a real value, not an absence: an empty room has contents
/// `Nothing` and an empty-handed robot is holding `Nothing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ObjectType {
    #[serde(alias = "key", alias = "KEY")]
    Key,
    #[serde(alias = "orb", alias = "ORB")]
    Orb,
    #[serde(alias = "nothing", alias = "NOTHING")]
    Nothing,
}

impl ObjectType {
    /// Stable one-byte code used in state fingerprints.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Nothing => 0,
            Self::Key => 1,
            Self::Orb => 2,
        }
    }

    /// `true` for anything other than `Nothing`.
    #[must_use]
    pub const fn is_something(self) -> bool {
        !matches!(self, Self::Nothing)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key => f.write_str("Key"),
            Self::Orb => f.write_str("Orb"),
            Self::Nothing => f.write_str("Nothing"),
        }
    }
}

impl FromStr for ObjectType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "key" => Ok(Self::Key),
            "orb" => Ok(Self::Orb),
            "nothing" => Ok(Self::Nothing),
            _ => Err(ParseEnumError {
                kind: "object",
                token: s.to_string(),
            }),
        }
    }
}

/// Compass direction of a connection. Purely descriptive: it never affects
/// cost or reachability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }

    /// The direction a mirror connection on the neighbouring room points.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Lowercase word used in action descriptions.
    #[must_use]
    pub const fn as_word(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_word())
    }
}

impl FromStr for Direction {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Self::North),
            "s" | "south" => Ok(Self::South),
            "e" | "east" => Ok(Self::East),
            "w" | "west" => Ok(Self::West),
            _ => Err(ParseEnumError {
                kind: "direction",
                token: s.to_string(),
            }),
        }
    }
}

/// Kind of passage between two rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionType {
    /// Closed door: must be forced open or unlocked with the key.
    Door,
    /// Open passage.
    Hallway,
}

impl ConnectionType {
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Hallway => 0,
            Self::Door => 1,
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Door => f.write_str("Door"),
            Self::Hallway => f.write_str("Hallway"),
        }
    }
}

impl FromStr for ConnectionType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "d" | "door" => Ok(Self::Door),
            "h" | "hallway" => Ok(Self::Hallway),
            _ => Err(ParseEnumError {
                kind: "connection type",
                token: s.to_string(),
            }),
        }
    }
}
