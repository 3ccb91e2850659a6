//! Goal patterns: partial world states used for matching only.
//!
//! A goal is never expanded. Every field it leaves unset is "don't care".

use std::fmt;

use super::object::ObjectType;
use super::room::RoomId;
use super::state::WorldState;

/// Invalid goal specification. Recoverable: reported to the user, the map
/// stays loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GoalError {
    /// The goal names a room that the map does not contain.
    #[error("no room named {name:?} in this map")]
    UnknownRoom { name: String },
    /// Room contents were given without saying which room.
    #[error("goal specifies room contents but no room")]
    ContentsWithoutRoom,
}

/// Required location, optionally with required contents of that room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GoalLocation {
    pub room: RoomId,
    /// `None` means the room's contents do not matter.
    pub contents: Option<ObjectType>,
}

/// A partial world state that a search tries to reach.
///
/// Contents can only be required together with a location, so the pattern
/// "some room contains an orb" is not expressible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GoalPattern {
    pub location: Option<GoalLocation>,
    pub holding: Option<ObjectType>,
}

impl GoalPattern {
    /// Be in `room`, regardless of anything else.
    #[must_use]
    pub fn at(room: RoomId) -> Self {
        Self {
            location: Some(GoalLocation {
                room,
                contents: None,
            }),
            holding: None,
        }
    }

    /// Hold `object`, anywhere.
    #[must_use]
    pub fn holding(object: ObjectType) -> Self {
        Self {
            location: None,
            holding: Some(object),
        }
    }

    /// Additionally require the held object.
    #[must_use]
    pub fn with_holding(mut self, object: ObjectType) -> Self {
        self.holding = Some(object);
        self
    }

    /// Additionally require the contents of the goal room.
    ///
    /// Has no effect on a pattern without a location.
    #[must_use]
    pub fn with_contents(mut self, contents: ObjectType) -> Self {
        if let Some(location) = self.location.as_mut() {
            location.contents = Some(contents);
        }
        self
    }

    /// Partial, asymmetric match of a concrete state against this pattern.
    ///
    /// - location is compared only if the pattern sets one,
    /// - the current room's contents only if the pattern sets them,
    /// - holding only if the pattern sets it.
    ///
    /// Not an equivalence relation; never use it for cycle detection.
    #[must_use]
    pub fn matches(&self, state: &WorldState) -> bool {
        let location_ok = match self.location {
            None => true,
            Some(goal) if state.location() != goal.room => false,
            Some(GoalLocation { contents: None, .. }) => true,
            Some(GoalLocation {
                contents: Some(c), ..
            }) => state.current_room().contents == c,
        };
        let holding_ok = match self.holding {
            None => true,
            Some(h) => state.holding() == h,
        };
        location_ok && holding_ok
    }
}

/// A goal described by room name, as users and adapters write it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GoalSpecV1 {
    pub room: Option<String>,
    pub contents: Option<ObjectType>,
    pub holding: Option<ObjectType>,
}

impl GoalSpecV1 {
    /// Resolve room names against `state`'s map.
    ///
    /// # Errors
    ///
    /// Returns [`GoalError::UnknownRoom`] if the room is not in the map and
    /// [`GoalError::ContentsWithoutRoom`] if contents are given alone.
    pub fn resolve(&self, state: &WorldState) -> Result<GoalPattern, GoalError> {
        let location = match (&self.room, self.contents) {
            (Some(name), contents) => {
                let room = state.room_id(name).ok_or_else(|| GoalError::UnknownRoom {
                    name: name.clone(),
                })?;
                Some(GoalLocation { room, contents })
            }
            (None, Some(_)) => return Err(GoalError::ContentsWithoutRoom),
            (None, None) => None,
        };
        Ok(GoalPattern {
            location,
            holding: self.holding,
        })
    }
}

/// `"in b, b contains Orb, holding Nothing"`; `"anything"` when unconstrained.
impl fmt::Display for GoalSpecV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(room) = &self.room {
            parts.push(format!("in {room}"));
            if let Some(contents) = self.contents {
                parts.push(format!("{room} contains {contents}"));
            }
        }
        if let Some(holding) = self.holding {
            parts.push(format!("holding {holding}"));
        }
        if parts.is_empty() {
            f.write_str("anything")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}
