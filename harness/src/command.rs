//! Goal commands.
//!
//! | command         | goal                                                   |
//! |-----------------|--------------------------------------------------------|
//! | `goto R`        | in room `R`                                            |
//! | `goto R X`      | in room `R`, holding `X`                               |
//! | `get X`         | holding `X`                                            |
//! | `get X R`       | holding `X`, in room `R`, which is now empty           |
//! | `put X`         | holding nothing                                        |
//! | `put X R`       | holding nothing, in room `R`, which now contains `X`   |
//!
//! The verb and object names are case-insensitive.

use std::fmt;
use std::str::FromStr;

use roomplan_kernel::model::goal::GoalSpecV1;
use roomplan_kernel::model::object::ObjectType;

use crate::error::ParseError;

/// A parsed goal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalCommand {
    Goto {
        room: String,
        holding: Option<ObjectType>,
    },
    Get {
        object: ObjectType,
        room: Option<String>,
    },
    Put {
        object: ObjectType,
        room: Option<String>,
    },
}

impl GoalCommand {
    /// The goal this command asks for.
    #[must_use]
    pub fn goal_spec(&self) -> GoalSpecV1 {
        match self {
            Self::Goto { room, holding } => GoalSpecV1 {
                room: Some(room.clone()),
                contents: None,
                holding: *holding,
            },
            Self::Get { object, room } => GoalSpecV1 {
                room: room.clone(),
                contents: room.as_ref().map(|_| ObjectType::Nothing),
                holding: Some(*object),
            },
            Self::Put { object, room } => GoalSpecV1 {
                room: room.clone(),
                contents: room.as_ref().map(|_| *object),
                holding: Some(ObjectType::Nothing),
            },
        }
    }
}

impl FromStr for GoalCommand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next().ok_or(ParseError::Empty)?;
        let first = words.next();
        let second = words.next();
        let rest: Vec<&str> = words.collect();
        if !rest.is_empty() {
            return Err(ParseError::TrailingInput {
                rest: rest.join(" "),
            });
        }

        let command = match verb.to_ascii_lowercase().as_str() {
            "goto" => Self::Goto {
                room: first
                    .ok_or(ParseError::MissingArgument {
                        command: "goto",
                        expected: "a room",
                    })?
                    .to_string(),
                holding: second.map(str::parse).transpose()?,
            },
            "get" => Self::Get {
                object: first
                    .ok_or(ParseError::MissingArgument {
                        command: "get",
                        expected: "an object",
                    })?
                    .parse()?,
                room: second.map(str::to_string),
            },
            "put" => Self::Put {
                object: first
                    .ok_or(ParseError::MissingArgument {
                        command: "put",
                        expected: "an object",
                    })?
                    .parse()?,
                room: second.map(str::to_string),
            },
            _ => {
                return Err(ParseError::UnknownCommand {
                    verb: verb.to_string(),
                })
            }
        };
        Ok(command)
    }
}

/// Canonical lowercase form, e.g. `"get orb c"`.
impl fmt::Display for GoalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let object = |o: &ObjectType| o.to_string().to_ascii_lowercase();
        match self {
            Self::Goto { room, holding } => {
                write!(f, "goto {room}")?;
                if let Some(h) = holding {
                    write!(f, " {}", object(h))?;
                }
                Ok(())
            }
            Self::Get { object: o, room } | Self::Put { object: o, room } => {
                let verb = if matches!(self, Self::Get { .. }) { "get" } else { "put" };
                write!(f, "{verb} {}", object(o))?;
                if let Some(r) = room {
                    write!(f, " {r}")?;
                }
                Ok(())
            }
        }
    }
}
