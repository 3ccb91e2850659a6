//! World model: rooms, connections, world states and goal patterns.
//!
//! Every `WorldState` owns its own room arena. Connections refer to rooms by
//! [`room::RoomId`] inside that same arena, never across states.

pub mod compile;
pub mod goal;
pub mod object;
pub mod room;
pub mod state;
