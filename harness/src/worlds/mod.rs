//! Built-in maps.
//!
//! Each map is a plain [`MapSpecV1`]; compile it with
//! [`roomplan_kernel::model::compile::compile_map`] or hand it to a
//! [`crate::runner::PlannerSession`].

use roomplan_kernel::model::compile::{MapSpecV1, RoomSpecV1};
use roomplan_kernel::model::object::{ConnectionType, Direction, ObjectType};

pub mod demos;
pub mod manor;
pub mod scenarios;

/// Names accepted by [`builtin_map`], in listing order.
pub const BUILTIN_MAPS: &[&str] = &[
    "manor",
    "long_way_round",
    "first_test",
    "key_fetch",
    "door_only",
    "door_with_key_detour",
    "key_then_door",
    "unreachable",
    "orb_fetch",
];

/// Look up a built-in map by name (case-insensitive).
#[must_use]
pub fn builtin_map(name: &str) -> Option<MapSpecV1> {
    let map = match name.to_ascii_lowercase().as_str() {
        "manor" => manor::manor(),
        "long_way_round" => demos::long_way_round(),
        "first_test" => demos::first_test(),
        "key_fetch" => demos::key_fetch(),
        "door_only" => scenarios::door_only(),
        "door_with_key_detour" => scenarios::door_with_key_detour(),
        "key_then_door" => scenarios::key_then_door(),
        "unreachable" => scenarios::unreachable(),
        "orb_fetch" => scenarios::orb_fetch(),
        _ => return None,
    };
    Some(map)
}

/// One room with its connections, in declaration order.
pub(crate) fn room(
    name: &str,
    contents: ObjectType,
    connections: &[(Direction, ConnectionType, &str)],
) -> RoomSpecV1 {
    connections
        .iter()
        .fold(RoomSpecV1::new(name, contents), |room, &(d, t, to)| {
            room.connect(d, t, to)
        })
}

/// A map starting empty-handed in the first room.
pub(crate) fn map_from_first_room(rooms: Vec<RoomSpecV1>) -> MapSpecV1 {
    MapSpecV1 {
        rooms,
        start_index: 0,
        holding: ObjectType::Nothing,
    }
}
