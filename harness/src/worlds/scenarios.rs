//! Minimal maps for the acceptance scenarios.
//!
//! Expected answers under the default cost table:
//!
//! | map                    | goal      | cost  |
//! |------------------------|-----------|-------|
//! | `door_only`            | `goto b`  | 10    |
//! | `door_with_key_detour` | `goto b`  | 3.25  |
//! | `key_then_door`        | `goto c`  | 11.25 |
//! | `unreachable`          | `goto c`  | none  |
//! | `orb_fetch`            | `get orb` | 1.25  |

use roomplan_kernel::model::compile::MapSpecV1;
use roomplan_kernel::model::object::ConnectionType::{Door as D, Hallway as H};
use roomplan_kernel::model::object::Direction::{East as E, North as N, South as S, West as W};
use roomplan_kernel::model::object::ObjectType::{Key, Nothing, Orb};

use super::{map_from_first_room, room};

/// `a ═ b(Key)`: the key is on the far side, so the door must be forced.
#[must_use]
pub fn door_only() -> MapSpecV1 {
    map_from_first_room(vec![
        room("a", Nothing, &[(E, D, "b")]),
        room("b", Key, &[(W, D, "a")]),
    ])
}

/// `a ═ b` with the key one hallway north of `a`.
#[must_use]
pub fn door_with_key_detour() -> MapSpecV1 {
    map_from_first_room(vec![
        room("a", Nothing, &[(E, D, "b"), (N, H, "k")]),
        room("b", Nothing, &[(W, D, "a")]),
        room("k", Key, &[(S, H, "a")]),
    ])
}

/// `a ═ b(Key) ═ c`: force the first door, then pick up the key for the
/// second one (or force it too, if pickups are expensive).
#[must_use]
pub fn key_then_door() -> MapSpecV1 {
    map_from_first_room(vec![
        room("a", Nothing, &[(E, D, "b")]),
        room("b", Key, &[(W, D, "a"), (N, D, "c")]),
        room("c", Nothing, &[(S, D, "b")]),
    ])
}

/// `a ─ b` plus an isolated room `c`.
#[must_use]
pub fn unreachable() -> MapSpecV1 {
    map_from_first_room(vec![
        room("a", Nothing, &[(E, H, "b")]),
        room("b", Nothing, &[(W, H, "a")]),
        room("c", Nothing, &[]),
    ])
}

/// `a ─ b(Orb)`.
#[must_use]
pub fn orb_fetch() -> MapSpecV1 {
    map_from_first_room(vec![
        room("a", Nothing, &[(E, H, "b")]),
        room("b", Orb, &[(W, H, "a")]),
    ])
}
