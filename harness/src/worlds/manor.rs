//! The twelve-room demo map.
//!
//! ```text
//!               g(Orb)
//!               |
//! a             f       k(Key)
//! |             |       |
//! b ─ d(Key) ═  e ─ i ─ j ═ l(Orb)
//! |             ‖
//! c             h(Orb)
//! ```
//!
//! `─`/`|` are hallways, `═`/`‖` closed doors. Two keys and three orbs make
//! it a useful playground for `get`/`put` goals.

use roomplan_kernel::model::compile::MapSpecV1;
use roomplan_kernel::model::object::ConnectionType::{Door as D, Hallway as H};
use roomplan_kernel::model::object::Direction::{East as E, North as N, South as S, West as W};
use roomplan_kernel::model::object::ObjectType::{Key, Nothing, Orb};

use super::{map_from_first_room, room};

/// Start in `a`, empty-handed.
#[must_use]
pub fn manor() -> MapSpecV1 {
    map_from_first_room(vec![
        room("a", Nothing, &[(S, H, "b")]),
        room("b", Nothing, &[(N, H, "a"), (S, H, "c"), (E, H, "d")]),
        room("c", Nothing, &[(N, H, "b")]),
        room("d", Key, &[(W, H, "b"), (E, D, "e")]),
        room("e", Nothing, &[(W, D, "d"), (N, H, "f"), (E, H, "i"), (S, D, "h")]),
        room("f", Nothing, &[(S, H, "e"), (N, H, "g")]),
        room("g", Orb, &[(S, H, "f")]),
        room("h", Orb, &[(N, D, "e")]),
        room("i", Nothing, &[(W, H, "e"), (E, H, "j")]),
        room("j", Nothing, &[(W, H, "i"), (N, H, "k"), (E, D, "l")]),
        room("k", Key, &[(S, H, "j")]),
        room("l", Orb, &[(W, D, "j")]),
    ])
}
