//! Small demonstration maps, each showing one planning trade-off.

use roomplan_kernel::model::compile::MapSpecV1;
use roomplan_kernel::model::object::ConnectionType::{Door as D, Hallway as H};
use roomplan_kernel::model::object::Direction::{East as E, North as N, South as S, West as W};
use roomplan_kernel::model::object::ObjectType::{Key, Nothing, Orb};

use super::{map_from_first_room, room};

/// A ring of nine hallways closed by one door between `a` and `j`.
///
/// Walking round to `j` (9) beats forcing the door (10); coming back, the
/// key lying in `j` opens the door for 1.25.
#[must_use]
pub fn long_way_round() -> MapSpecV1 {
    map_from_first_room(vec![
        room("a", Nothing, &[(E, D, "j"), (S, H, "b")]),
        room("b", Nothing, &[(N, H, "a"), (S, H, "c")]),
        room("c", Nothing, &[(N, H, "b"), (E, H, "d")]),
        room("d", Nothing, &[(W, H, "c"), (E, H, "e")]),
        room("e", Nothing, &[(W, H, "d"), (E, H, "f")]),
        room("f", Nothing, &[(W, H, "e"), (N, H, "g")]),
        room("g", Nothing, &[(S, H, "f"), (N, H, "h")]),
        room("h", Nothing, &[(S, H, "g"), (W, H, "i")]),
        room("i", Orb, &[(E, H, "h"), (W, H, "j")]),
        room("j", Key, &[(W, D, "a"), (E, H, "i")]),
    ])
}

/// Two doors in a row with the key lying between them.
#[must_use]
pub fn first_test() -> MapSpecV1 {
    map_from_first_room(vec![
        room("a", Nothing, &[(E, D, "b")]),
        room("b", Key, &[(W, D, "a"), (N, D, "c"), (E, H, "e"), (S, H, "d")]),
        room("c", Nothing, &[(S, D, "b")]),
        room("d", Orb, &[(N, H, "b")]),
        room("e", Nothing, &[(W, H, "b"), (E, H, "f")]),
        room("f", Orb, &[(W, H, "e")]),
    ])
}

/// The orb behind a second door; the key is a short detour away.
#[must_use]
pub fn key_fetch() -> MapSpecV1 {
    map_from_first_room(vec![
        room("a", Nothing, &[(E, D, "b")]),
        room("b", Nothing, &[(W, D, "a"), (N, D, "c"), (E, H, "e"), (S, H, "d")]),
        room("c", Orb, &[(S, D, "b")]),
        room("d", Nothing, &[(N, H, "b")]),
        room("e", Nothing, &[(W, H, "b"), (E, H, "f")]),
        room("f", Key, &[(W, H, "e")]),
    ])
}
