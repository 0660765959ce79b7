// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use bookmark::BookmarkMeta;
pub use occupant::{Occupant, OccupantAffiliation, OccupantRole};
pub use room::{MessageList, Room, RoomList};

mod bookmark;
mod occupant;
mod room;
