// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message_id::MessageId;
pub use reactions::Reactions;
pub use room_message::{MessageKind, RoomMessage};

mod message_id;
mod reactions;
mod room_message;
