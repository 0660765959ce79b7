// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use jid::Jid;
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::RoomId;

use super::{MessageId, Reactions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    GroupChat,
    /// Messages generated by the room itself (joins, subject changes, …).
    System,
}

/// A message posted to a room.
///
/// Messages are never modified in place. Metadata updates (like reactions) replace the
/// message inside the room's message list with an updated copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomMessage {
    pub kind: MessageKind,
    pub id: MessageId,
    pub room_id: RoomId,
    /// The full address of the sender, i.e. `room@conference.example.com/nickname`.
    pub from: Jid,
    pub nickname: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub is_outgoing: bool,
    /// Set by the protocol layer if the message mentions our user.
    #[serde(default)]
    pub is_mention: bool,
    #[serde(default)]
    pub reactions: Reactions,
}

impl RoomMessage {
    /// Returns true if the message should count towards the unread counters of its room.
    pub fn counts_as_unread(&self) -> bool {
        !self.is_outgoing && self.kind == MessageKind::GroupChat
    }
}
