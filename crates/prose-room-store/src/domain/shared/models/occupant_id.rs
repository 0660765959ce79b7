// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};

use jid::FullJid;
use serde::{Deserialize, Serialize};

use super::RoomId;

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Identifies a participant within a room by combining the room's address with the
/// participant's nickname in that room.
pub struct OccupantId(FullJid);

impl OccupantId {
    pub fn nickname(&self) -> &str {
        self.0.resource_str()
    }

    pub fn room_id(&self) -> RoomId {
        self.0.to_bare().into()
    }

    pub fn into_inner(self) -> FullJid {
        self.0
    }
}

impl From<FullJid> for OccupantId {
    fn from(value: FullJid) -> Self {
        OccupantId(value)
    }
}

impl Debug for OccupantId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "OccupantId({})", self.0)
    }
}

impl Display for OccupantId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
