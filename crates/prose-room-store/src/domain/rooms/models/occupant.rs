// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::BareJid;
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::OccupantId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupantAffiliation {
    Owner,
    Admin,
    Member,
    Outcast,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupantRole {
    Moderator,
    #[default]
    Participant,
    Visitor,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    pub id: OccupantId,
    /// The real address of the occupant if the room is non-anonymous.
    pub real_id: Option<BareJid>,
    pub affiliation: OccupantAffiliation,
    pub role: OccupantRole,
}

impl Occupant {
    pub fn new(id: OccupantId) -> Self {
        Self {
            id,
            real_id: None,
            affiliation: Default::default(),
            role: Default::default(),
        }
    }

    pub fn nickname(&self) -> &str {
        self.id.nickname()
    }
}
