// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use jid::BareJid;
use serde::{Deserialize, Serialize};

use super::OccupantId;

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// The address of a multi-user chat room. Always a BareJid and used as the stable key of a room
/// throughout the store.
pub struct RoomId(BareJid);

impl RoomId {
    pub fn into_inner(self) -> BareJid {
        self.0
    }

    /// Returns the node of the room's address or, for node-less addresses, its domain.
    pub fn local_part(&self) -> &str {
        self.0.node_str().unwrap_or_else(|| self.0.domain_str())
    }

    pub fn occupant_id_with_nickname(
        &self,
        nickname: impl AsRef<str>,
    ) -> Result<OccupantId, jid::Error> {
        Ok(OccupantId::from(
            self.0.with_resource_str(nickname.as_ref())?,
        ))
    }
}

impl From<BareJid> for RoomId {
    fn from(value: BareJid) -> Self {
        RoomId(value)
    }
}

impl Deref for RoomId {
    type Target = BareJid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Debug for RoomId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RoomId({})", self.0)
    }
}

impl Display for RoomId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RoomId {
    type Err = jid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(BareJid::from_str(s)?))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RoomIdParseError {
    #[error("Missing xmpp: prefix in IRI")]
    InvalidIRI,
    #[error(transparent)]
    JID(#[from] jid::Error),
}

impl RoomId {
    /// Parses addresses shared as `xmpp:room@conference.example.com?join`.
    pub fn from_iri(iri: &str) -> Result<Self, RoomIdParseError> {
        let Some(mut iri) = iri.strip_prefix("xmpp:") else {
            return Err(RoomIdParseError::InvalidIRI);
        };
        if let Some(idx) = iri.rfind("?join") {
            iri = &iri[..idx];
        }
        Ok(Self::from_str(iri)?)
    }
}
