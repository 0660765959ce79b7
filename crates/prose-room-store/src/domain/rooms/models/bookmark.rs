// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

/// The display metadata saved with a bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookmarkMeta {
    pub name: String,
    /// The nickname to use when joining the room.
    pub nick: String,
    pub autojoin: Option<bool>,
    pub password: Option<String>,
}

impl BookmarkMeta {
    pub fn new(name: impl Into<String>, nick: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nick: nick.into(),
            autojoin: None,
            password: None,
        }
    }

    pub fn with_autojoin(mut self, autojoin: bool) -> Self {
        self.autojoin = Some(autojoin);
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}
