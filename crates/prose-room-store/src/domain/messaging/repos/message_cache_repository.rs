// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::messaging::models::RoomMessage;
use crate::domain::shared::models::RoomId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadMessagesOptions {
    /// The maximum number of (most recent) messages to load.
    pub limit: Option<u32>,
}

impl LoadMessagesOptions {
    pub fn with_limit(limit: u32) -> Self {
        Self { limit: Some(limit) }
    }
}

/// The persistent message cache used to hydrate a room's history before it is presented.
///
/// Implementations must tolerate being called repeatedly for the same room.
#[async_trait]
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait MessageCacheRepository: Send + Sync {
    async fn load_messages(
        &self,
        room_id: &RoomId,
        options: LoadMessagesOptions,
    ) -> Result<Vec<RoomMessage>>;
}
