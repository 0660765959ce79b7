// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::messaging::models::RoomMessage;
use crate::domain::messaging::repos::{LoadMessagesOptions, MessageCacheRepository};
use crate::domain::shared::models::RoomId;

/// Used by stores that were built without a message cache.
pub struct NoopMessageCacheRepository;

#[async_trait]
impl MessageCacheRepository for NoopMessageCacheRepository {
    async fn load_messages(
        &self,
        _room_id: &RoomId,
        _options: LoadMessagesOptions,
    ) -> Result<Vec<RoomMessage>> {
        Ok(vec![])
    }
}
