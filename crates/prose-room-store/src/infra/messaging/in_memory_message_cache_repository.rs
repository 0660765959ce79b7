// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::messaging::models::RoomMessage;
use crate::domain::messaging::repos::{LoadMessagesOptions, MessageCacheRepository};
use crate::domain::shared::models::RoomId;

/// A message cache that keeps the messages of each room in memory.
pub struct InMemoryMessageCacheRepository {
    messages: RwLock<HashMap<RoomId, Vec<RoomMessage>>>,
}

impl InMemoryMessageCacheRepository {
    pub fn new() -> Self {
        Self {
            messages: Default::default(),
        }
    }

    /// Appends `messages` to the cached messages of their rooms, replacing cached messages with
    /// the same id.
    pub fn put(&self, messages: impl IntoIterator<Item = RoomMessage>) {
        let mut cache = self.messages.write();

        for message in messages {
            let room_messages = cache.entry(message.room_id.clone()).or_default();
            match room_messages.iter_mut().find(|m| m.id == message.id) {
                Some(cached_message) => *cached_message = message,
                None => room_messages.push(message),
            }
        }
    }

    pub fn clear_cache(&self) {
        self.messages.write().clear();
    }
}

impl Default for InMemoryMessageCacheRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageCacheRepository for InMemoryMessageCacheRepository {
    async fn load_messages(
        &self,
        room_id: &RoomId,
        options: LoadMessagesOptions,
    ) -> Result<Vec<RoomMessage>> {
        let cache = self.messages.read();
        let Some(messages) = cache.get(room_id) else {
            return Ok(vec![]);
        };

        let skip = options
            .limit
            .map(|limit| messages.len().saturating_sub(limit as usize))
            .unwrap_or(0);

        Ok(messages.iter().skip(skip).cloned().collect())
    }
}
