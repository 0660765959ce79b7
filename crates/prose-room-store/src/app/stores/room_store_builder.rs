// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{AppConfig, DynMessageCacheRepository};
use crate::app::stores::RoomStore;
use crate::domain::messaging::repos::MessageCacheRepository;
use crate::infra::messaging::NoopMessageCacheRepository;

pub struct RoomStoreBuilder {
    config: AppConfig,
    message_cache: DynMessageCacheRepository,
}

impl RoomStoreBuilder {
    pub(crate) fn new() -> Self {
        RoomStoreBuilder {
            config: Default::default(),
            message_cache: Arc::new(NoopMessageCacheRepository),
        }
    }

    pub fn set_message_cache<C: MessageCacheRepository + 'static>(mut self, cache: C) -> Self {
        self.message_cache = Arc::new(cache);
        self
    }

    pub fn set_shared_message_cache(mut self, cache: DynMessageCacheRepository) -> Self {
        self.message_cache = cache;
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> RoomStore {
        RoomStore::new(self.message_cache, self.config)
    }
}
