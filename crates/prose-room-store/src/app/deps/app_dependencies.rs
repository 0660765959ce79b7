// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{AppConfig, DynMessageCacheRepository, SharedAdminStore, SharedRoomStore};
use crate::app::stores::{AdminStore, RoomStore};

/// The stores shared by the services of one chat session.
#[derive(Clone)]
pub struct AppDependencies {
    pub admin_store: SharedAdminStore,
    pub room_store: SharedRoomStore,
}

impl AppDependencies {
    pub fn new(message_cache: DynMessageCacheRepository, config: AppConfig) -> Self {
        Self {
            admin_store: Arc::new(AdminStore::new()),
            room_store: Arc::new(
                RoomStore::builder()
                    .set_shared_message_cache(message_cache)
                    .set_config(config)
                    .build(),
            ),
        }
    }
}
