// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::RoomId;

#[derive(Debug, thiserror::Error)]
pub enum RoomStoreError {
    #[error("Failed to load the messages of {room_id} from the cache.")]
    Hydration {
        room_id: RoomId,
        #[source]
        source: anyhow::Error,
    },
}
