// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::{AppConfig, AppDependencies};
pub use app::services::RoomService;
pub use app::stores::{
    AdminStore, AdminStoreView, RoomStore, RoomStoreBuilder, RoomStoreError, RoomStoreSnapshot,
    RoomStoreView, StoreObserver, SubscriptionId,
};

pub mod app;
pub mod domain;
pub mod infra;

#[cfg(any(test, feature = "test"))]
pub mod test;

pub mod dtos {
    pub use crate::domain::messaging::models::{MessageId, MessageKind, Reactions, RoomMessage};
    pub use crate::domain::messaging::repos::LoadMessagesOptions;
    pub use crate::domain::rooms::models::{
        BookmarkMeta, MessageList, Occupant, OccupantAffiliation, OccupantRole, Room, RoomList,
    };
    pub use crate::domain::shared::models::{OccupantId, RoomId, RoomIdParseError};
}
