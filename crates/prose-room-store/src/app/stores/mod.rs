// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use admin_store::{AdminStore, AdminStoreView};
pub use observers::{StoreObserver, SubscriptionId};
pub use room_store::{RoomStore, RoomStoreSnapshot};
pub use room_store_builder::RoomStoreBuilder;
pub use room_store_error::RoomStoreError;
pub use room_views::{RoomStoreView, RoomViews};

mod admin_store;
mod observers;
mod room_store;
mod room_store_builder;
mod room_store_error;
mod room_views;
