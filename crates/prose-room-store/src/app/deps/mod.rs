// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

pub use app_config::AppConfig;
pub use app_dependencies::AppDependencies;

use crate::app::stores::{AdminStore, RoomStore};
use crate::domain::messaging::repos::MessageCacheRepository;

mod app_config;
mod app_dependencies;

pub type DynMessageCacheRepository = Arc<dyn MessageCacheRepository>;

pub type SharedAdminStore = Arc<AdminStore>;
pub type SharedRoomStore = Arc<RoomStore>;
