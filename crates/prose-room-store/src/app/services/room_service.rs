// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use jid::BareJid;

use crate::app::deps::{AppDependencies, SharedAdminStore, SharedRoomStore};
use crate::app::stores::RoomStoreError;
use crate::domain::rooms::models::{MessageList, Room, RoomList};
use crate::domain::shared::models::RoomId;

/// The rooms API offered to apps.
///
/// Wraps the room and admin stores and exposes their views and the operations apps may
/// trigger. Updates originating from the server (joins, bookmarks, incoming messages,
/// reactions) are applied to the stores by the protocol layer and aren't part of this API.
#[derive(Clone)]
pub struct RoomService {
    room_store: SharedRoomStore,
    admin_store: SharedAdminStore,
}

impl From<&AppDependencies> for RoomService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            room_store: deps.room_store.clone(),
            admin_store: deps.admin_store.clone(),
        }
    }
}

impl RoomService {
    pub fn joined_rooms(&self) -> RoomList {
        self.room_store.joined_rooms()
    }

    pub fn bookmarked_rooms(&self) -> RoomList {
        self.room_store.bookmarked_rooms()
    }

    pub fn all_rooms(&self) -> RoomList {
        self.room_store.all_rooms()
    }

    pub fn active_room(&self) -> Option<Arc<Room>> {
        self.room_store.active_room()
    }

    pub fn active_room_id(&self) -> Option<RoomId> {
        self.room_store.active_room_id()
    }

    pub fn active_messages(&self) -> MessageList {
        self.room_store.active_messages()
    }

    pub fn get_room(&self, room_id: &RoomId) -> Option<Arc<Room>> {
        self.room_store.get_room(room_id)
    }

    pub fn muc_service_jid(&self) -> Option<BareJid> {
        self.admin_store.muc_service_jid()
    }
}

impl RoomService {
    /// Loads the room's history from the cache, then makes it the active room. Check
    /// `active_room_id` afterwards if other activations might have been running concurrently.
    #[tracing::instrument(skip(self))]
    pub async fn set_active_room(&self, room_id: Option<RoomId>) -> Result<(), RoomStoreError> {
        self.room_store.set_active_room(room_id).await
    }

    pub fn mark_as_read(&self, room_id: &RoomId) {
        self.room_store.mark_as_read(room_id)
    }

    pub fn set_draft(&self, room_id: &RoomId, text: impl Into<String>) {
        self.room_store.set_draft(room_id, text)
    }

    /// Returns the draft of the room or an empty string.
    pub fn get_draft(&self, room_id: &RoomId) -> String {
        self.room_store.get_draft(room_id)
    }

    pub fn clear_draft(&self, room_id: &RoomId) {
        self.room_store.clear_draft(room_id)
    }
}
