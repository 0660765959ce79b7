// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::app::stores::RoomStoreSnapshot;
use crate::domain::rooms::models::{MessageList, Room, RoomList};
use crate::domain::shared::models::RoomId;

static EMPTY_ROOMS: Lazy<RoomList> = Lazy::new(|| Arc::from(Vec::new()));

/// The observable outputs of a `RoomStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomStoreView {
    /// Any room record was added, replaced or removed.
    Rooms,
    JoinedRooms,
    BookmarkedRooms,
    /// Rooms that are either joined or bookmarked.
    AllRooms,
    ActiveRoomId,
    ActiveRoom,
    ActiveMessages,
    Drafts,
}

/// Memoized views derived from a `RoomStoreSnapshot`.
///
/// A view keeps its previous value (by identity) unless the records contributing to it changed.
/// Empty views always share the same instance.
#[derive(Debug, Clone)]
pub struct RoomViews {
    rooms_source: Option<Arc<IndexMap<RoomId, Arc<Room>>>>,
    drafts_source: Option<Arc<HashMap<RoomId, String>>>,
    pub joined_rooms: RoomList,
    pub bookmarked_rooms: RoomList,
    pub all_rooms: RoomList,
    pub active_room_id: Option<RoomId>,
    pub active_room: Option<Arc<Room>>,
    pub active_messages: MessageList,
}

impl Default for RoomViews {
    fn default() -> Self {
        Self {
            rooms_source: None,
            drafts_source: None,
            joined_rooms: empty_rooms(),
            bookmarked_rooms: empty_rooms(),
            all_rooms: empty_rooms(),
            active_room_id: None,
            active_room: None,
            active_messages: Room::empty_messages(),
        }
    }
}

pub fn empty_rooms() -> RoomList {
    EMPTY_ROOMS.clone()
}

impl RoomViews {
    /// Brings all views up to date with `snapshot` and returns the views whose output changed.
    pub fn update(&mut self, snapshot: &RoomStoreSnapshot) -> Vec<RoomStoreView> {
        let mut changed = vec![];

        let rooms_changed = !self
            .rooms_source
            .as_ref()
            .is_some_and(|source| Arc::ptr_eq(source, &snapshot.rooms));

        if rooms_changed {
            self.rooms_source = Some(snapshot.rooms.clone());
            changed.push(RoomStoreView::Rooms);

            let rooms = snapshot.rooms.values();

            if replace_if_changed(
                &mut self.joined_rooms,
                rooms.clone().filter(|room| room.joined),
            ) {
                changed.push(RoomStoreView::JoinedRooms);
            }
            if replace_if_changed(
                &mut self.bookmarked_rooms,
                rooms.clone().filter(|room| room.is_bookmarked),
            ) {
                changed.push(RoomStoreView::BookmarkedRooms);
            }
            if replace_if_changed(&mut self.all_rooms, rooms.filter(|room| room.is_listed())) {
                changed.push(RoomStoreView::AllRooms);
            }
        }

        if self.active_room_id != snapshot.active_room_id {
            self.active_room_id = snapshot.active_room_id.clone();
            changed.push(RoomStoreView::ActiveRoomId);
        }

        let active_room = snapshot
            .active_room_id
            .as_ref()
            .and_then(|id| snapshot.rooms.get(id))
            .cloned();

        let active_room_changed = match (&self.active_room, &active_room) {
            (None, None) => false,
            (Some(lhs), Some(rhs)) => !Arc::ptr_eq(lhs, rhs),
            _ => true,
        };
        if active_room_changed {
            self.active_room = active_room;
            changed.push(RoomStoreView::ActiveRoom);
        }

        let active_messages = match &self.active_room {
            Some(room) if !room.messages.is_empty() => room.messages.clone(),
            _ => Room::empty_messages(),
        };
        if !Arc::ptr_eq(&self.active_messages, &active_messages) {
            self.active_messages = active_messages;
            changed.push(RoomStoreView::ActiveMessages);
        }

        let drafts_changed = !self
            .drafts_source
            .as_ref()
            .is_some_and(|source| Arc::ptr_eq(source, &snapshot.drafts));
        if drafts_changed {
            // The first snapshot only establishes the baseline.
            if self.drafts_source.is_some() {
                changed.push(RoomStoreView::Drafts);
            }
            self.drafts_source = Some(snapshot.drafts.clone());
        }

        changed
    }
}

/// Replaces `list` with the rooms of `rooms` unless it holds exactly the same records already.
fn replace_if_changed<'a>(
    list: &mut RoomList,
    rooms: impl Iterator<Item = &'a Arc<Room>>,
) -> bool {
    let rooms = rooms.cloned().collect::<Vec<_>>();

    let is_same = rooms.len() == list.len()
        && rooms
            .iter()
            .zip(list.iter())
            .all(|(lhs, rhs)| Arc::ptr_eq(lhs, rhs));

    if is_same {
        return false;
    }

    *list = if rooms.is_empty() {
        empty_rooms()
    } else {
        rooms.into()
    };
    true
}
