// prose-core-client/prose-room-store-integration-tests
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use pretty_assertions::assert_eq;

use prose_room_store::dtos::BookmarkMeta;
use prose_room_store::test::MessageBuilder;
use prose_room_store::{room_id, RoomStore, RoomStoreView};

use super::helpers::ViewRecorder;

#[test]
fn test_empty_views_are_stable() {
    let store = RoomStore::builder().build();

    let joined_rooms = store.joined_rooms();
    let bookmarked_rooms = store.bookmarked_rooms();
    let all_rooms = store.all_rooms();
    let active_messages = store.active_messages();

    // Rooms that are neither joined nor bookmarked don't show up in any view.
    store.add_room(prose_room_store::dtos::Room::new(room_id!(
        "unlisted@conference.example.com"
    )));
    store.set_draft(&room_id!("room@conference.example.com"), "Draft");

    assert!(Arc::ptr_eq(&joined_rooms, &store.joined_rooms()));
    assert!(Arc::ptr_eq(&bookmarked_rooms, &store.bookmarked_rooms()));
    assert!(Arc::ptr_eq(&all_rooms, &store.all_rooms()));
    assert!(Arc::ptr_eq(&active_messages, &store.active_messages()));

    // Different views share the same empty instance.
    assert!(Arc::ptr_eq(&joined_rooms, &bookmarked_rooms));
}

#[test]
fn test_views_are_stable_across_unrelated_changes() {
    let store = RoomStore::builder().build();
    let joined = room_id!("joined@conference.example.com");
    let bookmarked = room_id!("bookmarked@conference.example.com");

    store.set_room_joined(&joined, true);
    store.set_bookmark(&bookmarked, BookmarkMeta::new("Bookmarked", "nick"));

    let joined_rooms = store.joined_rooms();
    let bookmarked_rooms = store.bookmarked_rooms();
    let all_rooms = store.all_rooms();

    assert_eq!(joined_rooms.len(), 1);
    assert_eq!(bookmarked_rooms.len(), 1);
    assert_eq!(all_rooms.len(), 2);

    // A message in the bookmarked room leaves the joined rooms alone.
    store.add_message(&bookmarked, MessageBuilder::new_with_index(1).build());
    store.set_draft(&joined, "Draft");

    assert!(Arc::ptr_eq(&joined_rooms, &store.joined_rooms()));
    assert!(!Arc::ptr_eq(&bookmarked_rooms, &store.bookmarked_rooms()));
    assert!(!Arc::ptr_eq(&all_rooms, &store.all_rooms()));
}

#[test]
fn test_views_change_when_rooms_are_added() {
    let store = RoomStore::builder().build();
    let joined_rooms = store.joined_rooms();

    store.set_room_joined(&room_id!("room1@conference.example.com"), true);
    let joined_rooms_1 = store.joined_rooms();
    assert!(!Arc::ptr_eq(&joined_rooms, &joined_rooms_1));

    store.set_room_joined(&room_id!("room2@conference.example.com"), true);
    let joined_rooms_2 = store.joined_rooms();
    assert!(!Arc::ptr_eq(&joined_rooms_1, &joined_rooms_2));

    assert_eq!(
        joined_rooms_2
            .iter()
            .map(|room| room.id.to_string())
            .collect::<Vec<_>>(),
        vec![
            "room1@conference.example.com",
            "room2@conference.example.com"
        ]
    );
}

#[tokio::test]
async fn test_active_room_views() -> Result<()> {
    let store = RoomStore::builder().build();
    let room_id = room_id!("room@conference.example.com");
    store.set_room_joined(&room_id, true);

    let empty_messages = store.active_messages();
    store.set_active_room(Some(room_id.clone())).await?;

    assert_eq!(store.active_room().map(|room| room.id.clone()), Some(room_id.clone()));
    // The room has no messages yet.
    assert!(Arc::ptr_eq(&empty_messages, &store.active_messages()));

    store.add_message(&room_id, MessageBuilder::new_with_index(1).build());
    let messages = store.active_messages();
    assert_eq!(messages.len(), 1);

    store.set_draft(&room_id, "Draft");
    store.set_room_joined(&room_id!("other@conference.example.com"), true);
    assert!(Arc::ptr_eq(&messages, &store.active_messages()));

    store.add_message(&room_id, MessageBuilder::new_with_index(2).build());
    assert_eq!(store.active_messages().len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_observers_are_notified_of_changed_views_only() -> Result<()> {
    let store = RoomStore::builder().build();
    let room1 = room_id!("room1@conference.example.com");
    let room2 = room_id!("room2@conference.example.com");

    let recorder = ViewRecorder::<RoomStoreView>::new();
    for view in [
        RoomStoreView::Rooms,
        RoomStoreView::JoinedRooms,
        RoomStoreView::BookmarkedRooms,
        RoomStoreView::AllRooms,
        RoomStoreView::ActiveRoomId,
        RoomStoreView::ActiveRoom,
        RoomStoreView::ActiveMessages,
        RoomStoreView::Drafts,
    ] {
        store.subscribe(view, recorder.clone());
    }

    store.set_room_joined(&room1, true);
    assert_eq!(
        recorder.take(),
        vec![
            RoomStoreView::Rooms,
            RoomStoreView::JoinedRooms,
            RoomStoreView::AllRooms
        ]
    );

    store.set_room_joined(&room1, true);
    assert!(recorder.take().is_empty());

    store.set_bookmark(&room2, BookmarkMeta::new("Room 2", "nick"));
    assert_eq!(
        recorder.take(),
        vec![
            RoomStoreView::Rooms,
            RoomStoreView::BookmarkedRooms,
            RoomStoreView::AllRooms
        ]
    );

    store.set_active_room(Some(room1.clone())).await?;
    assert_eq!(
        recorder.take(),
        vec![RoomStoreView::ActiveRoomId, RoomStoreView::ActiveRoom]
    );

    store.add_message(&room1, MessageBuilder::new_with_index(1).build());
    assert_eq!(
        recorder.take(),
        vec![
            RoomStoreView::Rooms,
            RoomStoreView::JoinedRooms,
            RoomStoreView::AllRooms,
            RoomStoreView::ActiveRoom,
            RoomStoreView::ActiveMessages
        ]
    );

    store.set_draft(&room1, "Draft");
    assert_eq!(recorder.take(), vec![RoomStoreView::Drafts]);

    Ok(())
}

#[test]
fn test_unsubscribed_observers_are_not_notified() {
    let store = RoomStore::builder().build();
    let recorder = ViewRecorder::<RoomStoreView>::new();

    let subscription = store.subscribe(RoomStoreView::JoinedRooms, recorder.clone());
    assert!(store.unsubscribe(subscription));

    store.set_room_joined(&room_id!("room@conference.example.com"), true);
    assert!(recorder.take().is_empty());
}
