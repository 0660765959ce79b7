// prose-core-client/prose-room-store-integration-tests
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use prose_room_store::dtos::{LoadMessagesOptions, RoomId};
use prose_room_store::room_id;
use prose_room_store::test::{MessageBuilder, RoomBuilder};
use prose_room_store::RoomStoreError;

use super::helpers::{CacheLoad, RecordingMessageCache};

#[tokio::test]
async fn test_sets_active_room() -> Result<()> {
    let (store, _) = RecordingMessageCache::store();

    store.add_room(
        RoomBuilder::new(room_id!("test@conference.example.com"))
            .set_name("Test Room")
            .set_joined(true)
            .build(),
    );

    assert_eq!(store.active_room_id(), None);
    assert!(store.active_room().is_none());

    store
        .set_active_room(Some(room_id!("test@conference.example.com")))
        .await?;

    assert_eq!(
        store.active_room_id(),
        Some(room_id!("test@conference.example.com"))
    );
    assert_eq!(
        store.active_room().map(|room| room.name.clone()),
        Some("Test Room".to_string())
    );

    Ok(())
}

#[tokio::test]
async fn test_loads_cache_before_setting_active_room() -> Result<()> {
    let (store, cache) = RecordingMessageCache::store();

    store.add_room(
        RoomBuilder::new(room_id!("room1@conference.example.com"))
            .set_joined(true)
            .build(),
    );
    store.add_room(
        RoomBuilder::new(room_id!("room2@conference.example.com"))
            .set_joined(true)
            .set_messages(vec![MessageBuilder::new_with_index(1).build()])
            .set_unread_count(1)
            .build(),
    );

    store
        .set_active_room(Some(room_id!("room1@conference.example.com")))
        .await?;
    store
        .set_active_room(Some(room_id!("room2@conference.example.com")))
        .await?;

    assert_eq!(
        cache.loads(),
        vec![
            CacheLoad {
                room_id: room_id!("room1@conference.example.com"),
                options: LoadMessagesOptions::with_limit(100),
                active_room_id: None,
            },
            CacheLoad {
                room_id: room_id!("room2@conference.example.com"),
                options: LoadMessagesOptions::with_limit(100),
                active_room_id: Some(room_id!("room1@conference.example.com")),
            }
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_always_loads_cache_even_when_room_has_messages() -> Result<()> {
    let (store, cache) = RecordingMessageCache::store();
    let room_id = room_id!("test@conference.example.com");

    store.add_room(
        RoomBuilder::new(room_id.clone())
            .set_joined(true)
            .set_messages(vec![MessageBuilder::new_with_index(10)
                .set_id("live-1")
                .set_body("New message")
                .build()])
            .set_unread_count(1)
            .build(),
    );
    cache.set_messages(
        &room_id,
        vec![
            MessageBuilder::new_with_index(1)
                .set_body("Older message")
                .build(),
            MessageBuilder::new_with_index(2).set_body("Old message").build(),
        ],
    );

    store.set_active_room(Some(room_id.clone())).await?;

    assert_eq!(cache.loads().len(), 1);
    assert_eq!(cache.loads()[0].room_id, room_id);
    assert_eq!(
        store
            .active_messages()
            .iter()
            .map(|m| m.body.as_str())
            .collect::<Vec<_>>(),
        vec!["Older message", "Old message", "New message"]
    );
    // Hydrated messages have been seen before.
    assert_eq!(store.get_room(&room_id).map(|r| r.unread_count), Some(1));

    Ok(())
}

#[tokio::test]
async fn test_reactivating_room_does_not_duplicate_messages() -> Result<()> {
    let (store, cache) = RecordingMessageCache::store();
    let room_id = room_id!("test@conference.example.com");

    store.add_room(RoomBuilder::new(room_id.clone()).set_joined(true).build());
    cache.set_messages(&room_id, vec![MessageBuilder::new_with_index(1).build()]);

    store.set_active_room(Some(room_id.clone())).await?;
    let messages = store.active_messages();

    store.set_active_room(None).await?;
    store.set_active_room(Some(room_id.clone())).await?;

    assert_eq!(cache.loads().len(), 2);
    assert_eq!(store.active_messages().len(), 1);
    assert!(std::sync::Arc::ptr_eq(&messages, &store.active_messages()));

    Ok(())
}

#[tokio::test]
async fn test_clears_active_room_without_loading_cache() -> Result<()> {
    let (store, cache) = RecordingMessageCache::store();

    store.add_room(
        RoomBuilder::new(room_id!("test@conference.example.com"))
            .set_joined(true)
            .build(),
    );
    store
        .set_active_room(Some(room_id!("test@conference.example.com")))
        .await?;
    store.set_active_room(None).await?;

    assert_eq!(store.active_room_id(), None);
    assert!(store.active_room().is_none());
    assert_eq!(cache.loads().len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_activates_room_when_cache_fails() {
    let (store, cache) = RecordingMessageCache::store();
    let room_id = room_id!("test@conference.example.com");

    store.add_room(
        RoomBuilder::new(room_id.clone())
            .set_joined(true)
            .set_messages(vec![MessageBuilder::new_with_index(1).build()])
            .build(),
    );
    cache.fail_loading(&room_id);

    let result = store.set_active_room(Some(room_id.clone())).await;

    let Err(RoomStoreError::Hydration {
        room_id: failed_room_id,
        ..
    }) = result
    else {
        panic!("Expected a hydration error");
    };
    assert_eq!(failed_room_id, room_id);
    assert_eq!(store.active_room_id(), Some(room_id));
    assert_eq!(store.active_messages().len(), 1);
}

#[tokio::test]
async fn test_latest_activation_wins() -> Result<()> {
    let (store, cache) = RecordingMessageCache::store();
    let room1 = room_id!("room1@conference.example.com");
    let room2 = room_id!("room2@conference.example.com");

    store.add_room(RoomBuilder::new(room1.clone()).set_joined(true).build());
    store.add_room(RoomBuilder::new(room2.clone()).set_joined(true).build());

    let gate = cache.gate(&room1);

    let (result1, result2) = tokio::join!(store.set_active_room(Some(room1.clone())), async {
        let result = store.set_active_room(Some(room2.clone())).await;
        assert_eq!(store.active_room_id(), Some(room2.clone()));
        // Let the activation of room1 finish after the one of room2.
        gate.notify_one();
        result
    });

    result1?;
    result2?;

    assert_eq!(store.active_room_id(), Some(room2));
    assert_eq!(
        cache
            .loads()
            .into_iter()
            .map(|load| load.room_id)
            .collect::<Vec<_>>(),
        vec![room1, room_id!("room2@conference.example.com")]
    );

    Ok(())
}

#[tokio::test]
async fn test_clearing_supersedes_pending_activation() -> Result<()> {
    let (store, cache) = RecordingMessageCache::store();
    let room_id = room_id!("room@conference.example.com");

    store.add_room(RoomBuilder::new(room_id.clone()).set_joined(true).build());
    let gate = cache.gate(&room_id);

    let (result1, result2) = tokio::join!(store.set_active_room(Some(room_id.clone())), async {
        let result = store.set_active_room(None).await;
        gate.notify_one();
        result
    });

    result1?;
    result2?;

    assert_eq!(store.active_room_id(), None);
    Ok(())
}

#[tokio::test]
async fn test_activating_unknown_room() -> Result<()> {
    let (store, cache) = RecordingMessageCache::store();
    let room_id: RoomId = room_id!("unknown@conference.example.com");

    cache.set_messages(&room_id, vec![MessageBuilder::new_with_index(1).build()]);
    store.set_active_room(Some(room_id.clone())).await?;

    assert_eq!(store.active_room_id(), Some(room_id.clone()));
    assert!(store.active_room().is_none());
    assert!(store.active_messages().is_empty());
    assert!(store.get_room(&room_id).is_none());

    Ok(())
}
