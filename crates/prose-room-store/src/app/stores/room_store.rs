// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::app::deps::{AppConfig, DynMessageCacheRepository};
use crate::app::stores::observers::ObserverRegistry;
use crate::app::stores::{
    RoomStoreBuilder, RoomStoreError, RoomStoreView, RoomViews, StoreObserver, SubscriptionId,
};
use crate::domain::messaging::models::{MessageId, RoomMessage};
use crate::domain::messaging::repos::LoadMessagesOptions;
use crate::domain::rooms::models::{BookmarkMeta, MessageList, Occupant, Room, RoomList};
use crate::domain::shared::models::{OccupantId, RoomId};

/// A consistent view of the store's state. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct RoomStoreSnapshot {
    pub rooms: Arc<IndexMap<RoomId, Arc<Room>>>,
    pub active_room_id: Option<RoomId>,
    pub drafts: Arc<HashMap<RoomId, String>>,
}

struct StoreState {
    snapshot: RoomStoreSnapshot,
    views: RoomViews,
}

/// Holds the rooms of a chat session, the active room and the unsent drafts.
///
/// All mutations are synchronous and become visible atomically. The only suspending operation
/// is room activation, which hydrates the room from the message cache before the active room
/// is switched (see `set_active_room`).
pub struct RoomStore {
    state: RwLock<StoreState>,
    observers: ObserverRegistry<RoomStoreView>,
    message_cache: DynMessageCacheRepository,
    config: AppConfig,
    activation_generation: AtomicU64,
}

impl RoomStore {
    pub fn builder() -> RoomStoreBuilder {
        RoomStoreBuilder::new()
    }

    pub(crate) fn new(message_cache: DynMessageCacheRepository, config: AppConfig) -> Self {
        let snapshot = RoomStoreSnapshot::default();
        let mut views = RoomViews::default();
        views.update(&snapshot);

        Self {
            state: RwLock::new(StoreState { snapshot, views }),
            observers: Default::default(),
            message_cache,
            config,
            activation_generation: Default::default(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl RoomStore {
    pub fn snapshot(&self) -> RoomStoreSnapshot {
        self.state.read().snapshot.clone()
    }

    pub fn rooms(&self) -> Vec<Arc<Room>> {
        self.state.read().snapshot.rooms.values().cloned().collect()
    }

    pub fn get_room(&self, room_id: &RoomId) -> Option<Arc<Room>> {
        self.state.read().snapshot.rooms.get(room_id).cloned()
    }

    pub fn active_room_id(&self) -> Option<RoomId> {
        self.state.read().snapshot.active_room_id.clone()
    }

    pub fn active_room(&self) -> Option<Arc<Room>> {
        self.state.read().views.active_room.clone()
    }

    pub fn joined_rooms(&self) -> RoomList {
        self.state.read().views.joined_rooms.clone()
    }

    pub fn bookmarked_rooms(&self) -> RoomList {
        self.state.read().views.bookmarked_rooms.clone()
    }

    pub fn all_rooms(&self) -> RoomList {
        self.state.read().views.all_rooms.clone()
    }

    pub fn active_messages(&self) -> MessageList {
        self.state.read().views.active_messages.clone()
    }
}

impl RoomStore {
    /// Inserts `room` or replaces the room with the same id.
    pub fn add_room(&self, room: Room) {
        self.mutate(|snapshot| {
            if snapshot.rooms.get(&room.id).is_some_and(|r| **r == room) {
                return;
            }
            Arc::make_mut(&mut snapshot.rooms).insert(room.id.clone(), Arc::new(room));
        })
    }

    /// Updates the membership flag of a room. Joining an unknown room creates it, leaving a room
    /// never removes it.
    pub fn set_room_joined(&self, room_id: &RoomId, joined: bool) {
        self.mutate(|snapshot| {
            if snapshot.rooms.contains_key(room_id) {
                modify_room(snapshot, room_id, |room| room.set_joined(joined));
                return;
            }
            if !joined {
                debug!("Ignoring leave of unknown room {room_id}.");
                return;
            }
            Arc::make_mut(&mut snapshot.rooms)
                .insert(room_id.clone(), Arc::new(Room::joined(room_id.clone())));
        })
    }

    /// Bookmarks a room, creating it if needed. The bookmark's metadata replaces the room's name,
    /// nickname, autojoin and password while its membership and conversation are kept.
    pub fn set_bookmark(&self, room_id: &RoomId, meta: BookmarkMeta) {
        self.mutate(|snapshot| {
            if snapshot.rooms.contains_key(room_id) {
                modify_room(snapshot, room_id, |room| room.apply_bookmark(&meta));
                return;
            }
            Arc::make_mut(&mut snapshot.rooms).insert(
                room_id.clone(),
                Arc::new(Room::bookmarked(room_id.clone(), &meta)),
            );
        })
    }

    /// Removes the bookmark of a room. Rooms that we're not joined to are removed altogether.
    pub fn remove_bookmark(&self, room_id: &RoomId) {
        self.mutate(|snapshot| {
            let Some(room) = snapshot.rooms.get(room_id) else {
                debug!("Ignoring removal of bookmark for unknown room {room_id}.");
                return;
            };

            if room.joined {
                modify_room(snapshot, room_id, Room::clear_bookmark);
            } else {
                delete_room(snapshot, room_id);
            }
        })
    }

    /// Removes a room regardless of its membership or bookmark. Its draft is kept.
    pub fn remove_room(&self, room_id: &RoomId) -> Option<Arc<Room>> {
        self.mutate(|snapshot| delete_room(snapshot, room_id))
    }

    /// Removes all rooms that are neither joined nor bookmarked and hold no messages. The active
    /// room is never removed. Returns the number of removed rooms.
    pub fn prune_rooms(&self) -> usize {
        let removed = self.mutate(|snapshot| {
            let prunable = snapshot
                .rooms
                .values()
                .filter(|room| room.is_prunable())
                .filter(|room| snapshot.active_room_id.as_ref() != Some(&room.id))
                .map(|room| room.id.clone())
                .collect::<Vec<_>>();

            if !prunable.is_empty() {
                Arc::make_mut(&mut snapshot.rooms).retain(|id, _| !prunable.contains(id));
            }
            prunable.len()
        });

        if removed > 0 {
            info!("Pruned {removed} inactive rooms.");
        }
        removed
    }

    /// Appends `message` to the room. Incoming messages in rooms other than the active room
    /// bump the room's unread counter (and its mentions counter if the message mentions us).
    pub fn add_message(&self, room_id: &RoomId, message: RoomMessage) {
        self.mutate(|snapshot| {
            if !snapshot.rooms.contains_key(room_id) {
                warn!("Dropping message {} for unknown room {room_id}.", message.id);
                return;
            }
            let is_active_room = snapshot.active_room_id.as_ref() == Some(room_id);
            modify_room(snapshot, room_id, |room| {
                room.append_message(message, is_active_room)
            });
        })
    }

    pub fn mark_as_read(&self, room_id: &RoomId) {
        self.update_room(room_id, Room::mark_as_read);
    }

    pub fn set_unread_count(&self, room_id: &RoomId, count: u32) {
        self.update_room(room_id, |room| room.set_unread_count(count));
    }

    pub fn set_typing(&self, room_id: &RoomId, nickname: &str, is_typing: bool) {
        self.update_room(room_id, |room| room.set_typing(nickname, is_typing));
    }

    pub fn add_occupant(&self, room_id: &RoomId, occupant: Occupant) {
        self.update_room(room_id, |room| room.insert_occupant(occupant));
    }

    pub fn remove_occupant(&self, room_id: &RoomId, occupant_id: &OccupantId) {
        self.update_room(room_id, |room| room.remove_occupant(occupant_id));
    }

    /// Replaces the reactions of `reactor` on a message with `emojis`.
    ///
    /// Applies reactions received from the server. Apps send reactions through the protocol
    /// layer instead of calling this directly.
    pub fn update_reactions(
        &self,
        room_id: &RoomId,
        message_id: &MessageId,
        reactor: &str,
        emojis: &[String],
    ) {
        self.update_room(room_id, |room| {
            room.update_reactions(message_id, reactor, emojis)
        });
    }

    /// Drops all rooms, the active room and all drafts. Pending activations will not be
    /// committed.
    pub fn reset(&self) {
        self.activation_generation.fetch_add(1, Ordering::SeqCst);
        self.mutate(|snapshot| *snapshot = RoomStoreSnapshot::default())
    }
}

impl RoomStore {
    pub fn get_draft(&self, room_id: &RoomId) -> String {
        self.state
            .read()
            .snapshot
            .drafts
            .get(room_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn drafts(&self) -> Arc<HashMap<RoomId, String>> {
        self.state.read().snapshot.drafts.clone()
    }

    /// Saves the unsent text of a room. Setting an empty text clears the draft.
    pub fn set_draft(&self, room_id: &RoomId, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return self.clear_draft(room_id);
        }

        self.mutate(|snapshot| {
            if snapshot.drafts.get(room_id) == Some(&text) {
                return;
            }
            Arc::make_mut(&mut snapshot.drafts).insert(room_id.clone(), text);
        })
    }

    pub fn clear_draft(&self, room_id: &RoomId) {
        self.mutate(|snapshot| {
            if !snapshot.drafts.contains_key(room_id) {
                return;
            }
            Arc::make_mut(&mut snapshot.drafts).remove(room_id);
        })
    }

    pub fn clear_drafts(&self) {
        self.mutate(|snapshot| {
            if snapshot.drafts.is_empty() {
                return;
            }
            snapshot.drafts = Default::default();
        })
    }
}

impl RoomStore {
    /// Loads the room's history from the message cache and merges it into the room.
    ///
    /// A failing cache doesn't touch the room and is reported as `RoomStoreError::Hydration`.
    #[tracing::instrument(skip(self))]
    pub async fn load_messages_from_cache(
        &self,
        room_id: &RoomId,
        options: LoadMessagesOptions,
    ) -> Result<(), RoomStoreError> {
        let messages = match self.message_cache.load_messages(room_id, options).await {
            Ok(messages) => messages,
            Err(error) => {
                warn!("Failed to load messages from cache. {}", error.to_string());
                return Err(RoomStoreError::Hydration {
                    room_id: room_id.clone(),
                    source: error,
                });
            }
        };

        let loaded_count = messages.len();
        let room_exists = self.mutate(|snapshot| {
            if !snapshot.rooms.contains_key(room_id) {
                return false;
            }
            modify_room(snapshot, room_id, |room| room.merge_cached_messages(messages));
            true
        });

        if room_exists {
            debug!("Loaded {loaded_count} messages from cache.");
        } else {
            debug!("Discarding {loaded_count} cached messages of unknown room.");
        }

        Ok(())
    }

    /// Makes `room_id` the active room, or clears the active room if `room_id` is `None`.
    ///
    /// The room's history is loaded from the message cache (with the configured
    /// `cache_load_limit`) before the active room changes. See
    /// `set_active_room_with_options` for the details.
    pub async fn set_active_room(&self, room_id: Option<RoomId>) -> Result<(), RoomStoreError> {
        let options = LoadMessagesOptions::with_limit(self.config.cache_load_limit);
        self.set_active_room_with_options(room_id, options).await
    }

    /// Activates a room in two phases:
    ///
    /// 1. The room is hydrated from the message cache, always, even if it holds messages
    ///    already. While hydrating, `active_room_id` still returns the previous room.
    /// 2. The active room is switched atomically.
    ///
    /// Clearing the active room (`None`) skips the first phase.
    ///
    /// Every call supersedes the calls started before it: if another call to this method
    /// started while this one was hydrating, this call's hydration still completes but the
    /// active room is left to the later call.
    ///
    /// A failed hydration doesn't prevent the activation. The error is returned after the
    /// active room was switched.
    #[tracing::instrument(skip(self))]
    pub async fn set_active_room_with_options(
        &self,
        room_id: Option<RoomId>,
        options: LoadMessagesOptions,
    ) -> Result<(), RoomStoreError> {
        let generation = self.activation_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let Some(room_id) = room_id else {
            self.commit_active_room(generation, None);
            return Ok(());
        };

        let hydration_result = self.load_messages_from_cache(&room_id, options).await;
        self.commit_active_room(generation, Some(room_id));
        hydration_result
    }

    fn commit_active_room(&self, generation: u64, room_id: Option<RoomId>) {
        self.mutate(|snapshot| {
            if self.activation_generation.load(Ordering::SeqCst) != generation {
                debug!("Activation of {room_id:?} was superseded.");
                return;
            }
            snapshot.active_room_id = room_id;
        })
    }
}

impl RoomStore {
    /// Registers `observer` to be called whenever the output of `view` changes.
    pub fn subscribe(
        &self,
        view: RoomStoreView,
        observer: Arc<dyn StoreObserver<RoomStoreView>>,
    ) -> SubscriptionId {
        self.observers.subscribe(view, observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}

impl RoomStore {
    fn mutate<T>(&self, block: impl FnOnce(&mut RoomStoreSnapshot) -> T) -> T {
        let (result, changed_views) = {
            let mut guard = self.state.write();
            let StoreState { snapshot, views } = &mut *guard;
            let result = block(snapshot);
            (result, views.update(snapshot))
        };
        self.observers.notify(&changed_views);
        result
    }

    fn update_room(&self, room_id: &RoomId, block: impl FnOnce(&mut Room) -> bool) {
        self.mutate(|snapshot| {
            if !snapshot.rooms.contains_key(room_id) {
                debug!("Ignoring update of unknown room {room_id}.");
                return;
            }
            modify_room(snapshot, room_id, block);
        })
    }
}

/// Applies `block` to a copy of the room and replaces the room if `block` returns true.
fn modify_room(
    snapshot: &mut RoomStoreSnapshot,
    room_id: &RoomId,
    block: impl FnOnce(&mut Room) -> bool,
) -> bool {
    let Some(room) = snapshot.rooms.get(room_id) else {
        return false;
    };

    let mut room = Room::clone(room);
    if !block(&mut room) {
        return false;
    }

    Arc::make_mut(&mut snapshot.rooms).insert(room_id.clone(), Arc::new(room));
    true
}

fn delete_room(snapshot: &mut RoomStoreSnapshot, room_id: &RoomId) -> Option<Arc<Room>> {
    if !snapshot.rooms.contains_key(room_id) {
        return None;
    }

    let room = Arc::make_mut(&mut snapshot.rooms).shift_remove(room_id);
    if snapshot.active_room_id.as_ref() == Some(room_id) {
        snapshot.active_room_id = None;
    }
    room
}
