// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use once_cell::sync::Lazy;

use crate::domain::messaging::models::{MessageId, RoomMessage};
use crate::domain::shared::models::{OccupantId, RoomId};

use super::{BookmarkMeta, Occupant};

pub type RoomList = Arc<[Arc<Room>]>;
pub type MessageList = Arc<[RoomMessage]>;

static EMPTY_MESSAGES: Lazy<MessageList> = Lazy::new(|| Arc::from(Vec::new()));

/// Contains everything we know about a room. Rooms are stored as immutable snapshots; every
/// mutation produces a new `Room` which replaces the previous one in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// The address of the room.
    pub id: RoomId,
    /// The display name of the room.
    pub name: String,
    /// The nickname with which our user is (or will be) present in the room.
    pub nickname: String,
    /// Whether we're currently joined to the room.
    pub joined: bool,
    /// Whether the room is bookmarked.
    pub is_bookmarked: bool,
    /// Bookmark metadata. Only set for bookmarked rooms.
    pub autojoin: Option<bool>,
    pub password: Option<String>,
    pub occupants: IndexMap<OccupantId, Occupant>,
    /// The messages of the room in chronological order.
    pub messages: MessageList,
    /// The number of unread messages in this room.
    pub unread_count: u32,
    /// The number of unread messages mentioning our user in this room.
    pub mentions_count: u32,
    /// The nicknames of the occupants who are currently typing.
    pub typing_users: IndexSet<String>,
}

impl Room {
    /// Returns a room that is neither joined nor bookmarked and named after the local part of
    /// its address.
    pub fn new(id: RoomId) -> Self {
        Self {
            name: id.local_part().to_string(),
            id,
            nickname: String::new(),
            joined: false,
            is_bookmarked: false,
            autojoin: None,
            password: None,
            occupants: Default::default(),
            messages: Self::empty_messages(),
            unread_count: 0,
            mentions_count: 0,
            typing_users: Default::default(),
        }
    }

    pub fn joined(id: RoomId) -> Self {
        Self {
            joined: true,
            ..Self::new(id)
        }
    }

    pub fn bookmarked(id: RoomId, meta: &BookmarkMeta) -> Self {
        let mut room = Self::new(id);
        room.apply_bookmark(meta);
        room
    }

    /// The shared instance used for every empty message list.
    pub fn empty_messages() -> MessageList {
        EMPTY_MESSAGES.clone()
    }
}

impl Room {
    /// Rooms that are neither joined nor bookmarked are not listed in any room view.
    pub fn is_listed(&self) -> bool {
        self.joined || self.is_bookmarked
    }

    /// A room that is neither joined nor bookmarked and without messages may be discarded.
    pub fn is_prunable(&self) -> bool {
        !self.is_listed() && self.messages.is_empty()
    }

    pub fn message(&self, id: &MessageId) -> Option<&RoomMessage> {
        self.messages.iter().find(|message| &message.id == id)
    }

    pub fn contains_message(&self, id: &MessageId) -> bool {
        self.message(id).is_some()
    }
}

// All mutating methods return true if they actually changed the room.
impl Room {
    pub fn set_joined(&mut self, joined: bool) -> bool {
        if self.joined == joined {
            return false;
        }
        self.joined = joined;
        true
    }

    /// Overwrites name, nickname, autojoin and password with the bookmark's values while
    /// leaving membership, occupants, messages and counters alone.
    pub fn apply_bookmark(&mut self, meta: &BookmarkMeta) -> bool {
        let unchanged = self.is_bookmarked
            && self.name == meta.name
            && self.nickname == meta.nick
            && self.autojoin == meta.autojoin
            && self.password == meta.password;

        if unchanged {
            return false;
        }

        self.is_bookmarked = true;
        self.name = meta.name.clone();
        self.nickname = meta.nick.clone();
        self.autojoin = meta.autojoin;
        self.password = meta.password.clone();
        true
    }

    pub fn clear_bookmark(&mut self) -> bool {
        if !self.is_bookmarked && self.autojoin.is_none() && self.password.is_none() {
            return false;
        }
        self.is_bookmarked = false;
        self.autojoin = None;
        self.password = None;
        true
    }

    /// Appends `message` unless a message with the same id exists already. Unless the room is
    /// the active room, incoming messages bump the unread (and mention) counters.
    pub fn append_message(&mut self, message: RoomMessage, is_active_room: bool) -> bool {
        if self.contains_message(&message.id) {
            return false;
        }

        if !is_active_room && message.counts_as_unread() {
            self.unread_count += 1;
            if message.is_mention {
                self.mentions_count += 1;
            }
        }

        let mut messages = self.messages.to_vec();
        messages.push(message);
        self.messages = messages.into();
        true
    }

    /// Merges messages loaded from the cache into the room's history. Messages that are already
    /// present are skipped, the rest is interleaved by timestamp. Messages already in the room
    /// keep their relative order. Counters are left alone since cached messages have been seen
    /// before.
    pub fn merge_cached_messages(&mut self, cached: Vec<RoomMessage>) -> bool {
        let mut known_ids = self
            .messages
            .iter()
            .map(|message| message.id.clone())
            .collect::<HashSet<_>>();

        let mut new_messages = cached
            .into_iter()
            .filter(|message| known_ids.insert(message.id.clone()))
            .collect::<Vec<_>>();

        if new_messages.is_empty() {
            return false;
        }

        // Stable, so cached messages with equal timestamps keep their order.
        new_messages.sort_by_key(|message| message.timestamp);

        let mut messages = Vec::with_capacity(self.messages.len() + new_messages.len());
        let mut new_messages = new_messages.into_iter().peekable();

        for message in self.messages.iter() {
            while let Some(cached) =
                new_messages.next_if(|cached| cached.timestamp <= message.timestamp)
            {
                messages.push(cached);
            }
            messages.push(message.clone());
        }
        messages.extend(new_messages);

        self.messages = messages.into();
        true
    }

    pub fn mark_as_read(&mut self) -> bool {
        if self.unread_count == 0 && self.mentions_count == 0 {
            return false;
        }
        self.unread_count = 0;
        self.mentions_count = 0;
        true
    }

    pub fn set_unread_count(&mut self, count: u32) -> bool {
        if self.unread_count == count {
            return false;
        }
        self.unread_count = count;
        true
    }

    pub fn set_typing(&mut self, nickname: &str, is_typing: bool) -> bool {
        if is_typing {
            self.typing_users.insert(nickname.to_string())
        } else {
            self.typing_users.shift_remove(nickname)
        }
    }

    pub fn insert_occupant(&mut self, occupant: Occupant) -> bool {
        if self.occupants.get(&occupant.id) == Some(&occupant) {
            return false;
        }
        self.occupants.insert(occupant.id.clone(), occupant);
        true
    }

    pub fn remove_occupant(&mut self, id: &OccupantId) -> bool {
        let removed = self.occupants.shift_remove(id).is_some();
        // Someone who left the room can't be typing anymore.
        let stopped_typing = self.typing_users.shift_remove(id.nickname());
        removed || stopped_typing
    }

    pub fn update_reactions(
        &mut self,
        message_id: &MessageId,
        reactor: &str,
        emojis: &[String],
    ) -> bool {
        let Some(idx) = self
            .messages
            .iter()
            .position(|message| &message.id == message_id)
        else {
            return false;
        };

        let mut message = self.messages[idx].clone();
        message.reactions.set_reactions_of(reactor, emojis);

        if message == self.messages[idx] {
            return false;
        }

        let mut messages = self.messages.to_vec();
        messages[idx] = message;
        self.messages = messages.into();
        true
    }
}
