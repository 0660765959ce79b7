// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message_cache_repository::{LoadMessagesOptions, MessageCacheRepository};

#[cfg(any(test, feature = "test"))]
pub mod mocks {
    pub use super::message_cache_repository::MockMessageCacheRepository;
}

mod message_cache_repository;
