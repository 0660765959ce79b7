// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_message_cache_repository::InMemoryMessageCacheRepository;
pub use noop_message_cache_repository::NoopMessageCacheRepository;

mod in_memory_message_cache_repository;
mod noop_message_cache_repository;
