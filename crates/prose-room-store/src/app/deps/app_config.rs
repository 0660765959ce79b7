// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// The maximum number of messages to hydrate from the cache when a room becomes active.
    pub cache_load_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cache_load_limit: 100,
        }
    }
}
