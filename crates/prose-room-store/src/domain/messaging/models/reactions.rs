// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Emoji reactions on a message, keyed by emoji. Each emoji maps to the nicknames of the
/// occupants who reacted with it, in the order they reacted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reactions(IndexMap<String, Vec<String>>);

impl Reactions {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn reactors(&self, emoji: &str) -> &[String] {
        self.0.get(emoji).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(emoji, nicks)| (emoji.as_str(), nicks.as_slice()))
    }

    /// Replaces all reactions of `reactor` with `emojis`. Emojis left without reactors are
    /// removed.
    pub fn set_reactions_of(&mut self, reactor: &str, emojis: &[String]) {
        for (emoji, reactors) in self.0.iter_mut() {
            if !emojis.contains(emoji) {
                reactors.retain(|nick| nick != reactor);
            }
        }

        for emoji in emojis {
            let reactors = self.0.entry(emoji.clone()).or_default();
            if !reactors.iter().any(|nick| nick == reactor) {
                reactors.push(reactor.to_string());
            }
        }

        self.0.retain(|_, reactors| !reactors.is_empty());
    }
}
