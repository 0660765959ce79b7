// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

/// Receives change notifications for the views of a store.
pub trait StoreObserver<V>: Send + Sync {
    fn view_changed(&self, view: V);
}

impl<V, F> StoreObserver<V> for F
where
    F: Fn(V) + Send + Sync,
{
    fn view_changed(&self, view: V) {
        self(view)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription<V> {
    id: SubscriptionId,
    view: V,
    observer: Arc<dyn StoreObserver<V>>,
}

pub(crate) struct ObserverRegistry<V> {
    next_id: AtomicU64,
    subscriptions: RwLock<Vec<Subscription<V>>>,
}

impl<V> Default for ObserverRegistry<V> {
    fn default() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            subscriptions: Default::default(),
        }
    }
}

impl<V: Copy + PartialEq> ObserverRegistry<V> {
    pub fn subscribe(&self, view: V, observer: Arc<dyn StoreObserver<V>>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscriptions.write().push(Subscription { id, view, observer });
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscriptions = self.subscriptions.write();
        let count = subscriptions.len();
        subscriptions.retain(|subscription| subscription.id != id);
        subscriptions.len() != count
    }

    /// Calls the observers of each view in `changed_views`. Must not be called while holding
    /// the store's state lock since observers usually read the store.
    pub fn notify(&self, changed_views: &[V]) {
        if changed_views.is_empty() {
            return;
        }

        let observers = self
            .subscriptions
            .read()
            .iter()
            .filter(|subscription| changed_views.contains(&subscription.view))
            .map(|subscription| (subscription.view, subscription.observer.clone()))
            .collect::<Vec<_>>();

        for (view, observer) in observers {
            observer.view_changed(view);
        }
    }
}
