// prose-core-client/prose-room-store
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use jid::BareJid;
use parking_lot::RwLock;
use tracing::info;

use crate::app::stores::observers::ObserverRegistry;
use crate::app::stores::{StoreObserver, SubscriptionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminStoreView {
    MucServiceJid,
}

/// Holds the results of service discovery, i.e. the address of the service hosting the
/// multi-user chat rooms.
#[derive(Default)]
pub struct AdminStore {
    muc_service_jid: RwLock<Option<BareJid>>,
    observers: ObserverRegistry<AdminStoreView>,
}

impl AdminStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn muc_service_jid(&self) -> Option<BareJid> {
        self.muc_service_jid.read().clone()
    }

    pub fn set_muc_service_jid(&self, jid: Option<BareJid>) {
        {
            let mut muc_service_jid = self.muc_service_jid.write();
            if *muc_service_jid == jid {
                return;
            }
            info!("MUC service changed to {jid:?}.");
            *muc_service_jid = jid;
        }
        self.observers.notify(&[AdminStoreView::MucServiceJid]);
    }

    pub fn subscribe(
        &self,
        view: AdminStoreView,
        observer: Arc<dyn StoreObserver<AdminStoreView>>,
    ) -> SubscriptionId {
        self.observers.subscribe(view, observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
