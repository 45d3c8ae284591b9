//! Per-session identity cache

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tracing::{debug, warn};

use crate::{
    api::MarketplaceApi,
    constants::MAX_CACHED_SESSIONS,
    models::IdentityRecord,
    utils::hash_string,
};

use super::IdentityState;

type Slot = Arc<watch::Sender<IdentityState>>;

/// Resolves and caches the identity behind each session token.
///
/// One slot per session, keyed by the SHA-256 of the token. The first
/// consumer of a session spawns the lookup; everyone else subscribes to the
/// same slot. A slot's value is only ever replaced whole.
pub struct IdentityResolver {
    api: Arc<dyn MarketplaceApi>,
    sessions: RwLock<HashMap<String, Slot>>,
}

impl IdentityResolver {
    pub fn new(api: Arc<dyn MarketplaceApi>) -> Self {
        Self {
            api,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Current state of the session, starting a lookup if none is cached.
    ///
    /// Without a token the answer is `Ready(None)` and no request is made.
    pub async fn resolve(&self, token: Option<&str>) -> IdentityState {
        let Some(token) = token else {
            return IdentityState::Ready(None);
        };
        let receiver = self.subscribe(token).await;
        let state = receiver.borrow().clone();
        state
    }

    /// Like [`resolve`](Self::resolve) but waits up to `wait` for the lookup
    /// to settle. Returns `Loading` if it has not settled by then.
    pub async fn settle(&self, token: Option<&str>, wait: Duration) -> IdentityState {
        let Some(token) = token else {
            return IdentityState::Ready(None);
        };
        let mut receiver = self.subscribe(token).await;

        let settled = tokio::time::timeout(wait, receiver.wait_for(|state| !state.is_loading()))
            .await
            .ok()
            .and_then(|result| result.ok())
            .map(|state| state.clone());

        match settled {
            Some(state) => state,
            None => receiver.borrow().clone(),
        }
    }

    /// Drop the cached identity of a session (login, logout, expired token)
    pub async fn invalidate(&self, token: &str) {
        let removed = self.sessions.write().await.remove(&hash_string(token));
        if removed.is_some() {
            debug!("Session identity invalidated");
        }
    }

    /// Drop the cached identity and start a fresh lookup, e.g. after the
    /// marketplace refused an action the cached role should allow
    pub async fn revalidate(&self, token: &str) -> IdentityState {
        self.invalidate(token).await;
        self.resolve(Some(token)).await
    }

    /// Cached state of a session without triggering a lookup
    pub async fn cached(&self, token: &str) -> Option<IdentityState> {
        self.sessions
            .read()
            .await
            .get(&hash_string(token))
            .map(|slot| slot.borrow().clone())
    }

    async fn subscribe(&self, token: &str) -> watch::Receiver<IdentityState> {
        let key = hash_string(token);

        if let Some(slot) = self.sessions.read().await.get(&key) {
            return slot.subscribe();
        }

        let mut sessions = self.sessions.write().await;
        // Another consumer may have started the lookup while we waited
        if let Some(slot) = sessions.get(&key) {
            return slot.subscribe();
        }

        if sessions.len() >= MAX_CACHED_SESSIONS {
            sessions.retain(|_, slot| slot.borrow().is_loading());
            debug!(remaining = sessions.len(), "Identity cache pruned");
        }

        let (sender, receiver) = watch::channel(IdentityState::Loading);
        let slot = Arc::new(sender);
        sessions.insert(key, Arc::clone(&slot));
        drop(sessions);

        self.spawn_lookup(token.to_string(), slot);
        receiver
    }

    /// The lookup runs detached so that a consumer going away mid-request
    /// does not leave the slot loading forever.
    fn spawn_lookup(&self, token: String, slot: Slot) {
        let api = Arc::clone(&self.api);

        tokio::spawn(async move {
            let state = match api.current_user(&token).await {
                Ok(record) => {
                    IdentityState::Ready(record.and_then(IdentityRecord::into_identity))
                }
                Err(e) => {
                    warn!(error = %e, "Identity resolution failed");
                    IdentityState::Failed(e.to_string())
                }
            };
            debug!(
                authenticated = state.identity().is_some(),
                "Identity resolution settled"
            );
            slot.send_replace(state);
        });
    }
}
