//! In-memory store for pending OAuth authorizations.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use taskflow_core::auth::{
    is_authorization_expired, AuthError, AuthorizationStore, PendingAuthorization, Result,
};

/// Default upper bound on authorizations awaiting their callback.
pub const DEFAULT_MAX_PENDING: usize = 10_000;

/// Pending authorizations held in a `HashMap` wrapped in `Arc<RwLock<_>>`.
///
/// Entries are single use and expire after `ttl`. Expired entries are purged
/// once the store reaches `max_entries`; if it is still full afterwards, new
/// entries are refused. Data is lost when the process exits, which only
/// aborts logins that were in flight.
#[derive(Debug, Clone)]
pub struct InMemoryAuthorizationStore {
    pending: Arc<RwLock<HashMap<String, PendingAuthorization>>>,
    ttl: chrono::Duration,
    max_entries: usize,
}

impl Default for InMemoryAuthorizationStore {
    fn default() -> Self {
        Self::new(Duration::from_secs(600))
    }
}

impl InMemoryAuthorizationStore {
    /// Creates a new empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            pending: Arc::new(RwLock::new(HashMap::new())),
            ttl: chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::minutes(10)),
            max_entries: DEFAULT_MAX_PENDING,
        }
    }

    /// Caps the number of entries held at once.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Number of entries currently held, expired or not.
    pub async fn len(&self) -> usize {
        self.pending.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pending.read().await.is_empty()
    }
}

#[async_trait]
impl AuthorizationStore for InMemoryAuthorizationStore {
    async fn store_authorization(
        &self,
        state: &str,
        pending: &PendingAuthorization,
    ) -> Result<()> {
        let now = Utc::now();
        let mut entries = self.pending.write().await;
        if entries.len() >= self.max_entries {
            entries.retain(|_, p| !is_authorization_expired(p, now, self.ttl));
        }
        if entries.len() >= self.max_entries {
            tracing::warn!(pending = entries.len(), "Pending authorization store is full");
            return Err(AuthError::Storage(
                "too many pending authorizations".to_string(),
            ));
        }
        entries.insert(state.to_string(), pending.clone());
        Ok(())
    }

    async fn take_authorization(&self, state: &str) -> Result<Option<PendingAuthorization>> {
        let taken = self.pending.write().await.remove(state);
        Ok(taken.filter(|p| !is_authorization_expired(p, Utc::now(), self.ttl)))
    }
}
