// src/api/cache.rs
//! In-memory response cache for Notion API calls.
//!
//! Caches raw JSON response bodies keyed by request signature, with
//! TTL-based expiry. On cache hit, the cached body is re-parsed through
//! the same parsers used for live API responses.
//!
//! One instance is created per process and shared by every fetch call
//! site through an `Arc`.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

/// TTL cache guarded by a reader/writer lock.
///
/// Reads take the shared lock, so many lookups proceed in parallel; a
/// write briefly takes the exclusive lock. An entry read at or after its
/// expiry instant is reported as a miss.
#[derive(Debug)]
pub struct ResponseCache<V = String> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
}

impl<V: Clone> Default for ResponseCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> ResponseCache<V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Stores `value` under `key` until `now + ttl`, replacing any previous entry.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.entries.write().insert(key.into(), entry);
    }

    /// Returns the stored value if it has not expired yet.
    pub fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.read();
        entries
            .get(key)
            .filter(|entry| Instant::now() < entry.expires_at)
            .map(|entry| entry.value.clone())
    }

    /// Evicts every expired entry and returns how many were removed.
    pub fn cleanup(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| now < entry.expires_at);
        before - entries.len()
    }

    /// Number of stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone + Send + Sync + 'static> ResponseCache<V> {
    /// Starts a background task calling [`cleanup`](Self::cleanup) every `every`.
    ///
    /// Returns `None` for a zero interval (caching disabled).
    pub fn spawn_sweeper(cache: Arc<Self>, every: Duration) -> Option<JoinHandle<()>> {
        if every.is_zero() {
            return None;
        }
        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let evicted = cache.cleanup();
                if evicted > 0 {
                    log::debug!("Response cache sweep evicted {} entries", evicted);
                }
            }
        }))
    }
}
