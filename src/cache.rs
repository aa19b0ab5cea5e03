//! Read-through cache layer for fetched secret values.
//!
//! The cache sits between the accessor and the remote store so that repeated
//! reads of the same key do not hit the remote service. The backing store is
//! pluggable via [`CacheStore`]; this layer only derives namespaced cache ids
//! and computes absolute expiry metadata from the configured [`MaxAge`].
//! Whether a stored entry is still live is the backend's call.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::MaxAge;
use crate::types::SecretValue;

/// Namespace tag for cache ids, so secret values cannot collide with
/// unrelated entries in a shared cache backend.
const CACHE_ID_PREFIX: &str = "secret_value:";

/// Absolute expiry metadata stored alongside a cached value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// The entry never expires.
    Never,
    /// The entry is valid until this instant.
    At(Instant),
}

impl Expiry {
    /// Whether an entry with this expiry is still live.
    pub fn is_live(&self) -> bool {
        match self {
            Self::Never => true,
            Self::At(deadline) => Instant::now() < *deadline,
        }
    }
}

/// Generic key-value cache backend with TTL support.
///
/// Implementations own expiry enforcement: `get` must not return entries
/// whose expiry has passed.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Look up a live entry by cache id.
    async fn get(&self, id: &str) -> Option<SecretValue>;

    /// Store an entry under a cache id with the given expiry.
    async fn set(&self, id: &str, value: SecretValue, expiry: Expiry);

    /// Remove an entry. Removing an absent entry is a no-op.
    async fn delete(&self, id: &str);
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: SecretValue,
    expiry: Expiry,
}

/// In-memory [`CacheStore`] backed by a `HashMap` behind an `RwLock`.
///
/// Expired entries are skipped on read and dropped lazily on the next write
/// to the same id; there is no background sweeper.
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    inner: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl MemoryCacheStore {
    /// Create an empty in-memory cache store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held, including expired ones not yet
    /// overwritten.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Whether the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

impl Clone for MemoryCacheStore {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, id: &str) -> Option<SecretValue> {
        let cache = self.inner.read().await;
        match cache.get(id) {
            Some(entry) if entry.expiry.is_live() => Some(entry.value.clone()),
            Some(_) => {
                debug!(id = %id, "Cache entry expired");
                None
            }
            None => None,
        }
    }

    async fn set(&self, id: &str, value: SecretValue, expiry: Expiry) {
        let mut cache = self.inner.write().await;
        cache.insert(id.to_string(), CacheEntry { value, expiry });
    }

    async fn delete(&self, id: &str) {
        let mut cache = self.inner.write().await;
        cache.remove(id);
    }
}

/// Read-through cache layer keyed by local key id.
///
/// All reads and writes honor the per-operation [`MaxAge`] policy;
/// invalidation is unconditional because a previously active configuration
/// may have populated the cache even when caching is currently disabled.
pub struct SecretValueCache<C: CacheStore> {
    store: C,
}

impl<C: CacheStore> SecretValueCache<C> {
    /// Create a cache layer over the given backend.
    pub fn new(store: C) -> Self {
        Self { store }
    }

    /// Derive the namespaced cache id for a key id.
    pub fn cache_id(key_id: &str) -> String {
        format!("{}{}", CACHE_ID_PREFIX, key_id)
    }

    /// Read the cached value for a key, honoring the TTL policy.
    ///
    /// Returns `None` without touching the backend when caching is disabled.
    pub async fn read(&self, key_id: &str, max_age: MaxAge) -> Option<SecretValue> {
        if max_age == MaxAge::Disabled {
            return None;
        }
        let id = Self::cache_id(key_id);
        let value = self.store.get(&id).await;
        if value.is_some() {
            debug!(key = %key_id, "Cache hit for secret value");
        }
        value
    }

    /// Cache a value for a key, honoring the TTL policy.
    ///
    /// No-op when caching is disabled.
    pub async fn write(&self, key_id: &str, value: SecretValue, max_age: MaxAge) {
        let expiry = match max_age {
            MaxAge::Disabled => return,
            MaxAge::Permanent => Expiry::Never,
            MaxAge::Seconds(secs) => Expiry::At(Instant::now() + Duration::from_secs(secs)),
        };
        debug!(key = %key_id, "Caching secret value");
        self.store.set(&Self::cache_id(key_id), value, expiry).await;
    }

    /// Drop the cached value for a key, regardless of the current TTL policy.
    pub async fn invalidate(&self, key_id: &str) {
        debug!(key = %key_id, "Invalidating cached secret value");
        self.store.delete(&Self::cache_id(key_id)).await;
    }
}
