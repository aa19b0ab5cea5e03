//! Cached secret accessor orchestrating name resolution, the cache layer,
//! property extraction, and the remote store.
//!
//! All three public operations contain failure: a remote fault, a missing
//! payload property, or a read-only refusal degrades to an empty value or
//! `false` plus a `tracing` warning. Secret unavailability must not crash
//! dependent systems; callers treat an empty value as "unavailable" and rely
//! on logs for the root cause.
//!
//! # Example
//!
//! ```rust,ignore
//! use keyfront::{
//!     AccessorSettings, Key, MaxAge, MemoryCacheStore, MemorySecretStore, ProviderConfig,
//!     SecretAccessor,
//! };
//!
//! let accessor = SecretAccessor::new(
//!     MemorySecretStore::new(),
//!     MemoryCacheStore::new(),
//!     AccessorSettings::from_env()?,
//! );
//!
//! let key = Key::new("api-key").with_label("Service API key");
//! let config = ProviderConfig::default()
//!     .with_property_name("token")
//!     .with_cache_max_age(MaxAge::Seconds(300));
//!
//! let value = accessor.get(&key, &config).await;
//! ```

use tracing::warn;

use crate::cache::{CacheStore, SecretValueCache};
use crate::config::{AccessorSettings, ProviderConfig};
use crate::extract::{extract_property, inject_property};
use crate::name::resolve_secret_name;
use crate::store::SecretStore;
use crate::types::SecretValue;

/// Local identifier for a secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    /// Stable identifier, used as the cache key and the default basis for the
    /// remote secret name.
    pub id: String,
    /// Human-readable label, recorded as the remote secret description on
    /// create.
    pub label: String,
}

impl Key {
    /// Creates a key whose label defaults to its id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let label = id.clone();
        Self { id, label }
    }

    /// Sets a human-readable label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Secret accessor fronting a remote store with a read-through cache.
///
/// Stateless across calls except for the injected cache backend and store,
/// so it is safe to share across tasks. Concurrent `get`s for the same key
/// may both miss and both fetch; the last cache writer wins, which is
/// harmless because both fetched the same authoritative remote value.
pub struct SecretAccessor<S: SecretStore, C: CacheStore> {
    store: S,
    cache: SecretValueCache<C>,
    settings: AccessorSettings,
}

impl<S: SecretStore, C: CacheStore> SecretAccessor<S, C> {
    /// Creates an accessor from its collaborators.
    pub fn new(store: S, cache_store: C, settings: AccessorSettings) -> Self {
        Self { store, cache: SecretValueCache::new(cache_store), settings }
    }

    fn remote_name(&self, key: &Key, config: &ProviderConfig) -> String {
        let basis = config.secret_name().unwrap_or(&key.id);
        resolve_secret_name(self.settings.secret_prefix(), basis)
    }

    /// Fetch the value for a key.
    ///
    /// Consults the cache first; on a hit the remote store is not contacted.
    /// On a miss, fetches by the resolved remote name, extracts the
    /// configured property, populates the cache, and returns the value.
    /// Every failure degrades to an empty value with a warning; the cache is
    /// only populated on success.
    pub async fn get(&self, key: &Key, config: &ProviderConfig) -> SecretValue {
        if let Some(cached) = self.cache.read(&key.id, config.cache_max_age).await {
            return cached;
        }

        let name = self.remote_name(key, config);
        let raw = match self.store.get_secret(&name).await {
            Ok(raw) => raw,
            Err(error) => {
                warn!(key = %key.id, name = %name, error = %error, "Secret retrieval failed");
                return SecretValue::default();
            }
        };

        let value = match extract_property(raw.expose(), config.property_name()) {
            Ok(value) => SecretValue::new(value),
            Err(error) => {
                warn!(key = %key.id, name = %name, error = %error, "Property extraction failed");
                return SecretValue::default();
            }
        };

        self.cache.write(&key.id, value.clone(), config.cache_max_age).await;
        value
    }

    /// Store a value for a key. Returns `false` on refusal or failure.
    ///
    /// The cache entry is invalidated before the read-only gate, so a stale
    /// value never survives an attempted write even when the write is
    /// rejected. When a payload property is configured, the value is wrapped
    /// as a single-property JSON object before storage.
    pub async fn set(&self, key: &Key, config: &ProviderConfig, value: &str) -> bool {
        self.cache.invalidate(&key.id).await;

        if config.read_only {
            warn!(key = %key.id, "Refusing write: key is configured read-only");
            return false;
        }

        let payload = match config.property_name() {
            Some(property) => match inject_property(property, value) {
                Ok(wrapped) => SecretValue::new(wrapped),
                Err(error) => {
                    warn!(key = %key.id, error = %error, "Secret write failed");
                    return false;
                }
            },
            None => SecretValue::new(value),
        };

        let name = self.remote_name(key, config);
        match self.store.create_secret(&name, &key.label, &payload).await {
            Ok(()) => true,
            Err(error) => {
                warn!(key = %key.id, name = %name, error = %error, "Secret write failed");
                false
            }
        }
    }

    /// Delete the secret for a key. Returns `false` on refusal or failure.
    ///
    /// Mirrors [`set`](Self::set): invalidate first, then gate on read-only,
    /// then call the remote store.
    pub async fn delete(&self, key: &Key, config: &ProviderConfig) -> bool {
        self.cache.invalidate(&key.id).await;

        if config.read_only {
            warn!(key = %key.id, "Refusing delete: key is configured read-only");
            return false;
        }

        let name = self.remote_name(key, config);
        match self.store.delete_secret(&name).await {
            Ok(()) => true,
            Err(error) => {
                warn!(key = %key.id, name = %name, error = %error, "Secret delete failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCacheStore;
    use crate::config::MaxAge;
    use crate::error::{AccessError, Result};
    use crate::memory::MemorySecretStore;
    use async_trait::async_trait;
    use tracing_test::traced_test;

    /// Store that fails every operation, for exercising containment.
    struct UnavailableStore;

    #[async_trait]
    impl SecretStore for UnavailableStore {
        async fn get_secret(&self, _name: &str) -> Result<SecretValue> {
            Err(AccessError::remote_unavailable("connection refused"))
        }

        async fn create_secret(
            &self,
            _name: &str,
            _description: &str,
            _value: &SecretValue,
        ) -> Result<()> {
            Err(AccessError::remote_unavailable("connection refused"))
        }

        async fn delete_secret(&self, _name: &str) -> Result<()> {
            Err(AccessError::remote_unavailable("connection refused"))
        }
    }

    fn accessor_with(
        store: MemorySecretStore,
    ) -> SecretAccessor<MemorySecretStore, MemoryCacheStore> {
        SecretAccessor::new(store, MemoryCacheStore::new(), AccessorSettings::default())
    }

    #[tokio::test]
    async fn test_get_plain_value() {
        let store = MemorySecretStore::new();
        store.create_secret("api-key", "desc", &SecretValue::new("abc123")).await.unwrap();

        let accessor = accessor_with(store);
        let value = accessor.get(&Key::new("api-key"), &ProviderConfig::default()).await;
        assert_eq!(value.expose(), "abc123");
    }

    #[tokio::test]
    async fn test_get_with_secret_name_override() {
        let store = MemorySecretStore::new();
        store.create_secret("shared-token", "desc", &SecretValue::new("v")).await.unwrap();

        let accessor = accessor_with(store);
        let config = ProviderConfig::default().with_secret_name("shared-token");
        let value = accessor.get(&Key::new("local-id"), &config).await;
        assert_eq!(value.expose(), "v");
    }

    #[tokio::test]
    async fn test_get_with_prefix() {
        let store = MemorySecretStore::new();
        store.create_secret("prod-db-pass", "desc", &SecretValue::new("pw")).await.unwrap();

        let accessor = SecretAccessor::new(
            store,
            MemoryCacheStore::new(),
            AccessorSettings { secret_prefix: Some("prod".into()) },
        );
        let value = accessor.get(&Key::new("db-pass"), &ProviderConfig::default()).await;
        assert_eq!(value.expose(), "pw");
    }

    #[tokio::test]
    #[traced_test]
    async fn test_get_remote_failure_degrades_to_empty() {
        let cache_store = MemoryCacheStore::new();
        let accessor = SecretAccessor::new(
            UnavailableStore,
            cache_store.clone(),
            AccessorSettings::default(),
        );

        let config = ProviderConfig::default().with_cache_max_age(MaxAge::Seconds(300));
        let value = accessor.get(&Key::new("api-key"), &config).await;

        assert!(value.is_empty());
        assert!(cache_store.is_empty().await, "failed fetches must not populate the cache");
        assert!(logs_contain("Secret retrieval failed"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_get_missing_property_degrades_to_empty() {
        let store = MemorySecretStore::new();
        store.create_secret("api-key", "desc", &SecretValue::new(r#"{"a":"1"}"#)).await.unwrap();

        let cache_store = MemoryCacheStore::new();
        let accessor =
            SecretAccessor::new(store, cache_store.clone(), AccessorSettings::default());
        let config = ProviderConfig::default()
            .with_property_name("missing")
            .with_cache_max_age(MaxAge::Seconds(300));

        let value = accessor.get(&Key::new("api-key"), &config).await;
        assert!(value.is_empty());
        assert!(cache_store.is_empty().await);
        assert!(logs_contain("Property extraction failed"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_set_read_only_invalidates_then_refuses() {
        let store = MemorySecretStore::new();
        store.create_secret("api-key", "desc", &SecretValue::new("cached-me")).await.unwrap();

        let cache_store = MemoryCacheStore::new();
        let accessor =
            SecretAccessor::new(store.clone(), cache_store.clone(), AccessorSettings::default());

        // Populate the cache, then attempt a write against a read-only config.
        let writable = ProviderConfig::default().with_cache_max_age(MaxAge::Seconds(300));
        accessor.get(&Key::new("api-key"), &writable).await;
        assert_eq!(cache_store.len().await, 1);

        let read_only = writable.clone().read_only();
        let ok = accessor.set(&Key::new("api-key"), &read_only, "new-value").await;

        assert!(!ok);
        // Invalidation happens even though the write was rejected.
        assert!(cache_store.is_empty().await);
        // The remote value is untouched.
        assert_eq!(store.get_secret("api-key").await.unwrap().expose(), "cached-me");
        assert!(logs_contain("read-only"));
    }

    #[tokio::test]
    async fn test_set_wraps_property_payload() {
        let store = MemorySecretStore::new();
        let accessor = accessor_with(store.clone());

        let config = ProviderConfig::default().with_property_name("token");
        let key = Key::new("api-key").with_label("Service API key");
        assert!(accessor.set(&key, &config, "abc123").await);

        let stored = store.get_secret("api-key").await.unwrap();
        assert_eq!(stored.expose(), r#"{"token":"abc123"}"#);
        assert_eq!(store.description_of("api-key").await.as_deref(), Some("Service API key"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_set_remote_failure_returns_false() {
        let accessor = SecretAccessor::new(
            UnavailableStore,
            MemoryCacheStore::new(),
            AccessorSettings::default(),
        );
        let ok = accessor.set(&Key::new("api-key"), &ProviderConfig::default(), "v").await;
        assert!(!ok);
        assert!(logs_contain("Secret write failed"));
    }

    #[tokio::test]
    async fn test_delete_clears_cache_and_store() {
        let store = MemorySecretStore::new();
        store.create_secret("api-key", "desc", &SecretValue::new("v")).await.unwrap();

        let cache_store = MemoryCacheStore::new();
        let accessor =
            SecretAccessor::new(store.clone(), cache_store.clone(), AccessorSettings::default());

        let config = ProviderConfig::default().with_cache_max_age(MaxAge::Seconds(300));
        accessor.get(&Key::new("api-key"), &config).await;
        assert_eq!(cache_store.len().await, 1);

        assert!(accessor.delete(&Key::new("api-key"), &config).await);
        assert!(cache_store.is_empty().await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_delete_read_only_refused() {
        let store = MemorySecretStore::new();
        store.create_secret("api-key", "desc", &SecretValue::new("v")).await.unwrap();

        let accessor = accessor_with(store.clone());
        let config = ProviderConfig::default().read_only();

        assert!(!accessor.delete(&Key::new("api-key"), &config).await);
        assert_eq!(store.len().await, 1, "remote secret must survive a refused delete");
        assert!(logs_contain("read-only"));
    }
}
