//! In-memory secret store for tests and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{AccessError, Result};
use crate::store::SecretStore;
use crate::types::SecretValue;

#[derive(Debug, Clone)]
struct StoredSecret {
    description: String,
    value: SecretValue,
}

/// [`SecretStore`] holding secrets in a process-local map.
///
/// Supports the full store contract, so write and delete paths can be
/// exercised without a remote service. Not for production use: nothing is
/// encrypted or persisted.
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    inner: Arc<RwLock<HashMap<String, StoredSecret>>>,
}

impl MemorySecretStore {
    /// Creates an empty in-memory secret store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of secrets currently stored.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Whether the store holds no secrets.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// The description recorded for a stored secret, if present.
    pub async fn description_of(&self, name: &str) -> Option<String> {
        self.inner.read().await.get(name).map(|s| s.description.clone())
    }
}

impl Clone for MemorySecretStore {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

#[async_trait]
impl SecretStore for MemorySecretStore {
    async fn get_secret(&self, name: &str) -> Result<SecretValue> {
        let secrets = self.inner.read().await;
        secrets
            .get(name)
            .map(|s| s.value.clone())
            .ok_or_else(|| AccessError::not_found(name))
    }

    async fn create_secret(
        &self,
        name: &str,
        description: &str,
        value: &SecretValue,
    ) -> Result<()> {
        let mut secrets = self.inner.write().await;
        secrets.insert(
            name.to_string(),
            StoredSecret { description: description.to_string(), value: value.clone() },
        );
        Ok(())
    }

    async fn delete_secret(&self, name: &str) -> Result<()> {
        let mut secrets = self.inner.write().await;
        match secrets.remove(name) {
            Some(_) => Ok(()),
            None => Err(AccessError::not_found(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_get_delete() {
        let store = MemorySecretStore::new();

        store.create_secret("db-pass", "Database password", &SecretValue::new("s3cret")).await.unwrap();
        assert_eq!(store.len().await, 1);
        assert_eq!(store.description_of("db-pass").await.as_deref(), Some("Database password"));

        let value = store.get_secret("db-pass").await.unwrap();
        assert_eq!(value.expose(), "s3cret");

        store.delete_secret("db-pass").await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_overwrites() {
        let store = MemorySecretStore::new();
        store.create_secret("key", "v1", &SecretValue::new("one")).await.unwrap();
        store.create_secret("key", "v2", &SecretValue::new("two")).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get_secret("key").await.unwrap().expose(), "two");
    }

    #[tokio::test]
    async fn test_missing_secret_errors() {
        let store = MemorySecretStore::new();
        assert!(matches!(store.get_secret("absent").await, Err(AccessError::NotFound { .. })));
        assert!(matches!(store.delete_secret("absent").await, Err(AccessError::NotFound { .. })));
    }
}
