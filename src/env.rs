//! Environment variable secret store (development only).
//!
//! Resolves remote secret names to environment variables with the
//! `KEYFRONT_SECRET_` prefix, e.g. the name `prod-db-pass` reads
//! `KEYFRONT_SECRET_PROD_DB_PASS`. Read-only: `create_secret` and
//! `delete_secret` are rejected.
//!
//! # Security Warning
//!
//! Environment variables are visible in process listings and offer no
//! encryption, audit trail, or rotation. Use a real secret-storage service
//! in production.

use async_trait::async_trait;
use std::env;

use crate::error::{AccessError, Result};
use crate::store::SecretStore;
use crate::types::SecretValue;

/// Environment variable prefix for secrets.
const SECRET_ENV_PREFIX: &str = "KEYFRONT_SECRET_";

/// Read-only [`SecretStore`] backed by environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvSecretStore;

impl EnvSecretStore {
    /// Creates a new environment variable secret store.
    pub fn new() -> Self {
        Self
    }

    /// Converts a remote secret name to its environment variable name.
    fn name_to_env_var(name: &str) -> String {
        format!("{}{}", SECRET_ENV_PREFIX, name.replace('-', "_").to_uppercase())
    }
}

#[async_trait]
impl SecretStore for EnvSecretStore {
    async fn get_secret(&self, name: &str) -> Result<SecretValue> {
        let env_var = Self::name_to_env_var(name);
        match env::var(&env_var) {
            Ok(value) => Ok(SecretValue::new(value)),
            Err(_) => Err(AccessError::not_found(name)),
        }
    }

    async fn create_secret(
        &self,
        name: &str,
        _description: &str,
        _value: &SecretValue,
    ) -> Result<()> {
        Err(AccessError::backend(format!(
            "Cannot store secret '{}': EnvSecretStore is read-only",
            name
        )))
    }

    async fn delete_secret(&self, name: &str) -> Result<()> {
        Err(AccessError::backend(format!(
            "Cannot delete secret '{}': EnvSecretStore is read-only",
            name
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_to_env_var() {
        assert_eq!(EnvSecretStore::name_to_env_var("db-pass"), "KEYFRONT_SECRET_DB_PASS");
        assert_eq!(
            EnvSecretStore::name_to_env_var("prod-api-key"),
            "KEYFRONT_SECRET_PROD_API_KEY"
        );
    }

    #[tokio::test]
    async fn test_get_secret_from_env() {
        env::set_var("KEYFRONT_SECRET_ENV_TEST", "env-value");

        let store = EnvSecretStore::new();
        let value = store.get_secret("env-test").await.unwrap();
        assert_eq!(value.expose(), "env-value");

        env::remove_var("KEYFRONT_SECRET_ENV_TEST");
    }

    #[tokio::test]
    async fn test_get_secret_not_found() {
        let store = EnvSecretStore::new();
        let result = store.get_secret("absent-secret").await;
        assert!(matches!(result, Err(AccessError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_writes_rejected() {
        let store = EnvSecretStore::new();

        let result = store.create_secret("name", "desc", &SecretValue::new("v")).await;
        assert!(matches!(result, Err(AccessError::Backend { .. })));

        let result = store.delete_secret("name").await;
        assert!(matches!(result, Err(AccessError::Backend { .. })));
    }
}
