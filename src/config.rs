//! Configuration types for the secret accessor.
//!
//! [`ProviderConfig`] is the per-key snapshot of provider settings; it is
//! immutable for the duration of one operation. [`AccessorSettings`] carries
//! the module-level settings (currently the remote-name prefix) and loads
//! from environment variables.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{AccessError, Result};

/// Cache TTL policy for fetched secret values.
///
/// The wire form is an integer: `0` disables caching, a negative value means
/// the entry never expires, and a positive value is a TTL in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum MaxAge {
    /// Caching disabled: reads bypass the cache, writes are dropped.
    Disabled,
    /// Entries are valid for this many seconds.
    Seconds(u64),
    /// Entries never expire (until explicitly invalidated).
    Permanent,
}

impl MaxAge {
    /// TTL as a duration, when the policy is time-bounded.
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Self::Seconds(secs) => Some(Duration::from_secs(*secs)),
            _ => None,
        }
    }
}

impl From<i64> for MaxAge {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::Disabled,
            n if n < 0 => Self::Permanent,
            n => Self::Seconds(n as u64),
        }
    }
}

impl From<MaxAge> for i64 {
    fn from(value: MaxAge) -> Self {
        match value {
            MaxAge::Disabled => 0,
            MaxAge::Seconds(secs) => secs as i64,
            MaxAge::Permanent => -1,
        }
    }
}

impl Default for MaxAge {
    fn default() -> Self {
        Self::Disabled
    }
}

/// Per-key provider configuration.
///
/// An empty string in `secret_name` or `property_name` is treated as unset,
/// matching how form-sourced configuration arrives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Overrides the key id as the basis for the remote secret name.
    pub secret_name: Option<String>,

    /// When set, the payload is a JSON object and this property holds the value.
    pub property_name: Option<String>,

    /// Refuse write and delete operations.
    pub read_only: bool,

    /// Cache TTL policy for values fetched through this configuration.
    pub cache_max_age: MaxAge,
}

impl ProviderConfig {
    /// The configured remote-name override, with empty strings treated as unset.
    pub fn secret_name(&self) -> Option<&str> {
        self.secret_name.as_deref().filter(|s| !s.is_empty())
    }

    /// The configured payload property, with empty strings treated as unset.
    pub fn property_name(&self) -> Option<&str> {
        self.property_name.as_deref().filter(|s| !s.is_empty())
    }

    /// Set the remote-name override.
    pub fn with_secret_name(mut self, name: impl Into<String>) -> Self {
        self.secret_name = Some(name.into());
        self
    }

    /// Set the payload property name.
    pub fn with_property_name(mut self, property: impl Into<String>) -> Self {
        self.property_name = Some(property.into());
        self
    }

    /// Mark this configuration read-only.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Set the cache TTL policy.
    pub fn with_cache_max_age(mut self, max_age: MaxAge) -> Self {
        self.cache_max_age = max_age;
        self
    }
}

/// Module-level accessor settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessorSettings {
    /// Prefix prepended (hyphen-joined) to every resolved remote name.
    pub secret_prefix: Option<String>,
}

impl AccessorSettings {
    /// Create settings from environment variables.
    ///
    /// Reads `KEYFRONT_SECRET_PREFIX`; absent or empty means no prefix.
    pub fn from_env() -> Result<Self> {
        let secret_prefix = match std::env::var("KEYFRONT_SECRET_PREFIX") {
            Ok(value) if !value.is_empty() => Some(value),
            Ok(_) => None,
            Err(std::env::VarError::NotPresent) => None,
            Err(e) => {
                return Err(AccessError::config(format!("Invalid KEYFRONT_SECRET_PREFIX: {}", e)))
            }
        };
        Ok(Self { secret_prefix })
    }

    /// The configured prefix, with empty strings treated as unset.
    pub fn secret_prefix(&self) -> Option<&str> {
        self.secret_prefix.as_deref().filter(|s| !s.is_empty())
    }
}
