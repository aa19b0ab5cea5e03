//! Error types for secret access operations.

use thiserror::Error;

/// Result type for secret access operations.
pub type Result<T> = std::result::Result<T, AccessError>;

/// Errors that can occur while accessing a remote secret store.
///
/// The accessor boundary contains all of these: callers of
/// [`SecretAccessor`](crate::accessor::SecretAccessor) public operations see
/// an empty value or `false`, never an error. The variants exist so that the
/// internal fetch/write paths and the store implementations can report what
/// went wrong precisely enough to log it.
#[derive(Error, Debug)]
pub enum AccessError {
    /// The remote store could not be reached or refused the request.
    #[error("Remote secret store unavailable: {message}")]
    RemoteUnavailable { message: String },

    /// No secret exists under the resolved remote name.
    #[error("Secret not found: {name}")]
    NotFound { name: String },

    /// The payload parsed (or failed to parse) without the configured property.
    ///
    /// Soft failure: the accessor logs it and degrades to an empty value.
    #[error("Property '{property}' not found in secret payload: {reason}")]
    PropertyNotFound { property: String, reason: String },

    /// A write or delete was attempted against a read-only configuration.
    #[error("Key '{key}' is configured read-only")]
    ReadOnlyViolation { key: String },

    /// Store-specific failure (e.g. a read-only backend rejecting writes).
    #[error("Backend error: {message}")]
    Backend { message: String },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AccessError {
    /// Create a remote-unavailable error.
    pub fn remote_unavailable(message: impl Into<String>) -> Self {
        Self::RemoteUnavailable { message: message.into() }
    }

    /// Create a not-found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a property-not-found error.
    pub fn property_not_found(property: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PropertyNotFound { property: property.into(), reason: reason.into() }
    }

    /// Create a read-only violation error.
    pub fn read_only(key: impl Into<String>) -> Self {
        Self::ReadOnlyViolation { key: key.into() }
    }

    /// Create a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend { message: message.into() }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }
}
