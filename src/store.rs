//! Remote secret store client boundary.
//!
//! The accessor talks to the remote secret-storage service exclusively
//! through [`SecretStore`]. Transport, authentication, and retry behavior
//! belong to implementations; the accessor treats every failure uniformly
//! and never lets one escape its public operations.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::SecretValue;

/// Client for a remote secret-storage service, addressed by secret name.
///
/// Implementations must be `Send + Sync` for use across async tasks.
///
/// # Security
///
/// Implementations must not log secret values, and network communication
/// must use TLS.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the payload stored under a remote secret name.
    ///
    /// # Errors
    ///
    /// - [`AccessError::NotFound`](crate::AccessError::NotFound) if no secret
    ///   exists under the name
    /// - [`AccessError::RemoteUnavailable`](crate::AccessError::RemoteUnavailable)
    ///   on transport or authorization failure
    async fn get_secret(&self, name: &str) -> Result<SecretValue>;

    /// Store a payload under a remote secret name.
    ///
    /// Create-or-overwrite: replacing an existing secret is the remote
    /// store's contract, not distinguished here.
    async fn create_secret(&self, name: &str, description: &str, value: &SecretValue)
        -> Result<()>;

    /// Delete the secret stored under a remote secret name.
    async fn delete_secret(&self, name: &str) -> Result<()>;
}
