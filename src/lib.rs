//! # Keyfront
//!
//! Keyfront is a cached accessor for remote secret stores. It fronts a
//! secret-storage service with a local, time-bounded cache and pluggable
//! policy for deriving remote secret names and extracting values from
//! structured payloads.
//!
//! ## Architecture
//!
//! ```text
//! caller → SecretAccessor → SecretValueCache → CacheStore backend
//!                 ↓ (miss)
//!           name resolution → SecretStore client → property extraction
//! ```
//!
//! The accessor is built around two seams:
//!
//! - [`SecretStore`]: the remote secret-storage client, addressed by secret
//!   name ([`EnvSecretStore`] and [`MemorySecretStore`] ship for development
//!   and tests)
//! - [`CacheStore`]: a generic TTL key-value backend ([`MemoryCacheStore`]
//!   ships in-process)
//!
//! Failure is contained at the accessor boundary: a remote fault, a missing
//! payload property, or a read-only refusal degrades to an empty value or
//! `false` plus a `tracing` warning, never an error or panic.
//!
//! ## Example
//!
//! ```rust,no_run
//! use keyfront::{
//!     AccessorSettings, Key, MaxAge, MemoryCacheStore, MemorySecretStore, ProviderConfig,
//!     SecretAccessor,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> keyfront::Result<()> {
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
//! # Ok(())
//! # }
//! ```

pub mod accessor;
pub mod cache;
pub mod config;
pub mod env;
pub mod error;
pub mod extract;
pub mod memory;
pub mod name;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use accessor::{Key, SecretAccessor};
pub use cache::{CacheStore, Expiry, MemoryCacheStore, SecretValueCache};
pub use config::{AccessorSettings, MaxAge, ProviderConfig};
pub use env::EnvSecretStore;
pub use error::{AccessError, Result};
pub use extract::{extract_property, inject_property};
pub use memory::MemorySecretStore;
pub use name::resolve_secret_name;
pub use store::SecretStore;
pub use types::SecretValue;

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
