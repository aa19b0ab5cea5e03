//! Remote secret name resolution.
//!
//! The remote store addresses secrets by name; locally a secret is addressed
//! by its key id. The resolved name is the optional module-level prefix and
//! the key-derived name joined with a hyphen. No character-set validation is
//! performed here; the remote store's own naming constraints apply.

/// Derive the remote secret name from an optional prefix and a key name.
///
/// Empty or absent parts are dropped, so without a prefix the result is
/// exactly `key_name`.
pub fn resolve_secret_name(prefix: Option<&str>, key_name: &str) -> String {
    [prefix.unwrap_or(""), key_name]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("-")
}
