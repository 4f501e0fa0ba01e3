//! Admin key hashing using Argon2id
//!
//! Admin bearer keys are never stored in plaintext: configuration holds
//! their Argon2id PHC strings and incoming keys are verified against them.
//!
//! # Examples
//!
//! ```
//! use infrastructure::adapters::AdminKeyHasher;
//!
//! let hasher = AdminKeyHasher::new();
//! let hash = hasher.hash("admin-key").unwrap();
//! assert!(hasher.verify("admin-key", &hash).unwrap());
//! assert!(!hasher.verify("wrong-key", &hash).unwrap());
//! ```

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Errors that can occur while hashing or verifying admin keys
#[derive(Debug, Error)]
pub enum AdminKeyHashError {
    /// Failed to hash the key
    #[error("Failed to hash admin key: {0}")]
    HashingFailed(String),

    /// Stored hash is not a valid PHC string
    #[error("Invalid hash format: {0}")]
    InvalidHashFormat(String),
}

/// Argon2id hasher for admin keys (default parameters: 19 MiB, 2 passes)
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminKeyHasher;

impl AdminKeyHasher {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Hash a key, returning a PHC string suitable for `security.admin_keys`
    #[instrument(skip(self, key))]
    pub fn hash(&self, key: &str) -> Result<String, AdminKeyHashError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(key.as_bytes(), &salt)
            .map_err(|e| AdminKeyHashError::HashingFailed(e.to_string()))?;

        debug!("Hashed admin key");
        Ok(hash.to_string())
    }

    /// Verify a plaintext key against a stored PHC string
    #[instrument(skip(self, key, hash))]
    pub fn verify(&self, key: &str, hash: &str) -> Result<bool, AdminKeyHashError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AdminKeyHashError::InvalidHashFormat(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(key.as_bytes(), &parsed)
            .is_ok())
    }

    /// Check whether a value looks like an Argon2 PHC string
    #[must_use]
    pub fn is_hashed(value: &str) -> bool {
        value.starts_with("$argon2")
    }
}

/// The set of accepted admin key hashes
#[derive(Debug, Clone, Default)]
pub struct AdminKeyStore {
    hashes: Vec<String>,
    hasher: AdminKeyHasher,
}

impl AdminKeyStore {
    /// Build a store from configured hashes
    ///
    /// Entries that are not Argon2 PHC strings are dropped with a warning.
    #[must_use]
    pub fn from_hashes(hashes: impl IntoIterator<Item = String>) -> Self {
        let hashes = hashes
            .into_iter()
            .filter(|hash| {
                let ok = AdminKeyHasher::is_hashed(hash);
                if !ok {
                    warn!("Ignoring admin key that is not an Argon2 hash");
                }
                ok
            })
            .collect();

        Self {
            hashes,
            hasher: AdminKeyHasher::new(),
        }
    }

    /// True when no keys are configured (authentication disabled)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Number of accepted keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// Check a presented key against every configured hash
    #[must_use]
    pub fn verify(&self, key: &str) -> bool {
        self.hashes
            .iter()
            .any(|hash| match self.hasher.verify(key, hash) {
                Ok(matched) => matched,
                Err(e) => {
                    warn!(error = %e, "Error verifying admin key hash");
                    false
                },
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_round_trip() {
        let hasher = AdminKeyHasher::new();
        let hash = hasher.hash("secret").unwrap();
        assert!(AdminKeyHasher::is_hashed(&hash));
        assert!(hasher.verify("secret", &hash).unwrap());
        assert!(!hasher.verify("other", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let hasher = AdminKeyHasher::new();
        assert_ne!(hasher.hash("same").unwrap(), hasher.hash("same").unwrap());
    }

    #[test]
    fn invalid_hash_format_is_an_error() {
        let result = AdminKeyHasher::new().verify("key", "not-a-hash");
        assert!(matches!(result, Err(AdminKeyHashError::InvalidHashFormat(_))));
    }

    #[test]
    fn store_accepts_any_configured_key() {
        let hasher = AdminKeyHasher::new();
        let store = AdminKeyStore::from_hashes(vec![
            hasher.hash("first").unwrap(),
            hasher.hash("second").unwrap(),
        ]);
        assert_eq!(store.len(), 2);
        assert!(store.verify("first"));
        assert!(store.verify("second"));
        assert!(!store.verify("third"));
    }

    #[test]
    fn store_drops_plaintext_entries() {
        let store = AdminKeyStore::from_hashes(vec!["plaintext".to_string()]);
        assert!(store.is_empty());
        assert!(!store.verify("plaintext"));
    }
}
