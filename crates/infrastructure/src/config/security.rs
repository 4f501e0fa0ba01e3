//! Security configuration: admin keys and error exposure.

use serde::{Deserialize, Serialize};

/// Security configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Argon2id hashes (PHC strings) of the accepted admin bearer keys
    ///
    /// Empty disables admin authentication. Generate entries with
    /// `leadintake-cli hash-admin-key`.
    ///
    /// ```toml
    /// [security]
    /// admin_keys = ["$argon2id$v=19$m=19456,t=2,p=1$..."]
    /// ```
    #[serde(default)]
    pub admin_keys: Vec<String>,

    /// Include internal error details in API responses
    #[serde(default)]
    pub expose_internal_errors: bool,
}

impl SecurityConfig {
    /// Check if admin authentication is enabled
    #[must_use]
    pub fn has_admin_keys(&self) -> bool {
        !self.admin_keys.is_empty()
    }

    /// Number of configured keys that are not Argon2 hashes
    #[must_use]
    pub fn count_plaintext_keys(&self) -> usize {
        self.admin_keys
            .iter()
            .filter(|hash| !hash.starts_with("$argon2"))
            .count()
    }
}
