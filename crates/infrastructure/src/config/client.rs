//! Lead API client configuration used by the CLI.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// How the CLI reaches the Lead API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the server, without the `/leads` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Plaintext admin key sent as a bearer token
    #[serde(default, skip_serializing)]
    pub admin_key: Option<SecretString>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            admin_key: None,
        }
    }
}
