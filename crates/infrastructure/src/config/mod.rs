//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `storage`: Lead data file
//! - `security`: Admin keys, error exposure
//! - `client`: Lead API client used by the CLI
//!
//! Sources, later ones winning: built-in defaults, an optional `config.toml`,
//! then `LEADINTAKE_*` environment variables with `__` between sections
//! (e.g. `LEADINTAKE_SERVER__PORT=8080`). List values from the environment
//! are space-separated, since Argon2 PHC strings contain commas.

mod client;
mod security;
mod server;
mod storage;

use std::{fmt, path::Path};

use config::{Config, ConfigBuilder, ConfigError, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};

pub use client::ClientConfig;
pub use security::SecurityConfig;
pub use server::ServerConfig;
pub use storage::StorageConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "LEADINTAKE";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - relaxed security warnings
    #[default]
    Development,
    /// Production environment - strict security validation
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Lead storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Security configuration
    #[serde(default)]
    pub security: SecurityConfig,

    /// Lead API client configuration
    #[serde(default)]
    pub client: ClientConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(config::File::with_name("config").required(false))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from an explicit file, then the environment
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(config::File::from(path).required(true))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Parse configuration from a TOML document, ignoring the environment
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("storage.data_file", "data/leads.json")
    }

    /// Check if running in production
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Whether internal error details may be returned to clients
    ///
    /// Always true in development.
    #[must_use]
    pub fn expose_internal_errors(&self) -> bool {
        !self.is_production() || self.security.expose_internal_errors
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .list_separator(" ")
        .with_list_parse_key("server.allowed_origins")
        .with_list_parse_key("security.admin_keys")
        .try_parsing(true)
}
