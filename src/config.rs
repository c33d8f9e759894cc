//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Namespace prefix used for every stored key unless overridden.
pub const DEFAULT_STORAGE_PREFIX: &str = "app_data_";

/// Directory the file-backed store writes into unless overridden.
pub const DEFAULT_DATA_DIR: &str = ".rideconnect";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one file per stored key
    pub data_dir: PathBuf,
    /// Prefix that scopes this application's keys in the store
    pub storage_prefix: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage_prefix: DEFAULT_STORAGE_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honoured for local runs.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let data_dir = env::var("RIDECONNECT_DATA_DIR")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        if data_dir.is_empty() {
            return Err(ConfigError::Invalid {
                name: "RIDECONNECT_DATA_DIR",
                reason: "must not be empty",
            });
        }

        let storage_prefix = env::var("RIDECONNECT_STORAGE_PREFIX")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_STORAGE_PREFIX.to_string());
        // clear() removes everything under the prefix; an empty one would match every key.
        if storage_prefix.is_empty() {
            return Err(ConfigError::Invalid {
                name: "RIDECONNECT_STORAGE_PREFIX",
                reason: "must not be empty",
            });
        }

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            storage_prefix,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {name}: {reason}")]
    Invalid {
        name: &'static str,
        reason: &'static str,
    },
}
