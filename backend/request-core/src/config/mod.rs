//! Core configuration.
//!
//! Loaded from `gatehouse.toml` in the config directory; a missing file
//! means defaults, a corrupt file is a structured error. A `.env` file is
//! honored before the environment is consulted for the gateway URL
//! override.

use crate::error::ConfigError;
use crate::{DEFAULT_GATEWAY_BASE_URL, DEFAULT_OPERATIONS_PATH, LOGIN_LOCATION};

use common::ErrorLocation;

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info, warn};
use serde::Deserialize;
use url::Url;

const CONFIG_FILE_NAME: &str = "gatehouse.toml";

/// Environment override for the gateway base URL.
pub const GATEWAY_URL_ENV: &str = "GATEHOUSE_GATEWAY_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Deserialize)]
pub struct CoreConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_operations_path")]
    pub operations_path: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            operations_path: default_operations_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_login_location")]
    pub login_location: String,

    /// Override for the token file path; defaults to the app data
    /// directory.
    #[serde(default)]
    pub token_file: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_location: default_login_location(),
            token_file: None,
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_base_url() -> String {
    DEFAULT_GATEWAY_BASE_URL.to_string()
}
fn default_operations_path() -> String {
    DEFAULT_OPERATIONS_PATH.to_string()
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_login_location() -> String {
    LOGIN_LOCATION.to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

impl CoreConfig {
    /// Load config from `{config_dir}/gatehouse.toml`.
    ///
    /// Falls back to defaults on a missing file; a file that exists but
    /// cannot be read or parsed is an error. Environment overrides are
    /// applied after the file, so they always win.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(|e| {
                warn!("Failed to read config file: {}", e);
                ConfigError::ReadError {
                    location: ErrorLocation::capture(),
                    path: config_path.clone(),
                    source: e,
                }
            })?;

            let config: CoreConfig = toml::from_str(&contents).map_err(|e| {
                warn!("Failed to parse config file: {}", e);
                ConfigError::ParseError {
                    location: ErrorLocation::capture(),
                    path: config_path.clone(),
                    reason: e.to_string(),
                }
            })?;

            info!("Config loaded from {}", config_path.display());
            config
        } else {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply `.env` plus environment overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded .env from {}", path.display());
        }

        match std::env::var(GATEWAY_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => {
                info!("Gateway URL overridden from {}", GATEWAY_URL_ENV);
                self.gateway.base_url = value;
            }
            _ => {}
        }
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.gateway.base_url).map_err(|e| ConfigError::ValidationError {
            location: ErrorLocation::capture(),
            reason: format!("invalid gateway base_url '{}': {e}", self.gateway.base_url),
        })?;

        if self.gateway.timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::capture(),
                reason: String::from("gateway timeout_secs must be non-zero"),
            });
        }

        if self.session.login_location.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::capture(),
                reason: String::from("session login_location must not be empty"),
            });
        }

        Ok(())
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.gateway.timeout_secs)
    }
}

/// Platform config directory for the app (`~/.config/gatehouse` on Linux).
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gatehouse"))
}

/// Platform data directory for the app, home of the token file and logs.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("gatehouse"))
}
