//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::sl::DEFAULT_BASE_URL;

/// Configuration errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime configuration for the board server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address to listen on (`BOARD_ADDR`)
    pub addr: SocketAddr,

    /// SL transport API base URL (`SL_BASE_URL`)
    pub sl_base_url: String,

    /// How often the feed refreshes (`BOARD_REFRESH_SECS`)
    pub refresh_interval: Duration,

    /// Where screen settings are persisted (`BOARD_SETTINGS_PATH`).
    /// Settings are kept in memory only when unset.
    pub settings_path: Option<PathBuf>,

    /// Directory of recorded responses (`SL_MOCK_DIR`). When set, the live
    /// API is not contacted.
    pub mock_dir: Option<PathBuf>,

    /// Static assets directory (`BOARD_STATIC_DIR`)
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            sl_base_url: DEFAULT_BASE_URL.to_string(),
            refresh_interval: Duration::from_secs(30),
            settings_path: None,
            mock_dir: None,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Unset or empty keys keep their
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get("BOARD_ADDR") {
            config.addr = value.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "BOARD_ADDR",
                value,
            })?;
        }

        if let Some(value) = get("SL_BASE_URL") {
            config.sl_base_url = value;
        }

        if let Some(value) = get("BOARD_REFRESH_SECS") {
            let secs = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&secs| secs > 0)
                .ok_or(ConfigError::Invalid {
                    key: "BOARD_REFRESH_SECS",
                    value,
                })?;
            config.refresh_interval = Duration::from_secs(secs);
        }

        config.settings_path = get("BOARD_SETTINGS_PATH").map(PathBuf::from);
        config.mock_dir = get("SL_MOCK_DIR").map(PathBuf::from);

        if let Some(value) = get("BOARD_STATIC_DIR") {
            config.static_dir = PathBuf::from(value);
        }

        Ok(config)
    }
}
