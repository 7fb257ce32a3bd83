//! Client configuration loaded from TOML.

use std::path::Path;
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use ringside_backend::BackendConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Configuration for the Ringside client.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Base URL of the Ringside backend service.
    #[serde(default = "default_backend_url")]
    backend_url: String,

    /// Seconds to wait on a backend request before giving up.
    #[serde(default = "default_connect_timeout_secs")]
    connect_timeout_secs: u64,

    /// Seconds between connectivity probes.
    #[serde(default = "default_ping_interval_secs")]
    ping_interval_secs: u64,

    /// Milliseconds to linger on the intro screen before the lobby loads.
    #[serde(default = "default_lobby_delay_ms")]
    lobby_delay_ms: u64,

    /// Log file written while the TUI owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: String,
}

fn default_backend_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_ping_interval_secs() -> u64 {
    5
}

fn default_lobby_delay_ms() -> u64 {
    1000
}

fn default_log_file() -> String {
    "ringside.log".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            ping_interval_secs: default_ping_interval_secs(),
            lobby_delay_ms: default_lobby_delay_ms(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(backend_url = %config.backend_url, "Config loaded successfully");
        Ok(config)
    }

    /// Connection settings for the backend session library.
    pub fn backend(&self) -> BackendConfig {
        BackendConfig::new(
            self.backend_url.clone(),
            self.ping_interval(),
            self.connect_timeout(),
        )
    }

    /// Timeout applied to individual backend requests.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Interval between connectivity probes.
    pub fn ping_interval(&self) -> Duration {
        Duration::from_secs(self.ping_interval_secs)
    }

    /// Delay between selecting a bout and the lobby scene loading.
    pub fn lobby_delay(&self) -> Duration {
        Duration::from_millis(self.lobby_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
