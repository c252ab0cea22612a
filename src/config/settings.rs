//! User settings for Sonova Wallet
//!
//! Display preferences, the login policy, logging level and PIN hashing
//! cost. Every field has a default so a missing or partial file is fine.

use serde::{Deserialize, Serialize};

use super::paths::WalletPaths;
use crate::crypto::PinHashParams;
use crate::error::WalletError;
use crate::models::DEFAULT_TIMESTAMP_FORMAT;

/// User settings for Sonova Wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// strftime format for transaction log timestamps
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Create an account when an unknown username logs in
    #[serde(default = "default_auto_register")]
    pub auto_register: bool,

    /// TUI tick interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Default log filter level when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Argon2 cost for new PIN hashes
    #[serde(default)]
    pub pin_hashing: PinHashParams,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

fn default_auto_register() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            timestamp_format: default_timestamp_format(),
            auto_register: default_auto_register(),
            tick_rate_ms: default_tick_rate_ms(),
            log_level: default_log_level(),
            pin_hashing: PinHashParams::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &WalletPaths) -> Result<Self, WalletError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| WalletError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| WalletError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WalletPaths) -> Result<(), WalletError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| WalletError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| WalletError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values that would break the UI or logging at startup
    pub fn validate(&self) -> Result<(), WalletError> {
        if self.tick_rate_ms == 0 {
            return Err(WalletError::Config("tick_rate_ms must be positive".into()));
        }
        if self.timestamp_format.trim().is_empty() {
            return Err(WalletError::Config(
                "timestamp_format cannot be empty".into(),
            ));
        }
        Ok(())
    }
}
