//! Path management for Sonova Wallet
//!
//! Account data is never written to disk; the only files are the optional
//! settings file and the diagnostic log.
//!
//! ## Path Resolution Order
//!
//! 1. `SONOVA_WALLET_DIR` environment variable (if set)
//! 2. The platform config directory for `sonova-wallet`
//!    (`~/.config/sonova-wallet` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::WalletError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "SONOVA_WALLET_DIR";

/// Manages all paths used by Sonova Wallet
#[derive(Debug, Clone)]
pub struct WalletPaths {
    base_dir: PathBuf,
}

impl WalletPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, WalletError> {
        let base_dir = match std::env::var_os(DIR_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "sonova-wallet")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    WalletError::Config("Could not determine a configuration directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create WalletPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the diagnostic log written in TUI mode
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("sonova.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), WalletError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            WalletError::Io(format!(
                "Failed to create directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("sonova.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let paths = WalletPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.is_dir());
    }
}
