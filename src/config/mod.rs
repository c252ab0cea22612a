//! Configuration module for Sonova Wallet
//!
//! This module provides configuration management including:
//! - Platform config directory resolution
//! - User settings loaded from an optional JSON file

pub mod paths;
pub mod settings;

pub use paths::WalletPaths;
pub use settings::Settings;
