//! Sonova Wallet - terminal digital wallet with expense tracking
//!
//! This library provides the core functionality behind the `sonova` binary:
//! username/PIN accounts, deposits, peer-to-peer payments, categorized
//! expenses against a monthly limit, and the reports behind the balance and
//! spending charts. All account state is held in memory for one session.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, money, transactions, categories)
//! - `storage`: In-memory account store
//! - `services`: Business logic layer (login, funds, payments, expenses)
//! - `reports`: Expense breakdown, balance trend and account summary
//! - `display`: Plain-text formatting shared by the CLI and TUI
//! - `cli`: CSV replay of scripted actions
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use sonova_wallet::config::Settings;
//! use sonova_wallet::crypto::{PinHashParams, SecretPin};
//! use sonova_wallet::services::{AuthService, WalletService};
//! use sonova_wallet::storage::AccountStore;
//!
//! let settings = Settings {
//!     pin_hashing: PinHashParams::minimal(),
//!     ..Settings::default()
//! };
//! let mut store = AccountStore::new();
//!
//! AuthService::new(&mut store, &settings)
//!     .login("alice", &SecretPin::from("1234"))
//!     .unwrap();
//! let receipt = WalletService::new(&mut store).add_funds("alice", "100").unwrap();
//! assert_eq!(receipt.balance.to_string(), "$100.00");
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::WalletError;
