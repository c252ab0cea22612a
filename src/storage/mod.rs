//! In-memory account storage
//!
//! All account state lives for the process lifetime only. The store is
//! owned by the session (TUI app or replay driver) and passed explicitly to
//! the services that read or mutate it.

pub mod accounts;

pub use accounts::AccountStore;
