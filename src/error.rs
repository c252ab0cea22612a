//! Custom error types for Sonova Wallet
//!
//! Domain failures (bad input, insufficient funds, unknown recipient,
//! authentication) and ambient failures (config, I/O, replay scripts) share
//! one error type so every entry point can surface them the same way.

use std::fmt;

use thiserror::Error;

use crate::models::Money;

/// Why a login attempt was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// Username or PIN left empty
    MissingField,
    /// Username is known but the PIN does not match
    IncorrectPin,
    /// Username is unknown and auto-registration is disabled
    UnknownUser,
}

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "Please fill in both fields."),
            Self::IncorrectPin => write!(f, "Incorrect PIN."),
            Self::UnknownUser => write!(f, "Unknown user."),
        }
    }
}

/// The main error type for Sonova Wallet operations
#[derive(Error, Debug)]
pub enum WalletError {
    /// Amount did not parse, was not positive, or the request is malformed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Balance is below the requested amount
    #[error("Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: Money, available: Money },

    /// Transfer target is not registered
    #[error("Recipient not found: {0}")]
    UnknownRecipient(String),

    /// Login refused
    #[error("Login failed: {0}")]
    AuthenticationFailure(AuthFailure),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// An account action was issued without a signed-in user
    #[error("No user is signed in")]
    NotSignedIn,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// PIN hashing or verification machinery failed
    #[error("Credential error: {0}")]
    Credential(String),

    /// Replay script could not be read or a row is malformed
    #[error("Replay error: {0}")]
    Replay(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl WalletError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Shorthand for an [`WalletError::InvalidInput`]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Check if this is one of the recoverable domain errors a user can fix
    /// by changing their input
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_)
                | Self::InsufficientFunds { .. }
                | Self::UnknownRecipient(_)
                | Self::AuthenticationFailure(_)
                | Self::NotSignedIn
        )
    }

    /// Check if this is an authentication failure
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::AuthenticationFailure(_))
    }
}

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for WalletError {
    fn from(err: csv::Error) -> Self {
        Self::Replay(err.to_string())
    }
}

/// Result type alias for Sonova Wallet operations
pub type WalletResult<T> = Result<T, WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WalletError::InvalidInput("Amount must be positive".into());
        assert_eq!(err.to_string(), "Invalid input: Amount must be positive");
    }

    #[test]
    fn test_insufficient_funds_display() {
        let err = WalletError::InsufficientFunds {
            needed: Money::from_cents(100000),
            available: Money::from_cents(4500),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: need $1000.00, have $45.00"
        );
    }

    #[test]
    fn test_auth_failure_display() {
        let err = WalletError::AuthenticationFailure(AuthFailure::IncorrectPin);
        assert_eq!(err.to_string(), "Login failed: Incorrect PIN.");
        assert!(err.is_auth_failure());
        assert!(err.is_user_error());
    }

    #[test]
    fn test_not_found_error() {
        let err = WalletError::account_not_found("alice");
        assert_eq!(err.to_string(), "Account not found: alice");
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let wallet_err: WalletError = io_err.into();
        assert!(matches!(wallet_err, WalletError::Io(_)));
    }
}
