//! Authentication service
//!
//! Login doubles as registration: an unseen username gets a fresh
//! zero-balance account when `auto_register` is on.

use chrono::Local;
use tracing::{info, warn};

use crate::config::Settings;
use crate::crypto::{PinHash, SecretPin};
use crate::error::{AuthFailure, WalletError, WalletResult};
use crate::models::Account;
use crate::storage::AccountStore;

/// Successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Trimmed username now signed in
    pub username: String,
    /// True when this login created the account
    pub registered: bool,
}

/// Service for signing users in
pub struct AuthService<'a> {
    store: &'a mut AccountStore,
    settings: &'a Settings,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service
    pub fn new(store: &'a mut AccountStore, settings: &'a Settings) -> Self {
        Self { store, settings }
    }

    /// Sign in, registering the username if it is new
    pub fn login(&mut self, username: &str, pin: &SecretPin) -> WalletResult<LoginOutcome> {
        let username = username.trim();
        let pin = pin.trimmed();

        if username.is_empty() || pin.is_empty() {
            warn!("Login rejected: missing field");
            return Err(WalletError::AuthenticationFailure(AuthFailure::MissingField));
        }

        let now = Local::now();

        let registered = match self.store.get(username) {
            Some(account) => {
                if !account.pin.verify(pin)? {
                    warn!(user = username, "Login rejected: incorrect PIN");
                    return Err(WalletError::AuthenticationFailure(AuthFailure::IncorrectPin));
                }
                false
            }
            None => {
                if !self.settings.auto_register {
                    warn!(user = username, "Login rejected: unknown user");
                    return Err(WalletError::AuthenticationFailure(AuthFailure::UnknownUser));
                }

                let hash = PinHash::new(pin, &self.settings.pin_hashing)?;
                self.store.insert(Account::new(username, hash, now))?;
                info!(user = username, "Registered new account");
                true
            }
        };

        self.store.require_mut(username)?.ensure_history_seeded(now);
        info!(user = username, registered, "Signed in");

        Ok(LoginOutcome {
            username: username.to_string(),
            registered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::PinHashParams;
    use crate::models::Money;

    fn settings() -> Settings {
        Settings {
            pin_hashing: PinHashParams::minimal(),
            ..Settings::default()
        }
    }

    #[test]
    fn test_unseen_user_is_registered() {
        let settings = settings();
        let mut store = AccountStore::new();

        let outcome = AuthService::new(&mut store, &settings)
            .login("alice", &SecretPin::from("1234"))
            .unwrap();

        assert_eq!(outcome.username, "alice");
        assert!(outcome.registered);
        let account = store.get("alice").unwrap();
        assert_eq!(account.balance, Money::zero());
        assert_eq!(account.balance_history.len(), 1);
    }

    #[test]
    fn test_returning_user_with_correct_pin() {
        let settings = settings();
        let mut store = AccountStore::new();
        let mut auth = AuthService::new(&mut store, &settings);

        auth.login("alice", &SecretPin::from("1234")).unwrap();
        let outcome = auth.login("  alice ", &SecretPin::from(" 1234 ")).unwrap();

        assert!(!outcome.registered);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("alice").unwrap().balance_history.len(), 1);
    }

    #[test]
    fn test_wrong_pin_leaves_state_unchanged() {
        let settings = settings();
        let mut store = AccountStore::new();
        AuthService::new(&mut store, &settings)
            .login("alice", &SecretPin::from("1234"))
            .unwrap();
        let before = serde_json::to_value(store.get("alice").unwrap()).unwrap();

        let err = AuthService::new(&mut store, &settings)
            .login("alice", &SecretPin::from("9999"))
            .unwrap_err();

        assert!(matches!(
            err,
            WalletError::AuthenticationFailure(AuthFailure::IncorrectPin)
        ));
        let after = serde_json::to_value(store.get("alice").unwrap()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_missing_fields() {
        let settings = settings();
        let mut store = AccountStore::new();
        let mut auth = AuthService::new(&mut store, &settings);

        for (user, pin) in [("", "1234"), ("alice", ""), ("   ", "  ")] {
            let err = auth.login(user, &SecretPin::from(pin)).unwrap_err();
            assert!(matches!(
                err,
                WalletError::AuthenticationFailure(AuthFailure::MissingField)
            ));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_any_unseen_username_registers() {
        let settings = settings();
        let mut store = AccountStore::new();
        let long_name = "a".repeat(65);

        for name in [long_name.as_str(), "al\u{7}ice", "Zoë"] {
            let outcome = AuthService::new(&mut store, &settings)
                .login(name, &SecretPin::from("1234"))
                .unwrap();
            assert!(outcome.registered);
            assert_eq!(store.get(name).unwrap().balance, Money::zero());
        }
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_auto_register_disabled() {
        let settings = Settings {
            auto_register: false,
            ..settings()
        };
        let mut store = AccountStore::new();

        let err = AuthService::new(&mut store, &settings)
            .login("alice", &SecretPin::from("1234"))
            .unwrap_err();

        assert!(matches!(
            err,
            WalletError::AuthenticationFailure(AuthFailure::UnknownUser)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_stored_pin_is_hashed() {
        let settings = settings();
        let mut store = AccountStore::new();
        AuthService::new(&mut store, &settings)
            .login("alice", &SecretPin::from("1234"))
            .unwrap();

        let hash = store.get("alice").unwrap().pin.as_str();
        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("1234"));
    }
}
