//! Account store keyed by username

use std::collections::HashMap;

use crate::error::{WalletError, WalletResult};
use crate::models::{Account, Money};

/// Mapping from username to account state
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: HashMap<String, Account>,
}

impl AccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an account by username
    pub fn get(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    /// Get an account for mutation
    pub fn get_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts.get_mut(username)
    }

    /// Get an account or fail with a not-found error
    pub fn require(&self, username: &str) -> WalletResult<&Account> {
        self.get(username)
            .ok_or_else(|| WalletError::account_not_found(username))
    }

    /// Get an account for mutation or fail with a not-found error
    pub fn require_mut(&mut self, username: &str) -> WalletResult<&mut Account> {
        self.accounts
            .get_mut(username)
            .ok_or_else(|| WalletError::account_not_found(username))
    }

    pub fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    /// Insert a new account; usernames are unique
    pub fn insert(&mut self, account: Account) -> WalletResult<()> {
        if self.accounts.contains_key(&account.username) {
            return Err(WalletError::Duplicate {
                entity_type: "Account",
                identifier: account.username,
            });
        }
        self.accounts.insert(account.username.clone(), account);
        Ok(())
    }

    /// All accounts sorted by username
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<_> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.username.cmp(&b.username));
        accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Sum of every account balance
    pub fn total_balance(&self) -> Money {
        self.accounts.values().map(|a| a.balance).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{PinHash, PinHashParams};
    use chrono::Local;

    fn account(name: &str) -> Account {
        let pin = PinHash::new("0000", &PinHashParams::minimal()).unwrap();
        Account::new(name, pin, Local::now())
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = AccountStore::new();
        assert!(store.is_empty());

        store.insert(account("alice")).unwrap();
        assert!(store.contains("alice"));
        assert_eq!(store.get("alice").unwrap().username, "alice");
        assert!(store.get("bob").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut store = AccountStore::new();
        store.insert(account("alice")).unwrap();
        assert!(matches!(
            store.insert(account("alice")),
            Err(WalletError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_require_missing() {
        let store = AccountStore::new();
        assert!(matches!(
            store.require("ghost"),
            Err(WalletError::NotFound { .. })
        ));
    }

    #[test]
    fn test_accounts_sorted() {
        let mut store = AccountStore::new();
        store.insert(account("carol")).unwrap();
        store.insert(account("alice")).unwrap();
        store.insert(account("bob")).unwrap();

        let names: Vec<_> = store.accounts().iter().map(|a| a.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_total_balance() {
        let mut store = AccountStore::new();
        store.insert(account("alice")).unwrap();
        store.insert(account("bob")).unwrap();

        store.get_mut("alice").unwrap().balance = Money::from_dollars(1);
        store.require_mut("bob").unwrap().balance = Money::from_dollars(2);
        assert_eq!(store.total_balance(), Money::from_dollars(3));
    }
}
