//! Secure memory handling for PIN input
//!
//! Provides a string wrapper that zeroes its buffer on drop so a typed PIN
//! does not linger in memory after the login attempt.

use std::fmt;
use std::ops::Deref;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A PIN as typed by the user, wiped when dropped
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SecretPin {
    inner: String,
}

impl SecretPin {
    pub fn new(s: impl Into<String>) -> Self {
        Self { inner: s.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// The PIN with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.inner.trim()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Deref for SecretPin {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<String> for SecretPin {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretPin {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Debug for SecretPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretPin([REDACTED; {} bytes])", self.inner.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_pin_from_string() {
        let pin: SecretPin = String::from("1234").into();
        assert_eq!(pin.as_str(), "1234");
        assert_eq!(pin.len(), 4);
    }

    #[test]
    fn test_trimmed() {
        let pin = SecretPin::from("  0000 ");
        assert_eq!(pin.trimmed(), "0000");
    }

    #[test]
    fn test_debug_is_redacted() {
        let pin = SecretPin::from("1234");
        let debug = format!("{:?}", pin);
        assert!(!debug.contains("1234"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_explicit_zeroize() {
        let mut pin = SecretPin::from("1234");
        pin.zeroize();
        assert!(pin.is_empty());
    }
}
