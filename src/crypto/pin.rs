//! PIN hashing using Argon2id
//!
//! Each account stores the PHC string produced by hashing its PIN with a
//! random salt. Verification reads the algorithm parameters back out of the
//! stored string, so changing the configured cost only affects new accounts.

use std::fmt;

use argon2::{
    password_hash::{
        rand_core::OsRng, Error as PasswordHashError, PasswordHash, PasswordHasher,
        PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use serde::{Deserialize, Serialize};

use crate::error::{WalletError, WalletResult};

/// Argon2id cost parameters for new PIN hashes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinHashParams {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Time cost (iterations)
    pub iterations: u32,
    /// Parallelism degree
    pub parallelism: u32,
}

impl Default for PinHashParams {
    fn default() -> Self {
        Self {
            memory_kib: 19 * 1024,
            iterations: 2,
            parallelism: 1,
        }
    }
}

impl PinHashParams {
    /// Cheapest parameters Argon2 accepts; only for tests and replay runs
    pub const fn minimal() -> Self {
        Self {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        }
    }

    fn hasher(&self) -> WalletResult<Argon2<'static>> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| WalletError::Credential(format!("Invalid Argon2 parameters: {}", e)))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// An Argon2id PHC string for a PIN
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinHash(String);

impl PinHash {
    /// Hash a PIN with a fresh random salt
    pub fn new(pin: &str, params: &PinHashParams) -> WalletResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = params
            .hasher()?
            .hash_password(pin.as_bytes(), &salt)
            .map_err(|e| WalletError::Credential(format!("Failed to hash PIN: {}", e)))?;
        Ok(Self(hash.to_string()))
    }

    /// Check a PIN against this hash
    ///
    /// A mismatch is `Ok(false)`; only a corrupt hash is an error.
    pub fn verify(&self, pin: &str) -> WalletResult<bool> {
        let parsed = PasswordHash::new(&self.0)
            .map_err(|e| WalletError::Credential(format!("Stored PIN hash is invalid: {}", e)))?;

        match Argon2::default().verify_password(pin.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(WalletError::Credential(format!(
                "PIN verification failed: {}",
                e
            ))),
        }
    }

    /// The PHC string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PinHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PinHash(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = PinHash::new("1234", &PinHashParams::minimal()).unwrap();
        assert!(hash.verify("1234").unwrap());
        assert!(!hash.verify("4321").unwrap());
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let hash = PinHash::new("1234", &PinHashParams::minimal()).unwrap();
        assert!(hash.as_str().starts_with("$argon2id$"));
        assert!(!hash.as_str().contains("1234"));
    }

    #[test]
    fn test_same_pin_different_salt() {
        let params = PinHashParams::minimal();
        let first = PinHash::new("0000", &params).unwrap();
        let second = PinHash::new("0000", &params).unwrap();
        assert_ne!(first, second);
        assert!(second.verify("0000").unwrap());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = PinHashParams {
            memory_kib: 0,
            iterations: 0,
            parallelism: 0,
        };
        assert!(matches!(
            PinHash::new("1234", &params),
            Err(WalletError::Credential(_))
        ));
    }

    #[test]
    fn test_corrupt_hash_is_error() {
        let hash = PinHash("not-a-phc-string".to_string());
        assert!(matches!(hash.verify("1234"), Err(WalletError::Credential(_))));
    }

    #[test]
    fn test_debug_hides_hash() {
        let hash = PinHash::new("1234", &PinHashParams::minimal()).unwrap();
        assert_eq!(format!("{:?}", hash), "PinHash(..)");
    }
}
