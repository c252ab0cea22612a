//! PIN credential handling
//!
//! PINs are never stored in plaintext: accounts keep an Argon2id hash in
//! PHC string form, and PIN input travels in a buffer that is wiped on drop.

pub mod pin;
pub mod secure_memory;

pub use pin::{PinHash, PinHashParams};
pub use secure_memory::SecretPin;
