//! PBKDF2 key derivation for master password processing.
//!
//! Uses PBKDF2 with HMAC-SHA-256:
//! - 310,000 iterations (OWASP recommendation for PBKDF2-HMAC-SHA256)
//! - 16 byte random salt
//! - 32 byte (256 bit) output

use pbkdf2::pbkdf2_hmac;
use rand::{rngs::OsRng, RngCore};
use sha2::Sha256;
use zeroize::Zeroize;

/// Salt length in bytes
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes (256 bits)
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count
pub const PBKDF2_ITERATIONS: u32 = 310_000;

/// A symmetric key derived from the master password
///
/// The key is recomputed per operation from (password, salt) and is never
/// cached, persisted, or used for anything besides AES-256-GCM
/// encrypt/decrypt. Key material is zeroized on drop.
pub struct DerivedKey {
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Get the raw key bytes (use sparingly)
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

/// Generate a fresh random salt from the operating system RNG
///
/// A new salt is drawn for every encryption; it is the sole source of
/// per-encryption key diversity.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}

/// Derive a symmetric key from the master password and salt
///
/// Deterministic for identical `(password, salt)` pairs. An empty password
/// is a caller precondition and is not rejected here.
pub fn derive_key(password: &str, salt: &[u8; SALT_LEN]) -> DerivedKey {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    DerivedKey { key }
}
