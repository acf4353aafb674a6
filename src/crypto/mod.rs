//! Cryptographic primitives for vault encryption.
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA-256 key derivation
//! - AES-256-GCM envelope encryption/decryption

pub mod cipher;
pub mod kdf;

pub use cipher::{decrypt, encrypt};
pub use kdf::{derive_key, generate_salt, DerivedKey};

use thiserror::Error;

/// Errors that can occur in cryptographic operations
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// A wrong master password and corrupted or tampered data must be
    /// indistinguishable to the caller, so every decryption failure
    /// collapses into this one variant.
    #[error("Decryption failed - the master password may be incorrect or the data corrupted")]
    DecryptionFailed,
}

/// Result type for crypto operations
pub type Result<T> = std::result::Result<T, CryptoError>;
