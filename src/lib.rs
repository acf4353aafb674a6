//! Client-Side Encrypted Vault Synchronization
//!
//! This library encrypts a password vault before it leaves the device and
//! persists the resulting opaque blob in a remote multi-file JSON document:
//! - PBKDF2-HMAC-SHA-256 key derivation from the master password
//! - AES-256-GCM envelope encryption (salt ‖ IV ‖ ciphertext‖tag, base64)
//! - A gist-style document store client (HTTPS GET/PATCH, bearer token)
//! - A session tracking the vault's sync lifecycle

pub mod crypto;
pub mod store;
pub mod sync;
pub mod vault;

pub use crypto::{decrypt, encrypt, CryptoError};
pub use store::{BlobStore, EntryNaming, RemoteBlobStore, StoreConfig, StoreError};
pub use sync::{SyncState, VaultSession};
pub use vault::{Vault, VaultItem};

use thiserror::Error;

/// Result type for vault synchronization operations
pub type Result<T> = std::result::Result<T, VaultSyncError>;

/// General error type for vault synchronization operations
#[derive(Error, Debug)]
pub enum VaultSyncError {
    #[error("Crypto error: {0}")]
    Crypto(#[from] crypto::CryptoError),

    #[error("Store error: {0}")]
    Store(#[from] store::StoreError),
}
