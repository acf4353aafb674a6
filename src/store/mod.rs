//! Remote blob store for encrypted vault envelopes.
//!
//! The store wraps one remote multi-file JSON document identified by an
//! opaque id and authorized via a bearer token. Payloads are opaque here:
//! they are stored and returned verbatim, never inspected or decrypted.

pub mod client;
pub mod config;
pub mod models;

#[cfg(test)]
pub(crate) mod memory;

pub use client::RemoteBlobStore;
pub use config::StoreConfig;
pub use models::{EntryNaming, EntryRecord};

use thiserror::Error;

/// Errors that can occur talking to the document store
#[derive(Error, Debug)]
pub enum StoreError {
    /// A required credential is missing. Raised at construction, before
    /// any crypto or network call.
    #[error("Missing configuration: {0}")]
    Config(String),

    /// Non-success HTTP status or network-level failure. Deliberately a
    /// single generic message so no credential value can leak through it.
    #[error("Could not reach the document store - check credentials and network")]
    Transport,
}

/// Storage backend for one vault's encrypted envelope.
///
/// A missing entry is a normal state (vault not yet created) and is
/// reported as `Ok(None)`, not an error. No call retries; every failure is
/// a single attempt whose error goes straight back to the caller.
#[allow(async_fn_in_trait)]
pub trait BlobStore {
    /// Retrieve the stored payload, or `None` if no entry exists yet.
    async fn fetch(&self) -> Result<Option<String>, StoreError>;

    /// Unconditionally overwrite the entry with a new payload.
    ///
    /// Concurrent writers are last-writer-wins; callers needing ordering
    /// must serialize their own calls.
    async fn store(&self, payload: &str) -> Result<(), StoreError>;
}
