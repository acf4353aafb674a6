//! Vault sync session: fetch-decrypt and encrypt-store orchestration.

use tracing::debug;

use crate::crypto::{decrypt, encrypt};
use crate::store::BlobStore;
use crate::vault::Vault;
use crate::Result;

/// Sync lifecycle state of a vault session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Uninitialized,
    Loaded,
    Dirty,
    Synced,
}

/// A vault bound to one remote document entry.
///
/// Sequences the cipher and the store: `load` is fetch-then-decrypt, `save`
/// is encrypt-then-store. There is no coordination beyond sequencing, no
/// locks, and no automatic retry; a failed `save` leaves the session
/// `Dirty` so the caller can retry.
pub struct VaultSession<S: BlobStore> {
    store: S,
    vault: Vault,
    state: SyncState,
}

impl<S: BlobStore> VaultSession<S> {
    /// Create a session over a store. No network call happens here.
    pub fn new(store: S) -> Self {
        Self {
            store,
            vault: Vault::default(),
            state: SyncState::Uninitialized,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Read access to the vault. Does not change the sync state.
    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    /// Mutable access to the vault; marks the session dirty.
    pub fn vault_mut(&mut self) -> &mut Vault {
        self.state = SyncState::Dirty;
        &mut self.vault
    }

    /// Fetch and decrypt the remote vault.
    ///
    /// An absent entry is a normal first-run state and yields the empty
    /// vault; the session still becomes `Loaded`. Returns whether a remote
    /// vault existed.
    pub async fn load(&mut self, password: &str) -> Result<bool> {
        match self.store.fetch().await? {
            Some(envelope) => {
                self.vault = decrypt(&envelope, password)?;
                self.state = SyncState::Loaded;
                debug!(items = self.vault.len(), "vault loaded");
                Ok(true)
            }
            None => {
                self.vault = Vault::default();
                self.state = SyncState::Loaded;
                debug!("no remote vault yet; starting empty");
                Ok(false)
            }
        }
    }

    /// Encrypt and store the vault.
    ///
    /// Unconditionally overwrites the remote entry (last-writer-wins). On
    /// failure the state is left as it was — `Dirty` after a mutation — so
    /// the caller can retry.
    pub async fn save(&mut self, password: &str) -> Result<()> {
        let envelope = encrypt(&self.vault, password)?;
        self.store.store(&envelope).await?;
        self.state = SyncState::Synced;
        debug!(items = self.vault.len(), "vault synced");
        Ok(())
    }
}
