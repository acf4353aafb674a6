//! In-memory blob store used by tests.

use std::sync::{Arc, Mutex};

use crate::store::{BlobStore, StoreError};

/// Stores the entry in memory and overwrites on every `store`, matching the
/// remote last-writer-wins behavior. Cloning shares the underlying entry.
#[derive(Clone, Default)]
pub(crate) struct MemoryBlobStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    entry: Mutex<Option<String>>,
    writes: Mutex<Vec<String>>,
    fail_next: Mutex<bool>,
}

impl MemoryBlobStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Make the next `store` call fail with a transport error.
    pub(crate) fn fail_next_store(&self) {
        *self.inner.fail_next.lock().unwrap() = true;
    }

    pub(crate) fn write_count(&self) -> usize {
        self.inner.writes.lock().unwrap().len()
    }
}

impl BlobStore for MemoryBlobStore {
    async fn fetch(&self) -> Result<Option<String>, StoreError> {
        Ok(self.inner.entry.lock().unwrap().clone())
    }

    async fn store(&self, payload: &str) -> Result<(), StoreError> {
        if std::mem::take(&mut *self.inner.fail_next.lock().unwrap()) {
            return Err(StoreError::Transport);
        }

        self.inner.writes.lock().unwrap().push(payload.to_string());
        *self.inner.entry.lock().unwrap() = Some(payload.to_string());
        Ok(())
    }
}
