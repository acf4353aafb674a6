//! HTTP client for the remote document store.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header;
use tracing::{debug, warn};

use crate::store::config::StoreConfig;
use crate::store::models::{
    DocumentFile, DocumentPatch, EntryNaming, EntryRecord, RemoteDocument, ENTRY_VERSION,
};
use crate::store::{BlobStore, StoreError};

/// Versioned JSON media type requested from the document API.
const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Client for one remote multi-file JSON document.
///
/// `fetch` and `store` are single attempts with no retries; failures go
/// straight back to the caller, which decides whether to retry. A `store`
/// always unconditionally overwrites the named entry: there is no version
/// token or conditional update, and concurrent writers are
/// last-writer-wins.
pub struct RemoteBlobStore {
    client: reqwest::Client,
    config: StoreConfig,
    naming: EntryNaming,
}

impl RemoteBlobStore {
    /// Create a new store client over validated credentials.
    pub fn new(config: StoreConfig, naming: EntryNaming) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|_| StoreError::Transport)?;

        Ok(Self {
            client,
            config,
            naming,
        })
    }

    fn document_url(&self) -> String {
        format!("{}/{}", self.config.api_base(), self.config.document_id())
    }
}

impl BlobStore for RemoteBlobStore {
    async fn fetch(&self) -> Result<Option<String>, StoreError> {
        let entry_name = self.naming.entry_name();

        let response = self
            .client
            .get(self.document_url())
            .bearer_auth(self.config.token())
            .header(header::ACCEPT, ACCEPT_MEDIA_TYPE)
            .send()
            .await
            .map_err(|_| StoreError::Transport)?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "document fetch rejected");
            return Err(StoreError::Transport);
        }

        let document: RemoteDocument = response.json().await.map_err(|_| StoreError::Transport)?;

        let Some(file) = document.files.get(&entry_name) else {
            // Normal first-run state: the entry is created on first save.
            debug!(entry = %entry_name, "entry not present in document");
            return Ok(None);
        };

        let record: EntryRecord =
            serde_json::from_str(&file.content).map_err(|_| StoreError::Transport)?;

        debug!(entry = %entry_name, "entry fetched");
        Ok(Some(record.payload))
    }

    async fn store(&self, payload: &str) -> Result<(), StoreError> {
        let entry_name = self.naming.entry_name();

        let record = EntryRecord {
            version: ENTRY_VERSION,
            owner: self.naming.owner().to_string(),
            payload: payload.to_string(),
            updated_at: chrono::Utc::now().timestamp_millis(),
        };
        let content = serde_json::to_string(&record).map_err(|_| StoreError::Transport)?;

        let body = DocumentPatch {
            files: HashMap::from([(entry_name.clone(), DocumentFile { content })]),
        };

        let response = self
            .client
            .patch(self.document_url())
            .bearer_auth(self.config.token())
            .header(header::ACCEPT, ACCEPT_MEDIA_TYPE)
            .json(&body)
            .send()
            .await
            .map_err(|_| StoreError::Transport)?;

        if !response.status().is_success() {
            warn!(status = %response.status(), entry = %entry_name, "document update rejected");
            return Err(StoreError::Transport);
        }

        debug!(entry = %entry_name, "entry updated");
        Ok(())
    }
}
