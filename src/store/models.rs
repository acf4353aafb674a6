//! Wire types for the versioned JSON document API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Entry record format version
pub const ENTRY_VERSION: u32 = 1;

/// Strategy for naming the document entry that holds a vault.
///
/// One fixed entry serves a single-vault deployment; a per-identity entry
/// (`<identity>.json`) serves a multi-vault deployment where the document
/// holds one entry per user. Both share the same fetch/store path; the
/// strategy is chosen at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryNaming {
    /// One well-known entry name for the whole document.
    Fixed(String),
    /// One entry per identity, named `<identity>.json`.
    PerIdentity(String),
}

impl EntryNaming {
    /// The document entry name addressed by this strategy.
    pub fn entry_name(&self) -> String {
        match self {
            Self::Fixed(name) => name.clone(),
            Self::PerIdentity(identity) => format!("{identity}.json"),
        }
    }

    /// The owner recorded in the entry metadata.
    pub fn owner(&self) -> &str {
        match self {
            Self::Fixed(name) => name,
            Self::PerIdentity(identity) => identity,
        }
    }
}

/// One named file inside the remote document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFile {
    pub content: String,
}

/// GET response body: the whole multi-file document.
///
/// Only `files` is read; everything else in the response is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteDocument {
    #[serde(default)]
    pub files: HashMap<String, DocumentFile>,
}

/// PATCH request body: a partial update of the named entries only.
///
/// The remote service merges by entry name rather than replacing the whole
/// document; that merge behavior is a dependency on the external store.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentPatch {
    pub files: HashMap<String, DocumentFile>,
}

/// The JSON record stored as an entry's content.
///
/// `payload` is the base64 encrypted envelope, opaque at this layer.
/// `version`, `owner`, and `updatedAt` are written on every store but never
/// read back; `fetch` extracts only the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    pub version: u32,
    pub owner: String,
    pub payload: String,
    pub updated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fixed_naming() {
        let naming = EntryNaming::Fixed("vault.json".to_string());
        assert_eq!(naming.entry_name(), "vault.json");
        assert_eq!(naming.owner(), "vault.json");
    }

    #[test]
    fn per_identity_naming() {
        let naming = EntryNaming::PerIdentity("alice".to_string());
        assert_eq!(naming.entry_name(), "alice.json");
        assert_eq!(naming.owner(), "alice");
    }

    #[test]
    fn entry_record_wire_names() {
        let record = EntryRecord {
            version: ENTRY_VERSION,
            owner: "alice".to_string(),
            payload: "b64payload".to_string(),
            updated_at: 1700000000000,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "version": 1,
                "owner": "alice",
                "payload": "b64payload",
                "updatedAt": 1700000000000i64,
            })
        );
    }

    #[test]
    fn entry_record_parse() {
        let record: EntryRecord = serde_json::from_str(
            r#"{"version":1,"owner":"alice","payload":"abc","updatedAt":42}"#,
        )
        .unwrap();
        assert_eq!(record.payload, "abc");
        assert_eq!(record.updated_at, 42);
    }

    #[test]
    fn document_without_files_parses_empty() {
        let document: RemoteDocument = serde_json::from_str("{}").unwrap();
        assert!(document.files.is_empty());
    }

    #[test]
    fn patch_body_shape() {
        let patch = DocumentPatch {
            files: HashMap::from([(
                "alice.json".to_string(),
                DocumentFile {
                    content: "{\"version\":1}".to_string(),
                },
            )]),
        };

        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            value,
            json!({ "files": { "alice.json": { "content": "{\"version\":1}" } } })
        );
    }
}
