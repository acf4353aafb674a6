//! Vault document model: the structured object that is encrypted before it
//! leaves the device.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single credential item in the vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultItem {
    pub id: Uuid,
    pub title: String,
    pub username: String,
    pub password: String,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub created_at: i64,
    pub modified_at: i64,
}

impl VaultItem {
    /// Create a new item stamped with the current time.
    pub fn new(
        title: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let now = Utc::now().timestamp();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            username: username.into(),
            password: password.into(),
            url: None,
            notes: None,
            created_at: now,
            modified_at: now,
        }
    }
}

/// The plaintext vault contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vault {
    pub items: Vec<VaultItem>,
}

impl Vault {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_items_get_distinct_ids() {
        let item1 = VaultItem::new("mail", "alice", "hunter2");
        let item2 = VaultItem::new("mail", "alice", "hunter2");
        assert_ne!(item1.id, item2.id);
    }

    #[test]
    fn vault_serialization_roundtrip() {
        let mut vault = Vault::default();
        vault.items.push(VaultItem::new("mail", "alice", "hunter2"));
        vault.items[0].url = Some("https://mail.example.com".to_string());

        let json = serde_json::to_string(&vault).unwrap();
        let parsed: Vault = serde_json::from_str(&json).unwrap();

        assert_eq!(vault, parsed);
    }

    #[test]
    fn default_vault_is_empty() {
        let vault = Vault::default();
        assert!(vault.is_empty());
        assert_eq!(vault.len(), 0);
    }
}
