//! Document store credentials.

use std::fmt;

use crate::store::StoreError;

/// Default API base for the hosted document store.
pub(crate) const DEFAULT_API_BASE: &str = "https://api.github.com/gists";

/// Immutable credentials for one remote document.
///
/// Validated at construction: an empty document id or token is a
/// configuration error, detected before any network attempt.
#[derive(Clone)]
pub struct StoreConfig {
    document_id: String,
    token: String,
    api_base: String,
}

impl StoreConfig {
    /// Create a validated configuration from a document id and bearer token.
    pub fn new(
        document_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let document_id = document_id.into();
        let token = token.into();

        if document_id.trim().is_empty() {
            return Err(StoreError::Config("document id is required".to_string()));
        }
        if token.trim().is_empty() {
            return Err(StoreError::Config("access token is required".to_string()));
        }

        Ok(Self {
            document_id,
            token,
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }

    /// Point the client at a different API base (self-hosted deployments).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub(crate) fn document_id(&self) -> &str {
        &self.document_id
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    pub(crate) fn api_base(&self) -> &str {
        &self.api_base
    }
}

// The token must never appear in debug output or logs.
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("document_id", &self.document_id)
            .field("token", &"<redacted>")
            .field("api_base", &self.api_base)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_id_rejected() {
        let result = StoreConfig::new("", "token-value");
        assert!(matches!(result, Err(StoreError::Config(_))));

        let result = StoreConfig::new("   ", "token-value");
        assert!(matches!(result, Err(StoreError::Config(_))));
    }

    #[test]
    fn empty_token_rejected() {
        let result = StoreConfig::new("abc123", "");
        assert!(matches!(result, Err(StoreError::Config(_))));
    }

    #[test]
    fn debug_redacts_token() {
        let config = StoreConfig::new("abc123", "ghp_supersecret").unwrap();
        let output = format!("{config:?}");

        assert!(!output.contains("ghp_supersecret"));
        assert!(output.contains("<redacted>"));
        assert!(output.contains("abc123"));
    }

    #[test]
    fn api_base_trailing_slash_trimmed() {
        let config = StoreConfig::new("abc123", "token-value")
            .unwrap()
            .with_api_base("https://example.com/api/");
        assert_eq!(config.api_base(), "https://example.com/api");
    }
}
