//! Per-backend configuration records.

use serde::{Deserialize, Serialize};

use super::id::ModelId;

/// Configuration for one completion backend.
///
/// `api_key` and `completion_url` are absent until the user supplies them;
/// a fresh record starts from the backend's static default endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Which backend this record configures
    pub id: ModelId,
    /// Secret credential sent with completion requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Inference endpoint URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_url: Option<String>,
}

impl ModelConfig {
    /// Fresh record for `id`: default endpoint, no credential.
    pub fn init(id: ModelId) -> Self {
        Self {
            id,
            api_key: None,
            completion_url: Some(id.default_completion_url().to_string()),
        }
    }

    /// A config is incomplete when it has no endpoint, or the backend
    /// requires a credential and none is set.
    pub fn is_incomplete(&self) -> bool {
        self.completion_url.is_none() || (self.id.requires_api_key() && self.api_key.is_none())
    }
}
