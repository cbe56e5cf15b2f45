//! Model backend identifiers and their static lookup tables.

use serde::{Deserialize, Serialize};

/// Supported completion backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModelId {
    /// OpenAI GPT-3.5 completions API
    #[default]
    Gpt3,
    /// OpenAI GPT-4 completions API
    Gpt4,
    /// GPT NeoXT 20B hosted by Together
    GptNeo,
    /// Cohere generate API
    Cohere,
    /// Locally hosted endpoint
    Local,
}

impl ModelId {
    /// Every supported backend, in display order.
    pub const ALL: [ModelId; 5] = [
        ModelId::Gpt3,
        ModelId::Gpt4,
        ModelId::GptNeo,
        ModelId::Cohere,
        ModelId::Local,
    ];

    /// Human-readable display name.
    pub fn label(&self) -> &'static str {
        match self {
            ModelId::Gpt3 => "OpenAI: GPT-3.5",
            ModelId::Gpt4 => "OpenAI: GPT-4",
            ModelId::GptNeo => "Together: GPT NeoXT 20B",
            ModelId::Cohere => "Cohere: Xlarge",
            ModelId::Local => "Local",
        }
    }

    /// Completion endpoint used when no override is configured.
    pub fn default_completion_url(&self) -> &'static str {
        match self {
            ModelId::Gpt3 => "https://api.openai.com/v1/completions",
            ModelId::Gpt4 => "https://api.openai.com/v1/completions",
            ModelId::GptNeo => "https://api.together.xyz/inference",
            ModelId::Cohere => "https://api.cohere.ai/generate",
            ModelId::Local => "http://127.0.0.1:8000/completions",
        }
    }

    /// Where a user obtains an API key for this backend, if it needs one.
    pub fn api_key_url(&self) -> Option<&'static str> {
        match self {
            ModelId::Gpt3 | ModelId::Gpt4 => {
                Some("https://platform.openai.com/account/api-keys")
            }
            ModelId::Cohere => Some("https://dashboard.cohere.ai/api-keys"),
            ModelId::GptNeo | ModelId::Local => None,
        }
    }

    /// Whether requests to this backend must carry a credential.
    pub fn requires_api_key(&self) -> bool {
        !matches!(self, ModelId::Local | ModelId::GptNeo)
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelId::Gpt3 => write!(f, "gpt3"),
            ModelId::Gpt4 => write!(f, "gpt4"),
            ModelId::GptNeo => write!(f, "gpt_neo"),
            ModelId::Cohere => write!(f, "cohere"),
            ModelId::Local => write!(f, "local"),
        }
    }
}
