//! Model descriptor for the LLM backing the agent.

use serde::{Deserialize, Serialize};

/// Output-token bound applied to every model call.
pub const DEFAULT_MAX_TOKENS: u32 = 10_000;

/// Identifies the LLM to invoke, the credential to authenticate with,
/// and the maximum-output-token bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model name (e.g., "gpt-4o", "gpt-4o-mini").
    pub model: String,
    /// API key authenticating model calls.
    pub api_key: String,
    /// Maximum number of output tokens per response.
    pub max_tokens: u32,
}

impl ModelConfig {
    /// Create a model config with the fixed token bound.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            api_key: api_key.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}
