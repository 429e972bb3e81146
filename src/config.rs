//! Environment-driven configuration for the agent bootstrap.

use crate::error::{ConfigError, Result};

/// Model used when `MODEL_NAME` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Tool-gateway endpoint used when `TOOL_SERVER_URL` is not set.
/// Supergateway exposes its SSE endpoint at `/sse`.
pub const DEFAULT_TOOL_SERVER_URL: &str = "http://localhost:8080/sse";

/// Validated configuration for the GitHub test agent.
///
/// Built once at startup and immutable afterwards. Construction goes
/// through [`AgentConfig::new`], which rejects an absent credential, so
/// a value of this type always carries a non-empty API key. Tests can
/// pass a closure to [`AgentConfig::from_lookup`] instead of mutating
/// the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    api_key: String,
    model_name: String,
    tool_server_url: String,
}

impl AgentConfig {
    /// Create a configuration, validating the credential.
    pub fn new(
        api_key: impl Into<String>,
        model_name: impl Into<String>,
        tool_server_url: impl Into<String>,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(Self {
            api_key,
            model_name: model_name.into(),
            tool_server_url: tool_server_url.into(),
        })
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, applying defaults for the
    /// optional settings. An unset or empty `API_KEY` is rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("API_KEY").unwrap_or_default();
        let model_name = lookup("MODEL_NAME").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let tool_server_url =
            lookup("TOOL_SERVER_URL").unwrap_or_else(|| DEFAULT_TOOL_SERVER_URL.to_string());
        Self::new(api_key, model_name, tool_server_url)
    }

    /// The API key authenticating model calls.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The model to invoke.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// The tool-gateway SSE endpoint.
    pub fn tool_server_url(&self) -> &str {
        &self.tool_server_url
    }
}
