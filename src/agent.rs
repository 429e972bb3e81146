//! The agent descriptor and the factory that assembles it.

use crate::config::AgentConfig;
use crate::instruction::GITHUB_INSTRUCTION;
use crate::mcp::SseConnectionParams;
use crate::model::ModelConfig;
use tracing::info;

/// Name the agent registers under.
pub const AGENT_NAME: &str = "github_test_agent";

/// Short description shown to hosts and other agents.
pub const AGENT_DESCRIPTION: &str = "Test agent for GitHub MCP server operations \
including repositories, issues, PRs, and workflows";

/// An LLM agent descriptor.
///
/// Pure config: the descriptor carries everything a host runtime needs
/// to run the agent — model, instructions, and tool-server endpoints —
/// but opens no connections itself.
#[derive(Clone, PartialEq, Eq)]
pub struct LlmAgent {
    name: String,
    description: String,
    model: ModelConfig,
    instruction: String,
    tool_servers: Vec<SseConnectionParams>,
}

impl LlmAgent {
    /// Create a descriptor for `model` with no description, instruction,
    /// or tool servers.
    pub fn new(name: impl Into<String>, model: ModelConfig) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            model,
            instruction: String::new(),
            tool_servers: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the system instruction.
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    /// Add a tool-server connection.
    pub fn with_tool_server(mut self, params: SseConnectionParams) -> Self {
        self.tool_servers.push(params);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn model(&self) -> &ModelConfig {
        &self.model
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn tool_servers(&self) -> &[SseConnectionParams] {
        &self.tool_servers
    }
}

impl std::fmt::Debug for LlmAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmAgent")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("model", &self.model.model)
            .field("tool_servers_count", &self.tool_servers.len())
            .finish()
    }
}

impl std::fmt::Display for LlmAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let endpoints: Vec<&str> = self.tool_servers.iter().map(|t| t.url()).collect();
        write!(
            f,
            "{} (model: {}, tool servers: {})",
            self.name,
            self.model.model,
            endpoints.join(", ")
        )
    }
}

/// Build the GitHub test agent from validated configuration.
///
/// One straight-line construction: model descriptor, the single SSE
/// connection to the GitHub tool gateway, then the agent descriptor.
/// Emits a diagnostic line with the effective model and endpoint once
/// the descriptor is assembled.
pub fn root_agent(config: &AgentConfig) -> LlmAgent {
    let model = ModelConfig::new(config.api_key(), config.model_name());
    let gateway = SseConnectionParams::new(config.tool_server_url());

    let agent = LlmAgent::new(AGENT_NAME, model)
        .with_description(AGENT_DESCRIPTION)
        .with_instruction(GITHUB_INSTRUCTION)
        .with_tool_server(gateway);

    info!(
        model = %config.model_name(),
        tool_server = %config.tool_server_url(),
        "{AGENT_NAME} initialized"
    );

    agent
}
