//! # github-test-agent
//!
//! Bootstrap for an LLM agent that exercises a GitHub MCP server.
//!
//! The crate does exactly one thing: read configuration from the
//! environment, validate the credential, and assemble an immutable
//! [`LlmAgent`] descriptor binding the model, the system instructions,
//! and the SSE endpoint of the GitHub tool gateway. Running the agent —
//! model calls, tool dispatch, transport — is the host runtime's job.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use github_test_agent::{AgentConfig, root_agent};
//!
//! let config = AgentConfig::from_env()?;
//! let agent = root_agent(&config);
//! assert_eq!(agent.tool_servers().len(), 1);
//! # Ok::<(), github_test_agent::ConfigError>(())
//! ```
//!
//! ## Configuration
//!
//! | Variable | Required | Default |
//! |----------|----------|---------|
//! | `API_KEY` | yes | — |
//! | `MODEL_NAME` | no | `gpt-4o` |
//! | `TOOL_SERVER_URL` | no | `http://localhost:8080/sse` |

pub mod agent;
pub mod config;
pub mod error;
pub mod instruction;
pub mod mcp;
pub mod model;

pub use agent::{AGENT_DESCRIPTION, AGENT_NAME, LlmAgent, root_agent};
pub use config::{AgentConfig, DEFAULT_MODEL, DEFAULT_TOOL_SERVER_URL};
pub use error::{ConfigError, Result};
pub use instruction::GITHUB_INSTRUCTION;
pub use mcp::SseConnectionParams;
pub use model::{DEFAULT_MAX_TOKENS, ModelConfig};
