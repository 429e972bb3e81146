//! Connection parameters for the remote MCP tool gateway.
//!
//! The GitHub MCP server is fronted by Supergateway, which wraps the
//! stdio-based server with an HTTP/SSE transport, so the agent addresses
//! it with SSE connection parameters rather than streamable-HTTP ones.

use serde::{Deserialize, Serialize};

/// Parameters for an SSE connection to an MCP server.
///
/// Connection handling lives in the MCP client; this type only names
/// the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SseConnectionParams {
    url: String,
}

impl SseConnectionParams {
    /// Create connection parameters for the given SSE endpoint URL.
    ///
    /// The URL is not validated here; a malformed endpoint surfaces in
    /// the transport when the host runtime connects.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The SSE endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}
