//! Client interface traits

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{A2uiError, AgentCard, Part};

/// An async trait defining the methods an A2UI-capable A2A client
/// should implement
#[async_trait]
pub trait AsyncA2uiClient: Send + Sync {
    /// Send a raw request body to the server and get the raw response
    async fn send_raw_request<'a>(&self, request: &'a str) -> Result<String, A2uiError>;

    /// Send message parts to the agent and return the full JSON-RPC
    /// response envelope (the normalizer consumes it as-is)
    async fn send_parts(&self, parts: Vec<Part>) -> Result<Value, A2uiError>;

    /// Fetch the agent's card from its well-known endpoint
    async fn agent_card(&self) -> Result<AgentCard, A2uiError>;
}
