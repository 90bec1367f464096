//! Client-side interpretation and rendering core for the A2UI protocol
//!
//! This library implements the interpretation pipeline of an A2UI client
//! talking to an A2A agent server: it normalizes heterogeneous JSON-RPC
//! response shapes into canonical UI-update directives, resolves data
//! bindings against a tagged-value data model, and projects resolved data
//! onto chart and force-graph visualization engines behind port traits.
//! The page shell, styling and actual canvases are external collaborators.
//!
//! The implementation follows a hexagonal architecture with clear
//! separation between domain, ports, and adapters.
//!
//! # Features
//!
//! - Response normalization for UI and text modes
//! - Surface and component store driven by A2UI directives
//! - Tagged-value data model with recursive unpacking
//! - Chart and knowledge-graph renderers with semantic event emission
//! - HTTP transport with dynamic server switching
//! - Feature flags for optional dependencies
//!
//! # Examples
//!
//! ## Sending a message and rendering the response
//!
//! ```rust,no_run
//! # #[cfg(feature = "http-client")]
//! # {
//! use a2ui_client::{A2uiHttpClient, ChatSession, SharedConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SharedConfig::default();
//!     let client = A2uiHttpClient::new(config.clone());
//!     let mut session = ChatSession::new(client, config);
//!
//!     session.send_text("show me Q3 sales as a bar chart").await?;
//!     for (surface_id, surface) in session.processor().surfaces() {
//!         println!("surface {surface_id}: {} components", surface.components.len());
//!     }
//!     Ok(())
//! }
//! # }
//! ```

// Re-export key modules and types
pub mod adapter;
pub mod application;
pub mod domain;
pub mod port;
pub mod services;

pub mod observability;

// Public API exports
pub use domain::{
    binding_path, is_binding, is_directive_value, is_valid_component_entry, pack, unpack,
    A2uiError, A2uiMessage, AgentCapabilities, AgentCard, AgentProvider, AgentSkill,
    BeginRendering, ComponentEntry, ComponentNode, DataModelUpdate, DataValue, DeleteSurface,
    FileContent, JsonRpcError, JsonRpcRequest, JsonRpcResponse, Message, Part, Role,
    SemanticEvent, SemanticEventName, Surface, SurfaceUpdate, A2UI_MIME_TYPE,
};

pub use application::{
    normalize_response, parse_raw_messages, MessageProcessor, NormalizedResponse, ResponseMode,
};

pub use port::{
    ChartBackend, ChartConfig, ChartKind, EdgeElement, GraphBackend, GraphElement, NodeElement,
};

pub use adapter::renderers::{ChartData, ChartRenderer, GraphProperties, KnowledgeGraphRenderer};

pub use services::{AsyncA2uiClient, ChatSession, ClientConfig, SharedConfig};

#[cfg(feature = "http-client")]
pub use adapter::A2uiHttpClient;
#[cfg(feature = "http-client")]
pub use adapter::HttpClientError;
