//! Domain models for the A2UI client core

pub mod core;
pub mod error;
pub mod protocols;

// Re-export key types for convenience
pub use core::{
    binding_path, is_binding, is_directive_value, is_valid_component_entry, pack, unpack,
    A2uiMessage, AgentCapabilities, AgentCard, AgentProvider, AgentSkill, BeginRendering,
    ComponentEntry, ComponentNode, DataModelUpdate, DataValue, DeleteSurface, FileContent,
    Message, Part, Role, SemanticEvent, SemanticEventName, Surface, SurfaceUpdate,
    A2UI_MIME_TYPE, INBOUND_DIRECTIVE_KEYS,
};
pub use error::A2uiError;
pub use protocols::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
