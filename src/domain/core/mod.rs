//! Core domain types for the A2UI client

pub mod agent;
pub mod directive;
pub mod event;
pub mod message;
pub mod surface;
pub mod value;

pub use agent::{AgentCapabilities, AgentCard, AgentProvider, AgentSkill};
pub use directive::{
    is_directive_value, is_valid_component_entry, A2uiMessage, BeginRendering, ComponentEntry,
    DataModelUpdate, DeleteSurface, SurfaceUpdate, INBOUND_DIRECTIVE_KEYS,
};
pub use event::{SemanticEvent, SemanticEventName};
pub use message::{FileContent, Message, Part, Role, A2UI_EXTENSION_URI, A2UI_MIME_TYPE};
pub use surface::{binding_path, is_binding, ComponentNode, Surface};
pub use value::{pack, unpack, DataValue};
