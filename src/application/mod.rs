//! Application layer: response normalization, the message processor,
//! the data model, and outbound request construction.

pub mod data_model;
pub mod json_rpc;
pub mod normalizer;
pub mod processor;
pub mod raw_input;

pub use data_model::DataModelStore;
pub use json_rpc::{
    client_capabilities_metadata, OutboundMessage, SendTaskRequest, SendTaskResponse,
    TaskSendParams, WirePart, STANDARD_CATALOG_ID,
};
pub use normalizer::{normalize_response, NormalizedResponse, ResponseMode};
pub use processor::MessageProcessor;
pub use raw_input::parse_raw_messages;
