//! Protocol envelope types

pub mod json_rpc;

pub use json_rpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
