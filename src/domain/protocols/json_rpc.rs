use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::error::A2uiError;

/// JSON-RPC 2.0 error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl From<A2uiError> for JsonRpcError {
    fn from(error: A2uiError) -> Self {
        let value = error.to_jsonrpc_error();

        if let Value::Object(map) = value {
            let code = map
                .get("code")
                .and_then(|v| v.as_i64())
                .map(|v| v as i32)
                .unwrap_or(-32603); // Internal error code as fallback

            let message = map
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("Internal error")
                .to_string();

            let data = map.get("data").cloned();

            Self {
                code,
                message,
                data,
            }
        } else {
            Self {
                code: -32603,
                message: "Internal error".to_string(),
                data: None,
            }
        }
    }
}

/// JSON-RPC 2.0 request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC request with the given method and parameters
    pub fn new(method: String, params: Option<Value>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: Some(Value::String(uuid::Uuid::new_v4().to_string())),
            method,
            params,
        }
    }

    /// Create a new JSON-RPC request with the given method, parameters, and ID
    pub fn with_id(method: String, params: Option<Value>, id: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: Some(id),
            method,
            params,
        }
    }
}

/// JSON-RPC 2.0 response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Create a successful JSON-RPC response
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error JSON-RPC response
    pub fn error(id: Option<Value>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }

    /// The `result` payload, or the response error converted to [`A2uiError`]
    pub fn into_result(self) -> Result<Value, A2uiError> {
        if let Some(error) = self.error {
            return Err(A2uiError::JsonRpc {
                code: error.code,
                message: error.message,
                data: error.data,
            });
        }
        self.result
            .ok_or_else(|| A2uiError::InvalidAgentResponse("Empty response".to_string()))
    }
}
