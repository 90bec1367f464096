use thiserror::Error;

/// Standard JSON-RPC error codes
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

/// A2UI specific error codes (outside the reserved JSON-RPC range)
pub const INVALID_AGENT_RESPONSE: i32 = -32006;
pub const RENDERING_ERROR: i32 = -32050;

/// Error type for A2UI client operations
#[derive(Error, Debug)]
pub enum A2uiError {
    #[error("JSON-RPC error: {code} - {message}")]
    JsonRpc {
        code: i32,
        message: String,
        data: Option<serde_json::Value>,
    },

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Invalid agent response: {0}")]
    InvalidAgentResponse(String),

    /// Raw input carried none of the recognized A2UI directive keys
    #[error(
        "No A2UI data found. Expected surfaceUpdate, dataModelUpdate, or beginRendering in JSON"
    )]
    NoUiContent,

    /// Every component of a surface update was dropped by validation
    #[error("All components of surface \"{surface_id}\" were invalid ({dropped} dropped)")]
    EmptyComponents { surface_id: String, dropped: usize },

    #[error("Surface not found: {0}")]
    SurfaceNotFound(String),

    /// A visualization backend failed to construct its engine instance
    #[error("Rendering error: {message}")]
    Rendering { message: String, detail: String },

    #[error("Validation error in {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl A2uiError {
    /// Convert an A2uiError to a JSON-RPC error value
    pub fn to_jsonrpc_error(&self) -> serde_json::Value {
        let (code, message) = match self {
            A2uiError::JsonParse(_) => (PARSE_ERROR, "Invalid JSON payload"),
            A2uiError::InvalidRequest(_) => (INVALID_REQUEST, "Request payload validation error"),
            A2uiError::InvalidParams(_) => (INVALID_PARAMS, "Invalid parameters"),
            A2uiError::InvalidAgentResponse(_) => (INVALID_AGENT_RESPONSE, "Invalid agent response"),
            A2uiError::NoUiContent => (INVALID_AGENT_RESPONSE, "No A2UI content in payload"),
            A2uiError::EmptyComponents { .. } => (INVALID_PARAMS, "No valid components"),
            A2uiError::ValidationError { .. } => (INVALID_PARAMS, "Validation error"),
            A2uiError::Rendering { .. } => (RENDERING_ERROR, "Rendering error"),
            _ => (INTERNAL_ERROR, "Internal error"),
        };

        serde_json::json!({
            "code": code,
            "message": message,
            "data": null,
        })
    }
}
