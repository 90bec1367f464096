use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::domain::core::message::Part;
use crate::domain::protocols::json_rpc::JsonRpcError;

/// Catalog ids this client declares in its capabilities metadata.
pub const STANDARD_CATALOG_ID: &str =
    "https://github.com/google/A2UI/blob/main/specification/0.8/json/standard_catalog_definition.json";

/// Request to send a task message (`tasks/send`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendTaskRequest {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub method: String,
    pub params: TaskSendParams,
}

impl SendTaskRequest {
    pub fn new(params: TaskSendParams) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: Some(Value::String(format!("req-{}", Uuid::new_v4()))),
            method: "tasks/send".to_string(),
            params,
        }
    }
}

/// Parameters of a `tasks/send` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSendParams {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none", rename = "sessionId")]
    pub session_id: Option<String>,
    pub message: OutboundMessage,
}

impl TaskSendParams {
    /// Build params for a fresh user message with generated message and
    /// session ids.
    pub fn for_user_parts(parts: Vec<Part>, metadata: Option<Map<String, Value>>) -> Self {
        Self {
            id: format!("msg-{}", Uuid::new_v4()),
            session_id: Some(format!("sess-{}", Uuid::new_v4())),
            message: OutboundMessage::user(parts, metadata),
        }
    }
}

/// The user message as serialized on the outbound wire.
///
/// Parts go out in the legacy `type`-tagged shape the server expects,
/// converted from the client's `kind`-tagged [`Part`] model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub role: String,
    pub parts: Vec<WirePart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl OutboundMessage {
    pub fn user(parts: Vec<Part>, metadata: Option<Map<String, Value>>) -> Self {
        Self {
            role: "user".to_string(),
            parts: parts.into_iter().map(WirePart::from).collect(),
            metadata,
        }
    }
}

/// One outbound part in legacy wire form: `{type, text?, data?, metadata}`.
/// `metadata` serializes explicitly (null when absent), matching the
/// server's expected shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WirePart {
    #[serde(rename = "type")]
    pub part_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    pub metadata: Option<Map<String, Value>>,
}

impl From<Part> for WirePart {
    fn from(part: Part) -> Self {
        match part {
            Part::Text { text, metadata } => Self {
                part_type: "text".to_string(),
                text: Some(text),
                data: None,
                metadata,
            },
            Part::Data { data, metadata } => Self {
                part_type: "data".to_string(),
                text: None,
                data: Some(data),
                metadata,
            },
            Part::File { file, metadata } => Self {
                part_type: "file".to_string(),
                text: None,
                data: serde_json::to_value(&file)
                    .ok()
                    .and_then(|v| v.as_object().cloned()),
                metadata,
            },
        }
    }
}

/// Response to a `tasks/send` request. The result is kept raw: the
/// normalizer consumes the whole response envelope as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendTaskResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// Metadata advertising the catalogs this client can render
pub fn client_capabilities_metadata() -> Map<String, Value> {
    let mut metadata = Map::new();
    metadata.insert(
        "a2uiClientCapabilities".to_string(),
        serde_json::json!({ "supportedCatalogIds": [STANDARD_CATALOG_ID] }),
    );
    metadata
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let request = SendTaskRequest::new(TaskSendParams::for_user_parts(
            vec![Part::text("show sales".to_string())],
            Some(client_capabilities_metadata()),
        ));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["jsonrpc"], json!("2.0"));
        assert_eq!(value["method"], json!("tasks/send"));
        assert!(value["id"].as_str().unwrap().starts_with("req-"));
        assert!(value["params"]["id"].as_str().unwrap().starts_with("msg-"));
        assert!(value["params"]["sessionId"]
            .as_str()
            .unwrap()
            .starts_with("sess-"));
        assert_eq!(value["params"]["message"]["role"], json!("user"));

        let part = &value["params"]["message"]["parts"][0];
        assert_eq!(part["type"], json!("text"));
        assert_eq!(part["text"], json!("show sales"));
        assert_eq!(part["metadata"], Value::Null);

        assert_eq!(
            value["params"]["message"]["metadata"]["a2uiClientCapabilities"]
                ["supportedCatalogIds"][0],
            json!(STANDARD_CATALOG_ID)
        );
    }

    #[test]
    fn test_data_part_keeps_payload() {
        let mut data = Map::new();
        data.insert("name".to_string(), json!("graph.point.selected"));
        let wire = WirePart::from(Part::a2ui_data(data));

        assert_eq!(wire.part_type, "data");
        assert_eq!(wire.data.unwrap()["name"], json!("graph.point.selected"));
        assert_eq!(
            wire.metadata.unwrap()["mimeType"],
            json!("application/json+a2ui")
        );
    }
}
