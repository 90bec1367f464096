use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::domain::error::A2uiError;

/// Mime type marking a data part as an A2UI payload.
pub const A2UI_MIME_TYPE: &str = "application/json+a2ui";

/// Extension URI advertised to servers when UI mode is active.
pub const A2UI_EXTENSION_URI: &str = "https://a2ui.org/a2a-extension/a2ui/v0.8";

/// Roles in agent communication (user or agent).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Agent,
}

/// File content representation supporting both embedded data and URIs.
///
/// Files can be represented either as base64-encoded embedded data
/// or as URIs pointing to external resources. The implementation
/// validates that exactly one of `bytes` or `uri` is provided.
#[derive(Debug, Clone, Serialize)]
pub struct FileContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "mimeType")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<String>, // Base64 encoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

// Custom FileContent deserializer that validates the content
// during deserialization
impl<'de> Deserialize<'de> for FileContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct FileContentHelper {
            name: Option<String>,
            #[serde(rename = "mimeType")]
            mime_type: Option<String>,
            bytes: Option<String>,
            uri: Option<String>,
        }

        let helper = FileContentHelper::deserialize(deserializer)?;

        let file_content = FileContent {
            name: helper.name,
            mime_type: helper.mime_type,
            bytes: helper.bytes,
            uri: helper.uri,
        };

        match file_content.validate() {
            Ok(_) => Ok(file_content),
            Err(err) => Err(serde::de::Error::custom(format!(
                "FileContent validation error: {}",
                err
            ))),
        }
    }
}

impl FileContent {
    /// Validates that the file content is properly specified
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(
        file.name = ?self.name,
        file.has_bytes = self.bytes.is_some(),
        file.has_uri = self.uri.is_some()
    )))]
    pub fn validate(&self) -> Result<(), A2uiError> {
        match (&self.bytes, &self.uri) {
            (Some(_), None) | (None, Some(_)) => Ok(()),
            (Some(_), Some(_)) => Err(A2uiError::InvalidParams(
                "Cannot provide both bytes and uri".to_string(),
            )),
            (None, None) => Err(A2uiError::InvalidParams(
                "Must provide either bytes or uri".to_string(),
            )),
        }
    }
}

/// Parts that can make up a message (text, file, or structured data).
///
/// Inbound agent responses and outbound user messages are both built from
/// parts. A data part whose metadata declares the [`A2UI_MIME_TYPE`] mime
/// type carries one A2UI directive and is routed to the surface store; all
/// other parts are plain conversational content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Part {
    #[serde(rename = "text")]
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        metadata: Option<Map<String, Value>>,
    },
    #[serde(rename = "file")]
    File {
        file: FileContent,
        #[serde(skip_serializing_if = "Option::is_none")]
        metadata: Option<Map<String, Value>>,
    },
    #[serde(rename = "data")]
    Data {
        data: Map<String, Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        metadata: Option<Map<String, Value>>,
    },
}

impl Part {
    /// Create a text part
    pub fn text(content: String) -> Self {
        Part::Text {
            text: content,
            metadata: None,
        }
    }

    /// Create a data part
    pub fn data(data: Map<String, Value>) -> Self {
        Part::Data {
            data,
            metadata: None,
        }
    }

    /// Create a data part tagged with the A2UI mime type
    pub fn a2ui_data(data: Map<String, Value>) -> Self {
        let mut metadata = Map::new();
        metadata.insert(
            "mimeType".to_string(),
            Value::String(A2UI_MIME_TYPE.to_string()),
        );
        Part::Data {
            data,
            metadata: Some(metadata),
        }
    }

    /// The part's metadata map, if any
    pub fn metadata(&self) -> Option<&Map<String, Value>> {
        match self {
            Part::Text { metadata, .. }
            | Part::File { metadata, .. }
            | Part::Data { metadata, .. } => metadata.as_ref(),
        }
    }

    /// The `mimeType` declared in the part's metadata, if any
    pub fn mime_type(&self) -> Option<&str> {
        self.metadata()
            .and_then(|m| m.get("mimeType"))
            .and_then(Value::as_str)
    }

    /// Whether this part is a data part carrying an A2UI directive
    pub fn is_a2ui_payload(&self) -> bool {
        matches!(self, Part::Data { .. }) && self.mime_type() == Some(A2UI_MIME_TYPE)
    }

    /// The text content if this is a text part
    pub fn get_text(&self) -> Option<&str> {
        match self {
            Part::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// The data payload if this is a data part
    pub fn get_data(&self) -> Option<&Map<String, Value>> {
        match self {
            Part::Data { data, .. } => Some(data),
            _ => None,
        }
    }
}

/// A message exchanged with the agent, containing parts and metadata.
///
/// # Example
/// ```rust
/// use a2ui_client::{Message, Role, Part};
///
/// let message = Message::builder()
///     .role(Role::User)
///     .parts(vec![Part::text("Hello, agent!".to_string())])
///     .message_id("msg-123".to_string())
///     .build();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
pub struct Message {
    pub role: Role,
    #[builder(default = Vec::new())]
    pub parts: Vec<Part>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "messageId")]
    pub message_id: Option<String>,
}

impl Message {
    /// Create a new user message with a single text part
    pub fn user_text(text: String, message_id: String) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part::text(text)],
            metadata: None,
            message_id: Some(message_id),
        }
    }

    /// Create a new user message from pre-built parts
    pub fn user_parts(parts: Vec<Part>, message_id: String) -> Self {
        Self {
            role: Role::User,
            parts,
            metadata: None,
            message_id: Some(message_id),
        }
    }

    /// Validate a message (useful after building with builder)
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(
        message.role = ?self.role,
        message.parts_count = self.parts.len(),
    )))]
    pub fn validate(&self) -> Result<(), A2uiError> {
        if self.parts.is_empty() {
            return Err(A2uiError::ValidationError {
                field: "message.parts".to_string(),
                message: "Message must contain at least one part".to_string(),
            });
        }

        for part in &self.parts {
            if let Part::File { file, .. } = part {
                file.validate()?;
            }
        }

        Ok(())
    }
}
