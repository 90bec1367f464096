use serde_json::Value;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::domain::core::directive::A2uiMessage;
use crate::domain::core::message::A2UI_MIME_TYPE;

/// How agent responses are interpreted: as A2UI directives or as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    #[default]
    Ui,
    Text,
}

/// The canonical result of normalizing one agent response.
#[derive(Debug, Default)]
pub struct NormalizedResponse {
    /// A2UI directives extracted from data parts (UI mode)
    pub messages: Vec<A2uiMessage>,
    /// Surface ids named by `surfaceUpdate` directives, newly active
    pub new_surface_ids: Vec<String>,
    /// Joined display text (text mode)
    pub text: Option<String>,
}

impl NormalizedResponse {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.text.is_none()
    }
}

/// Normalize a raw JSON-RPC response into UI directives or display text.
///
/// Responses without the `result.status.message.parts` array normalize to
/// an empty result. Parts are classified per mode:
/// - UI mode: data parts whose metadata mime type is exactly
///   `application/json+a2ui` parse as one directive each; every
///   `surfaceUpdate.surfaceId` is recorded as newly active.
/// - Text mode: text parts that parse as JSON carrying a `surfaceUpdate`
///   key are suppressed; other JSON pretty-prints; non-JSON text passes
///   verbatim. Collected strings join with a blank line.
#[cfg_attr(feature = "tracing", instrument(skip(response)))]
pub fn normalize_response(response: &Value, mode: ResponseMode) -> NormalizedResponse {
    let mut normalized = NormalizedResponse::default();

    let Some(parts) = response
        .pointer("/result/status/message/parts")
        .and_then(Value::as_array)
    else {
        return normalized;
    };

    match mode {
        ResponseMode::Ui => {
            for part in parts {
                let Some(data) = part.get("data") else {
                    continue;
                };
                if part_mime_type(part) != Some(A2UI_MIME_TYPE) {
                    continue;
                }
                match A2uiMessage::from_value(data.clone()) {
                    Ok(message) => {
                        if let A2uiMessage::SurfaceUpdate(update) = &message {
                            normalized.new_surface_ids.push(update.surface_id.clone());
                        }
                        normalized.messages.push(message);
                    }
                    Err(_err) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(error = %_err, "skipping unparseable A2UI data part");
                    }
                }
            }
        }
        ResponseMode::Text => {
            let mut collected = Vec::new();
            for part in parts {
                let Some(text) = part.get("text").and_then(Value::as_str) else {
                    continue;
                };
                match serde_json::from_str::<Value>(text) {
                    Ok(parsed) => {
                        if parsed.get("surfaceUpdate").is_some() {
                            // UI payloads are suppressed in text mode
                            continue;
                        }
                        match serde_json::to_string_pretty(&parsed) {
                            Ok(pretty) => collected.push(pretty),
                            Err(_) => collected.push(text.to_string()),
                        }
                    }
                    Err(_) => collected.push(text.to_string()),
                }
            }
            if !collected.is_empty() {
                normalized.text = Some(collected.join("\n\n"));
            }
        }
    }

    normalized
}

fn part_mime_type(part: &Value) -> Option<&str> {
    part.pointer("/metadata/mimeType").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(parts: Value) -> Value {
        json!({"jsonrpc": "2.0", "result": {"status": {"message": {"parts": parts}}}})
    }

    #[test]
    fn test_ui_mode_requires_exact_mime_type() {
        let response = envelope(json!([
            {"kind": "data",
             "metadata": {"mimeType": "application/json+a2ui"},
             "data": {"surfaceUpdate": {"surfaceId": "s1", "components": []}}},
            {"kind": "data",
             "metadata": {"mimeType": "application/json"},
             "data": {"surfaceUpdate": {"surfaceId": "s2", "components": []}}}
        ]));

        let normalized = normalize_response(&response, ResponseMode::Ui);
        assert_eq!(normalized.messages.len(), 1);
        assert_eq!(normalized.new_surface_ids, vec!["s1".to_string()]);
    }

    #[test]
    fn test_text_mode_suppresses_surface_updates() {
        let response = envelope(json!([
            {"text": "{\"surfaceUpdate\":{}}"},
            {"text": "hello"}
        ]));

        let normalized = normalize_response(&response, ResponseMode::Text);
        assert_eq!(normalized.text.as_deref(), Some("hello"));
    }

    #[test]
    fn test_text_mode_pretty_prints_other_json() {
        let response = envelope(json!([{"text": "{\"answer\":42}"}]));
        let normalized = normalize_response(&response, ResponseMode::Text);
        assert!(normalized.text.unwrap().contains("\"answer\": 42"));
    }

    #[test]
    fn test_missing_parts_normalizes_empty() {
        let normalized = normalize_response(&json!({"result": {}}), ResponseMode::Ui);
        assert!(normalized.is_empty());
    }
}
