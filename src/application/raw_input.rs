use serde_json::Value;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::domain::core::directive::{is_directive_value, is_valid_component_entry, A2uiMessage};
use crate::domain::error::A2uiError;

/// The recognized shapes of pasted test input, tried in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawShape {
    /// A JSON array of A2UI directives
    MessageList,
    /// A single bare A2UI directive
    SingleMessage,
    /// A full JSON-RPC response: `result.status.message.parts[].data`
    RpcEnvelope,
    /// A captured response wrapped one level deeper:
    /// `data.result.status.message.parts[].data`
    WrappedEnvelope,
}

/// Parse raw pasted JSON into a list of validated A2UI directives.
///
/// Accepts the four shapes of [`RawShape`] with a fixed priority order;
/// the first shape that matches wins and no further probing happens.
/// Component lists inside `surfaceUpdate` directives are filtered before
/// parsing; a directive left with no valid components is rejected rather
/// than partially rendered.
#[cfg_attr(feature = "tracing", instrument(skip(input), fields(len = input.len())))]
pub fn parse_raw_messages(input: &str) -> Result<Vec<A2uiMessage>, A2uiError> {
    let parsed: Value = serde_json::from_str(input)?;

    let (shape, candidates) = classify(&parsed);
    #[cfg(feature = "tracing")]
    tracing::debug!(?shape, count = candidates.len(), "classified raw input");
    let _ = shape;

    if candidates.is_empty() {
        return Err(A2uiError::NoUiContent);
    }

    let mut messages = Vec::with_capacity(candidates.len());
    for mut candidate in candidates {
        filter_components(&mut candidate)?;
        messages.push(A2uiMessage::from_value(candidate)?);
    }
    Ok(messages)
}

/// Pick the input shape and collect directive candidates from it.
fn classify(parsed: &Value) -> (RawShape, Vec<Value>) {
    if let Some(items) = parsed.as_array() {
        let candidates = items
            .iter()
            .filter(|item| is_directive_value(item))
            .cloned()
            .collect();
        return (RawShape::MessageList, candidates);
    }

    if is_directive_value(parsed) {
        return (RawShape::SingleMessage, vec![parsed.clone()]);
    }

    if let Some(parts) = parsed
        .pointer("/result/status/message/parts")
        .and_then(Value::as_array)
    {
        return (RawShape::RpcEnvelope, directive_data(parts));
    }

    if let Some(parts) = parsed
        .pointer("/data/result/status/message/parts")
        .and_then(Value::as_array)
    {
        return (RawShape::WrappedEnvelope, directive_data(parts));
    }

    (RawShape::SingleMessage, Vec::new())
}

fn directive_data(parts: &[Value]) -> Vec<Value> {
    parts
        .iter()
        .filter_map(|part| part.get("data"))
        .filter(|data| is_directive_value(data))
        .cloned()
        .collect()
}

/// Filter invalid entries out of a directive's component list in place.
///
/// Errors when every entry was dropped: rendering an empty update would
/// silently discard the whole message.
fn filter_components(candidate: &mut Value) -> Result<(), A2uiError> {
    let Some(update) = candidate
        .get_mut("surfaceUpdate")
        .and_then(Value::as_object_mut)
    else {
        return Ok(());
    };
    let surface_id = update
        .get("surfaceId")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let Some(components) = update.get_mut("components").and_then(Value::as_array_mut) else {
        return Ok(());
    };

    let original = components.len();
    components.retain(is_valid_component_entry);
    let dropped = original - components.len();

    #[cfg(feature = "tracing")]
    if dropped > 0 {
        tracing::warn!(surface = %surface_id, dropped, "dropped invalid component entries");
    }

    if components.is_empty() {
        return Err(A2uiError::EmptyComponents {
            surface_id,
            dropped,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_message_and_array_forms() {
        let single = r#"{"surfaceUpdate": {"surfaceId": "s", "components": [
            {"id": "a", "component": {"Text": {"text": "hi"}}}
        ]}}"#;
        assert_eq!(parse_raw_messages(single).unwrap().len(), 1);

        let list = r#"[
            {"surfaceUpdate": {"surfaceId": "s", "components": [
                {"id": "a", "component": {"Text": {"text": "hi"}}}
            ]}},
            {"beginRendering": {"surfaceId": "s"}},
            {"unrelated": true}
        ]"#;
        assert_eq!(parse_raw_messages(list).unwrap().len(), 2);
    }

    #[test]
    fn test_envelope_forms() {
        let envelope = json!({
            "result": {"status": {"message": {"parts": [
                {"data": {"beginRendering": {"surfaceId": "s"}}},
                {"text": "ignored"}
            ]}}}
        });
        assert_eq!(parse_raw_messages(&envelope.to_string()).unwrap().len(), 1);

        let wrapped = json!({"data": envelope});
        assert_eq!(parse_raw_messages(&wrapped.to_string()).unwrap().len(), 1);
    }

    #[test]
    fn test_filtering_keeps_valid_entry() {
        let input = json!({"surfaceUpdate": {"surfaceId": "s", "components": [
            {"component": {"Text": {"text": "no id"}}},
            {"id": "ok", "component": {"Text": {"text": "kept"}}}
        ]}});
        let messages = parse_raw_messages(&input.to_string()).unwrap();
        let A2uiMessage::SurfaceUpdate(update) = &messages[0] else {
            panic!("expected surface update");
        };
        assert_eq!(update.components.len(), 1);
        assert_eq!(update.components[0].id, "ok");
    }

    #[test]
    fn test_all_invalid_components_rejected() {
        let input = json!({"surfaceUpdate": {"surfaceId": "s", "components": [
            {"component": {"Text": {"text": "no id"}}},
            {"id": "x", "component": {}}
        ]}});
        let err = parse_raw_messages(&input.to_string()).unwrap_err();
        assert!(matches!(err, A2uiError::EmptyComponents { dropped: 2, .. }));
    }

    #[test]
    fn test_no_ui_content_and_parse_errors() {
        assert!(matches!(
            parse_raw_messages("{\"other\": 1}"),
            Err(A2uiError::NoUiContent)
        ));
        assert!(matches!(
            parse_raw_messages("not json"),
            Err(A2uiError::JsonParse(_))
        ));
    }
}
