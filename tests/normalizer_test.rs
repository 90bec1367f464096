//! Response normalization across modes, and the raw-input entry point

use a2ui_client::{
    normalize_response, parse_raw_messages, A2uiError, A2uiMessage, ResponseMode,
};
use serde_json::{json, Value};

fn rpc_response(parts: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": "req-1",
        "result": {
            "id": "task-1",
            "status": {
                "state": "completed",
                "message": {
                    "role": "agent",
                    "parts": parts
                }
            }
        }
    })
}

#[test]
fn test_ui_mode_extracts_tagged_data_parts() {
    let response = rpc_response(json!([
        {"kind": "text", "text": "Here is your dashboard"},
        {
            "kind": "data",
            "metadata": {"mimeType": "application/json+a2ui"},
            "data": {"surfaceUpdate": {"surfaceId": "dash", "components": [
                {"id": "c1", "component": {"Text": {"text": "Sales"}}}
            ]}}
        },
        {
            "kind": "data",
            "metadata": {"mimeType": "application/json+a2ui"},
            "data": {"beginRendering": {"surfaceId": "dash", "root": "c1"}}
        }
    ]));

    let normalized = normalize_response(&response, ResponseMode::Ui);
    assert_eq!(normalized.messages.len(), 2);
    assert_eq!(normalized.new_surface_ids, vec!["dash".to_string()]);
    assert!(normalized.text.is_none());
}

#[test]
fn test_ui_mode_ignores_untagged_data_parts() {
    let response = rpc_response(json!([
        {"kind": "data", "data": {"surfaceUpdate": {"surfaceId": "dash", "components": []}}}
    ]));
    let normalized = normalize_response(&response, ResponseMode::Ui);
    assert!(normalized.is_empty());
}

#[test]
fn test_text_mode_suppresses_ui_payloads_and_keeps_text() {
    let response = rpc_response(json!([
        {"kind": "text", "text": "{\"surfaceUpdate\":{}}"},
        {"kind": "text", "text": "hello"},
        {"kind": "text", "text": "{\"total\": 7}"}
    ]));

    let normalized = normalize_response(&response, ResponseMode::Text);
    let text = normalized.text.unwrap();
    let blocks: Vec<&str> = text.split("\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0], "hello");
    assert!(blocks[1].contains("\"total\": 7"));
}

#[test]
fn test_raw_input_priority_order() {
    // An array wins over envelope probing even when members nest further
    let list = json!([
        {"beginRendering": {"surfaceId": "a"}},
        {"dataModelUpdate": {"surfaceId": "a", "path": "/x", "contents": {"valueNumber": 1}}}
    ]);
    let messages = parse_raw_messages(&list.to_string()).unwrap();
    assert_eq!(messages.len(), 2);
    assert!(matches!(messages[0], A2uiMessage::BeginRendering(_)));
    assert!(matches!(messages[1], A2uiMessage::DataModelUpdate(_)));
}

#[test]
fn test_raw_input_wrapped_envelopes() {
    let envelope = rpc_response(json!([
        {"kind": "data",
         "metadata": {"mimeType": "application/json+a2ui"},
         "data": {"surfaceUpdate": {"surfaceId": "s", "components": [
            {"id": "c", "component": {"Card": {"children": []}}}
         ]}}}
    ]));

    let direct = parse_raw_messages(&envelope.to_string()).unwrap();
    assert_eq!(direct.len(), 1);

    let wrapped = json!({"data": envelope});
    let nested = parse_raw_messages(&wrapped.to_string()).unwrap();
    assert_eq!(nested.len(), 1);
}

#[test]
fn test_component_filtering_retains_only_valid_entries() {
    let input = json!({"surfaceUpdate": {"surfaceId": "s", "components": [
        null,
        {"component": {"Text": {"text": "missing id"}}},
        {"id": "no-component"},
        {"id": "empty", "component": {}},
        {"id": "null-type", "component": {"Card": null}},
        {"id": "valid", "component": {"Text": {"text": "kept"}}}
    ]}});

    let messages = parse_raw_messages(&input.to_string()).unwrap();
    let A2uiMessage::SurfaceUpdate(update) = &messages[0] else {
        panic!("expected a surface update");
    };
    assert_eq!(update.components.len(), 1);
    assert_eq!(update.components[0].id, "valid");
}

#[test]
fn test_all_components_invalid_is_rejected() {
    let input = json!({"surfaceUpdate": {"surfaceId": "s", "components": [
        {"component": {"Text": {}}}
    ]}});
    assert!(matches!(
        parse_raw_messages(&input.to_string()),
        Err(A2uiError::EmptyComponents { .. })
    ));
}

#[test]
fn test_malformed_and_unrecognized_inputs() {
    assert!(matches!(
        parse_raw_messages("{not json"),
        Err(A2uiError::JsonParse(_))
    ));
    assert!(matches!(
        parse_raw_messages("{\"something\": \"else\"}"),
        Err(A2uiError::NoUiContent)
    ));
}
