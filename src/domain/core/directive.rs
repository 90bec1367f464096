use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::error::A2uiError;

/// Top-level keys a server-sent A2UI directive may carry.
pub const INBOUND_DIRECTIVE_KEYS: [&str; 3] =
    ["surfaceUpdate", "dataModelUpdate", "beginRendering"];

/// One A2UI directive, as carried in a data part or pasted raw.
///
/// The wire shape is a single-key object naming the directive
/// (`{"surfaceUpdate": {...}}`), which maps onto an externally tagged
/// enum. Servers send the first three variants; `deleteSurface` is also
/// produced locally when the client tears surfaces down.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum A2uiMessage {
    SurfaceUpdate(SurfaceUpdate),
    DataModelUpdate(DataModelUpdate),
    BeginRendering(BeginRendering),
    DeleteSurface(DeleteSurface),
}

impl A2uiMessage {
    /// Parse a directive from a raw JSON value
    pub fn from_value(value: Value) -> Result<Self, A2uiError> {
        Ok(serde_json::from_value(value)?)
    }

    /// The surface this directive addresses, if it names one
    pub fn surface_id(&self) -> Option<&str> {
        match self {
            A2uiMessage::SurfaceUpdate(update) => Some(&update.surface_id),
            A2uiMessage::DataModelUpdate(update) => update.surface_id.as_deref(),
            A2uiMessage::BeginRendering(begin) => Some(&begin.surface_id),
            A2uiMessage::DeleteSurface(delete) => Some(&delete.surface_id),
        }
    }

    /// Build the directive that deletes a surface
    pub fn delete_surface(surface_id: impl Into<String>) -> Self {
        A2uiMessage::DeleteSurface(DeleteSurface {
            surface_id: surface_id.into(),
        })
    }
}

/// Whether a raw JSON value looks like a server-sent A2UI directive
pub fn is_directive_value(value: &Value) -> bool {
    value
        .as_object()
        .map(|obj| INBOUND_DIRECTIVE_KEYS.iter().any(|key| obj.contains_key(*key)))
        .unwrap_or(false)
}

/// Creates or replaces components within a surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurfaceUpdate {
    #[serde(rename = "surfaceId")]
    pub surface_id: String,
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
}

/// One component declaration inside a surface update.
///
/// `component` maps a single type name to that component's property map,
/// e.g. `{"Graph": {"data": {"path": "/sales"}, "graphType": "bar"}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentEntry {
    pub id: String,
    pub component: Map<String, Value>,
}

impl ComponentEntry {
    /// The declared type name and its property map
    pub fn component_type(&self) -> Option<(&str, &Value)> {
        self.component
            .iter()
            .next()
            .map(|(name, props)| (name.as_str(), props))
    }
}

/// Validity check applied to raw component entries before rendering.
///
/// An entry survives only if it is an object with a non-empty `id`, a
/// non-empty `component` map, and a non-null payload under the component's
/// type key.
pub fn is_valid_component_entry(entry: &Value) -> bool {
    let Some(obj) = entry.as_object() else {
        return false;
    };
    match obj.get("id") {
        Some(Value::String(id)) if !id.is_empty() => {}
        _ => return false,
    }
    let Some(Value::Object(component)) = obj.get("component") else {
        return false;
    };
    let Some((_, payload)) = component.iter().next() else {
        return false;
    };
    !payload.is_null()
}

/// Writes contents into a surface's data model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataModelUpdate {
    #[serde(skip_serializing_if = "Option::is_none", rename = "surfaceId")]
    pub surface_id: Option<String>,
    /// Target location in the model; the root when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<Value>,
}

/// Marks a surface ready to render, optionally naming its root component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BeginRendering {
    #[serde(rename = "surfaceId")]
    pub surface_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
}

/// Removes a surface and its data model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteSurface {
    #[serde(rename = "surfaceId")]
    pub surface_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_directive_wire_shape() {
        let message = A2uiMessage::delete_surface("main");
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({"deleteSurface": {"surfaceId": "main"}})
        );
    }

    #[test]
    fn test_surface_update_parses() {
        let raw = json!({
            "surfaceUpdate": {
                "surfaceId": "dash",
                "components": [
                    {"id": "chart", "component": {"Graph": {"data": []}}}
                ]
            }
        });
        let message = A2uiMessage::from_value(raw).unwrap();
        let A2uiMessage::SurfaceUpdate(update) = message else {
            panic!("expected surface update");
        };
        assert_eq!(update.surface_id, "dash");
        assert_eq!(update.components[0].component_type().unwrap().0, "Graph");
    }

    #[test]
    fn test_component_entry_validity() {
        assert!(is_valid_component_entry(&json!({
            "id": "a", "component": {"Text": {"text": "hi"}}
        })));
        assert!(!is_valid_component_entry(&Value::Null));
        assert!(!is_valid_component_entry(&json!({"component": {"Text": {}}})));
        assert!(!is_valid_component_entry(&json!({"id": "a"})));
        assert!(!is_valid_component_entry(&json!({"id": "a", "component": {}})));
        assert!(!is_valid_component_entry(&json!({
            "id": "a", "component": {"Text": null}
        })));
    }
}
