use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::core::directive::ComponentEntry;

/// A named, independently addressable UI subtree.
///
/// Surfaces are created and replaced by inbound update directives and
/// deleted by explicit delete directives. Component order within a surface
/// follows insertion order, which is the order the server declared them in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Surface {
    /// Root component id, set by `beginRendering`
    pub root: Option<String>,
    pub components: IndexMap<String, ComponentNode>,
}

impl Surface {
    /// Insert or replace components from a surface update
    pub fn apply_components(&mut self, entries: Vec<ComponentEntry>) {
        for entry in entries {
            if let Some(node) = ComponentNode::from_entry(entry) {
                self.components.insert(node.id.clone(), node);
            }
        }
    }

    pub fn component(&self, id: &str) -> Option<&ComponentNode> {
        self.components.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// One renderable node within a surface: a type tag plus a property map
/// whose values are literals or bindings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentNode {
    pub id: String,
    #[serde(rename = "type")]
    pub component_type: String,
    pub properties: Map<String, Value>,
}

impl ComponentNode {
    /// Flatten a wire component entry (`{id, component: {Type: props}}`)
    /// into a typed node. Entries without a type key or with a non-object
    /// payload yield `None`.
    pub fn from_entry(entry: ComponentEntry) -> Option<Self> {
        let (type_name, payload) = entry
            .component
            .into_iter()
            .next()
            .map(|(name, props)| (name, props))?;
        let properties = match payload {
            Value::Object(map) => map,
            _ => return None,
        };
        Some(Self {
            id: entry.id,
            component_type: type_name,
            properties,
        })
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

/// Whether a property value is a data-model binding (`{"path": "..."}`)
/// rather than an inline literal.
pub fn is_binding(value: &Value) -> bool {
    value
        .as_object()
        .map(|obj| obj.contains_key("path"))
        .unwrap_or(false)
}

/// The binding's path, if the value is a binding
pub fn binding_path(value: &Value) -> Option<&str> {
    value.as_object()?.get("path")?.as_str()
}
