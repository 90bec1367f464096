use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::error::A2uiError;

/// An element of a knowledge-graph layout: a node or a connecting edge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GraphElement {
    Edge(EdgeElement),
    Node(NodeElement),
}

impl GraphElement {
    pub fn id(&self) -> &str {
        match self {
            GraphElement::Node(node) => &node.id,
            GraphElement::Edge(edge) => &edge.id,
        }
    }

    pub fn as_node(&self) -> Option<&NodeElement> {
        match self {
            GraphElement::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_edge(&self) -> Option<&EdgeElement> {
        match self {
            GraphElement::Edge(edge) => Some(edge),
            _ => None,
        }
    }

    /// The engine-native element shape: `{"data": {...}}`
    pub fn to_element_json(&self) -> Value {
        let data = match serde_json::to_value(self) {
            Ok(value) => value,
            Err(_) => Value::Null,
        };
        serde_json::json!({ "data": data })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeElement {
    pub id: String,
    pub label: String,
    /// The original item, kept for the inspection panel
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeElement {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub label: String,
}

/// A force/graph layout engine owned by the hosting component.
///
/// The engine is rebuilt from scratch on every property change. After a
/// mount, renderers request one deferred re-layout pass to correct the
/// sizing races of freshly attached containers.
pub trait GraphBackend {
    type Handle;

    /// Construct a layout instance from elements and a layout algorithm name
    fn mount(
        &mut self,
        elements: &[GraphElement],
        layout: &str,
    ) -> Result<Self::Handle, A2uiError>;

    /// Tear a layout instance down, releasing its resources
    fn destroy(&mut self, handle: Self::Handle);

    /// Run a fit-and-layout pass after `delay`
    fn schedule_relayout(&mut self, handle: &mut Self::Handle, delay: Duration);
}
