use std::time::Duration;

use serde_json::{Map, Value};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::application::processor::MessageProcessor;
use crate::domain::core::surface::ComponentNode;
use crate::domain::error::A2uiError;
use crate::port::graph_backend::{EdgeElement, GraphBackend, GraphElement, NodeElement};

/// Delay before the post-mount re-layout pass that corrects container
/// sizing races.
pub const RELAYOUT_DELAY: Duration = Duration::from_millis(100);

pub const DEFAULT_LAYOUT: &str = "grid";

/// Declared properties of a `KnowledgeGraph` component.
#[derive(Debug, Clone)]
pub struct KnowledgeGraphProperties {
    pub data: Value,
    pub layout: String,
    pub title: String,
}

impl KnowledgeGraphProperties {
    pub fn from_component(node: &ComponentNode) -> Self {
        Self {
            data: node.property("data").cloned().unwrap_or(Value::Null),
            layout: node
                .property("layout")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_LAYOUT)
                .to_string(),
            title: node
                .property("title")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// Build layout elements from resolved graph data.
///
/// Accepts a sequence or a map. Maps contribute their `nodes` and `edges`
/// collections; a map with neither, whose keys are all numeric strings,
/// is an implicit sequence. Items carrying both `source` and `target`
/// become edges; everything else becomes a node.
pub fn build_elements(data: &Value) -> Vec<GraphElement> {
    let mut items: Vec<Value> = Vec::new();

    match data {
        Value::Array(seq) => items.extend(seq.iter().cloned()),
        Value::Object(map) => {
            if let Some(nodes) = map.get("nodes").and_then(Value::as_array) {
                items.extend(nodes.iter().cloned());
            }
            if let Some(edges) = map.get("edges").and_then(Value::as_array) {
                items.extend(edges.iter().cloned());
            }
            if items.is_empty() {
                if let Some(values) = numeric_keyed_values(map) {
                    items = values;
                }
            }
        }
        _ => {}
    }

    let mut elements = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if item.is_null() {
            continue;
        }

        let source = item.get("source").and_then(id_string);
        let target = item.get("target").and_then(id_string);
        if let (Some(source), Some(target)) = (source, target) {
            elements.push(GraphElement::Edge(EdgeElement {
                id: item
                    .get("id")
                    .and_then(id_string)
                    .unwrap_or_else(|| format!("e-{}-{}", source, target)),
                source,
                target,
                label: item
                    .get("label")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            }));
            continue;
        }

        let id = item
            .get("id")
            .and_then(id_string)
            .or_else(|| item.get("name").and_then(id_string))
            .unwrap_or_else(|| format!("n{}", index));
        let label = ["label", "name", "id"]
            .iter()
            .find_map(|key| item.get(key).and_then(id_string))
            .unwrap_or_else(|| "Node".to_string());
        elements.push(GraphElement::Node(NodeElement {
            id,
            label,
            properties: item.as_object().cloned().unwrap_or_default(),
        }));
    }

    elements
}

/// Values of a map whose keys are all numeric strings, in index order
fn numeric_keyed_values(map: &Map<String, Value>) -> Option<Vec<Value>> {
    if map.is_empty() {
        return None;
    }
    let mut entries: Vec<(usize, &Value)> = Vec::with_capacity(map.len());
    for (key, value) in map {
        entries.push((key.parse::<usize>().ok()?, value));
    }
    entries.sort_by_key(|(index, _)| *index);
    Some(entries.into_iter().map(|(_, v)| v.clone()).collect())
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Hosts one layout-engine instance for one `KnowledgeGraph` component.
///
/// Rebuilt on every property change (destroy + recreate), followed by one
/// deferred re-layout pass. Tracks node selection for the inspection
/// panel.
pub struct KnowledgeGraphRenderer<B: GraphBackend> {
    backend: B,
    handle: Option<B::Handle>,
    surface_id: String,
    component_id: String,
    title: String,
    elements: Vec<GraphElement>,
    selected: Option<String>,
}

impl<B: GraphBackend> KnowledgeGraphRenderer<B> {
    pub fn new(
        backend: B,
        surface_id: impl Into<String>,
        component_id: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            handle: None,
            surface_id: surface_id.into(),
            component_id: component_id.into(),
            title: String::new(),
            elements: Vec::new(),
            selected: None,
        }
    }

    /// Rebuild the layout from the component's current properties.
    #[cfg_attr(feature = "tracing", instrument(skip(self, node, processor), fields(component = %self.component_id)))]
    pub fn render(
        &mut self,
        node: &ComponentNode,
        processor: &MessageProcessor,
    ) -> Result<(), A2uiError> {
        self.destroy();
        self.selected = None;

        let props = KnowledgeGraphProperties::from_component(node);
        self.title = props.title.clone();
        self.elements = processor
            .resolve_property(&self.surface_id, &props.data)
            .map(|resolved| build_elements(&resolved))
            .unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::debug!(elements = self.elements.len(), layout = %props.layout, "mounting graph");

        let mut handle = self.backend.mount(&self.elements, &props.layout)?;
        self.backend.schedule_relayout(&mut handle, RELAYOUT_DELAY);
        self.handle = Some(handle);
        Ok(())
    }

    pub fn destroy(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.backend.destroy(handle);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn elements(&self) -> &[GraphElement] {
        &self.elements
    }

    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    pub fn component_id(&self) -> &str {
        &self.component_id
    }

    /// Select a node by id, returning its properties as display rows for
    /// the side panel. Unknown ids leave the selection unchanged.
    pub fn select_node(&mut self, id: &str) -> Option<Vec<(String, String)>> {
        let node = self
            .elements
            .iter()
            .filter_map(GraphElement::as_node)
            .find(|node| node.id == id)?;

        let rows = node
            .properties
            .iter()
            .map(|(key, value)| (key.clone(), display_value(value)))
            .collect();
        self.selected = Some(id.to_string());
        Some(rows)
    }

    /// Clear the selection (empty-canvas tap)
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

impl<B: GraphBackend> Drop for KnowledgeGraphRenderer<B> {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Render a property value as a panel row: scalars verbatim, containers
/// as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Number(_) | Value::Bool(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nodes_and_edges_collections() {
        let data = json!({
            "nodes": [{"id": "a"}],
            "edges": [{"source": "a", "target": "b"}]
        });
        let elements = build_elements(&data);
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].as_node().unwrap().id, "a");
        let edge = elements[1].as_edge().unwrap();
        assert_eq!(edge.id, "e-a-b");
        assert_eq!(edge.source, "a");
        assert_eq!(edge.target, "b");
    }

    #[test]
    fn test_numeric_keyed_map_is_implicit_sequence() {
        let data = json!({
            "0": {"name": "alpha"},
            "1": {"source": "alpha", "target": "beta", "label": "links"}
        });
        let elements = build_elements(&data);
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].as_node().unwrap().label, "alpha");
        assert_eq!(elements[1].as_edge().unwrap().label, "links");
    }

    #[test]
    fn test_node_defaults() {
        let elements = build_elements(&json!([{}, {"label": "Named"}]));
        assert_eq!(elements[0].as_node().unwrap().id, "n0");
        assert_eq!(elements[0].as_node().unwrap().label, "Node");
        assert_eq!(elements[1].as_node().unwrap().label, "Named");
    }

    #[test]
    fn test_null_items_skipped() {
        let elements = build_elements(&json!([null, {"id": "a"}]));
        assert_eq!(elements.len(), 1);
    }
}
