use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::core::message::Part;

/// Semantic interaction names a graph component may declare in its
/// `emits` set. Events outside a component's declared set are never
/// dispatched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SemanticEventName {
    #[serde(rename = "graph.point.selected")]
    GraphPointSelected,
    #[serde(rename = "graph.range.selected")]
    GraphRangeSelected,
    #[serde(rename = "graph.dataset.filtered")]
    GraphDatasetFiltered,
}

/// A structured user-interaction notification sent back to the server,
/// distinct from raw input events. Constructed locally, never received
/// from the server unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticEvent {
    pub name: SemanticEventName,
    #[serde(rename = "sourceComponentId")]
    pub source_component_id: String,
    #[serde(rename = "surfaceId")]
    pub surface_id: String,
    pub timestamp: DateTime<Utc>,
    pub context: Value,
}

impl SemanticEvent {
    pub fn new(
        name: SemanticEventName,
        source_component_id: impl Into<String>,
        surface_id: impl Into<String>,
        context: Value,
    ) -> Self {
        Self {
            name,
            source_component_id: source_component_id.into(),
            surface_id: surface_id.into(),
            timestamp: Utc::now(),
            context,
        }
    }

    /// Wrap the event as the outbound part envelope: a data part whose
    /// metadata carries the A2UI mime type.
    pub fn into_part(self) -> Part {
        let data = match serde_json::to_value(&self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        Part::a2ui_data(data)
    }
}
