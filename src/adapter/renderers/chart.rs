use serde_json::Value;
use tokio::sync::mpsc;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::application::processor::MessageProcessor;
use crate::domain::core::event::{SemanticEvent, SemanticEventName};
use crate::domain::core::surface::ComponentNode;
use crate::domain::error::A2uiError;
use crate::port::chart_backend::{
    AxisOptions, AxisTitle, ChartBackend, ChartConfig, ChartDataBlock, ChartDataset, ChartKind,
    ChartOptions, InteractionOptions, LegendOptions, PluginOptions, ScaleOptions, TitleOptions,
    TooltipOptions, BACKGROUND_COLORS, BORDER_COLORS,
};

/// Declared properties of a `Graph` component.
///
/// Parsing is lenient the way the catalog describes the component: an
/// unknown `graphType` falls back to the default, unknown `emits` entries
/// are ignored, `interactive` defaults to true.
#[derive(Debug, Clone)]
pub struct GraphProperties {
    /// Raw data property: a binding or an inline literal
    pub data: Value,
    pub graph_type: ChartKind,
    pub interactive: bool,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub emits: Vec<SemanticEventName>,
}

impl GraphProperties {
    pub fn from_component(node: &ComponentNode) -> Self {
        let graph_type = node
            .property("graphType")
            .and_then(|v| serde_json::from_value::<ChartKind>(v.clone()).ok())
            .unwrap_or_default();
        let emits = node
            .property("emits")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(|name| {
                        serde_json::from_value::<SemanticEventName>(name.clone()).ok()
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            data: node.property("data").cloned().unwrap_or(Value::Null),
            graph_type,
            interactive: node
                .property("interactive")
                .and_then(Value::as_bool)
                .unwrap_or(true),
            title: string_property(node, "title"),
            x_label: string_property(node, "xLabel"),
            y_label: string_property(node, "yLabel"),
            emits,
        }
    }
}

fn string_property(node: &ComponentNode, name: &str) -> String {
    node.property(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Labels and values extracted from a resolved data array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<Value>,
    pub values: Vec<Value>,
}

impl ChartData {
    /// Normalize a resolved item sequence, in priority order:
    /// `{x, y}` pairs, then `{label, value}` pairs, then bare values with
    /// 1-based index labels.
    pub fn from_items(items: &[Value]) -> Self {
        let Some(first) = items.first() else {
            return Self::default();
        };

        if first.get("x").is_some() && first.get("y").is_some() {
            return Self {
                labels: items.iter().map(|d| field(d, "x")).collect(),
                values: items.iter().map(|d| field(d, "y")).collect(),
            };
        }

        if first.get("label").is_some() && first.get("value").is_some() {
            return Self {
                labels: items.iter().map(|d| field(d, "label")).collect(),
                values: items.iter().map(|d| field(d, "value")).collect(),
            };
        }

        Self {
            labels: (1..=items.len()).map(|i| Value::from(i as u64)).collect(),
            values: items.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn field(item: &Value, name: &str) -> Value {
    item.get(name).cloned().unwrap_or(Value::Null)
}

/// Coerce a resolved value into a chartable item sequence. Arrays pass
/// through; maps whose keys are all numeric strings yield their values in
/// key order; anything else is no data.
pub fn to_item_sequence(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        Value::Object(map) => {
            let mut entries: Vec<(usize, &Value)> = map
                .iter()
                .filter_map(|(k, v)| k.parse::<usize>().ok().map(|index| (index, v)))
                .collect();
            if entries.is_empty() || entries.len() != map.len() {
                return Vec::new();
            }
            entries.sort_by_key(|(index, _)| *index);
            entries.into_iter().map(|(_, v)| v.clone()).collect()
        }
        _ => Vec::new(),
    }
}

/// Build the engine configuration for one render pass.
pub fn build_config(props: &GraphProperties, data: &ChartData) -> ChartConfig {
    let colors = |set: [&str; 5]| set.iter().map(|c| c.to_string()).collect::<Vec<_>>();

    ChartConfig {
        kind: props.graph_type,
        data: ChartDataBlock {
            labels: data.labels.clone(),
            datasets: vec![ChartDataset {
                label: if props.title.is_empty() {
                    "Data".to_string()
                } else {
                    props.title.clone()
                },
                data: data.values.clone(),
                background_color: colors(BACKGROUND_COLORS),
                border_color: colors(BORDER_COLORS),
                border_width: 2,
                tension: 0.4,
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            interaction: InteractionOptions {
                mode: props.interactive.then(|| "index".to_string()),
                intersect: false,
            },
            plugins: PluginOptions {
                legend: LegendOptions {
                    display: true,
                    position: "top".to_string(),
                },
                title: TitleOptions {
                    display: !props.title.is_empty(),
                    text: props.title.clone(),
                },
                tooltip: TooltipOptions {
                    enabled: props.interactive,
                },
            },
            scales: ScaleOptions {
                x: AxisOptions {
                    display: true,
                    title: AxisTitle {
                        display: !props.x_label.is_empty(),
                        text: props.x_label.clone(),
                    },
                    begin_at_zero: None,
                },
                y: AxisOptions {
                    display: true,
                    title: AxisTitle {
                        display: !props.y_label.is_empty(),
                        text: props.y_label.clone(),
                    },
                    begin_at_zero: Some(true),
                },
            },
        },
    }
}

/// Hosts one chart engine instance for one `Graph` component.
///
/// Every render pass tears the previous engine down and mounts a fresh
/// one from the component's current resolved properties; there is no
/// incremental diffing.
pub struct ChartRenderer<B: ChartBackend> {
    backend: B,
    handle: Option<B::Handle>,
    surface_id: String,
    component_id: String,
    data: ChartData,
    title: String,
    emits: Vec<SemanticEventName>,
    events: mpsc::UnboundedSender<SemanticEvent>,
}

impl<B: ChartBackend> ChartRenderer<B> {
    pub fn new(
        backend: B,
        surface_id: impl Into<String>,
        component_id: impl Into<String>,
        events: mpsc::UnboundedSender<SemanticEvent>,
    ) -> Self {
        Self {
            backend,
            handle: None,
            surface_id: surface_id.into(),
            component_id: component_id.into(),
            data: ChartData::default(),
            title: String::new(),
            emits: Vec::new(),
            events,
        }
    }

    /// Rebuild the chart from the component's current properties.
    #[cfg_attr(feature = "tracing", instrument(skip(self, node, processor), fields(component = %self.component_id)))]
    pub fn render(
        &mut self,
        node: &ComponentNode,
        processor: &MessageProcessor,
    ) -> Result<(), A2uiError> {
        self.destroy();

        let props = GraphProperties::from_component(node);
        let items = processor
            .resolve_property(&self.surface_id, &props.data)
            .map(|resolved| to_item_sequence(&resolved))
            .unwrap_or_default();
        self.data = ChartData::from_items(&items);
        self.title = props.title.clone();
        self.emits = props.emits.clone();

        let config = build_config(&props, &self.data);
        self.handle = Some(self.backend.mount(&config)?);
        Ok(())
    }

    /// Tear down the engine instance, if one is mounted.
    pub fn destroy(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.backend.destroy(handle);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }

    /// Handle a click landing on data point `index`.
    ///
    /// Dispatches a `graph.point.selected` semantic event through the
    /// outbound channel iff the component declared that event in its emit
    /// set and the index hits a data point; every other click is ignored.
    /// Returns the dispatched event, if any.
    pub fn handle_click(&self, index: usize) -> Option<SemanticEvent> {
        if !self.emits.contains(&SemanticEventName::GraphPointSelected) {
            return None;
        }
        if index >= self.data.len() {
            return None;
        }

        let event = SemanticEvent::new(
            SemanticEventName::GraphPointSelected,
            self.component_id.clone(),
            self.surface_id.clone(),
            serde_json::json!({
                "label": self.data.labels.get(index).cloned().unwrap_or(Value::Null),
                "value": self.data.values[index].clone(),
                "index": index,
                "graphId": self.component_id,
                "title": self.title,
            }),
        );

        // A dropped receiver means no one is listening; the interaction
        // is still reported to the caller.
        let _ = self.events.send(event.clone());
        Some(event)
    }
}

impl<B: ChartBackend> Drop for ChartRenderer<B> {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_xy_pairs() {
        let items = vec![json!({"x": 1, "y": 10}), json!({"x": 2, "y": 20})];
        let data = ChartData::from_items(&items);
        assert_eq!(data.labels, vec![json!(1), json!(2)]);
        assert_eq!(data.values, vec![json!(10), json!(20)]);
    }

    #[test]
    fn test_label_value_pairs() {
        let items = vec![json!({"label": "A", "value": 5})];
        let data = ChartData::from_items(&items);
        assert_eq!(data.labels, vec![json!("A")]);
        assert_eq!(data.values, vec![json!(5)]);
    }

    #[test]
    fn test_bare_values_get_index_labels() {
        let items = vec![json!(3), json!(4), json!(5)];
        let data = ChartData::from_items(&items);
        assert_eq!(data.labels, vec![json!(1), json!(2), json!(3)]);
        assert_eq!(data.values, vec![json!(3), json!(4), json!(5)]);
    }

    #[test]
    fn test_numeric_key_map_becomes_sequence() {
        let value = json!({"1": {"x": 2, "y": 20}, "0": {"x": 1, "y": 10}});
        let items = to_item_sequence(&value);
        assert_eq!(items[0], json!({"x": 1, "y": 10}));
        assert_eq!(items[1], json!({"x": 2, "y": 20}));
    }

    #[test]
    fn test_config_reflects_interactivity() {
        let node = ComponentNode {
            id: "chart".to_string(),
            component_type: "Graph".to_string(),
            properties: json!({
                "graphType": "bar",
                "interactive": false,
                "title": "Sales",
                "xLabel": "Month",
            })
            .as_object()
            .cloned()
            .unwrap(),
        };
        let props = GraphProperties::from_component(&node);
        assert_eq!(props.graph_type, ChartKind::Bar);

        let config = build_config(&props, &ChartData::default());
        assert_eq!(config.options.interaction.mode, None);
        assert!(!config.options.plugins.tooltip.enabled);
        assert!(config.options.plugins.title.display);
        assert!(config.options.scales.x.title.display);
        assert!(!config.options.scales.y.title.display);
    }

    #[test]
    fn test_unknown_graph_type_falls_back_to_line() {
        let node = ComponentNode {
            id: "chart".to_string(),
            component_type: "Graph".to_string(),
            properties: json!({"graphType": "hexbin"}).as_object().cloned().unwrap(),
        };
        assert_eq!(
            GraphProperties::from_component(&node).graph_type,
            ChartKind::Line
        );
    }
}
