use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::error::A2uiError;

/// Chart kinds a graph component may request. Unknown kinds fall back to
/// the default at property-parse time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Pie,
    Doughnut,
    Radar,
    #[serde(rename = "polarArea")]
    PolarArea,
}

/// Dataset color cycle applied to every chart.
pub const BACKGROUND_COLORS: [&str; 5] = [
    "rgba(102, 126, 234, 0.5)",
    "rgba(118, 75, 162, 0.5)",
    "rgba(237, 100, 166, 0.5)",
    "rgba(255, 154, 0, 0.5)",
    "rgba(52, 211, 153, 0.5)",
];

pub const BORDER_COLORS: [&str; 5] = [
    "rgba(102, 126, 234, 1)",
    "rgba(118, 75, 162, 1)",
    "rgba(237, 100, 166, 1)",
    "rgba(255, 154, 0, 1)",
    "rgba(52, 211, 153, 1)",
];

/// Complete configuration handed to a chart engine. Serializes to the
/// engine's native `{type, data, options}` shape.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartDataBlock,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartDataBlock {
    pub labels: Vec<Value>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<Value>,
    #[serde(rename = "backgroundColor")]
    pub background_color: Vec<String>,
    #[serde(rename = "borderColor")]
    pub border_color: Vec<String>,
    #[serde(rename = "borderWidth")]
    pub border_width: u32,
    /// Line smoothing for line charts
    pub tension: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartOptions {
    pub responsive: bool,
    #[serde(rename = "maintainAspectRatio")]
    pub maintain_aspect_ratio: bool,
    pub interaction: InteractionOptions,
    pub plugins: PluginOptions,
    pub scales: ScaleOptions,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InteractionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    pub intersect: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PluginOptions {
    pub legend: LegendOptions,
    pub title: TitleOptions,
    pub tooltip: TooltipOptions,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LegendOptions {
    pub display: bool,
    pub position: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TitleOptions {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TooltipOptions {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScaleOptions {
    pub x: AxisOptions,
    pub y: AxisOptions,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AxisOptions {
    pub display: bool,
    pub title: AxisTitle,
    #[serde(skip_serializing_if = "Option::is_none", rename = "beginAtZero")]
    pub begin_at_zero: Option<bool>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

/// A chart engine owned by the hosting component.
///
/// Handles are exclusively owned: the renderer destroys the previous
/// handle before mounting a replacement, and on component teardown.
pub trait ChartBackend {
    type Handle;

    /// Construct an engine instance for the given configuration
    fn mount(&mut self, config: &ChartConfig) -> Result<Self::Handle, A2uiError>;

    /// Tear an engine instance down, releasing its resources
    fn destroy(&mut self, handle: Self::Handle);
}
