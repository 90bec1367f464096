//! Port definitions at the rendering seam.
//!
//! The visualization engines (chart canvas, force-layout canvas) are
//! external collaborators; these traits are the contract the renderers
//! drive them through.

pub mod chart_backend;
pub mod graph_backend;

pub use chart_backend::{
    AxisOptions, AxisTitle, ChartBackend, ChartConfig, ChartDataBlock, ChartDataset, ChartKind,
    ChartOptions, InteractionOptions, LegendOptions, PluginOptions, ScaleOptions, TitleOptions,
    TooltipOptions, BACKGROUND_COLORS, BORDER_COLORS,
};
pub use graph_backend::{EdgeElement, GraphBackend, GraphElement, NodeElement};
