//! Renderers projecting resolved component data onto visualization
//! engines.

pub mod chart;
pub mod knowledge_graph;

pub use chart::{
    build_config, to_item_sequence, ChartData, ChartRenderer, GraphProperties,
};
pub use knowledge_graph::{
    build_elements, KnowledgeGraphProperties, KnowledgeGraphRenderer, DEFAULT_LAYOUT,
    RELAYOUT_DELAY,
};
