//! Chart document builders.
//!
//! Converts detection results into the JSON documents the front-end
//! charting layer consumes: a force-directed CFG graph, a confidence
//! bar chart, and a tensor-operation heatmap.

pub mod confidence;
pub mod graph;
pub mod heatmap;
pub mod schema;

// Re-export main builder functions
pub use confidence::confidence_chart;
pub use graph::cfg_to_chart;
pub use heatmap::build_heatmap;
