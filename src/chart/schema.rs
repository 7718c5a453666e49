//! Chart document schema definitions.
//!
//! This module defines the structure of the JSON documents consumed by
//! the front-end charting layer. Field names follow its conventions
//! (`xAxis`, `yAxis`, `binSize`, ...), so the wire shapes are fixed.

use serde::{Deserialize, Serialize};

/// Force-directed graph document for CFG rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDoc {
    /// Blocks, relabeled with dense 0-based ids in insertion order
    pub nodes: Vec<GraphNode>,

    /// Control transfers, referencing nodes by their dense id
    pub links: Vec<GraphLink>,
}

/// A single block in the graph document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    /// Dense 0-based index assigned in graph insertion order
    pub id: usize,

    /// Display form of the block identity (lowercase hex for addresses)
    pub address: String,

    /// Block type label
    #[serde(rename = "type")]
    pub kind: String,

    /// Number of instructions in the block
    pub size: usize,
}

/// A single control transfer in the graph document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: usize,
    pub target: usize,

    /// Edge type label
    #[serde(rename = "type")]
    pub kind: String,
}

/// Bar chart of per-framework detection confidence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceChart {
    /// Always "bar"
    #[serde(rename = "type")]
    pub chart_type: String,

    /// One entry per framework, in input order
    pub data: Vec<ConfidenceEntry>,

    pub config: ConfidenceConfig,
}

/// A single framework's confidence, as a percentage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceEntry {
    pub framework: String,

    /// Confidence scaled to [0, 100]
    pub confidence: f64,
}

/// Axis configuration for the confidence chart
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceConfig {
    pub x_axis: String,
    pub y_axis: String,
    pub y_format: String,
}

/// Heatmap of tensor-operation density across the binary image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapDoc {
    /// Always "heatmap"
    #[serde(rename = "type")]
    pub chart_type: String,

    /// One row per operation type, in input order
    pub data: Vec<HeatmapSeries>,

    pub config: HeatmapConfig,
}

/// Per-bin observation counts for one operation type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapSeries {
    pub operation: String,

    /// Exactly `totalBins` counts; their sum equals the observation count
    pub distribution: Vec<u64>,
}

/// Axis and bin configuration for the heatmap
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapConfig {
    pub x_axis: String,
    pub y_axis: String,

    /// Bin width in bytes (real-valued, binary size need not divide evenly)
    pub bin_size: f64,

    pub total_bins: usize,
}
