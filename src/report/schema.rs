//! Detection-report input schema.
//!
//! The report is the JSON hand-off from the detection pipeline:
//! recovered CFG, per-framework confidence scores, and tensor-operation
//! observations. Everything downstream is derived from this document.

use serde::{Deserialize, Serialize};

/// Top-level detection report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Binary the report was generated for
    pub binary: String,

    /// Total size of the binary image in bytes
    pub binary_size: i64,

    /// Recovered control-flow graph
    #[serde(default)]
    pub cfg: CfgSection,

    /// Per-framework confidence scores, in detection order
    #[serde(default)]
    pub scores: Vec<FrameworkScore>,

    /// Tensor-operation observations, grouped by operation type
    #[serde(default)]
    pub tensor_ops: Vec<OperationSites>,
}

/// CFG portion of the report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CfgSection {
    #[serde(default)]
    pub nodes: Vec<ReportNode>,

    #[serde(default)]
    pub edges: Vec<ReportEdge>,
}

/// A basic block as written by the detector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportNode {
    pub address: NodeAddress,

    /// Block type label; omitted means "basic_block"
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Disassembled instructions; omitted means empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<String>,
}

/// A control transfer as written by the detector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEdge {
    pub source: NodeAddress,
    pub target: NodeAddress,

    /// Edge type label; omitted means "flow"
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Block identity on the wire: integer address or symbolic label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeAddress {
    Address(u64),
    Label(String),
}

/// Confidence score for one framework
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkScore {
    pub framework: String,

    /// Conventionally in [0, 1]
    pub confidence: f64,
}

/// Observed locations for one tensor-operation type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationSites {
    pub operation: String,

    #[serde(default)]
    pub sites: Vec<Site>,
}

/// A single observation in the binary image
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Site {
    /// Signed on the wire so junk from foreign tools is rejected, not wrapped
    pub address: i64,

    /// Size of the matched region in bytes
    pub size: i64,
}
