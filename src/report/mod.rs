//! Detection-report loading and validation.
//!
//! Reports come from the detection pipeline (or third-party tooling
//! emitting the same shape), so structural typing alone is not enough:
//! a semantic pass rejects duplicate blocks, dangling edges, and empty
//! type labels before any chart is built.

pub mod schema;

use crate::cfg::{BasicBlock, BlockId, ControlFlowGraph};
use crate::utils::error::{CfgError, ParseError};
use log::debug;
use schema::{CfgSection, DetectionReport, NodeAddress};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

impl From<NodeAddress> for BlockId {
    fn from(address: NodeAddress) -> Self {
        match address {
            NodeAddress::Address(addr) => BlockId::Address(addr),
            NodeAddress::Label(label) => BlockId::Label(label),
        }
    }
}

/// Parse and validate a detection report from a JSON string.
///
/// **Public** - entry point for in-memory report data
///
/// # Errors
/// * `ParseError::JsonError` - document is not valid report JSON
/// * `ParseError::InvalidFormat` - duplicate block or dangling edge
/// * `ParseError::InvalidAttribute` - empty type label on a node or edge
pub fn parse_report(input: &str) -> Result<DetectionReport, ParseError> {
    let report: DetectionReport = serde_json::from_str(input)?;
    validate_report(&report)?;
    Ok(report)
}

/// Load and validate a detection report from a file.
///
/// **Public** - entry point used by the CLI commands
pub fn load_report(path: impl AsRef<Path>) -> Result<DetectionReport, ParseError> {
    let path = path.as_ref();

    debug!("Reading detection report from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let report = parse_report(&contents)?;

    debug!(
        "Report loaded: binary {}, {} blocks, {} operation types",
        report.binary,
        report.cfg.nodes.len(),
        report.tensor_ops.len()
    );

    Ok(report)
}

/// Rebuild the control-flow graph from the report's CFG section.
///
/// **Public** - bridges the wire format to the `cfg` model
///
/// # Errors
/// * `CfgError::DuplicateBlock` / `CfgError::UnknownBlock` - invariant
///   violations that slipped past validation (direct `CfgSection` use)
pub fn to_cfg(section: &CfgSection) -> Result<ControlFlowGraph, CfgError> {
    let mut cfg = ControlFlowGraph::new();

    for node in &section.nodes {
        let block = BasicBlock {
            id: node.address.clone().into(),
            kind: node.kind.clone(),
            instructions: node.instructions.clone(),
        };
        cfg.add_block(block)?;
    }

    for edge in &section.edges {
        cfg.add_edge(
            &edge.source.clone().into(),
            &edge.target.clone().into(),
            edge.kind.clone(),
        )?;
    }

    Ok(cfg)
}

/// Semantic validation pass over a structurally valid report.
///
/// **Private** - called by parse_report
fn validate_report(report: &DetectionReport) -> Result<(), ParseError> {
    let mut seen: HashSet<&NodeAddress> = HashSet::new();

    for node in &report.cfg.nodes {
        if !seen.insert(&node.address) {
            return Err(ParseError::InvalidFormat(format!(
                "duplicate block address: {}",
                BlockId::from(node.address.clone())
            )));
        }

        if let Some(kind) = &node.kind {
            if kind.is_empty() {
                return Err(ParseError::InvalidAttribute(format!(
                    "block {}: empty type label",
                    BlockId::from(node.address.clone())
                )));
            }
        }
    }

    for edge in &report.cfg.edges {
        for endpoint in [&edge.source, &edge.target] {
            if !seen.contains(endpoint) {
                return Err(ParseError::InvalidFormat(format!(
                    "edge references unknown block: {}",
                    BlockId::from(endpoint.clone())
                )));
            }
        }

        if let Some(kind) = &edge.kind {
            if kind.is_empty() {
                return Err(ParseError::InvalidAttribute(format!(
                    "edge {} -> {}: empty type label",
                    BlockId::from(edge.source.clone()),
                    BlockId::from(edge.target.clone())
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_REPORT: &str = r#"{
        "binary": "model_runner",
        "binary_size": 12288,
        "cfg": {
            "nodes": [
                {"address": 4096, "instructions": ["mov eax, 1"]},
                {"address": 4112, "type": "return_block", "instructions": ["ret"]}
            ],
            "edges": [
                {"source": 4096, "target": 4112}
            ]
        },
        "scores": [
            {"framework": "tensorflow", "confidence": 0.8}
        ],
        "tensor_ops": [
            {"operation": "matmul", "sites": [{"address": 4096, "size": 10}]}
        ]
    }"#;

    #[test]
    fn test_parse_minimal_report() {
        let report = parse_report(MINIMAL_REPORT).unwrap();

        assert_eq!(report.binary, "model_runner");
        assert_eq!(report.binary_size, 12288);
        assert_eq!(report.cfg.nodes.len(), 2);
        assert_eq!(report.cfg.edges.len(), 1);
        assert_eq!(report.scores[0].framework, "tensorflow");
        assert_eq!(report.tensor_ops[0].operation, "matmul");
    }

    #[test]
    fn test_parse_report_with_label_addresses() {
        let input = r#"{
            "binary": "a.out",
            "binary_size": 100,
            "cfg": {
                "nodes": [{"address": "entry"}, {"address": 64}],
                "edges": [{"source": "entry", "target": 64, "type": "call"}]
            }
        }"#;

        let report = parse_report(input).unwrap();
        let cfg = to_cfg(&report.cfg).unwrap();

        assert_eq!(cfg.node_count(), 2);
        assert_eq!(cfg.edge_count(), 1);
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let report = parse_report(r#"{"binary": "a.out", "binary_size": 64}"#).unwrap();

        assert!(report.cfg.nodes.is_empty());
        assert!(report.scores.is_empty());
        assert!(report.tensor_ops.is_empty());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = parse_report("{not json").unwrap_err();
        assert!(matches!(err, ParseError::JsonError(_)));
    }

    #[test]
    fn test_duplicate_block_rejected() {
        let input = r#"{
            "binary": "a.out",
            "binary_size": 100,
            "cfg": {"nodes": [{"address": 10}, {"address": 10}], "edges": []}
        }"#;

        let err = parse_report(input).unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
    }

    #[test]
    fn test_dangling_edge_rejected() {
        let input = r#"{
            "binary": "a.out",
            "binary_size": 100,
            "cfg": {"nodes": [{"address": 10}], "edges": [{"source": 10, "target": 99}]}
        }"#;

        let err = parse_report(input).unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
    }

    #[test]
    fn test_empty_type_label_rejected() {
        let input = r#"{
            "binary": "a.out",
            "binary_size": 100,
            "cfg": {"nodes": [{"address": 10, "type": ""}], "edges": []}
        }"#;

        let err = parse_report(input).unwrap_err();
        assert!(matches!(err, ParseError::InvalidAttribute(_)));
    }

    #[test]
    fn test_to_cfg_preserves_attributes() {
        let report = parse_report(MINIMAL_REPORT).unwrap();
        let cfg = to_cfg(&report.cfg).unwrap();

        assert_eq!(cfg.node_count(), 2);
        assert_eq!(cfg.edge_count(), 1);
    }
}
