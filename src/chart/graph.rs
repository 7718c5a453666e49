//! CFG to graph-document conversion.

use crate::cfg::ControlFlowGraph;
use crate::chart::schema::{GraphDoc, GraphLink, GraphNode};
use crate::utils::config::{DEFAULT_EDGE_KIND, DEFAULT_NODE_KIND};
use log::debug;
use petgraph::graph::NodeIndex;
use std::collections::HashMap;

/// Convert a control-flow graph into the force-directed graph document.
///
/// **Public** - main entry point for graph formatting
///
/// Blocks are relabeled with dense 0-based ids in insertion order;
/// addresses render as lowercase hex, symbolic labels as-is. Missing
/// type labels fall back to "basic_block" for blocks and "flow" for
/// edges. An empty graph yields empty `nodes` and `links`.
///
/// # Example
/// ```ignore
/// let doc = cfg_to_chart(&cfg);
/// write_json(&doc, "cfg.json")?;
/// ```
pub fn cfg_to_chart(cfg: &ControlFlowGraph) -> GraphDoc {
    let graph = cfg.graph();

    debug!(
        "Formatting CFG: {} blocks, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    // Dense relabeling for index-based node references
    let node_ids: HashMap<NodeIndex, usize> = graph
        .node_indices()
        .enumerate()
        .map(|(id, node_idx)| (node_idx, id))
        .collect();

    let mut nodes = Vec::with_capacity(graph.node_count());
    for node_idx in graph.node_indices() {
        let block = &graph[node_idx];
        nodes.push(GraphNode {
            id: node_ids[&node_idx],
            address: block.id.to_string(),
            kind: block
                .kind
                .clone()
                .unwrap_or_else(|| DEFAULT_NODE_KIND.to_string()),
            size: block.instructions.len(),
        });
    }

    let mut links = Vec::with_capacity(graph.edge_count());
    for edge_idx in graph.edge_indices() {
        let (source, target) = graph.edge_endpoints(edge_idx).unwrap();
        let edge = &graph[edge_idx];
        links.push(GraphLink {
            source: node_ids[&source],
            target: node_ids[&target],
            kind: edge
                .kind
                .clone()
                .unwrap_or_else(|| DEFAULT_EDGE_KIND.to_string()),
        });
    }

    GraphDoc { nodes, links }
}
