//! Control-flow graph model.
//!
//! A thin wrapper around a petgraph `DiGraph` that keys blocks by their
//! identity (memory address or symbolic label) and rejects duplicate
//! blocks and dangling edges at construction time.

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use std::fmt;

use crate::utils::error::CfgError;

/// Identity of a basic block: a memory address or an arbitrary label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockId {
    Address(u64),
    Label(String),
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Lowercase hex with 0x prefix, e.g. 0x1000
            BlockId::Address(addr) => write!(f, "{:#x}", addr),
            BlockId::Label(label) => write!(f, "{}", label),
        }
    }
}

impl From<u64> for BlockId {
    fn from(addr: u64) -> Self {
        BlockId::Address(addr)
    }
}

impl From<&str> for BlockId {
    fn from(label: &str) -> Self {
        BlockId::Label(label.to_string())
    }
}

/// A basic block recovered by the detection pipeline
#[derive(Debug, Clone)]
pub struct BasicBlock {
    /// Block identity, unique within a graph
    pub id: BlockId,

    /// Block type label (formatting falls back to "basic_block")
    pub kind: Option<String>,

    /// Disassembled instructions in the block
    pub instructions: Vec<String>,
}

impl BasicBlock {
    /// Create a block with no type label and no instructions
    pub fn new(id: impl Into<BlockId>) -> Self {
        Self {
            id: id.into(),
            kind: None,
            instructions: Vec::new(),
        }
    }

    /// Set the block type label
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set the instruction list
    pub fn with_instructions(mut self, instructions: Vec<String>) -> Self {
        self.instructions = instructions;
        self
    }
}

/// A control transfer between two blocks
#[derive(Debug, Clone)]
pub struct FlowEdge {
    /// Edge type label (formatting falls back to "flow")
    pub kind: Option<String>,
}

/// Directed control-flow graph with block-identity lookup.
///
/// Iteration order is insertion order, which makes chart output
/// reproducible for a given graph instance.
#[derive(Debug)]
pub struct ControlFlowGraph {
    graph: DiGraph<BasicBlock, FlowEdge>,
    index: HashMap<BlockId, NodeIndex>,
}

impl Default for ControlFlowGraph {
    fn default() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
        }
    }
}

impl ControlFlowGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a block.
    ///
    /// # Errors
    /// * `CfgError::DuplicateBlock` - a block with the same id already exists
    pub fn add_block(&mut self, block: BasicBlock) -> Result<NodeIndex, CfgError> {
        if self.index.contains_key(&block.id) {
            return Err(CfgError::DuplicateBlock(block.id.to_string()));
        }

        let id = block.id.clone();
        let node_idx = self.graph.add_node(block);
        self.index.insert(id, node_idx);

        Ok(node_idx)
    }

    /// Connect two existing blocks with a control transfer.
    ///
    /// # Errors
    /// * `CfgError::UnknownBlock` - either endpoint has not been inserted
    pub fn add_edge(
        &mut self,
        source: &BlockId,
        target: &BlockId,
        kind: Option<String>,
    ) -> Result<(), CfgError> {
        let source_idx = self.lookup(source)?;
        let target_idx = self.lookup(target)?;

        self.graph.add_edge(source_idx, target_idx, FlowEdge { kind });

        Ok(())
    }

    /// Number of blocks in the graph
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of control transfers in the graph
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// True if the graph has no blocks
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Underlying petgraph, used by the chart builders for traversal
    pub(crate) fn graph(&self) -> &DiGraph<BasicBlock, FlowEdge> {
        &self.graph
    }

    fn lookup(&self, id: &BlockId) -> Result<NodeIndex, CfgError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| CfgError::UnknownBlock(id.to_string()))
    }
}
