//! Core graph types
//!
//! This module contains the fundamental data structures used in the module
//! dependency graph.

use petgraph::graph::{DiGraph, NodeIndex};

use super::directed::DirectedGraph;
use crate::core::ModuleId;
use crate::error::CycleTrailError;

/// Represents a module in the dependency graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode {
    pub id: ModuleId,
    pub resource: String,
}

/// Represents one followed dependency reference between modules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyEdge {
    /// Asynchronous (lazily loaded) reference
    pub weak: bool,
}

/// Module dependency graph for a single detection pass
///
/// Every module with a display resource is a node. Only the modules that
/// passed the include/exclude patterns are listed by
/// [`DirectedGraph::vertices`], but traversal crosses all nodes.
#[derive(Debug, Clone)]
pub struct ModuleGraph {
    pub(super) graph: DiGraph<ModuleNode, DependencyEdge>,
    pub(super) scanned: Vec<NodeIndex>,
    // Successors per node, in the order the references were declared
    pub(super) adjacency: Vec<Vec<NodeIndex>>,
}

impl ModuleGraph {
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of followed references that are asynchronous
    pub fn weak_edge_count(&self) -> usize {
        self.graph
            .edge_weights()
            .filter(|edge| edge.weak)
            .count()
    }

    pub fn node(&self, index: NodeIndex) -> Option<&ModuleNode> {
        self.graph.node_weight(index)
    }

    pub fn find(&self, id: &ModuleId) -> Option<NodeIndex> {
        self.graph
            .node_indices()
            .find(|&idx| &self.graph[idx].id == id)
    }
}

impl DirectedGraph for ModuleGraph {
    type Vertex = NodeIndex;

    fn vertices(&self) -> &[NodeIndex] {
        &self.scanned
    }

    fn successors(&self, vertex: NodeIndex) -> Result<&[NodeIndex], CycleTrailError> {
        self.adjacency
            .get(vertex.index())
            .map(Vec::as_slice)
            .ok_or_else(|| CycleTrailError::UnknownVertex {
                vertex: format!("{vertex:?}"),
            })
    }

    fn resource(&self, vertex: NodeIndex) -> Option<&str> {
        self.node(vertex).map(|node| node.resource.as_str())
    }
}
