//! Core capacity graph data structures.

use mf_core::{Capacity, EdgeId, NodeId};

use crate::error::{GraphError, GraphResult};
use crate::indexing::NameIndex;

/// A node of the capacity graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
}

/// A directed edge with a non-negative integer capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: Capacity,
}

/// The capacity graph: a validated, immutable directed graph.
///
/// The graph stores:
/// - All nodes and edges in vectors (indexed by their IDs).
/// - Compact out-adjacency: for each node, which edges leave it.
///
/// At most one edge exists per ordered node pair, no edge is a self-loop,
/// and no capacity is negative. Solvers only ever borrow it immutably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityGraph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,

    /// Offsets for node->edge adjacency: node i's outgoing edges are in out_edges[out_offsets[i]..out_offsets[i+1]].
    pub(crate) out_offsets: Vec<usize>,

    /// Flat list of outgoing edge IDs, grouped by tail node, in insertion order.
    pub(crate) out_edges: Vec<EdgeId>,

    pub(crate) names: NameIndex,
}

impl CapacityGraph {
    /// Return all nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.as_usize())
    }

    /// Get an edge by ID (returns None if ID out of bounds).
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.as_usize())
    }

    /// Whether `id` names a node of this graph.
    pub fn contains_node(&self, id: NodeId) -> bool {
        id.as_usize() < self.nodes.len()
    }

    /// Look up a node by name.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.names.get(name)
    }

    /// Look up a node by name, failing with `UnknownNode`.
    pub fn require_node(&self, name: &str) -> GraphResult<NodeId> {
        self.node_id(name).ok_or_else(|| GraphError::UnknownNode {
            name: name.to_string(),
        })
    }

    /// Name of a node, if it exists.
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.name.as_str())
    }

    /// Outgoing edge IDs of a node, in insertion order.
    pub fn out_edges(&self, node: NodeId) -> &[EdgeId] {
        let idx = node.as_usize();
        if idx >= self.nodes.len() {
            return &[];
        }
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_edges[start..end]
    }

    /// The edge from `from` to `to`, if present.
    pub fn find_edge(&self, from: NodeId, to: NodeId) -> Option<&Edge> {
        self.out_edges(from)
            .iter()
            .filter_map(|&e| self.edge(e))
            .find(|e| e.to == to)
    }

    /// Capacity of the edge from `from` to `to`, if present.
    pub fn capacity(&self, from: NodeId, to: NodeId) -> Option<Capacity> {
        self.find_edge(from, to).map(|e| e.capacity)
    }

    /// Sum of capacities leaving `node`.
    pub fn out_capacity(&self, node: NodeId) -> u128 {
        self.out_edges(node)
            .iter()
            .filter_map(|&e| self.edge(e))
            .map(|e| u128::from(e.capacity))
            .sum()
    }

    /// Sum of capacities entering `node`.
    pub fn in_capacity(&self, node: NodeId) -> u128 {
        self.edges
            .iter()
            .filter(|e| e.to == node)
            .map(|e| u128::from(e.capacity))
            .sum()
    }

    /// Check that `source` and `sink` form a valid terminal pair for this graph.
    pub fn check_terminals(&self, source: NodeId, sink: NodeId) -> GraphResult<()> {
        for node in [source, sink] {
            if !self.contains_node(node) {
                return Err(GraphError::NodeOutOfRange {
                    node,
                    count: self.nodes.len(),
                });
            }
        }
        if source == sink {
            return Err(GraphError::SourceIsSink {
                node: self.node_name(source).unwrap_or_default().to_string(),
            });
        }
        Ok(())
    }
}
