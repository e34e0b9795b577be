//! Incremental graph builder.

use mf_core::{EdgeId, NodeId, RawCapacity};

use crate::error::GraphResult;
use crate::graph::{CapacityGraph, Edge, Node};
use crate::indexing::NameIndex;
use crate::validate;

/// An edge as supplied by the caller, before its capacity is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PendingEdge {
    pub(crate) id: EdgeId,
    pub(crate) from: NodeId,
    pub(crate) to: NodeId,
    pub(crate) capacity: RawCapacity,
}

/// Builder for constructing a capacity graph incrementally.
///
/// Use `add_node` and `add_edge` to build up the graph,
/// then call `build()` to validate and freeze it into an immutable `CapacityGraph`.
#[derive(Debug, Default)]
pub struct CapacityGraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<PendingEdge>,
    names: NameIndex,
    next_edge_id: u32,
}

impl CapacityGraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its ID. Adding a name twice returns the existing ID.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let name = name.into();
        let (id, fresh) = self.names.intern(&name);
        if fresh {
            self.nodes.push(Node { id, name });
        }
        id
    }

    /// Add a directed edge. The capacity is checked in `build()`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, capacity: RawCapacity) -> EdgeId {
        let id = EdgeId::from_index(self.next_edge_id);
        self.next_edge_id += 1;
        self.edges.push(PendingEdge {
            id,
            from,
            to,
            capacity,
        });
        id
    }

    /// Add a directed edge between named nodes, creating the nodes if needed.
    pub fn add_named_edge(&mut self, from: &str, to: &str, capacity: RawCapacity) -> EdgeId {
        let from = self.add_node(from);
        let to = self.add_node(to);
        self.add_edge(from, to, capacity)
    }

    /// Build and validate the graph, returning an immutable `CapacityGraph`.
    pub fn build(self) -> GraphResult<CapacityGraph> {
        let edges = validate::validate_edges(&self.nodes, &self.edges)?;

        let (out_offsets, out_edges) = Self::build_adjacency(&self.nodes, &edges);

        Ok(CapacityGraph {
            nodes: self.nodes,
            edges,
            out_offsets,
            out_edges,
            names: self.names,
        })
    }

    /// Build compact adjacency lists: for each node, collect its outgoing edges.
    fn build_adjacency(nodes: &[Node], edges: &[Edge]) -> (Vec<usize>, Vec<EdgeId>) {
        let mut counts = vec![0_usize; nodes.len()];
        for edge in edges {
            counts[edge.from.as_usize()] += 1;
        }

        let mut offsets = Vec::with_capacity(nodes.len() + 1);
        offsets.push(0);
        for count in &counts {
            let last = offsets[offsets.len() - 1];
            offsets.push(last + count);
        }

        // Stable fill keeps insertion order within each node
        let mut cursor = offsets[..nodes.len()].to_vec();
        let mut flat = vec![EdgeId::from_index(0); edges.len()];
        for edge in edges {
            let slot = &mut cursor[edge.from.as_usize()];
            flat[*slot] = edge.id;
            *slot += 1;
        }

        (offsets, flat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = CapacityGraphBuilder::new();
        let a = builder.add_node("A");
        let b = builder.add_node("B");
        let e = builder.add_edge(a, b, 3);

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(e.index(), 0);
        assert_eq!(builder.nodes.len(), 2);
        assert_eq!(builder.edges.len(), 1);
    }

    #[test]
    fn builder_dedups_names() {
        let mut builder = CapacityGraphBuilder::new();
        let a = builder.add_node("A");
        let again = builder.add_node("A");
        assert_eq!(a, again);
        assert_eq!(builder.nodes.len(), 1);
    }

    #[test]
    fn builder_build_adjacency_keeps_insertion_order() {
        let mut builder = CapacityGraphBuilder::new();
        let e1 = builder.add_named_edge("A", "C", 2);
        let e2 = builder.add_named_edge("B", "C", 1);
        let e3 = builder.add_named_edge("A", "B", 3);

        let graph = builder.build().unwrap();
        let a = graph.node_id("A").unwrap();
        let b = graph.node_id("B").unwrap();
        let c = graph.node_id("C").unwrap();

        assert_eq!(graph.out_edges(a), &[e1, e3]);
        assert_eq!(graph.out_edges(b), &[e2]);
        assert!(graph.out_edges(c).is_empty());
    }
}
