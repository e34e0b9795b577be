//! Per-edge flow assignment.

use std::collections::BTreeMap;

use mf_core::{FlowValue, NodeId};
use mf_graph::CapacityGraph;

use crate::residual::ResidualGraph;

/// How much flow each original edge carries.
///
/// Sparse: only edges with positive flow are stored, every other edge of
/// the graph reads as 0. Iteration is ordered by `(from, to)` node ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowAssignment {
    flows: BTreeMap<(NodeId, NodeId), FlowValue>,
}

impl FlowAssignment {
    /// Read the assignment off a finished run: `capacity - residual` per
    /// original edge, clamped at zero.
    pub fn from_residual(graph: &CapacityGraph, residual: &ResidualGraph) -> Self {
        let flows = residual
            .arcs()
            .iter()
            .filter_map(|arc| {
                let edge = graph.edge(arc.original?)?;
                let flow = arc.flow();
                (flow > 0).then_some(((edge.from, edge.to), flow))
            })
            .collect();
        Self { flows }
    }

    /// Flow on the edge `from -> to` (0 if absent).
    pub fn get(&self, from: NodeId, to: NodeId) -> FlowValue {
        self.flows.get(&(from, to)).copied().unwrap_or(0)
    }

    /// `(from, to, flow)` for every edge carrying flow.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId, FlowValue)> + '_ {
        self.flows.iter().map(|(&(from, to), &flow)| (from, to, flow))
    }

    /// Number of edges carrying flow.
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    pub fn outflow(&self, node: NodeId) -> u128 {
        self.iter()
            .filter(|&(from, _, _)| from == node)
            .map(|(_, _, f)| u128::from(f))
            .sum()
    }

    pub fn inflow(&self, node: NodeId) -> u128 {
        self.iter()
            .filter(|&(_, to, _)| to == node)
            .map(|(_, _, f)| u128::from(f))
            .sum()
    }

    /// Net flow leaving `node`; for the source this is the flow value.
    pub fn net_outflow(&self, node: NodeId) -> i128 {
        // Both sums are bounded by u64::MAX * edge_count, well inside i128
        self.outflow(node) as i128 - self.inflow(node) as i128
    }

    /// Intermediate nodes whose inflow differs from their outflow.
    pub fn conservation_violations(
        &self,
        graph: &CapacityGraph,
        source: NodeId,
        sink: NodeId,
    ) -> Vec<NodeId> {
        graph
            .nodes()
            .iter()
            .map(|n| n.id)
            .filter(|&id| id != source && id != sink)
            .filter(|&id| self.net_outflow(id) != 0)
            .collect()
    }

    /// Entries that are not edges of `graph` or exceed the edge's capacity.
    pub fn capacity_violations(&self, graph: &CapacityGraph) -> Vec<(NodeId, NodeId)> {
        self.iter()
            .filter(|&(from, to, flow)| graph.capacity(from, to).is_none_or(|cap| flow > cap))
            .map(|(from, to, _)| (from, to))
            .collect()
    }
}
