//! Residual graph construction.
//!
//! Every ordered node pair that carries an original edge in either direction
//! gets exactly one arc per direction, and the two arcs point at each other.
//! Pushing `x` along an arc moves `x` of residual capacity onto its partner,
//! so `residual(u,v) + residual(v,u)` stays equal to
//! `capacity(u,v) + capacity(v,u)` for the whole run.

use std::collections::HashMap;

use mf_core::{Capacity, EdgeId, NodeId};
use mf_graph::CapacityGraph;

use crate::error::{SolverError, SolverResult};

/// One direction of a node pair in the residual graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidualArc {
    pub from: usize,
    pub to: usize,
    /// Capacity still available in this direction.
    pub residual: Capacity,
    /// Original capacity in this direction (0 for a synthetic reverse arc).
    pub capacity: Capacity,
    /// Index of the arc for the opposite direction.
    pub reverse: usize,
    /// Original edge this arc stands for, if any.
    pub original: Option<EdgeId>,
}

impl ResidualArc {
    /// Flow currently routed along this arc's original edge.
    ///
    /// Clamped at zero: when both directions exist originally, net flow
    /// in the opposite direction shows up as residual above capacity here.
    pub fn flow(&self) -> Capacity {
        self.capacity.saturating_sub(self.residual)
    }
}

/// Mutable working graph owned by a single solver run.
#[derive(Debug, Clone)]
pub struct ResidualGraph {
    arcs: Vec<ResidualArc>,
    adjacency: Vec<Vec<usize>>,
    source: usize,
    sink: usize,
}

impl ResidualGraph {
    /// Derive a residual graph from `graph`, leaving `graph` untouched.
    ///
    /// Fails if the terminals are invalid, or if capacities are large
    /// enough that pair sums or the flow value itself could overflow.
    pub fn build(graph: &CapacityGraph, source: NodeId, sink: NodeId) -> SolverResult<Self> {
        graph.check_terminals(source, sink)?;

        // No flow can exceed what leaves the source or what enters the sink
        let bound = graph.out_capacity(source).min(graph.in_capacity(sink));
        if bound > u128::from(Capacity::MAX) {
            return Err(SolverError::CapacityOverflow {
                what: "maximum possible flow value".to_string(),
            });
        }

        let node_count = graph.node_count();
        let mut arcs: Vec<ResidualArc> = Vec::with_capacity(graph.edge_count() * 2);
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        let mut slots: HashMap<(usize, usize), usize> =
            HashMap::with_capacity(graph.edge_count() * 2);

        for edge in graph.edges() {
            let (u, v) = (edge.from.as_usize(), edge.to.as_usize());
            let forward = match slots.get(&(u, v)) {
                Some(&arc) => arc,
                None => {
                    let arc = arcs.len();
                    arcs.push(Self::empty_arc(u, v, arc + 1));
                    arcs.push(Self::empty_arc(v, u, arc));
                    adjacency[u].push(arc);
                    adjacency[v].push(arc + 1);
                    slots.insert((u, v), arc);
                    slots.insert((v, u), arc + 1);
                    arc
                }
            };

            let partner = arcs[arcs[forward].reverse].capacity;
            if partner.checked_add(edge.capacity).is_none() {
                return Err(SolverError::CapacityOverflow {
                    what: format!("capacity pair on edge {}", edge.id),
                });
            }

            let arc = &mut arcs[forward];
            arc.capacity = edge.capacity;
            arc.residual = edge.capacity;
            arc.original = Some(edge.id);
        }

        Ok(Self {
            arcs,
            adjacency,
            source: source.as_usize(),
            sink: sink.as_usize(),
        })
    }

    fn empty_arc(from: usize, to: usize, reverse: usize) -> ResidualArc {
        ResidualArc {
            from,
            to,
            residual: 0,
            capacity: 0,
            reverse,
            original: None,
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn sink(&self) -> usize {
        self.sink
    }

    pub fn arcs(&self) -> &[ResidualArc] {
        &self.arcs
    }

    pub fn arc(&self, arc: usize) -> &ResidualArc {
        &self.arcs[arc]
    }

    /// Arcs leaving `node`, forward and reverse alike.
    pub fn out_arcs(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// Residual capacity from `from` to `to`, 0 if the pair has no arc.
    pub fn residual_between(&self, from: usize, to: usize) -> Capacity {
        self.adjacency
            .get(from)
            .into_iter()
            .flatten()
            .map(|&a| &self.arcs[a])
            .find(|arc| arc.to == to)
            .map_or(0, |arc| arc.residual)
    }

    /// Push `amount` along `arc`, crediting the opposite arc.
    ///
    /// `amount` must not exceed the arc's residual capacity.
    pub fn push(&mut self, arc: usize, amount: Capacity) {
        debug_assert!(amount <= self.arcs[arc].residual);
        let reverse = self.arcs[arc].reverse;
        self.arcs[arc].residual -= amount;
        self.arcs[reverse].residual += amount;
    }

    /// Check the pairwise residual invariant over every arc.
    pub fn is_balanced(&self) -> bool {
        self.arcs.iter().enumerate().all(|(index, arc)| {
            let partner = &self.arcs[arc.reverse];
            partner.reverse == index
                && arc.residual.checked_add(partner.residual)
                    == arc.capacity.checked_add(partner.capacity)
        })
    }
}
