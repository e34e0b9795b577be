//! Graph validation logic.

use std::collections::HashSet;

use mf_core::{NodeId, checked_capacity};

use crate::builder::PendingEdge;
use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, Node};

/// Validate pending edges and convert them into capacity-checked edges.
///
/// Rejects dangling node references, negative capacities, self-loops and
/// repeated ordered pairs.
pub(crate) fn validate_edges(nodes: &[Node], edges: &[PendingEdge]) -> GraphResult<Vec<Edge>> {
    // Ids are u32 with one value reserved by the NonZero encoding
    let limit = u32::MAX as usize;
    if nodes.len() >= limit {
        return Err(GraphError::TooMany {
            what: "nodes",
            count: nodes.len(),
        });
    }
    if edges.len() >= limit {
        return Err(GraphError::TooMany {
            what: "edges",
            count: edges.len(),
        });
    }

    let name_of = |id: NodeId| nodes[id.as_usize()].name.clone();

    let mut seen: HashSet<(NodeId, NodeId)> = HashSet::with_capacity(edges.len());
    let mut validated = Vec::with_capacity(edges.len());

    for edge in edges {
        // Check that both endpoints reference a valid node
        for node in [edge.from, edge.to] {
            if node.as_usize() >= nodes.len() {
                return Err(GraphError::InvalidNodeRef {
                    edge: edge.id,
                    node,
                });
            }
        }

        if edge.from == edge.to {
            return Err(GraphError::SelfLoop {
                node: name_of(edge.from),
            });
        }

        let capacity =
            checked_capacity(edge.capacity).ok_or_else(|| GraphError::NegativeCapacity {
                from: name_of(edge.from),
                to: name_of(edge.to),
                capacity: edge.capacity,
            })?;

        if !seen.insert((edge.from, edge.to)) {
            return Err(GraphError::DuplicateEdge {
                from: name_of(edge.from),
                to: name_of(edge.to),
            });
        }

        validated.push(Edge {
            id: edge.id,
            from: edge.from,
            to: edge.to,
            capacity,
        });
    }

    Ok(validated)
}
