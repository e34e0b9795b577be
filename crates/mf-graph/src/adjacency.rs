//! Mapping-of-mappings form of a capacity graph.
//!
//! `{ "A": { "B": 3, "C": 2 }, "B": { "T": 2 }, "T": {} }` is the shape in
//! which graphs arrive from and leave to the surrounding application.

use std::collections::BTreeMap;

use mf_core::RawCapacity;

use crate::builder::CapacityGraphBuilder;
use crate::error::{GraphError, GraphResult};
use crate::graph::CapacityGraph;

/// Node name -> (neighbor name -> capacity).
pub type AdjacencyMap = BTreeMap<String, BTreeMap<String, RawCapacity>>;

impl CapacityGraph {
    /// Build a graph from its mapping-of-mappings form.
    ///
    /// Listed nodes get IDs in sorted name order, followed by nodes that only
    /// appear as edge targets, in first-seen order. Edges follow the same order.
    pub fn from_adjacency(adjacency: &AdjacencyMap) -> GraphResult<Self> {
        let mut builder = CapacityGraphBuilder::new();
        for name in adjacency.keys() {
            builder.add_node(name.as_str());
        }
        for (from, neighbors) in adjacency {
            for (to, &capacity) in neighbors {
                builder.add_named_edge(from, to, capacity);
            }
        }
        builder.build()
    }

    /// Mapping-of-mappings form; every node appears as a key.
    pub fn to_adjacency(&self) -> AdjacencyMap {
        let mut adjacency: AdjacencyMap = self
            .nodes
            .iter()
            .map(|n| (n.name.clone(), BTreeMap::new()))
            .collect();
        for edge in &self.edges {
            let from = &self.nodes[edge.from.as_usize()].name;
            let to = &self.nodes[edge.to.as_usize()].name;
            // Validated capacities fit back into the signed input type
            let capacity = RawCapacity::try_from(edge.capacity).unwrap_or(RawCapacity::MAX);
            if let Some(neighbors) = adjacency.get_mut(from) {
                neighbors.insert(to.clone(), capacity);
            }
        }
        adjacency
    }
}

impl TryFrom<AdjacencyMap> for CapacityGraph {
    type Error = GraphError;

    fn try_from(adjacency: AdjacencyMap) -> Result<Self, Self::Error> {
        Self::from_adjacency(&adjacency)
    }
}

impl From<CapacityGraph> for AdjacencyMap {
    fn from(graph: CapacityGraph) -> Self {
        graph.to_adjacency()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::AdjacencyMap;
    use crate::graph::CapacityGraph;

    impl Serialize for CapacityGraph {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.to_adjacency().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for CapacityGraph {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let adjacency = AdjacencyMap::deserialize(deserializer)?;
            CapacityGraph::from_adjacency(&adjacency).map_err(serde::de::Error::custom)
        }
    }
}
