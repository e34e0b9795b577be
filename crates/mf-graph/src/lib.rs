//! mf-graph: capacity graph model for the max-flow engine.
//!
//! Provides:
//! - Immutable capacity graph (nodes, directed capacitated edges, out-adjacency)
//! - Incremental graph builder with validation
//! - Conversion to and from the mapping-of-mappings form used at the boundary
//!
//! # Example
//!
//! ```
//! use mf_graph::CapacityGraphBuilder;
//!
//! let mut builder = CapacityGraphBuilder::new();
//! let a = builder.add_node("A");
//! let t = builder.add_node("T");
//! builder.add_edge(a, t, 7);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.capacity(a, t), Some(7));
//! ```

pub mod adjacency;
pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use adjacency::AdjacencyMap;
pub use builder::CapacityGraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{CapacityGraph, Edge, Node};
pub use indexing::NameIndex;
