//! Graph-specific error types.

use mf_core::{EdgeId, NodeId, RawCapacity};
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Capacity graph construction and lookup errors.
///
/// Every variant means the input is not a valid capacity graph (or not a
/// valid source/sink pair for it). None of them is recoverable locally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Edge {from} -> {to} has negative capacity {capacity}")]
    NegativeCapacity {
        from: String,
        to: String,
        capacity: RawCapacity,
    },

    #[error("Self-loop on node {node} is not supported")]
    SelfLoop { node: String },

    #[error("Duplicate edge {from} -> {to}")]
    DuplicateEdge { from: String, to: String },

    #[error("Edge {edge} refers to non-existent node {node}")]
    InvalidNodeRef { edge: EdgeId, node: NodeId },

    #[error("Unknown node: {name}")]
    UnknownNode { name: String },

    #[error("Node {node} is out of range for a graph with {count} nodes")]
    NodeOutOfRange { node: NodeId, count: usize },

    #[error("Source and sink are the same node ({node})")]
    SourceIsSink { node: String },

    #[error("Too many {what} for compact ids ({count})")]
    TooMany { what: &'static str, count: usize },
}
