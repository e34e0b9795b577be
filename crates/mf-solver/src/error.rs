//! Error types for solver operations.

use mf_core::FlowValue;
use mf_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while computing a maximum flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Invalid graph: {0}")]
    InvalidGraph(#[from] GraphError),

    #[error("Capacity overflow: {what}")]
    CapacityOverflow { what: String },

    #[error("Max-flow algorithms disagree: edmonds-karp={edmonds_karp}, dinic={dinic}")]
    Disagreement {
        edmonds_karp: FlowValue,
        dinic: FlowValue,
    },
}

pub type SolverResult<T> = Result<T, SolverError>;
