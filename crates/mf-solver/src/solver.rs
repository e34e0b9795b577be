//! The seam both max-flow algorithms implement.

use std::fmt;

use mf_core::{FlowValue, NodeId};
use mf_graph::CapacityGraph;

use crate::dinic::Dinic;
use crate::edmonds_karp::EdmondsKarp;
use crate::error::SolverResult;

/// A maximum-flow algorithm.
///
/// Implementations borrow the graph immutably and build their own residual
/// graph per call, so one solver value can serve any number of calls.
pub trait MaxFlowSolver: Send + Sync {
    /// Short, stable name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Value of the maximum flow from `source` to `sink`.
    fn max_flow(
        &self,
        graph: &CapacityGraph,
        source: NodeId,
        sink: NodeId,
    ) -> SolverResult<FlowValue>;
}

/// Counters describing one completed solver run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Total flow pushed from source to sink.
    pub value: FlowValue,
    /// Breadth-first searches performed (one per augmentation for
    /// Edmonds-Karp, one per level graph for Dinic), including the final
    /// unsuccessful one.
    pub searches: usize,
    /// Augmenting paths along which flow was pushed.
    pub augmentations: usize,
}

/// Selector for the available algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    EdmondsKarp,
    Dinic,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::EdmondsKarp, Algorithm::Dinic];

    pub fn solver(self) -> &'static dyn MaxFlowSolver {
        match self {
            Algorithm::EdmondsKarp => &EdmondsKarp,
            Algorithm::Dinic => &Dinic,
        }
    }

    pub fn name(self) -> &'static str {
        self.solver().name()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
