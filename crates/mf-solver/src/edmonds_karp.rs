//! Breadth-first augmenting paths (Edmonds-Karp).
//!
//! Each round finds a path with the fewest hops over arcs with positive
//! residual capacity, then pushes its bottleneck. Every round adds at least
//! one unit of flow, so the loop terminates for integer capacities.

use std::collections::VecDeque;

use mf_core::{Capacity, FlowValue, NodeId};
use mf_graph::CapacityGraph;
use tracing::{debug, trace};

use crate::assignment::FlowAssignment;
use crate::error::SolverResult;
use crate::residual::ResidualGraph;
use crate::solver::{MaxFlowSolver, RunStats};

/// Edmonds-Karp max-flow solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdmondsKarp;

impl MaxFlowSolver for EdmondsKarp {
    fn name(&self) -> &'static str {
        "edmonds-karp"
    }

    fn max_flow(
        &self,
        graph: &CapacityGraph,
        source: NodeId,
        sink: NodeId,
    ) -> SolverResult<FlowValue> {
        max_flow(graph, source, sink)
    }
}

/// Value of the maximum flow from `source` to `sink`.
pub fn max_flow(graph: &CapacityGraph, source: NodeId, sink: NodeId) -> SolverResult<FlowValue> {
    let mut residual = ResidualGraph::build(graph, source, sink)?;
    Ok(run(&mut residual).value)
}

/// Value of the maximum flow plus how much of it each original edge carries.
pub fn max_flow_with_assignment(
    graph: &CapacityGraph,
    source: NodeId,
    sink: NodeId,
) -> SolverResult<(FlowValue, FlowAssignment)> {
    let mut residual = ResidualGraph::build(graph, source, sink)?;
    let stats = run(&mut residual);
    let assignment = FlowAssignment::from_residual(graph, &residual);
    Ok((stats.value, assignment))
}

/// Augment `residual` until the sink is unreachable.
pub fn run(residual: &mut ResidualGraph) -> RunStats {
    let node_count = residual.node_count();
    let mut parent: Vec<Option<usize>> = vec![None; node_count];
    let mut visited = vec![false; node_count];
    let mut queue = VecDeque::with_capacity(node_count);
    let mut path = Vec::new();
    let mut stats = RunStats::default();

    loop {
        stats.searches += 1;
        if !shortest_path(residual, &mut parent, &mut visited, &mut queue) {
            break;
        }

        collect_path(residual, &parent, &mut path);
        let bottleneck = bottleneck(residual, &path);
        if bottleneck == 0 {
            break;
        }

        for &arc in &path {
            residual.push(arc, bottleneck);
        }
        stats.value += bottleneck;
        stats.augmentations += 1;
        trace!(hops = path.len(), bottleneck, "augmented");
    }

    debug!(
        value = stats.value,
        augmentations = stats.augmentations,
        "edmonds-karp finished"
    );
    stats
}

/// Breadth-first search from the source, stopping as soon as the sink is
/// labelled. `parent[v]` receives the arc used to reach `v`.
fn shortest_path(
    residual: &ResidualGraph,
    parent: &mut [Option<usize>],
    visited: &mut [bool],
    queue: &mut VecDeque<usize>,
) -> bool {
    parent.fill(None);
    visited.fill(false);
    queue.clear();

    let (source, sink) = (residual.source(), residual.sink());
    visited[source] = true;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for &a in residual.out_arcs(u) {
            let arc = residual.arc(a);
            if arc.residual == 0 || visited[arc.to] {
                continue;
            }
            visited[arc.to] = true;
            parent[arc.to] = Some(a);
            if arc.to == sink {
                return true;
            }
            queue.push_back(arc.to);
        }
    }
    false
}

/// Walk parent pointers back from the sink; the source has no parent.
fn collect_path(residual: &ResidualGraph, parent: &[Option<usize>], path: &mut Vec<usize>) {
    path.clear();
    let mut v = residual.sink();
    while let Some(a) = parent[v] {
        path.push(a);
        v = residual.arc(a).from;
    }
    path.reverse();
}

fn bottleneck(residual: &ResidualGraph, path: &[usize]) -> Capacity {
    path.iter()
        .map(|&a| residual.arc(a).residual)
        .min()
        .unwrap_or(0)
}
