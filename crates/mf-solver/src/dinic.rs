//! Level graph and blocking flow (Dinic).
//!
//! A phase labels every node with its hop distance from the source, then
//! repeatedly pushes flow along paths that climb exactly one level per arc
//! until no such path is left. Each phase strictly increases the source-sink
//! distance, so there are at most `node_count` phases.
//!
//! Paths are found with an explicit stack rather than recursion. Each node
//! keeps a cursor into its arc list; an arc the cursor has passed is never
//! looked at again in the same phase, which keeps a phase linear in the
//! number of arcs apart from the path walks themselves.

use std::collections::VecDeque;

use mf_core::{Capacity, FlowValue, NodeId};
use mf_graph::CapacityGraph;
use tracing::{debug, trace};

use crate::error::SolverResult;
use crate::residual::ResidualGraph;
use crate::solver::{MaxFlowSolver, RunStats};

/// Dinic max-flow solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dinic;

impl MaxFlowSolver for Dinic {
    fn name(&self) -> &'static str {
        "dinic"
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

/// Run phases on `residual` until the sink falls out of the level graph.
pub fn run(residual: &mut ResidualGraph) -> RunStats {
    let node_count = residual.node_count();
    let mut levels: Vec<Option<usize>> = vec![None; node_count];
    let mut cursor = vec![0_usize; node_count];
    let mut queue = VecDeque::with_capacity(node_count);
    let mut path = Vec::new();
    let mut stats = RunStats::default();

    loop {
        stats.searches += 1;
        if !assign_levels(residual, &mut levels, &mut queue) {
            break;
        }

        cursor.fill(0);
        let mut phase_flow: FlowValue = 0;
        while let Some(pushed) = next_path(residual, &levels, &mut cursor, &mut path) {
            for &arc in &path {
                residual.push(arc, pushed);
            }
            phase_flow += pushed;
            stats.augmentations += 1;
        }

        trace!(
            phase = stats.searches,
            sink_level = ?levels[residual.sink()],
            phase_flow,
            "blocking flow saturated"
        );
        if phase_flow == 0 {
            break;
        }
        stats.value += phase_flow;
    }

    debug!(
        value = stats.value,
        phases = stats.searches - 1,
        augmentations = stats.augmentations,
        "dinic finished"
    );
    stats
}

/// Label nodes with their hop distance from the source over arcs with
/// positive residual capacity. Returns whether the sink got a label.
fn assign_levels(
    residual: &ResidualGraph,
    levels: &mut [Option<usize>],
    queue: &mut VecDeque<usize>,
) -> bool {
    levels.fill(None);
    queue.clear();

    let source = residual.source();
    levels[source] = Some(0);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        let next = levels[u].map(|l| l + 1);
        for &a in residual.out_arcs(u) {
            let arc = residual.arc(a);
            if arc.residual > 0 && levels[arc.to].is_none() {
                levels[arc.to] = next;
                queue.push_back(arc.to);
            }
        }
    }

    levels[residual.sink()].is_some()
}

/// First admissible arc out of `u` at or after its cursor.
fn advance(
    residual: &ResidualGraph,
    levels: &[Option<usize>],
    cursor: &mut [usize],
    u: usize,
) -> Option<usize> {
    let arcs = residual.out_arcs(u);
    let next = levels[u].map(|l| l + 1);
    while let Some(&a) = arcs.get(cursor[u]) {
        let arc = residual.arc(a);
        if arc.residual > 0 && levels[arc.to] == next {
            return Some(a);
        }
        cursor[u] += 1;
    }
    None
}

/// Find one source-sink path in the level graph and return its bottleneck.
///
/// `path` receives the arcs in order. Dead ends are retreated from and the
/// arc that led into them is skipped for the rest of the phase.
fn next_path(
    residual: &ResidualGraph,
    levels: &[Option<usize>],
    cursor: &mut [usize],
    path: &mut Vec<usize>,
) -> Option<Capacity> {
    path.clear();
    let sink = residual.sink();
    let mut u = residual.source();

    loop {
        if u == sink {
            return path.iter().map(|&a| residual.arc(a).residual).min();
        }
        match advance(residual, levels, cursor, u) {
            Some(a) => {
                path.push(a);
                u = residual.arc(a).to;
            }
            None => {
                // Dead end: step back, or stop once the source itself is exhausted
                let a = path.pop()?;
                u = residual.arc(a).from;
                cursor[u] += 1;
            }
        }
    }
}
