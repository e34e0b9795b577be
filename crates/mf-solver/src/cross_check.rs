//! Cross-validation of the two max-flow algorithms.
//!
//! Both solvers run on residual graphs built independently from the same
//! capacity graph. Their values are compared and reconciled into one
//! authoritative answer; disagreement is reported, never hidden.

use std::time::Duration;

use mf_core::{FlowValue, NodeId, Timer};
use mf_graph::CapacityGraph;
use tracing::{debug, warn};

use crate::assignment::FlowAssignment;
use crate::dinic::Dinic;
use crate::edmonds_karp;
use crate::error::{SolverError, SolverResult};
use crate::solver::MaxFlowSolver;

/// What to do when the two algorithms return different values.
///
/// They must agree on every valid input, so a mismatch always indicates a
/// defect. `PreferLarger` keeps the historical behavior of answering with
/// the larger value; `FailFast` turns the mismatch into an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisagreementPolicy {
    #[default]
    PreferLarger,
    FailFast,
}

/// Cross-check configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossCheckConfig {
    /// Derive the per-edge flow assignment from the Edmonds-Karp run.
    pub track_assignment: bool,
    /// Run the two solvers concurrently.
    pub parallel: bool,
    pub policy: DisagreementPolicy,
}

impl Default for CrossCheckConfig {
    fn default() -> Self {
        Self {
            track_assignment: true,
            parallel: false,
            policy: DisagreementPolicy::default(),
        }
    }
}

/// Outcome of a cross-checked max-flow computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossCheckReport {
    /// The value callers should use.
    pub authoritative: FlowValue,
    pub edmonds_karp: FlowValue,
    pub dinic: FlowValue,
    pub agree: bool,
    pub edmonds_karp_elapsed: Duration,
    pub dinic_elapsed: Duration,
    /// Always taken from the Edmonds-Karp run, whichever value won.
    pub assignment: Option<FlowAssignment>,
}

type Timed<T> = (SolverResult<T>, Duration);

/// Compute the max flow with both algorithms and reconcile the results.
///
/// Invalid terminals fail before either search starts.
pub fn cross_check(
    graph: &CapacityGraph,
    source: NodeId,
    sink: NodeId,
    config: &CrossCheckConfig,
) -> SolverResult<CrossCheckReport> {
    cross_check_with(graph, source, sink, config, &Dinic)
}

/// Cross-check Edmonds-Karp against `other`, which stands in the Dinic slot.
pub(crate) fn cross_check_with(
    graph: &CapacityGraph,
    source: NodeId,
    sink: NodeId,
    config: &CrossCheckConfig,
    other: &dyn MaxFlowSolver,
) -> SolverResult<CrossCheckReport> {
    graph.check_terminals(source, sink)?;

    let track = config.track_assignment;
    let run_edmonds_karp = || -> Timed<(FlowValue, Option<FlowAssignment>)> {
        let timer = Timer::start("edmonds-karp");
        let result = if track {
            edmonds_karp::max_flow_with_assignment(graph, source, sink)
                .map(|(value, assignment)| (value, Some(assignment)))
        } else {
            edmonds_karp::max_flow(graph, source, sink).map(|value| (value, None))
        };
        (result, timer.stop_and_print())
    };
    let run_dinic = || -> Timed<FlowValue> {
        let timer = Timer::start("dinic");
        let result = other.max_flow(graph, source, sink);
        (result, timer.stop_and_print())
    };

    let ((ek_result, edmonds_karp_elapsed), (dinic_result, dinic_elapsed)) = if config.parallel {
        rayon::join(run_edmonds_karp, run_dinic)
    } else {
        (run_edmonds_karp(), run_dinic())
    };

    let (edmonds_karp, assignment) = ek_result?;
    let dinic = dinic_result?;

    debug!(
        edmonds_karp,
        dinic,
        edmonds_karp_us = edmonds_karp_elapsed.as_micros() as u64,
        dinic_us = dinic_elapsed.as_micros() as u64,
        "cross-check finished"
    );

    if let Some(assignment) = &assignment {
        debug_assert!(assignment.conservation_violations(graph, source, sink).is_empty());
        debug_assert!(assignment.capacity_violations(graph).is_empty());
    }

    let authoritative = reconcile(edmonds_karp, dinic, config.policy)?;

    Ok(CrossCheckReport {
        authoritative,
        edmonds_karp,
        dinic,
        agree: edmonds_karp == dinic,
        edmonds_karp_elapsed,
        dinic_elapsed,
        assignment,
    })
}

/// Pick the authoritative value from the two algorithm results.
pub fn reconcile(
    edmonds_karp: FlowValue,
    dinic: FlowValue,
    policy: DisagreementPolicy,
) -> SolverResult<FlowValue> {
    if edmonds_karp == dinic {
        return Ok(edmonds_karp);
    }

    warn!(edmonds_karp, dinic, ?policy, "max-flow algorithms disagree");
    match policy {
        DisagreementPolicy::PreferLarger => Ok(edmonds_karp.max(dinic)),
        DisagreementPolicy::FailFast => Err(SolverError::Disagreement {
            edmonds_karp,
            dinic,
        }),
    }
}
