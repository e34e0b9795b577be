//! Display-ready views of round results.

use mf_core::FlowValue;
use mf_graph::CapacityGraph;
use mf_solver::FlowAssignment;
use serde::Serialize;

use crate::round_service::{GuessOutcome, RoundResponse};

/// One edge as a renderer wants it: names, capacity, and flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeFlowView {
    pub from: String,
    pub to: String,
    pub capacity: u64,
    pub flow: FlowValue,
}

/// Flattened, serializable form of a round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSummary {
    pub source: String,
    pub sink: String,
    pub max_flow: FlowValue,
    pub edmonds_karp: FlowValue,
    pub dinic: FlowValue,
    pub algorithms_agree: bool,
    pub edmonds_karp_ms: f64,
    pub dinic_ms: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flows: Vec<EdgeFlowView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess: Option<GuessOutcome>,
}

/// Every edge of `graph` in edge order, with its flow (0 without an assignment).
pub fn edge_flow_views(
    graph: &CapacityGraph,
    assignment: Option<&FlowAssignment>,
) -> Vec<EdgeFlowView> {
    graph
        .edges()
        .iter()
        .map(|edge| EdgeFlowView {
            from: graph.node_name(edge.from).unwrap_or_default().to_string(),
            to: graph.node_name(edge.to).unwrap_or_default().to_string(),
            capacity: edge.capacity,
            flow: assignment.map_or(0, |a| a.get(edge.from, edge.to)),
        })
        .collect()
}

impl RoundSummary {
    pub fn from_response(graph: &CapacityGraph, response: &RoundResponse) -> Self {
        let report = &response.report;
        let flows = match &report.assignment {
            Some(assignment) => edge_flow_views(graph, Some(assignment)),
            None => Vec::new(),
        };
        Self {
            source: graph
                .node_name(response.source)
                .unwrap_or_default()
                .to_string(),
            sink: graph.node_name(response.sink).unwrap_or_default().to_string(),
            max_flow: report.authoritative,
            edmonds_karp: report.edmonds_karp,
            dinic: report.dinic,
            algorithms_agree: report.agree,
            edmonds_karp_ms: report.edmonds_karp_elapsed.as_secs_f64() * 1e3,
            dinic_ms: report.dinic_elapsed.as_secs_f64() * 1e3,
            flows,
            guess: response.guess,
        }
    }
}
