//! Round execution: resolve terminals, cross-check, score the guess.

use std::time::Duration;

use mf_core::{AccumulatingTimer, FlowValue, NodeId, Timer};
use mf_solver::{Algorithm, CrossCheckConfig, CrossCheckReport, cross_check};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::graph_service::GraphDocument;

/// Request to play one round against a graph document.
#[derive(Debug, Clone, Default)]
pub struct RoundRequest<'a> {
    /// Overrides the document's source.
    pub source: Option<&'a str>,
    /// Overrides the document's sink.
    pub sink: Option<&'a str>,
    /// Player's guess of the max-flow value.
    pub guess: Option<i64>,
    pub config: CrossCheckConfig,
}

/// How a guess compares to the authoritative value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuessOutcome {
    pub guess: FlowValue,
    pub correct: bool,
    /// `guess - authoritative`.
    pub difference: i128,
}

/// Result of a round.
#[derive(Debug, Clone)]
pub struct RoundResponse {
    pub source: NodeId,
    pub sink: NodeId,
    pub report: CrossCheckReport,
    pub guess: Option<GuessOutcome>,
}

/// Accumulated timings over repeated cross-checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchSummary {
    pub iterations: usize,
    pub authoritative: FlowValue,
    pub disagreements: usize,
    pub edmonds_karp_total: Duration,
    pub edmonds_karp_avg: Duration,
    pub dinic_total: Duration,
    pub dinic_avg: Duration,
}

/// Resolve source and sink names, falling back to the document's defaults.
pub fn resolve_terminals(
    document: &GraphDocument,
    source: Option<&str>,
    sink: Option<&str>,
) -> AppResult<(NodeId, NodeId)> {
    let source = source
        .or(document.source.as_deref())
        .ok_or_else(|| AppError::InvalidInput("No source node given".to_string()))?;
    let sink = sink
        .or(document.sink.as_deref())
        .ok_or_else(|| AppError::InvalidInput("No sink node given".to_string()))?;

    let graph = &document.graph;
    Ok((graph.require_node(source)?, graph.require_node(sink)?))
}

/// Score a guess against the authoritative max-flow value.
pub fn evaluate_guess(guess: i64, authoritative: FlowValue) -> AppResult<GuessOutcome> {
    let guess = FlowValue::try_from(guess)
        .map_err(|_| AppError::InvalidInput("Guess must be non-negative".to_string()))?;
    Ok(GuessOutcome {
        guess,
        correct: guess == authoritative,
        difference: i128::from(guess) - i128::from(authoritative),
    })
}

/// Play one round: cross-check the max flow and score the guess, if any.
pub fn run_round(document: &GraphDocument, request: &RoundRequest<'_>) -> AppResult<RoundResponse> {
    if let Some(guess) = request.guess {
        if guess < 0 {
            return Err(AppError::InvalidInput(
                "Guess must be non-negative".to_string(),
            ));
        }
    }

    let (source, sink) = resolve_terminals(document, request.source, request.sink)?;
    let report = cross_check(&document.graph, source, sink, &request.config)?;

    let guess = request
        .guess
        .map(|g| evaluate_guess(g, report.authoritative))
        .transpose()?;

    tracing::info!(
        authoritative = report.authoritative,
        agree = report.agree,
        correct = guess.map(|g| g.correct),
        "round finished"
    );

    Ok(RoundResponse {
        source,
        sink,
        report,
        guess,
    })
}

/// Run a single algorithm and time it.
pub fn solve_single(
    document: &GraphDocument,
    source: Option<&str>,
    sink: Option<&str>,
    algorithm: Algorithm,
) -> AppResult<(FlowValue, Duration)> {
    let (source, sink) = resolve_terminals(document, source, sink)?;
    let timer = Timer::start(algorithm.name());
    let value = algorithm
        .solver()
        .max_flow(&document.graph, source, sink)?;
    Ok((value, timer.stop_and_print()))
}

/// Repeat the cross-check `iterations` times and accumulate timings.
pub fn benchmark(
    document: &GraphDocument,
    request: &RoundRequest<'_>,
    iterations: usize,
) -> AppResult<BenchSummary> {
    if iterations == 0 {
        return Err(AppError::InvalidInput(
            "Iterations must be positive".to_string(),
        ));
    }

    let (source, sink) = resolve_terminals(document, request.source, request.sink)?;
    let config = CrossCheckConfig {
        track_assignment: false,
        ..request.config
    };

    let edmonds_karp = AccumulatingTimer::new();
    let dinic = AccumulatingTimer::new();
    let mut disagreements = 0;
    let mut authoritative = 0;

    for _ in 0..iterations {
        let report = cross_check(&document.graph, source, sink, &config)?;
        edmonds_karp.record(report.edmonds_karp_elapsed);
        dinic.record(report.dinic_elapsed);
        if !report.agree {
            disagreements += 1;
        }
        authoritative = report.authoritative;
    }

    Ok(BenchSummary {
        iterations,
        authoritative,
        disagreements,
        edmonds_karp_total: edmonds_karp.total(),
        edmonds_karp_avg: edmonds_karp.average(),
        dinic_total: dinic.total(),
        dinic_avg: dinic.average(),
    })
}
