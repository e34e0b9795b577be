//! Shared application service layer for the max-flow engine.
//!
//! This crate provides one interface for front ends: loading graph
//! documents, resolving named terminals, running cross-checked rounds,
//! scoring guesses, and shaping results for display.

pub mod error;
pub mod graph_service;
pub mod query;
pub mod round_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use graph_service::{
    DocumentFormat, GraphDocument, GraphSummary, load_graph_document, parse_graph_document,
    save_graph_document, summarize_graph,
};
pub use query::{EdgeFlowView, RoundSummary, edge_flow_views};
pub use round_service::{
    BenchSummary, GuessOutcome, RoundRequest, RoundResponse, benchmark, evaluate_guess,
    resolve_terminals, run_round, solve_single,
};
