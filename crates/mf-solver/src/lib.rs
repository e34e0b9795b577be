//! Maximum-flow engine.
//!
//! Two independently implemented algorithms run against the same
//! [`CapacityGraph`](mf_graph::CapacityGraph):
//!
//! - [`edmonds_karp`]: breadth-first shortest augmenting paths, with an
//!   optional per-edge flow assignment.
//! - [`dinic`]: level graph plus blocking flow, saturated by an explicit
//!   stack traversal with per-node current-arc cursors.
//!
//! [`cross_check`] runs both on independently built residual graphs,
//! times them, and reconciles the two values into one authoritative result.
//! The engine keeps no state between calls.

pub mod assignment;
pub mod cross_check;
pub mod dinic;
pub mod edmonds_karp;
pub mod error;
pub mod residual;
pub mod solver;

pub use assignment::FlowAssignment;
pub use cross_check::{
    CrossCheckConfig, CrossCheckReport, DisagreementPolicy, cross_check, reconcile,
};
pub use dinic::Dinic;
pub use edmonds_karp::EdmondsKarp;
pub use error::{SolverError, SolverResult};
pub use residual::{ResidualArc, ResidualGraph};
pub use solver::{Algorithm, MaxFlowSolver, RunStats};
