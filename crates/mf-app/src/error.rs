//! Error types for the mf-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the engine crates
/// and provides a unified error interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read graph file: {path}")]
    GraphFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write graph file: {path}")]
    GraphFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse graph document: {0}")]
    Parse(String),

    #[error("Graph error: {0}")]
    Graph(#[from] mf_graph::GraphError),

    #[error("Solver error: {0}")]
    Solver(#[from] mf_solver::SolverError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for mf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Parse(format!("YAML: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(format!("JSON: {}", err))
    }
}
