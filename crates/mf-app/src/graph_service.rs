//! Graph document loading, saving, and introspection.

use std::path::Path;

use mf_graph::CapacityGraph;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A capacity graph together with its default terminals.
///
/// ```yaml
/// source: A
/// sink: T
/// graph:
///   A: { B: 3, C: 2 }
///   B: { C: 1, T: 2 }
///   C: { T: 3 }
///   T: {}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sink: Option<String>,
    pub graph: CapacityGraph,
}

/// On-disk encoding of a graph document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.json` files are JSON; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Summary of a graph for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub total_capacity: u128,
    pub source: Option<String>,
    pub sink: Option<String>,
}

/// Parse a graph document from text.
pub fn parse_graph_document(content: &str, format: DocumentFormat) -> AppResult<GraphDocument> {
    let document = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        DocumentFormat::Json => serde_json::from_str(content)?,
    };
    Ok(document)
}

/// Load a graph document, choosing the format from the file extension.
pub fn load_graph_document(path: &Path) -> AppResult<GraphDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::GraphFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let document = parse_graph_document(&content, DocumentFormat::from_path(path))?;
    tracing::debug!(
        path = %path.display(),
        nodes = document.graph.node_count(),
        edges = document.graph.edge_count(),
        "loaded graph document"
    );
    Ok(document)
}

/// Save a graph document, choosing the format from the file extension.
pub fn save_graph_document(path: &Path, document: &GraphDocument) -> AppResult<()> {
    let content = match DocumentFormat::from_path(path) {
        DocumentFormat::Yaml => serde_yaml::to_string(document)?,
        DocumentFormat::Json => serde_json::to_string_pretty(document)?,
    };

    std::fs::write(path, content).map_err(|e| AppError::GraphFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Summarize a graph document.
pub fn summarize_graph(document: &GraphDocument) -> GraphSummary {
    let graph: &CapacityGraph = &document.graph;
    GraphSummary {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        total_capacity: graph.edges().iter().map(|e| u128::from(e.capacity)).sum(),
        source: document.source.clone(),
        sink: document.sink.clone(),
    }
}
