//! Declarative graph definitions loaded from YAML or JSON
//!
//! ```yaml
//! directed: false
//! nodes: [a, b, c]
//! edges:
//!   - { from: a, to: b, weight: 3 }
//!   - { from: b, to: c, weight: 1 }
//! ```
//!
//! Edge endpoints missing from `nodes` are added implicitly.

use crate::graph::{Graph, GraphError, NodeId};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a graph definition
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

/// Result type for definition loading
pub type DefinitionResult<T> = Result<T, DefinitionError>;

/// One weighted edge of a definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDefinition {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: i64,
}

/// A graph described as plain data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDefinition {
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub edges: Vec<EdgeDefinition>,
}

impl GraphDefinition {
    /// Parse a YAML document
    pub fn from_yaml_str(source: &str) -> DefinitionResult<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(source: &str) -> DefinitionResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read a definition file; `.json` files are JSON, anything else YAML
    pub fn from_path(path: impl AsRef<Path>) -> DefinitionResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading graph definition");

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_yaml_str(&source)
        }
    }

    /// Build a graph by replaying the definition through the graph API
    pub fn build(&self) -> DefinitionResult<Graph> {
        let mut graph = Graph::new(self.directed);
        for node in &self.nodes {
            graph.add_node(node);
        }
        for edge in &self.edges {
            graph.add_node(&edge.from);
            graph.add_node(&edge.to);
            graph.add_edge(edge.from.as_str(), edge.to.as_str(), edge.weight)?;
        }
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            directed = graph.is_directed(),
            "built graph from definition"
        );
        Ok(graph)
    }

    /// Serialize as YAML
    pub fn to_yaml_string(&self) -> DefinitionResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl From<&Graph> for GraphDefinition {
    fn from(graph: &Graph) -> Self {
        Self {
            directed: graph.is_directed(),
            nodes: graph.nodes().cloned().collect(),
            edges: graph
                .edges()
                .map(|(from, to, weight)| EdgeDefinition {
                    from: from.clone(),
                    to: to.clone(),
                    // Stored weights come from positive i64 input.
                    weight: weight as i64,
                })
                .collect(),
        }
    }
}
