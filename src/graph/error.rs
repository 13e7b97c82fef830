//! Errors raised by graph mutation and shortest-path construction

use super::node::NodeId;
use thiserror::Error;

/// Errors that can occur in graph operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Edge not found: {from} -> {to}")]
    EdgeNotFound { from: NodeId, to: NodeId },

    #[error("Invalid weight {weight} for edge {from} -> {to}: weights must be positive")]
    InvalidWeight { from: NodeId, to: NodeId, weight: i64 },

    #[error("Invalid graph: edge {from} -> {to} targets an undeclared node")]
    InvalidGraph { from: NodeId, to: NodeId },

    #[error("Start node not found: {0}")]
    StartNodeNotFound(NodeId),
}

impl GraphError {
    /// True for the errors that report a missing node or edge
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound(_) | Self::EdgeNotFound { .. })
    }
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
