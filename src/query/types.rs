//! Query result structures

use crate::graph::NodeId;
use serde::Serialize;

/// Length of a path: a sum of edge weights
///
/// Wider than [`Weight`](crate::Weight) so that a sum of up to `u64::MAX`
/// maximal weights cannot overflow.
pub type Distance = u128;

/// Result of a path query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    /// Whether a path was found
    pub found: bool,
    /// Nodes in the path from source to target (inclusive)
    pub path: Vec<NodeId>,
    /// Sum of edge weights along the path
    pub cost: Option<Distance>,
    /// Path length (number of hops)
    pub length: usize,
}

impl PathResult {
    pub fn not_found() -> Self {
        Self {
            found: false,
            path: Vec::new(),
            cost: None,
            length: 0,
        }
    }

    pub fn found(path: Vec<NodeId>, cost: Distance) -> Self {
        let length = path.len().saturating_sub(1);
        Self {
            found: true,
            path,
            cost: Some(cost),
            length,
        }
    }
}

impl std::fmt::Display for PathResult {
    /// `a -> b -> c (cost 4)`, or `no path`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.found {
            return write!(f, "no path");
        }
        let hops: Vec<&str> = self.path.iter().map(NodeId::as_str).collect();
        write!(f, "{}", hops.join(" -> "))?;
        if let Some(cost) = self.cost {
            write!(f, " (cost {})", cost)?;
        }
        Ok(())
    }
}
