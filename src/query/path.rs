//! Path reconstruction and point-to-point path queries

use super::dijkstra::ShortestPaths;
use super::types::PathResult;
use crate::graph::{Graph, GraphError, GraphResult, NodeId};
use std::collections::BTreeMap;

/// Walk predecessor links back from `target` to `start`
///
/// Returns the nodes from `start` to `target` inclusive. `None` when the
/// chain breaks before reaching `start`, or loops.
pub fn reconstruct_path(
    predecessors: &BTreeMap<NodeId, NodeId>,
    start: &str,
    target: &str,
) -> Option<Vec<NodeId>> {
    let mut path = vec![NodeId::from(target)];
    let mut current = target;

    while current != start {
        // A chain longer than the table can only be a cycle.
        if path.len() > predecessors.len() + 1 {
            return None;
        }
        let prev = predecessors.get(current)?;
        path.push(prev.clone());
        current = prev.as_str();
    }

    path.reverse();
    Some(path)
}

/// Query for the shortest path between two nodes
#[derive(Debug, Clone)]
pub struct PathQuery {
    /// Source node ID
    pub source: NodeId,
    /// Target node ID
    pub target: NodeId,
}

impl PathQuery {
    /// Create a new path query between two nodes
    pub fn between(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Solve from the source and extract the path to the target
    ///
    /// A missing source is an error; a missing or unreachable target is
    /// reported as a not-found result.
    pub fn execute(&self, graph: &Graph) -> GraphResult<PathResult> {
        let paths = ShortestPaths::new(graph, self.source.as_str())?;
        Ok(paths.path_result(self.target.as_str()))
    }

    /// Like [`PathQuery::execute`], but a target that is not in the graph is
    /// an error
    pub fn execute_strict(&self, graph: &Graph) -> GraphResult<PathResult> {
        if !graph.node_exists(self.target.as_str()) {
            return Err(GraphError::NodeNotFound(self.target.clone()));
        }
        self.execute(graph)
    }
}
