//! Dijkstra single-source shortest paths

use super::path::reconstruct_path;
use super::types::{Distance, PathResult};
use crate::graph::{Adjacency, Graph, GraphError, GraphResult, NodeId};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};
use tracing::{debug, trace};

/// Shortest distances and predecessors from one start node
///
/// All work happens in the constructor. The tables are a snapshot of the
/// graph at that moment; rebuild after mutating the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    start: NodeId,
    /// Every node of the solved graph; `None` means unreachable
    distances: BTreeMap<NodeId, Option<Distance>>,
    /// Reachable nodes other than the start -> previous hop
    predecessors: BTreeMap<NodeId, NodeId>,
}

impl ShortestPaths {
    /// Solve from `start` over a graph
    pub fn new(graph: &Graph, start: &str) -> GraphResult<Self> {
        Self::from_adjacency(graph.adjacency(), start)
    }

    /// Solve from `start` over a raw adjacency mapping
    ///
    /// Fails with [`GraphError::StartNodeNotFound`] if `start` is not a key
    /// of the mapping, then with [`GraphError::InvalidGraph`] if any edge
    /// targets a node that is not a key.
    pub fn from_adjacency(adjacency: &Adjacency, start: &str) -> GraphResult<Self> {
        let start = adjacency
            .get_key_value(start)
            .map(|(id, _)| id)
            .ok_or_else(|| GraphError::StartNodeNotFound(start.into()))?;
        validate(adjacency)?;

        let mut distances: BTreeMap<&NodeId, Option<Distance>> =
            adjacency.keys().map(|id| (id, None)).collect();
        let mut predecessors: BTreeMap<&NodeId, &NodeId> = BTreeMap::new();
        let mut finalized: BTreeSet<&NodeId> = BTreeSet::new();

        // Ties on distance pop the smallest node ID first.
        let mut frontier: BinaryHeap<Reverse<(Distance, &NodeId)>> = BinaryHeap::new();
        distances.insert(start, Some(0));
        frontier.push(Reverse((0, start)));

        while let Some(Reverse((dist, node))) = frontier.pop() {
            if !finalized.insert(node) {
                continue;
            }
            trace!(node = %node, dist, "finalized");

            for (neighbor, weight) in &adjacency[node] {
                let candidate = dist + Distance::from(*weight);
                let improves = match distances[neighbor] {
                    None => true,
                    Some(current) => candidate < current,
                };
                if improves {
                    trace!(from = %node, to = %neighbor, candidate, "relaxed");
                    distances.insert(neighbor, Some(candidate));
                    predecessors.insert(neighbor, node);
                    frontier.push(Reverse((candidate, neighbor)));
                }
            }
        }

        debug!(
            start = %start,
            nodes = adjacency.len(),
            reached = finalized.len(),
            "shortest paths solved"
        );

        Ok(Self {
            start: start.clone(),
            distances: distances
                .into_iter()
                .map(|(id, dist)| (id.clone(), dist))
                .collect(),
            predecessors: predecessors
                .into_iter()
                .map(|(id, prev)| (id.clone(), prev.clone()))
                .collect(),
        })
    }

    /// The start node
    pub fn start(&self) -> &NodeId {
        &self.start
    }

    /// Shortest distance to a node; `None` if unreachable or unknown
    pub fn distance(&self, id: &str) -> Option<Distance> {
        self.distances.get(id).copied().flatten()
    }

    /// Previous hop on the shortest path to a node
    pub fn predecessor(&self, id: &str) -> Option<&NodeId> {
        self.predecessors.get(id)
    }

    /// Distance table covering every node of the solved graph
    pub fn distances(&self) -> &BTreeMap<NodeId, Option<Distance>> {
        &self.distances
    }

    /// Predecessor table; the start and unreachable nodes have no entry
    pub fn predecessors(&self) -> &BTreeMap<NodeId, NodeId> {
        &self.predecessors
    }

    /// Whether the start node reaches this node
    pub fn is_reachable(&self, id: &str) -> bool {
        self.distance(id).is_some()
    }

    /// Nodes from the start to `target` inclusive, or `None` if there is no path
    pub fn path_to(&self, target: &str) -> Option<Vec<NodeId>> {
        if !self.is_reachable(target) {
            return None;
        }
        reconstruct_path(&self.predecessors, self.start.as_str(), target)
    }

    /// Path to `target` with its total cost
    pub fn path_result(&self, target: &str) -> PathResult {
        match (self.path_to(target), self.distance(target)) {
            (Some(path), Some(cost)) => PathResult::found(path, cost),
            _ => PathResult::not_found(),
        }
    }
}

/// Every edge target must itself be a node
fn validate(adjacency: &Adjacency) -> GraphResult<()> {
    for (from, neighbors) in adjacency {
        if let Some(to) = neighbors.keys().find(|to| !adjacency.contains_key(*to)) {
            return Err(GraphError::InvalidGraph {
                from: from.clone(),
                to: to.clone(),
            });
        }
    }
    Ok(())
}
