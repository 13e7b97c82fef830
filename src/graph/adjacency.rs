//! Graph: nodes with weighted outgoing edges

use super::error::{GraphError, GraphResult};
use super::node::NodeId;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Positive edge weight as stored in the graph
pub type Weight = u64;

/// Outgoing edges of a single node: neighbor -> weight
pub type Neighbors = BTreeMap<NodeId, Weight>;

/// Full adjacency mapping: node -> outgoing edges
pub type Adjacency = BTreeMap<NodeId, Neighbors>;

/// A weighted graph stored as an adjacency mapping
///
/// Undirected graphs store every edge as a mirrored pair of directed
/// arcs with the same weight. Every mutation keeps both halves in sync,
/// and every edge target is guaranteed to be a node of the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    directed: bool,
    adjacency: Adjacency,
}

impl Graph {
    /// Create an empty graph
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            adjacency: Adjacency::new(),
        }
    }

    /// Create an empty directed graph
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create an empty undirected graph
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Whether edge mutations are applied one-way only
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Read-only view of the adjacency mapping
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Check if a node exists
    pub fn node_exists(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Add a node. Adding an existing node is a no-op.
    pub fn add_node(&mut self, id: impl Into<NodeId>) {
        let id = id.into();
        if !self.adjacency.contains_key(&id) {
            debug!(node = %id, "adding node");
            self.adjacency.insert(id, Neighbors::new());
        }
    }

    /// Remove every edge touching a node
    ///
    /// The node itself stays in the graph with no outgoing edges. In an
    /// undirected graph it is also dropped from every other node's edges;
    /// in a directed graph edges pointing at it are left alone.
    pub fn delete_node(&mut self, id: &str) -> GraphResult<()> {
        if !self.node_exists(id) {
            return Err(GraphError::NodeNotFound(id.into()));
        }

        debug!(node = id, directed = self.directed, "deleting node edges");
        if !self.directed {
            for (other, neighbors) in self.adjacency.iter_mut() {
                if other.as_str() != id {
                    neighbors.remove(id);
                }
            }
        }
        if let Some(neighbors) = self.adjacency.get_mut(id) {
            neighbors.clear();
        }
        Ok(())
    }

    /// Check if an edge `from -> to` exists
    ///
    /// Fails when either endpoint is not a node.
    pub fn edge_exists(&self, from: &str, to: &str) -> GraphResult<bool> {
        let neighbors = self.neighbors(from)?;
        self.require_node(to)?;
        Ok(neighbors.contains_key(to))
    }

    /// Add or overwrite the edge `from -> to`
    ///
    /// Undirected graphs also set `to -> from` to the same weight. Nothing
    /// is modified when validation fails.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: i64) -> GraphResult<()> {
        self.require_node(from)?;
        self.require_node(to)?;
        if weight <= 0 {
            return Err(GraphError::InvalidWeight {
                from: from.into(),
                to: to.into(),
                weight,
            });
        }
        let weight = weight as Weight;

        debug!(from, to, weight, "adding edge");
        self.insert_arc(from, to, weight);
        if !self.directed {
            self.insert_arc(to, from, weight);
        }
        Ok(())
    }

    /// Remove the edge `from -> to` (and its mirror when undirected)
    pub fn delete_edge(&mut self, from: &str, to: &str) -> GraphResult<()> {
        if !self.edge_exists(from, to)? {
            return Err(GraphError::EdgeNotFound {
                from: from.into(),
                to: to.into(),
            });
        }

        debug!(from, to, "deleting edge");
        self.remove_arc(from, to);
        if !self.directed {
            self.remove_arc(to, from);
        }
        Ok(())
    }

    /// Weight of the edge `from -> to`, or `None` when there is no such edge
    ///
    /// Unlike [`Graph::edge_exists`] this never fails: missing nodes also
    /// yield `None`.
    pub fn distance(&self, from: &str, to: &str) -> Option<Weight> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Outgoing edges of a node
    pub fn neighbors(&self, id: &str) -> GraphResult<&Neighbors> {
        self.adjacency
            .get(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.into()))
    }

    /// All node IDs in order
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys()
    }

    /// All edges as `(from, to, weight)`
    ///
    /// Undirected graphs yield each mirrored pair once, with `from <= to`.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId, Weight)> {
        let directed = self.directed;
        self.adjacency.iter().flat_map(move |(from, neighbors)| {
            neighbors
                .iter()
                .filter(move |(to, _)| directed || from <= *to)
                .map(move |(to, weight)| (from, to, *weight))
        })
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get the number of edges (mirrored pairs count once)
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    fn require_node(&self, id: &str) -> GraphResult<()> {
        if self.node_exists(id) {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound(id.into()))
        }
    }

    fn insert_arc(&mut self, from: &str, to: &str, weight: Weight) {
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            trace!(from, to, weight, "set arc");
            neighbors.insert(to.into(), weight);
        }
    }

    fn remove_arc(&mut self, from: &str, to: &str) {
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            trace!(from, to, "remove arc");
            neighbors.remove(to);
        }
    }
}

impl std::fmt::Display for Graph {
    /// One line per node: `a: b (3), c (10), `
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (node, neighbors) in &self.adjacency {
            write!(f, "{}: ", node)?;
            for (neighbor, weight) in neighbors {
                write!(f, "{} ({}), ", neighbor, weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
