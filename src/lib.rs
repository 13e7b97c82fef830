//! Pathgraph: weighted graphs and Dijkstra shortest paths
//!
//! An in-memory graph keyed by string node IDs, with positive integer edge
//! weights, and a single-source shortest-path solver over it.
//!
//! # Core Concepts
//!
//! - **Graph**: nodes and weighted edges; undirected graphs mirror every edge
//! - **ShortestPaths**: distances and predecessors from one start node,
//!   computed eagerly when constructed
//! - **GraphDefinition**: a graph written down as YAML or JSON
//!
//! # Example
//!
//! ```
//! use pathgraph::{Graph, ShortestPaths};
//!
//! let mut graph = Graph::undirected();
//! graph.add_node("a");
//! graph.add_node("b");
//! graph.add_edge("a", "b", 3).unwrap();
//!
//! let paths = ShortestPaths::new(&graph, "a").unwrap();
//! assert_eq!(paths.distance("b"), Some(3));
//! ```

pub mod definition;
mod graph;
pub mod query;

pub use definition::{DefinitionError, DefinitionResult, EdgeDefinition, GraphDefinition};
pub use graph::{Adjacency, Graph, GraphError, GraphResult, Neighbors, NodeId, Weight};
pub use query::{reconstruct_path, Distance, PathQuery, PathResult, ShortestPaths};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
