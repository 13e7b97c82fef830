//! Core graph data structures

mod adjacency;
mod error;
mod node;


pub use adjacency::{Adjacency, Graph, Neighbors, Weight};
pub use error::{GraphError, GraphResult};
pub use node::NodeId;
