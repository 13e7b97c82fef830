//! Shortest-path queries over a [`Graph`](crate::Graph)
//!
//! [`ShortestPaths`] solves every distance from one start node at
//! construction; [`PathQuery`] is the point-to-point convenience on top.

mod dijkstra;
mod path;
mod types;

pub use dijkstra::ShortestPaths;
pub use path::{reconstruct_path, PathQuery};
pub use types::{Distance, PathResult};
