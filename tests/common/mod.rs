//! Common test utilities for shortest-path integration tests
//!
//! Graph fixtures, a seeded random graph generator, and a linear-scan
//! reference solver to compare the heap-based one against.

pub mod fixtures;
pub mod reference;

pub use fixtures::{demo_path, diamond, random_graph, RandomGraphConfig};
pub use reference::reference_distances;
