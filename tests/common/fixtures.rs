//! Graph fixtures

use pathgraph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

/// Nodes {a,b,c,d}, undirected a-b(3), b-c(1), a-c(10), c-d(2)
pub fn diamond() -> Graph {
    let mut g = Graph::undirected();
    for id in ["a", "b", "c", "d"] {
        g.add_node(id);
    }
    g.add_edge("a", "b", 3).unwrap();
    g.add_edge("b", "c", 1).unwrap();
    g.add_edge("a", "c", 10).unwrap();
    g.add_edge("c", "d", 2).unwrap();
    g
}

/// Path to a file under `demos/`
pub fn demo_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

/// Shape of a generated graph
#[derive(Debug, Clone)]
pub struct RandomGraphConfig {
    pub nodes: usize,
    pub edges: usize,
    pub max_weight: i64,
    pub directed: bool,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            nodes: 30,
            edges: 60,
            max_weight: 20,
            directed: false,
        }
    }
}

/// Build a reproducible random graph; node IDs are `n0`, `n1`, ...
pub fn random_graph(config: &RandomGraphConfig, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = Graph::new(config.directed);
    let ids: Vec<String> = (0..config.nodes).map(|i| format!("n{i}")).collect();
    for id in &ids {
        g.add_node(id.as_str());
    }
    for _ in 0..config.edges {
        let from = &ids[rng.gen_range(0..ids.len())];
        let to = &ids[rng.gen_range(0..ids.len())];
        let weight = rng.gen_range(1..=config.max_weight);
        g.add_edge(from, to, weight).unwrap();
    }
    g
}
