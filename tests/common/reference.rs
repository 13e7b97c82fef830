//! Linear-scan Dijkstra used as an oracle

use pathgraph::{Distance, Graph};
use std::collections::HashMap;

/// Distances from `start` by repeatedly picking the closest unvisited node
pub fn reference_distances(graph: &Graph, start: &str) -> HashMap<String, Option<Distance>> {
    let mut dist: HashMap<String, Option<Distance>> =
        graph.nodes().map(|id| (id.to_string(), None)).collect();
    dist.insert(start.to_string(), Some(0));
    let mut remaining: Vec<String> = graph.nodes().map(|id| id.to_string()).collect();

    loop {
        let closest = remaining
            .iter()
            .enumerate()
            .filter_map(|(i, id)| dist[id].map(|d| (d, i)))
            .min();
        let Some((d, index)) = closest else { break };
        let node = remaining.swap_remove(index);

        for (neighbor, weight) in graph.neighbors(&node).unwrap() {
            let candidate = d + Distance::from(*weight);
            let entry = dist.get_mut(neighbor.as_str()).unwrap();
            if entry.map_or(true, |current| candidate < current) {
                *entry = Some(candidate);
            }
        }
    }
    dist
}
