//! End-to-end shortest-path behavior through the public API

mod common;

use common::{diamond, random_graph, reference_distances, RandomGraphConfig};
use pathgraph::{Distance, Graph, GraphError, NodeId, PathQuery, ShortestPaths};

fn pred<'a>(paths: &'a ShortestPaths, id: &str) -> Option<&'a str> {
    paths.predecessor(id).map(NodeId::as_str)
}

#[test]
fn diamond_from_a() {
    let paths = ShortestPaths::new(&diamond(), "a").unwrap();

    assert_eq!(paths.start().as_str(), "a");
    assert_eq!(paths.distance("a"), Some(0));
    assert_eq!(paths.distance("b"), Some(3));
    assert_eq!(paths.distance("c"), Some(4));
    assert_eq!(paths.distance("d"), Some(6));

    assert_eq!(pred(&paths, "a"), None);
    assert_eq!(pred(&paths, "b"), Some("a"));
    assert_eq!(pred(&paths, "c"), Some("b"));
    assert_eq!(pred(&paths, "d"), Some("c"));
}

#[test]
fn disconnected_node_stays_unknown() {
    let mut g = diamond();
    g.add_node("e");
    let paths = ShortestPaths::new(&g, "a").unwrap();

    assert_eq!(paths.distances().get("e"), Some(&None));
    assert_eq!(pred(&paths, "e"), None);
    assert_eq!(paths.distance("d"), Some(6));
}

#[test]
fn zero_weight_leaves_graph_unchanged() {
    let mut g = diamond();
    g.delete_edge("a", "b").unwrap();
    let before = g.clone();

    let err = g.add_edge("a", "b", 0).unwrap_err();
    assert!(matches!(err, GraphError::InvalidWeight { .. }));
    assert!(!g.edge_exists("a", "b").unwrap());
    assert_eq!(g, before);
}

#[test]
fn delete_missing_node_is_not_found() {
    let mut g = diamond();
    let err = g.delete_node("nope").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err, GraphError::NodeNotFound("nope".into()));
}

#[test]
fn missing_start_produces_no_tables() {
    let result = ShortestPaths::new(&diamond(), "nope");
    assert_eq!(result, Err(GraphError::StartNodeNotFound("nope".into())));
}

#[test]
fn deleted_node_becomes_unreachable() {
    let mut g = diamond();
    g.delete_node("c").unwrap();
    let paths = ShortestPaths::new(&g, "a").unwrap();

    assert!(g.node_exists("c"));
    assert_eq!(paths.distance("b"), Some(3));
    assert_eq!(paths.distance("c"), None);
    assert_eq!(paths.distance("d"), None);
}

#[test]
fn path_query_over_diamond() {
    let result = PathQuery::between("d", "a").execute(&diamond()).unwrap();
    let names: Vec<&str> = result.path.iter().map(NodeId::as_str).collect();

    assert_eq!(names, ["d", "c", "b", "a"]);
    assert_eq!(result.cost, Some(6));
}

#[test]
fn matches_reference_solver_on_random_graphs() {
    for directed in [false, true] {
        let config = RandomGraphConfig { directed, ..Default::default() };
        for seed in 0..25 {
            let g = random_graph(&config, seed);
            let paths = ShortestPaths::new(&g, "n0").unwrap();
            let expected = reference_distances(&g, "n0");

            for id in g.nodes() {
                assert_eq!(
                    paths.distance(id.as_str()),
                    expected[id.as_str()],
                    "seed {seed}, directed {directed}, node {id}"
                );
            }
        }
    }
}

#[test]
fn predecessor_links_are_tight() {
    let config = RandomGraphConfig { nodes: 40, edges: 70, ..Default::default() };
    for seed in 100..120 {
        let g = random_graph(&config, seed);
        let paths = ShortestPaths::new(&g, "n0").unwrap();

        assert_eq!(paths.distance("n0"), Some(0));
        assert!(paths.predecessor("n0").is_none());

        for (node, distance) in paths.distances() {
            match (distance, paths.predecessor(node.as_str())) {
                (Some(d), Some(prev)) => {
                    let via = paths.distance(prev.as_str()).unwrap();
                    let weight = g.distance(prev.as_str(), node.as_str()).unwrap();
                    assert_eq!(*d, via + Distance::from(weight), "seed {seed}, node {node}");
                }
                (Some(_), None) => assert_eq!(node.as_str(), "n0"),
                (None, prev) => assert!(prev.is_none(), "seed {seed}: unreachable {node} has a predecessor"),
            }
        }
    }
}

#[test]
fn every_reachable_path_sums_to_its_distance() {
    let g = random_graph(&RandomGraphConfig::default(), 7);
    let paths = ShortestPaths::new(&g, "n0").unwrap();

    for id in g.nodes() {
        let Some(path) = paths.path_to(id.as_str()) else {
            assert!(!paths.is_reachable(id.as_str()));
            continue;
        };
        assert_eq!(path.first().map(NodeId::as_str), Some("n0"));
        assert_eq!(path.last(), Some(id));
        let cost: Distance = path
            .windows(2)
            .map(|hop| Distance::from(g.distance(hop[0].as_str(), hop[1].as_str()).unwrap()))
            .sum();
        assert_eq!(Some(cost), paths.distance(id.as_str()));
    }
}

#[test]
fn single_node_graph() {
    let mut g = Graph::directed();
    g.add_node("only");
    let paths = ShortestPaths::new(&g, "only").unwrap();

    assert_eq!(paths.distance("only"), Some(0));
    assert!(paths.predecessors().is_empty());
    assert_eq!(paths.path_to("only").map(|p| p.len()), Some(1));
}
